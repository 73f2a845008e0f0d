//! Repository layer abstractions and storage implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate storage and id generation details from service orchestration.
//!
//! # Invariants
//! - The store is the only owner of id generation.
//! - Repository APIs are safe to call from concurrent callers.

pub mod person_repo;
