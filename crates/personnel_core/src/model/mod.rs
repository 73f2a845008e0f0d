//! Domain model for personnel records.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Own the external wire shape (field names, `dd/MM/yyyy` dates).
//!
//! # Invariants
//! - Every stored person is identified by a store-assigned `PersonId`.
//! - Deletion is a hard delete; ids are still never reused.

pub mod date_format;
pub mod person;
pub mod report;
