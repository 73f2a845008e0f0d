//! Pure derived-value calculators.
//!
//! # Responsibility
//! - Age arithmetic between two calendar dates.
//! - Salary ratio arithmetic over exact decimals.
//!
//! # Invariants
//! - Calculators never touch storage or the clock.

pub mod age;
pub mod salary;
