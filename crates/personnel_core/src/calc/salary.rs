//! Salary-to-minimum ratio arithmetic.
//!
//! # Invariants
//! - Division uses exact decimal arithmetic, never binary floats.
//! - Results carry exactly two fractional digits, rounded half-up.
//! - Callers reject non-positive minimums before calling in.

use rust_decimal::{Decimal, RoundingStrategy};

const RATIO_SCALE: u32 = 2;

/// Returns `salary / minimum` rounded to two places, half-up.
///
/// Returns `None` on division by zero or overflow.
pub fn salary_ratio(salary: Decimal, minimum: Decimal) -> Option<Decimal> {
    let mut ratio = salary
        .checked_div(minimum)?
        .round_dp_with_strategy(RATIO_SCALE, RoundingStrategy::MidpointAwayFromZero);
    ratio.rescale(RATIO_SCALE);
    Some(ratio)
}
