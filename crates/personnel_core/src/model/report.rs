//! Derived-value response envelopes.
//!
//! Wire field names follow the external schema (`output`, `valor`,
//! `salarioAtualMultiplo`, `salarioMinimo`).

use crate::calc::age::{AgeUnit, AgeValue};
use crate::model::person::PersonId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Age computation result for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgeReport {
    pub id: PersonId,
    pub output: AgeUnit,
    #[serde(rename = "valor")]
    pub value: AgeValue,
}

/// Salary-to-minimum ratio result for one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryRatioReport {
    pub id: PersonId,
    #[serde(
        rename = "salarioAtualMultiplo",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub ratio: Decimal,
    #[serde(
        rename = "salarioMinimo",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub minimum_salary: Decimal,
}
