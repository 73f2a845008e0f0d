//! Person domain model.
//!
//! # Responsibility
//! - Define the canonical person record stored by the core.
//! - Define create/replace (`PersonDraft`) and merge (`PersonPatch`) inputs.
//!
//! # Invariants
//! - `id` is `None` until the store assigns one, and never changes afterwards.
//! - `PersonPatch` fields are presence-tagged: `None` means "not supplied",
//!   `Some(value)` always overwrites, even when `value` is empty.
//! - Monetary amounts are exact decimals, never binary floats. On the wire
//!   they are JSON numbers carried digit-for-digit, so scale survives
//!   (`3320.00` stays `3320.00`). Quoted decimal strings are accepted too.

use crate::model::date_format;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Store-assigned person identifier.
pub type PersonId = u64;

/// Canonical person record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    /// Assigned on first save.
    #[serde(default)]
    pub id: Option<PersonId>,
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNascimento", with = "date_format")]
    pub birth_date: NaiveDate,
    /// Stored and round-tripped only; no computation reads it yet.
    #[serde(rename = "dataAdmissao", with = "date_format")]
    pub admission_date: NaiveDate,
    #[serde(
        rename = "salarioAtual",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub current_salary: Decimal,
}

impl Person {
    /// Creates an unsaved person (no id).
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        admission_date: NaiveDate,
        current_salary: Decimal,
    ) -> Self {
        Self {
            id: None,
            name: name.into(),
            birth_date,
            admission_date,
            current_salary,
        }
    }

    /// Overwrites every mutable field from `draft`.
    pub fn replace_with(&mut self, draft: &PersonDraft) {
        self.name = draft.name.clone();
        self.birth_date = draft.birth_date;
        self.admission_date = draft.admission_date;
        self.current_salary = draft.current_salary;
    }

    /// Overwrites only the fields supplied in `patch`.
    pub fn merge_from(&mut self, patch: &PersonPatch) {
        if let Some(name) = &patch.name {
            self.name = name.clone();
        }
        if let Some(birth_date) = patch.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(admission_date) = patch.admission_date {
            self.admission_date = admission_date;
        }
        if let Some(current_salary) = patch.current_salary {
            self.current_salary = current_salary;
        }
    }
}

impl From<PersonDraft> for Person {
    fn from(draft: PersonDraft) -> Self {
        Self::new(
            draft.name,
            draft.birth_date,
            draft.admission_date,
            draft.current_salary,
        )
    }
}

/// Field-level input failure detected at the boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    BlankName,
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankName => write!(f, "nome must not be blank"),
        }
    }
}

impl Error for ValidationError {}

/// Full person payload used by create and replace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonDraft {
    #[serde(rename = "nome")]
    pub name: String,
    #[serde(rename = "dataNascimento", with = "date_format")]
    pub birth_date: NaiveDate,
    #[serde(rename = "dataAdmissao", with = "date_format")]
    pub admission_date: NaiveDate,
    #[serde(
        rename = "salarioAtual",
        with = "rust_decimal::serde::arbitrary_precision"
    )]
    pub current_salary: Decimal,
}

impl PersonDraft {
    pub fn new(
        name: impl Into<String>,
        birth_date: NaiveDate,
        admission_date: NaiveDate,
        current_salary: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            birth_date,
            admission_date,
            current_salary,
        }
    }

    /// Checks boundary-level field rules.
    ///
    /// The service assumes drafts have already passed this check.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::BlankName);
        }
        Ok(())
    }
}

/// Partial person payload used by merge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PersonPatch {
    #[serde(rename = "nome", skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(
        rename = "dataNascimento",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub birth_date: Option<NaiveDate>,
    #[serde(
        rename = "dataAdmissao",
        with = "date_format::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub admission_date: Option<NaiveDate>,
    #[serde(
        rename = "salarioAtual",
        with = "rust_decimal::serde::arbitrary_precision_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub current_salary: Option<Decimal>,
}

impl PersonPatch {
    /// Returns whether no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.birth_date.is_none()
            && self.admission_date.is_none()
            && self.current_salary.is_none()
    }
}
