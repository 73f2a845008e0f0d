//! Person use-case service.
//!
//! # Responsibility
//! - Provide list/get/create/delete/replace/merge entry points over the store.
//! - Validate derived-value parameters and delegate to the calculators.
//!
//! # Invariants
//! - Every operation except `create` and `seed` reports `NotFound` for an
//!   unknown id.
//! - Parameter checks (`BadRequest`) run before the id lookup.
//! - Each call writes at most one record (`seed` excepted).
//! - Replace and merge read and write the record as one store operation, so
//!   a concurrent delete is never undone and concurrent merges compose.
//! - `list_all` is sorted by case-insensitive name, then by id.

use crate::calc::age::{compute_age, AgeUnit, AgeValue};
use crate::calc::salary::salary_ratio;
use crate::clock::Clock;
use crate::config::{CoreConfig, DEFAULT_MINIMUM_SALARY};
use crate::model::person::{Person, PersonDraft, PersonId, PersonPatch};
use crate::model::report::{AgeReport, SalaryRatioReport};
use crate::repo::person_repo::{PersonRepository, RepoError};
use log::{debug, info, warn};
use rust_decimal::Decimal;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Client-facing failure category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    BadRequest,
    Unexpected,
}

impl ErrorKind {
    /// HTTP-style status code for boundary layers.
    pub fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::BadRequest => 400,
            Self::Unexpected => 500,
        }
    }
}

/// Service error for person use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Target person does not exist.
    NotFound(PersonId),
    /// Parameter is malformed or out of range.
    BadRequest(String),
    /// A computation that must produce a value produced none.
    Unexpected(&'static str),
    /// Storage-layer failure.
    Repo(RepoError),
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::BadRequest(_) => ErrorKind::BadRequest,
            Self::Unexpected(_) | Self::Repo(_) => ErrorKind::Unexpected,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.kind().status_code()
    }
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "person not found: {id}"),
            Self::BadRequest(message) => write!(f, "bad request: {message}"),
            Self::Unexpected(details) => write!(f, "unexpected failure: {details}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Person service facade over a repository and a clock.
pub struct PersonService<R: PersonRepository, C: Clock> {
    repo: R,
    clock: C,
    default_minimum_salary: Decimal,
}

impl<R: PersonRepository, C: Clock> PersonService<R, C> {
    /// Creates a service with the built-in default minimum salary.
    pub fn new(repo: R, clock: C) -> Self {
        Self {
            repo,
            clock,
            default_minimum_salary: DEFAULT_MINIMUM_SALARY,
        }
    }

    /// Creates a service using tunables from `config`.
    pub fn with_config(repo: R, clock: C, config: &CoreConfig) -> Self {
        Self {
            repo,
            clock,
            default_minimum_salary: config.default_minimum_salary,
        }
    }

    /// Bulk-inserts records lacking ids. Called once by the composer.
    pub fn seed(&self, people: Vec<Person>) -> ServiceResult<Vec<Person>> {
        let seeded = self.repo.seed(people)?;
        info!(
            "event=person_seed module=service status=ok count={}",
            seeded.len()
        );
        Ok(seeded)
    }

    /// Lists every person sorted by case-insensitive name, then id.
    pub fn list_all(&self) -> ServiceResult<Vec<Person>> {
        let mut people = self.repo.list()?;
        people.sort_by_cached_key(|person| (person.name.to_lowercase(), person.id));
        debug!(
            "event=person_list module=service status=ok count={}",
            people.len()
        );
        Ok(people)
    }

    pub fn get_by_id(&self, id: PersonId) -> ServiceResult<Person> {
        self.repo.get(id)?.ok_or(ServiceError::NotFound(id))
    }

    /// Persists a new person and returns it with its assigned id.
    pub fn create(&self, draft: PersonDraft) -> ServiceResult<Person> {
        let created = self.repo.save(Person::from(draft))?;
        info!(
            "event=person_create module=service status=ok id={}",
            created.id.unwrap_or_default()
        );
        Ok(created)
    }

    pub fn delete(&self, id: PersonId) -> ServiceResult<()> {
        if !self.repo.exists(id)? {
            warn!("event=person_delete module=service status=not_found id={id}");
            return Err(ServiceError::NotFound(id));
        }
        self.repo.delete(id)?;
        info!("event=person_delete module=service status=ok id={id}");
        Ok(())
    }

    /// Overwrites all four fields of an existing person.
    pub fn replace(&self, id: PersonId, draft: &PersonDraft) -> ServiceResult<Person> {
        let saved = self
            .repo
            .update(id, |person| person.replace_with(draft))?
            .ok_or(ServiceError::NotFound(id))?;
        info!("event=person_replace module=service status=ok id={id}");
        Ok(saved)
    }

    /// Overwrites only the fields supplied in `patch`.
    pub fn merge(&self, id: PersonId, patch: &PersonPatch) -> ServiceResult<Person> {
        let saved = self
            .repo
            .update(id, |person| person.merge_from(patch))?
            .ok_or(ServiceError::NotFound(id))?;
        info!(
            "event=person_merge module=service status=ok id={id} empty_patch={}",
            patch.is_empty()
        );
        Ok(saved)
    }

    /// Computes the person's age today in `unit` (`dias`, `meses`, `anos`).
    ///
    /// The unit is trimmed and matched case-insensitively; an unknown unit is
    /// rejected even when `id` does not exist.
    pub fn age(&self, id: PersonId, unit: &str) -> ServiceResult<AgeValue> {
        let unit = parse_age_unit(unit)?;
        self.age_in(id, unit)
    }

    /// Same as [`Self::age`], wrapped with the id and normalized unit.
    pub fn age_report(&self, id: PersonId, unit: &str) -> ServiceResult<AgeReport> {
        let unit = parse_age_unit(unit)?;
        let value = self.age_in(id, unit)?;
        Ok(AgeReport {
            id,
            output: unit,
            value,
        })
    }

    /// Returns `current_salary / minimum_salary`, two places, half-up.
    pub fn salary_ratio(&self, id: PersonId, minimum_salary: Decimal) -> ServiceResult<Decimal> {
        if minimum_salary <= Decimal::ZERO {
            warn!("event=person_salary_ratio module=service status=bad_request id={id}");
            return Err(ServiceError::BadRequest(format!(
                "minimum salary must be positive, got {minimum_salary}"
            )));
        }
        let person = self.get_by_id(id)?;
        salary_ratio(person.current_salary, minimum_salary)
            .ok_or(ServiceError::Unexpected("salary ratio produced no value"))
    }

    /// Salary ratio against `minimum_salary`, or the configured default
    /// when none is given.
    pub fn salary_ratio_report(
        &self,
        id: PersonId,
        minimum_salary: Option<Decimal>,
    ) -> ServiceResult<SalaryRatioReport> {
        let minimum_salary = minimum_salary.unwrap_or(self.default_minimum_salary);
        let ratio = self.salary_ratio(id, minimum_salary)?;
        Ok(SalaryRatioReport {
            id,
            ratio,
            minimum_salary,
        })
    }

    pub fn default_minimum_salary(&self) -> Decimal {
        self.default_minimum_salary
    }

    fn age_in(&self, id: PersonId, unit: AgeUnit) -> ServiceResult<AgeValue> {
        let person = self.get_by_id(id)?;
        let today = self.clock.today();
        let value = compute_age(unit, person.birth_date, today)
            .ok_or(ServiceError::Unexpected("age computation produced no value"))?;
        debug!(
            "event=person_age module=service status=ok id={id} unit={}",
            unit.as_str()
        );
        Ok(value)
    }
}

fn parse_age_unit(raw: &str) -> ServiceResult<AgeUnit> {
    AgeUnit::parse(raw).ok_or_else(|| {
        ServiceError::BadRequest(format!(
            "unsupported age output `{}`; expected dias|meses|anos",
            raw.trim()
        ))
    })
}
