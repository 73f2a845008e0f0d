//! Core domain logic for personnel records.
//! This crate is the single source of truth for business invariants.

pub mod calc;
pub mod clock;
pub mod config;
pub mod logging;
pub mod model;
pub mod repo;
pub mod seed;
pub mod service;

pub use calc::age::{AgeUnit, AgeValue};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::{ConfigError, CoreConfig, DEFAULT_MINIMUM_SALARY};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::date_format::{format_date, parse_date, DateFormatError};
pub use model::person::{Person, PersonDraft, PersonId, PersonPatch, ValidationError};
pub use model::report::{AgeReport, SalaryRatioReport};
pub use repo::person_repo::{InMemoryPersonRepository, PersonRepository, RepoError, RepoResult};
pub use seed::demo_people;
pub use service::person_service::{ErrorKind, PersonService, ServiceError, ServiceResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
