//! CLI smoke entry point.
//!
//! # Responsibility
//! - Compose the core (config, logging, store, service) the way a host would.
//! - Print each seeded person with derived values for quick sanity checks.
//!
//! Usage: `personnel_cli [config.json]`

use log::info;
use personnel_core::{
    core_version, demo_people, format_date, init_logging, CoreConfig, InMemoryPersonRepository,
    PersonService, SystemClock,
};
use std::error::Error;
use std::process::ExitCode;

const LOG_DIR_NAME: &str = "personnel-logs";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    let config = match std::env::args().nth(1) {
        Some(path) => CoreConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => CoreConfig::default(),
    };

    let log_dir = std::env::temp_dir().join(LOG_DIR_NAME);
    init_logging(&config.log_level, &log_dir.to_string_lossy())?;

    let service =
        PersonService::with_config(InMemoryPersonRepository::new(), SystemClock, &config);
    if config.seed_demo_data {
        service.seed(demo_people())?;
    }

    println!("personnel_core version={}", core_version());
    let people = service.list_all()?;
    for person in &people {
        let Some(id) = person.id else {
            continue;
        };
        let age = service.age_report(id, "anos")?;
        let ratio = service.salary_ratio_report(id, None)?;
        println!(
            "id={id} nome={} nascimento={} admissao={} idade_anos={} multiplo={} minimo={}",
            person.name,
            format_date(person.birth_date),
            format_date(person.admission_date),
            age.value,
            ratio.ratio,
            ratio.minimum_salary
        );
    }

    info!(
        "event=cli_report module=cli status=ok count={}",
        people.len()
    );
    Ok(())
}
