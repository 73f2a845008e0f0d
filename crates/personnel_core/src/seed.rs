//! Demo records loaded by the process composer.

use crate::model::person::Person;
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Returns the demo people, without ids, in seeding order.
pub fn demo_people() -> Vec<Person> {
    vec![
        Person::new(
            "Maria Silva",
            seed_date(1999, 4, 5),
            seed_date(2020, 6, 4),
            Decimal::new(332000, 2),
        ),
        Person::new(
            "João Souza",
            seed_date(1988, 12, 10),
            seed_date(2015, 3, 1),
            Decimal::new(180000, 2),
        ),
        Person::new(
            "Ana Lima",
            seed_date(2001, 8, 23),
            seed_date(2023, 7, 1),
            Decimal::new(250000, 2),
        ),
    ]
}

fn seed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("demo seed dates are valid")
}
