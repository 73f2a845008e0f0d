use chrono::NaiveDate;
use personnel_core::{
    AgeUnit, AgeValue, CoreConfig, ErrorKind, FixedClock, InMemoryPersonRepository, PersonDraft,
    PersonId, PersonService, ServiceError,
};
use rust_decimal::Decimal;
use std::str::FromStr;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn dec(value: &str) -> Decimal {
    Decimal::from_str(value).unwrap()
}

fn service_at(today: NaiveDate) -> PersonService<InMemoryPersonRepository, FixedClock> {
    PersonService::new(InMemoryPersonRepository::new(), FixedClock(today))
}

fn add_person(
    service: &PersonService<InMemoryPersonRepository, FixedClock>,
    birth: NaiveDate,
    salary: &str,
) -> PersonId {
    service
        .create(PersonDraft::new(
            "Maria Silva",
            birth,
            date(2020, 6, 4),
            dec(salary),
        ))
        .unwrap()
        .id
        .unwrap()
}

#[test]
fn age_unit_is_case_and_whitespace_insensitive() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1990, 1, 15), "3320.00");

    let upper = service.age(id, "DIAS").unwrap();
    let padded = service.age(id, " dias ").unwrap();
    let lower = service.age(id, "dias").unwrap();
    assert_eq!(upper, lower);
    assert_eq!(padded, lower);
    assert_eq!(lower, AgeValue::Whole(11_012));
}

#[test]
fn age_in_years_for_exact_anniversary_is_whole() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1990, 3, 10), "3320.00");

    let value = service.age(id, "anos").unwrap();
    assert_eq!(value, AgeValue::Fractional(dec("30.00")));
    match value {
        AgeValue::Fractional(years) => assert_eq!(years.to_string(), "30.00"),
        other => panic!("unexpected age value: {other:?}"),
    }
}

#[test]
fn age_in_months_applies_day_borrow() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1990, 1, 15), "3320.00");

    assert_eq!(service.age(id, "meses").unwrap(), AgeValue::Whole(361));
}

#[test]
fn age_in_months_counts_month_once_day_is_reached() {
    let service = service_at(date(2020, 3, 15));
    let id = add_person(&service, date(1990, 1, 15), "3320.00");

    assert_eq!(service.age(id, "meses").unwrap(), AgeValue::Whole(362));
}

#[test]
fn unknown_unit_is_bad_request_even_for_missing_id() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1990, 1, 15), "3320.00");

    let existing = service.age(id, "xyz").unwrap_err();
    assert!(matches!(existing, ServiceError::BadRequest(_)));

    let missing = service.age(999, "xyz").unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::BadRequest);
    assert_eq!(missing.status_code(), 400);
}

#[test]
fn age_for_missing_id_is_not_found() {
    let service = service_at(date(2020, 3, 10));
    let err = service.age(5, "anos").unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(5)));
}

#[test]
fn age_before_birth_is_negative() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(2020, 3, 12), "3320.00");

    assert_eq!(service.age(id, "dias").unwrap(), AgeValue::Whole(-2));
}

#[test]
fn age_report_carries_normalized_unit() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1990, 1, 15), "3320.00");

    let report = service.age_report(id, " MESES").unwrap();
    assert_eq!(report.id, id);
    assert_eq!(report.output, AgeUnit::Months);
    assert_eq!(report.value, AgeValue::Whole(361));

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["output"], "meses");
    assert_eq!(json["valor"], 361);
}

#[test]
fn salary_ratio_rounds_half_up() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1999, 4, 5), "3320.00");

    let ratio = service.salary_ratio(id, dec("1320.00")).unwrap();
    assert_eq!(ratio.to_string(), "2.52");
}

#[test]
fn salary_ratio_rounds_exact_midpoint_up() {
    let service = service_at(date(2020, 3, 10));
    // 2125 / 1000 = 2.125 exactly
    let id = add_person(&service, date(1999, 4, 5), "2125");

    let ratio = service.salary_ratio(id, dec("1000")).unwrap();
    assert_eq!(ratio.to_string(), "2.13");
}

#[test]
fn salary_ratio_rejects_non_positive_minimum() {
    let service = service_at(date(2020, 3, 10));
    let id = add_person(&service, date(1999, 4, 5), "3320.00");

    let zero = service.salary_ratio(id, Decimal::ZERO).unwrap_err();
    assert!(matches!(zero, ServiceError::BadRequest(_)));

    let negative = service.salary_ratio(id, dec("-5")).unwrap_err();
    assert!(matches!(negative, ServiceError::BadRequest(_)));

    let missing = service.salary_ratio(999, Decimal::ZERO).unwrap_err();
    assert_eq!(missing.kind(), ErrorKind::BadRequest);
}

#[test]
fn salary_ratio_for_missing_id_is_not_found() {
    let service = service_at(date(2020, 3, 10));
    let err = service.salary_ratio(12, dec("1320.00")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(12)));
}

#[test]
fn salary_ratio_report_falls_back_to_configured_minimum() {
    let config = CoreConfig::from_json_str(r#"{"default_minimum_salary": "1660.00"}"#).unwrap();
    let service = PersonService::with_config(
        InMemoryPersonRepository::new(),
        FixedClock(date(2020, 3, 10)),
        &config,
    );
    let id = add_person(&service, date(1999, 4, 5), "3320.00");

    let report = service.salary_ratio_report(id, None).unwrap();
    assert_eq!(report.minimum_salary, dec("1660.00"));
    assert_eq!(report.ratio.to_string(), "2.00");

    let explicit = service.salary_ratio_report(id, Some(dec("1320.00"))).unwrap();
    assert_eq!(explicit.ratio.to_string(), "2.52");

    let json = serde_json::to_string(&explicit).unwrap();
    assert_eq!(
        json,
        format!(r#"{{"id":{id},"salarioAtualMultiplo":2.52,"salarioMinimo":1320.00}}"#)
    );
}

#[test]
fn default_service_minimum_is_1320() {
    let service = service_at(date(2020, 3, 10));
    assert_eq!(service.default_minimum_salary(), dec("1320.00"));
}
