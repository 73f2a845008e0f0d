use chrono::NaiveDate;
use personnel_core::{
    demo_people, ErrorKind, FixedClock, InMemoryPersonRepository, PersonDraft, PersonPatch,
    PersonService, ServiceError,
};
use rust_decimal::Decimal;
use std::str::FromStr;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn service() -> PersonService<InMemoryPersonRepository, FixedClock> {
    PersonService::new(
        InMemoryPersonRepository::new(),
        FixedClock(date(2020, 3, 10)),
    )
}

fn draft(name: &str) -> PersonDraft {
    PersonDraft::new(
        name,
        date(2000, 1, 1),
        date(2020, 1, 1),
        Decimal::from_str("2640").unwrap(),
    )
}

#[test]
fn create_then_get_returns_same_fields() {
    let service = service();
    service.seed(demo_people()).unwrap();

    let created = service.create(draft("Teste")).unwrap();
    let id = created.id.unwrap();

    let loaded = service.get_by_id(id).unwrap();
    assert_eq!(loaded, created);
    assert_eq!(loaded.name, "Teste");
    assert_eq!(loaded.birth_date, date(2000, 1, 1));
    assert_eq!(loaded.admission_date, date(2020, 1, 1));
    assert_eq!(loaded.current_salary, Decimal::new(2640, 0));
}

#[test]
fn create_ids_follow_seeded_ids() {
    let service = service();
    let seeded = service.seed(demo_people()).unwrap();
    assert_eq!(
        seeded.iter().map(|p| p.id.unwrap()).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let first = service.create(draft("a")).unwrap();
    let second = service.create(draft("b")).unwrap();
    assert_eq!(first.id, Some(4));
    assert_eq!(second.id, Some(5));
}

#[test]
fn get_unknown_id_is_not_found() {
    let service = service();
    let err = service.get_by_id(42).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(42)));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn delete_unknown_id_is_not_found() {
    let service = service();
    service.seed(demo_people()).unwrap();

    let err = service.delete(999).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(999)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn delete_existing_then_get_is_not_found() {
    let service = service();
    let created = service.create(draft("gone")).unwrap();
    let id = created.id.unwrap();

    service.delete(id).unwrap();
    assert!(matches!(
        service.get_by_id(id).unwrap_err(),
        ServiceError::NotFound(_)
    ));
    assert!(matches!(
        service.delete(id).unwrap_err(),
        ServiceError::NotFound(_)
    ));
}

#[test]
fn deleted_ids_are_not_reused() {
    let service = service();
    let first = service.create(draft("first")).unwrap();
    service.delete(first.id.unwrap()).unwrap();

    let second = service.create(draft("second")).unwrap();
    assert!(second.id.unwrap() > first.id.unwrap());
}

#[test]
fn list_all_sorts_by_name_case_insensitively() {
    let service = service();
    service.seed(demo_people()).unwrap();
    service.create(draft("bruno")).unwrap();

    let names: Vec<String> = service
        .list_all()
        .unwrap()
        .into_iter()
        .map(|p| p.name)
        .collect();
    assert_eq!(names, vec!["Ana Lima", "bruno", "João Souza", "Maria Silva"]);
}

#[test]
fn list_all_breaks_name_ties_by_id() {
    let service = service();
    let first = service.create(draft("Same")).unwrap();
    let second = service.create(draft("same")).unwrap();

    let ids: Vec<_> = service
        .list_all()
        .unwrap()
        .into_iter()
        .map(|p| p.id)
        .collect();
    assert_eq!(ids, vec![first.id, second.id]);
}

#[test]
fn replace_overwrites_every_field() {
    let service = service();
    let created = service.create(draft("before")).unwrap();
    let id = created.id.unwrap();

    let replacement = PersonDraft::new(
        "after",
        date(1985, 6, 7),
        date(2010, 2, 3),
        Decimal::from_str("2640.00").unwrap(),
    );
    let replaced = service.replace(id, &replacement).unwrap();

    assert_eq!(replaced.id, Some(id));
    assert_eq!(replaced.name, "after");
    assert_eq!(replaced.birth_date, date(1985, 6, 7));
    assert_eq!(replaced.admission_date, date(2010, 2, 3));
    // numerically equal but re-written with the new scale
    assert_eq!(replaced.current_salary.to_string(), "2640.00");
    assert_eq!(service.get_by_id(id).unwrap(), replaced);
}

#[test]
fn replace_unknown_id_is_not_found_and_creates_nothing() {
    let service = service();
    let err = service.replace(7, &draft("ghost")).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(7)));
    assert!(service.list_all().unwrap().is_empty());
}

#[test]
fn merge_with_only_name_keeps_other_fields() {
    let service = service();
    let created = service.create(draft("original")).unwrap();
    let id = created.id.unwrap();

    let patch = PersonPatch {
        name: Some("X".to_string()),
        ..PersonPatch::default()
    };
    let merged = service.merge(id, &patch).unwrap();

    assert_eq!(merged.name, "X");
    assert_eq!(merged.birth_date, created.birth_date);
    assert_eq!(merged.admission_date, created.admission_date);
    assert_eq!(merged.current_salary, created.current_salary);
}

#[test]
fn merge_applies_every_supplied_field() {
    let service = service();
    let created = service.create(draft("original")).unwrap();
    let id = created.id.unwrap();

    let patch = PersonPatch {
        name: None,
        birth_date: Some(date(1999, 9, 9)),
        admission_date: None,
        current_salary: Some(Decimal::new(500000, 2)),
    };
    let merged = service.merge(id, &patch).unwrap();

    assert_eq!(merged.name, "original");
    assert_eq!(merged.birth_date, date(1999, 9, 9));
    assert_eq!(merged.admission_date, created.admission_date);
    assert_eq!(merged.current_salary, Decimal::new(500000, 2));
}

#[test]
fn merge_distinguishes_empty_from_absent() {
    let service = service();
    let id = service.create(draft("named")).unwrap().id.unwrap();

    let patch = PersonPatch {
        name: Some(String::new()),
        ..PersonPatch::default()
    };
    let merged = service.merge(id, &patch).unwrap();
    assert_eq!(merged.name, "");
}

#[test]
fn merge_with_empty_patch_changes_nothing() {
    let service = service();
    let created = service.create(draft("steady")).unwrap();
    let merged = service
        .merge(created.id.unwrap(), &PersonPatch::default())
        .unwrap();
    assert_eq!(merged, created);
}

#[test]
fn merge_unknown_id_is_not_found() {
    let service = service();
    let err = service.merge(3, &PersonPatch::default()).unwrap_err();
    assert!(matches!(err, ServiceError::NotFound(3)));
}
