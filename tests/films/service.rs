//! Route behaviour driven through `FilmService` on the in-memory store.

use film_api::{ApiError, FilmStore};
use serde_json::{json, Number};

use crate::support::{film, seeded_service, service_with};

#[test]
fn absent_storage_serves_the_three_seed_films() {
    let service = seeded_service();
    let films = service.list(None).unwrap();

    let titles: Vec<&str> = films.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["Parasite", "Moonlight", "Waves"]);
    let ids: Vec<u64> = films.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 2, 3]);
}

#[test]
fn create_get_delete_scenario() {
    let service = seeded_service();

    let created = service
        .create(&json!({ "title": "Nope", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap();
    assert_eq!(created.id, 4);

    assert_eq!(service.get("4").unwrap(), created);

    let removed = service.delete("4").unwrap();
    assert_eq!(removed, created);
    assert!(matches!(service.get("4"), Err(ApiError::NotFound)));
    assert_eq!(service.list(None).unwrap().len(), 3);
}

#[test]
fn missing_id_is_not_found() {
    let service = seeded_service();
    for id in ["0", "42", "18446744073709551615"] {
        assert!(matches!(service.get(id), Err(ApiError::NotFound)));
    }
    assert!(matches!(service.delete("42"), Err(ApiError::NotFound)));
    assert!(matches!(
        service.patch("42", &json!({ "link": "x" })),
        Err(ApiError::NotFound)
    ));
}

#[test]
fn non_numeric_id_is_rejected() {
    let service = seeded_service();
    assert!(matches!(service.get("one"), Err(ApiError::InvalidId(_))));
    assert!(matches!(service.delete("1.5"), Err(ApiError::InvalidId(_))));
}

#[test]
fn minimum_duration_filter() {
    let service = seeded_service();

    assert_eq!(service.list(Some("0")).unwrap().len(), 3);
    assert!(matches!(service.list(Some("-5")), Err(ApiError::BadRequest)));

    let long = service.list(Some("151")).unwrap();
    let titles: Vec<&str> = long.iter().map(|f| f.title.as_str()).collect();
    assert_eq!(titles, vec!["Moonlight", "Waves"]);

    let service = service_with(vec![film(1, "a", 99), film(2, "b", 100), film(3, "c", 180)]);
    let at_least_100 = service.list(Some("100")).unwrap();
    assert!(at_least_100.iter().all(|f| f.duration_minutes() >= 100.0));
    assert_eq!(at_least_100.len(), 2);
}

#[test]
fn next_id_follows_last_position_when_ids_ascend() {
    let service = service_with(vec![film(1, "a", 1), film(2, "b", 1), film(7, "c", 1)]);
    let created = service
        .create(&json!({ "title": "d", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap();
    assert_eq!(created.id, 8);
}

#[test]
fn next_id_duplicates_when_last_position_is_not_max() {
    let service = service_with(vec![film(5, "a", 1), film(2, "b", 1), film(3, "c", 1)]);
    let created = service
        .create(&json!({ "title": "d", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap();
    assert_eq!(created.id, 4);

    let created = service
        .create(&json!({ "title": "e", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap();
    assert_eq!(created.id, 5);
    let fives = service
        .list(None)
        .unwrap()
        .into_iter()
        .filter(|f| f.id == 5)
        .count();
    assert_eq!(fives, 2);
}

#[test]
fn duplicate_title_conflicts_without_saving() {
    let service = seeded_service();
    let err = service
        .create(&json!({ "title": "Waves", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap_err();
    assert_eq!(err.status_code(), 409);
    assert_eq!(
        err.body(),
        Some(json!({ "error": "Film with the same title already exist" }))
    );
    assert!(service.store().stored().is_none());

    // Title match is exact.
    assert!(service
        .create(&json!({ "title": "waves", "budget": 1, "duration": 1, "link": "x" }))
        .is_ok());
}

#[test]
fn create_rejects_invalid_data() {
    let service = seeded_service();
    let err = service
        .create(&json!({ "title": "t", "budget": -1, "duration": 1, "link": "x" }))
        .unwrap_err();
    assert!(matches!(err, ApiError::InvalidData));
    assert_eq!(err.body(), Some(json!({ "error": "Invalid film data" })));
}

#[test]
fn delete_removes_exactly_one_and_persists() {
    let service = seeded_service();
    let removed = service.delete("2").unwrap();
    assert_eq!(removed.title, "Moonlight");

    let stored = service.store().stored().unwrap();
    let ids: Vec<u64> = stored.iter().map(|f| f.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn deleted_ids_are_not_reused_while_a_later_film_remains() {
    let service = seeded_service();
    service.delete("2").unwrap();
    let created = service
        .create(&json!({ "title": "New", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap();
    assert_eq!(created.id, 4);
}

#[test]
fn patch_empty_title_is_rejected() {
    let service = seeded_service();
    assert!(matches!(
        service.patch("1", &json!({ "title": "" })),
        Err(ApiError::BadRequest)
    ));
    assert!(matches!(service.patch("1", &json!({})), Err(ApiError::BadRequest)));
}

#[test]
fn patch_link_only_changes_link() {
    let service = seeded_service();
    let before = service.get("1").unwrap();

    let after = service.patch("1", &json!({ "link": "https://new" })).unwrap();
    assert_eq!(after.link, "https://new");
    assert_eq!(after.title, before.title);
    assert_eq!(after.duration, before.duration);
    assert_eq!(after.budget, before.budget);
    assert_eq!(service.get("1").unwrap(), after);
}

#[test]
fn patch_copies_unknown_fields_and_skips_sign_checks() {
    let service = seeded_service();
    let updated = service
        .patch("3", &json!({ "title": "Waves (2019)", "budget": -2, "genre": "drama" }))
        .unwrap();
    assert_eq!(updated.title, "Waves (2019)");
    assert_eq!(updated.budget, Number::from(-2));
    assert_eq!(updated.extra.get("genre"), Some(&json!("drama")));

    let stored = service.store().load();
    assert_eq!(stored[2].extra.get("genre"), Some(&json!("drama")));
}

#[test]
fn put_existing_replaces_fields_and_persists() {
    let service = seeded_service();
    let updated = service
        .put(
            "1",
            &json!({ "title": "Parasite (B&W)", "budget": 11, "duration": 131, "link": "y" }),
        )
        .unwrap();
    assert_eq!(updated.id, 1);
    assert_eq!(updated.title, "Parasite (B&W)");
    assert_eq!(updated.duration, Number::from(131));

    let stored = service.store().stored().unwrap();
    assert_eq!(stored[0], updated);
}

#[test]
fn put_new_id_is_returned_but_not_persisted() {
    let service = seeded_service();
    let created = service
        .put(
            "10",
            &json!({ "title": "Ghost", "budget": 3, "duration": 90, "link": "z" }),
        )
        .unwrap();
    assert_eq!(created.id, 10);
    assert_eq!(created.title, "Ghost");

    assert!(service.store().stored().is_none());
    assert!(matches!(service.get("10"), Err(ApiError::NotFound)));
}

#[test]
fn put_validates_body_and_id() {
    let service = seeded_service();
    assert!(matches!(
        service.put("1", &json!({ "title": "t" })),
        Err(ApiError::InvalidData)
    ));
    assert!(matches!(
        service.put("x", &json!({ "title": "t", "budget": 1, "duration": 1, "link": "l" })),
        Err(ApiError::InvalidId(_))
    ));
}

#[test]
fn create_after_max_id_fails_cleanly() {
    let service = seeded_service();
    let patched = service
        .patch("3", &json!({ "link": "x", "id": u64::MAX }))
        .unwrap();
    assert_eq!(patched.id, u64::MAX);

    let err = service
        .create(&json!({ "title": "Nope", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap_err();
    assert!(matches!(err, ApiError::IdExhausted));
    assert_eq!(err.status_code(), 500);

    let stored = service.store().stored().unwrap();
    assert_eq!(stored.len(), 3);
    assert!(stored.iter().all(|f| f.title != "Nope"));
}

#[test]
fn create_after_max_id_at_earlier_position_still_works() {
    let service = service_with(vec![film(u64::MAX, "a", 1), film(1, "b", 1)]);
    let created = service
        .create(&json!({ "title": "c", "budget": 1, "duration": 1, "link": "x" }))
        .unwrap();
    assert_eq!(created.id, 2);
}
