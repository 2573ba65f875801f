//! Integration tests for the attendee collection handler

mod helpers;

use assert_matches::assert_matches;
use chrono::Utc;
use helpers::*;
use serial_test::serial;

use AttendHub::serializers::AttendeePatch;
use AttendHub::{AttendHubError, ErrorKind, Page};

#[tokio::test]
#[serial]
async fn test_registration_defaults() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();

    let attendee = handlers
        .attendees
        .create(
            Some(&caller),
            named_attendee_payload(event.id, "Ada", "Lovelace", "ada@x.com"),
        )
        .await
        .unwrap();

    assert_eq!(attendee.status, "registered");
    assert_eq!(attendee.full_name, "Ada Lovelace");
    assert!(attendee.check_in_time.is_none());
    assert_eq!(attendee.event_id, event.id);
}

#[tokio::test]
#[serial]
async fn test_duplicate_email_per_event_is_rejected() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();
    let other_event = handlers
        .events
        .create(Some(&caller), event_payload("Other Workshop", date(2025, 6, 2)))
        .await
        .unwrap();

    handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "a@x.com"))
        .await
        .unwrap();

    // Same email, same event: rejected as a validation failure
    let err = handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "a@x.com"))
        .await
        .unwrap_err();
    assert_matches!(err, AttendHubError::DuplicateRegistration { .. });
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);

    // Same email, different event: fine
    handlers
        .attendees
        .create(Some(&caller), attendee_payload(other_event.id, "a@x.com"))
        .await
        .unwrap();
}

#[tokio::test]
#[serial]
async fn test_create_rejects_malformed_email_and_unknown_event() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();

    let err = handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "not-an-email"))
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ValidationFailed);

    let err = handlers
        .attendees
        .create(Some(&caller), attendee_payload(999_999, "a@x.com"))
        .await
        .unwrap_err();
    assert_matches!(err, AttendHubError::EventNotFound { .. });
}

#[tokio::test]
#[serial]
async fn test_check_in_stamps_status_and_time() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();
    let attendee = handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "a@x.com"))
        .await
        .unwrap();

    let before = Utc::now();
    let checked_in = handlers.attendees.check_in(Some(&caller), attendee.id).await.unwrap();
    let after = Utc::now();

    assert_eq!(checked_in.status, "checked_in");
    let stamp = checked_in.check_in_time.expect("check-in time must be set");
    assert!(stamp >= before && stamp <= after);
}

#[tokio::test]
#[serial]
async fn test_check_in_is_idempotent() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();
    let attendee = handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "a@x.com"))
        .await
        .unwrap();

    let first = handlers.attendees.check_in(Some(&caller), attendee.id).await.unwrap();
    let second = handlers.attendees.check_in(Some(&caller), attendee.id).await.unwrap();

    // Last write wins: the status stays checked_in and the stamp refreshes
    assert_eq!(second.status, "checked_in");
    assert!(second.check_in_time.unwrap() >= first.check_in_time.unwrap());
}

#[tokio::test]
#[serial]
async fn test_check_in_unknown_attendee_is_not_found() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let err = handlers.attendees.check_in(Some(&caller), 999_999).await.unwrap_err();
    assert_matches!(err, AttendHubError::AttendeeNotFound { attendee_id: 999_999 });
}

#[tokio::test]
#[serial]
async fn test_list_ordering_filtered_and_unfiltered() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();

    for (first, last, email) in [
        ("Charlie", "Smith", "c@x.com"),
        ("Ada", "Lovelace", "a@x.com"),
        ("Bob", "Jones", "b@x.com"),
    ] {
        handlers
            .attendees
            .create(
                Some(&caller),
                named_attendee_payload(event.id, first, last, email),
            )
            .await
            .unwrap();
    }

    // Filtered by event: alphabetical by first name
    let filtered = handlers
        .attendees
        .list(Some(&caller), Some(event.id), Page::default())
        .await
        .unwrap();
    let first_names: Vec<&str> = filtered.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(first_names, vec!["Ada", "Bob", "Charlie"]);

    // Unfiltered: most recently created first
    let unfiltered = handlers
        .attendees
        .list(Some(&caller), None, Page::default())
        .await
        .unwrap();
    let first_names: Vec<&str> = unfiltered.iter().map(|a| a.first_name.as_str()).collect();
    assert_eq!(first_names, vec!["Bob", "Ada", "Charlie"]);
}

#[tokio::test]
#[serial]
async fn test_update_enforces_email_uniqueness() {
    let Some(db) = try_database().await else { return };
    db.cleanup().await.unwrap();
    let handlers = build_handlers(db.pool.clone());
    let caller = test_caller();

    let event = handlers
        .events
        .create(Some(&caller), event_payload("Workshop", date(2025, 6, 1)))
        .await
        .unwrap();
    handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "a@x.com"))
        .await
        .unwrap();
    let second = handlers
        .attendees
        .create(Some(&caller), attendee_payload(event.id, "b@x.com"))
        .await
        .unwrap();

    let patch = AttendeePatch {
        email: Some("a@x.com".to_string()),
        ..Default::default()
    };
    let err = handlers
        .attendees
        .update(Some(&caller), second.id, patch)
        .await
        .unwrap_err();
    assert_matches!(err, AttendHubError::DuplicateRegistration { .. });

    let patch = AttendeePatch {
        email: Some("b2@x.com".to_string()),
        ..Default::default()
    };
    let updated = handlers
        .attendees
        .update(Some(&caller), second.id, patch)
        .await
        .unwrap();
    assert_eq!(updated.email, "b2@x.com");
}
