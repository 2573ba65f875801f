//! Test data builders for events, attendees and certificates

use chrono::{NaiveDate, NaiveTime};
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;

use AttendHub::config::Settings;
use AttendHub::database::DatabaseService;
use AttendHub::handlers::Handlers;
use AttendHub::serializers::{AttendeePayload, EventPayload};
use AttendHub::services::AuthContext;

/// The authenticated caller used across the integration suites
pub fn test_caller() -> AuthContext {
    AuthContext::new(1, "Pat Organizer")
}

/// Build the handler factory against a test database pool
pub fn build_handlers(pool: sqlx::PgPool) -> Handlers {
    Handlers::new(DatabaseService::new(pool), Settings::default())
}

/// A valid event payload with the given name and date
pub fn event_payload(name: &str, event_date: NaiveDate) -> EventPayload {
    EventPayload {
        name: name.to_string(),
        description: Some("Integration test event".to_string()),
        organization: None,
        event_date,
        start_time: NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
        end_time: NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
        location: Some("Main Hall".to_string()),
        max_attendees: Some(2),
        status: Some("active".to_string()),
    }
}

/// A valid attendee payload with generated names and the given email
pub fn attendee_payload(event_id: i64, email: &str) -> AttendeePayload {
    AttendeePayload {
        event_id,
        first_name: FirstName().fake(),
        last_name: LastName().fake(),
        email: email.to_string(),
        phone: None,
        status: None,
    }
}

/// An attendee payload with explicit names, for ordering assertions
pub fn named_attendee_payload(
    event_id: i64,
    first_name: &str,
    last_name: &str,
    email: &str,
) -> AttendeePayload {
    AttendeePayload {
        event_id,
        first_name: first_name.to_string(),
        last_name: last_name.to_string(),
        email: email.to_string(),
        phone: None,
        status: None,
    }
}

/// A date helper for readability
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}
