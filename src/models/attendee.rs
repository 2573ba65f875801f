//! Attendee model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Attendee {
    pub id: i64,
    pub event_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub check_in_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Attendee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAttendeeRequest {
    pub event_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateAttendeeRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Registration status of an attendee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendeeStatus {
    Registered,
    CheckedIn,
    NoShow,
}

impl AttendeeStatus {
    pub const ALL: [&'static str; 3] = ["registered", "checked_in", "no_show"];

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "registered" => Some(AttendeeStatus::Registered),
            "checked_in" => Some(AttendeeStatus::CheckedIn),
            "no_show" => Some(AttendeeStatus::NoShow),
            _ => None,
        }
    }
}

impl ToString for AttendeeStatus {
    fn to_string(&self) -> String {
        match self {
            AttendeeStatus::Registered => "registered".to_string(),
            AttendeeStatus::CheckedIn => "checked_in".to_string(),
            AttendeeStatus::NoShow => "no_show".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attendee_status_round_trip() {
        for value in AttendeeStatus::ALL {
            let status = AttendeeStatus::parse(value).expect("known status should parse");
            assert_eq!(status.to_string(), value);
        }
    }

    #[test]
    fn test_attendee_status_rejects_unknown() {
        assert!(AttendeeStatus::parse("cancelled").is_none());
        assert!(AttendeeStatus::parse("checked-in").is_none());
    }

    #[test]
    fn test_full_name() {
        let attendee = Attendee {
            id: 1,
            event_id: 1,
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: None,
            status: "registered".to_string(),
            check_in_time: None,
            created_at: Utc::now(),
        };
        assert_eq!(attendee.full_name(), "Ada Lovelace");
    }
}
