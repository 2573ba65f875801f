//! Certificate model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Certificate {
    pub id: i64,
    pub event_id: i64,
    pub attendee_id: i64,
    pub certificate_number: String,
    pub issued_date: DateTime<Utc>,
}

/// Certificate row joined with the owning event and attendee, for display
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct CertificateDetails {
    pub id: i64,
    pub event_id: i64,
    pub attendee_id: i64,
    pub certificate_number: String,
    pub issued_date: DateTime<Utc>,
    pub event_name: String,
    pub attendee_first_name: String,
    pub attendee_last_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateCertificateRequest {
    pub event_id: i64,
    pub attendee_id: i64,
    pub certificate_number: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateCertificateRequest {
    pub event_id: Option<i64>,
    pub attendee_id: Option<i64>,
    pub certificate_number: Option<String>,
}
