//! Attendee wire-shape mapper

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::attendee::{Attendee, AttendeeStatus, CreateAttendeeRequest, UpdateAttendeeRequest};
use crate::utils::errors::{AttendHubError, Result};
use crate::utils::helpers::{is_valid_email, is_valid_phone};

/// Wire representation of an attendee; `full_name` is derived
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeeResponse {
    pub id: i64,
    pub event_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub check_in_time: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Client payload for registering an attendee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendeePayload {
    pub event_id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: Option<String>,
}

/// Client payload for a full or partial attendee update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AttendeePatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub status: Option<String>,
}

pub struct AttendeeSerializer;

impl AttendeeSerializer {
    pub fn serialize(attendee: &Attendee) -> AttendeeResponse {
        AttendeeResponse {
            id: attendee.id,
            event_id: attendee.event_id,
            first_name: attendee.first_name.clone(),
            last_name: attendee.last_name.clone(),
            full_name: attendee.full_name(),
            email: attendee.email.clone(),
            phone: attendee.phone.clone(),
            status: attendee.status.clone(),
            check_in_time: attendee.check_in_time,
            created_at: attendee.created_at,
        }
    }

    /// Validate a registration payload; status defaults to "registered"
    pub fn validate_create(payload: AttendeePayload) -> Result<CreateAttendeeRequest> {
        let first_name = required(&payload.first_name, "first_name")?;
        let last_name = required(&payload.last_name, "last_name")?;
        let email = validate_email(&payload.email)?;
        let phone = validate_phone(payload.phone)?;

        let status = match payload.status {
            Some(status) => validate_status(&status)?,
            None => AttendeeStatus::Registered.to_string(),
        };

        Ok(CreateAttendeeRequest {
            event_id: payload.event_id,
            first_name,
            last_name,
            email,
            phone,
            status,
        })
    }

    /// Validate an update payload; absent fields are left untouched
    pub fn validate_update(patch: AttendeePatch) -> Result<UpdateAttendeeRequest> {
        let first_name = match patch.first_name {
            Some(name) => Some(required(&name, "first_name")?),
            None => None,
        };
        let last_name = match patch.last_name {
            Some(name) => Some(required(&name, "last_name")?),
            None => None,
        };
        let email = match patch.email {
            Some(email) => Some(validate_email(&email)?),
            None => None,
        };
        let status = match patch.status {
            Some(status) => Some(validate_status(&status)?),
            None => None,
        };

        Ok(UpdateAttendeeRequest {
            first_name,
            last_name,
            email,
            phone: validate_phone(patch.phone)?,
            status,
        })
    }
}

fn required(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(AttendHubError::Validation(format!("{field} is required")));
    }
    Ok(trimmed.to_string())
}

fn validate_email(email: &str) -> Result<String> {
    let email = email.trim();
    if !is_valid_email(email) {
        return Err(AttendHubError::Validation(format!(
            "invalid email address: {email:?}"
        )));
    }
    Ok(email.to_string())
}

fn validate_phone(phone: Option<String>) -> Result<Option<String>> {
    match phone {
        Some(phone) if !phone.trim().is_empty() => {
            if !is_valid_phone(phone.trim()) {
                return Err(AttendHubError::Validation(format!(
                    "invalid phone number: {phone:?}"
                )));
            }
            Ok(Some(phone.trim().to_string()))
        }
        _ => Ok(None),
    }
}

fn validate_status(status: &str) -> Result<String> {
    AttendeeStatus::parse(status)
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AttendHubError::Validation(format!(
                "status must be one of {:?}, got {:?}",
                AttendeeStatus::ALL,
                status
            ))
        })
}
