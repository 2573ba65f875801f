//! Event wire-shape mapper
//!
//! Renders events for callers (persisted fields plus derived counters) and
//! validates inbound payloads into repository requests.

use serde::{Deserialize, Serialize};
use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use crate::config::DefaultsConfig;
use crate::models::event::{Event, EventStatus, CreateEventRequest, UpdateEventRequest};
use crate::services::auth::AuthContext;
use crate::utils::errors::{AttendHubError, Result};

/// Wire representation of an event
///
/// `attendee_count` and `checked_in_count` are recomputed from the attendees
/// table on every read; they are never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub organization: String,
    pub creator: i64,
    pub creator_name: String,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Option<String>,
    pub max_attendees: Option<i32>,
    pub status: String,
    pub attendee_count: i64,
    pub checked_in_count: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Client payload for creating an event
///
/// Creator and timestamps are server-assigned; serde drops any such fields a
/// client supplies.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventPayload {
    pub name: String,
    pub description: Option<String>,
    pub organization: Option<String>,
    pub event_date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub location: Option<String>,
    pub max_attendees: Option<i32>,
    pub status: Option<String>,
}

/// Client payload for a full or partial event update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EventPatch {
    pub name: Option<String>,
    pub description: Option<String>,
    pub organization: Option<String>,
    pub event_date: Option<NaiveDate>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    pub location: Option<String>,
    pub max_attendees: Option<i32>,
    pub status: Option<String>,
}

pub struct EventSerializer;

impl EventSerializer {
    /// Render an event with its derived counters
    pub fn serialize(event: &Event, attendee_count: i64, checked_in_count: i64) -> EventResponse {
        EventResponse {
            id: event.id,
            name: event.name.clone(),
            description: event.description.clone(),
            organization: event.organization.clone(),
            creator: event.created_by,
            creator_name: event.creator_name.clone(),
            event_date: event.event_date,
            start_time: event.start_time,
            end_time: event.end_time,
            location: event.location.clone(),
            max_attendees: event.max_attendees,
            status: event.status.clone(),
            attendee_count,
            checked_in_count,
            created_at: event.created_at,
            updated_at: event.updated_at,
        }
    }

    /// Validate a create payload, binding the creator from the authenticated caller
    pub fn validate_create(
        payload: EventPayload,
        caller: &AuthContext,
        defaults: &DefaultsConfig,
    ) -> Result<CreateEventRequest> {
        let name = payload.name.trim();
        if name.is_empty() {
            return Err(AttendHubError::Validation("name is required".to_string()));
        }

        let status = match payload.status {
            Some(status) => validate_status(&status)?,
            None => EventStatus::Active.to_string(),
        };

        validate_max_attendees(payload.max_attendees)?;

        let organization = payload
            .organization
            .filter(|org| !org.trim().is_empty())
            .unwrap_or_else(|| defaults.organization.clone());

        Ok(CreateEventRequest {
            name: name.to_string(),
            description: payload.description,
            organization,
            created_by: caller.user_id,
            creator_name: caller.full_name.clone(),
            event_date: payload.event_date,
            start_time: payload.start_time,
            end_time: payload.end_time,
            location: payload.location,
            max_attendees: payload.max_attendees,
            status,
        })
    }

    /// Validate an update payload; absent fields are left untouched
    pub fn validate_update(patch: EventPatch) -> Result<UpdateEventRequest> {
        if let Some(ref name) = patch.name {
            if name.trim().is_empty() {
                return Err(AttendHubError::Validation("name cannot be blank".to_string()));
            }
        }

        let status = match patch.status {
            Some(status) => Some(validate_status(&status)?),
            None => None,
        };

        validate_max_attendees(patch.max_attendees)?;

        Ok(UpdateEventRequest {
            name: patch.name,
            description: patch.description,
            organization: patch.organization,
            event_date: patch.event_date,
            start_time: patch.start_time,
            end_time: patch.end_time,
            location: patch.location,
            max_attendees: patch.max_attendees,
            status,
        })
    }
}

fn validate_status(status: &str) -> Result<String> {
    EventStatus::parse(status)
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AttendHubError::Validation(format!(
                "status must be one of {:?}, got {:?}",
                EventStatus::ALL,
                status
            ))
        })
}

fn validate_max_attendees(max_attendees: Option<i32>) -> Result<()> {
    if let Some(max) = max_attendees {
        if max < 0 {
            return Err(AttendHubError::Validation(
                "max_attendees cannot be negative".to_string(),
            ));
        }
    }
    Ok(())
}
