//! Attendee collection handler
//!
//! Contract: list (optionally filtered to one event), retrieve, create,
//! update, delete, plus the dedicated check-in action. Registration is
//! subject to the (event, email) uniqueness invariant.

use chrono::Utc;
use tracing::debug;
use crate::database::DatabaseService;
use crate::database::repositories::attendee::EVENT_EMAIL_UNIQUE;
use crate::handlers::Page;
use crate::serializers::attendee::{AttendeeSerializer, AttendeeResponse, AttendeePayload, AttendeePatch};
use crate::services::auth::{AuthContext, require_caller};
use crate::utils::errors::{AttendHubError, Result};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct AttendeesHandler {
    db: DatabaseService,
}

impl AttendeesHandler {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// List attendees. Filtered by event: ordered by first name.
    /// Unfiltered: most recently created first.
    pub async fn list(
        &self,
        caller: Option<&AuthContext>,
        event_id: Option<i64>,
        page: Page,
    ) -> Result<Vec<AttendeeResponse>> {
        require_caller(caller)?;

        let attendees = match event_id {
            Some(event_id) => self.db.attendees.list_for_event(event_id).await?,
            None => self.db.attendees.list(page.limit, page.offset).await?,
        };

        Ok(attendees.iter().map(AttendeeSerializer::serialize).collect())
    }

    /// Retrieve one attendee by identifier
    pub async fn retrieve(&self, caller: Option<&AuthContext>, id: i64) -> Result<AttendeeResponse> {
        require_caller(caller)?;

        let attendee = self
            .db
            .attendees
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::AttendeeNotFound { attendee_id: id })?;

        Ok(AttendeeSerializer::serialize(&attendee))
    }

    /// Register an attendee for an event
    pub async fn create(
        &self,
        caller: Option<&AuthContext>,
        payload: AttendeePayload,
    ) -> Result<AttendeeResponse> {
        let caller = require_caller(caller)?;
        debug!(caller_id = caller.user_id, event_id = payload.event_id, "Registering attendee");

        let request = AttendeeSerializer::validate_create(payload)?;
        self.db
            .events
            .find_by_id(request.event_id)
            .await?
            .ok_or(AttendHubError::EventNotFound { event_id: request.event_id })?;

        let event_id = request.event_id;
        let email = request.email.clone();
        let attendee = self.db.attendees.create(request).await.map_err(|e| {
            if e.violates_constraint(EVENT_EMAIL_UNIQUE) {
                AttendHubError::DuplicateRegistration { event_id, email }
            } else {
                e
            }
        })?;

        Ok(AttendeeSerializer::serialize(&attendee))
    }

    /// Update an attendee, keeping the (event, email) invariant intact
    pub async fn update(
        &self,
        caller: Option<&AuthContext>,
        id: i64,
        patch: AttendeePatch,
    ) -> Result<AttendeeResponse> {
        require_caller(caller)?;

        let request = AttendeeSerializer::validate_update(patch)?;
        let existing = self
            .db
            .attendees
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::AttendeeNotFound { attendee_id: id })?;

        let event_id = existing.event_id;
        let email = request.email.clone().unwrap_or(existing.email);
        let attendee = self.db.attendees.update(id, request).await.map_err(|e| {
            if e.violates_constraint(EVENT_EMAIL_UNIQUE) {
                AttendHubError::DuplicateRegistration { event_id, email }
            } else {
                e
            }
        })?;

        Ok(AttendeeSerializer::serialize(&attendee))
    }

    /// Delete an attendee; any certificate it holds goes with it
    pub async fn delete(&self, caller: Option<&AuthContext>, id: i64) -> Result<()> {
        require_caller(caller)?;

        self.db
            .attendees
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::AttendeeNotFound { attendee_id: id })?;

        self.db.attendees.delete(id).await?;

        Ok(())
    }

    /// Check an attendee in: status becomes "checked_in" and the check-in
    /// time is stamped with the current time. Re-invocation refreshes the
    /// stamp; concurrent calls resolve last-write-wins.
    pub async fn check_in(&self, caller: Option<&AuthContext>, id: i64) -> Result<AttendeeResponse> {
        let caller = require_caller(caller)?;

        let attendee = self
            .db
            .attendees
            .check_in(id, Utc::now())
            .await?
            .ok_or(AttendHubError::AttendeeNotFound { attendee_id: id })?;
        logging::log_check_in(id, attendee.event_id, caller.user_id);

        Ok(AttendeeSerializer::serialize(&attendee))
    }
}
