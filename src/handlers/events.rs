//! Event collection handler
//!
//! Contract: list (most recent event date first), retrieve, create (creator
//! bound to the authenticated caller), full/partial update, delete (cascades
//! to attendees and certificates). All operations require an authenticated
//! caller.

use tracing::debug;
use crate::config::Settings;
use crate::database::DatabaseService;
use crate::handlers::Page;
use crate::serializers::event::{EventSerializer, EventResponse, EventPayload, EventPatch};
use crate::services::auth::{AuthContext, require_caller};
use crate::utils::errors::{AttendHubError, Result};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct EventsHandler {
    db: DatabaseService,
    settings: Settings,
}

impl EventsHandler {
    pub fn new(db: DatabaseService, settings: Settings) -> Self {
        Self { db, settings }
    }

    /// List events with their derived attendee counters
    pub async fn list(&self, caller: Option<&AuthContext>, page: Page) -> Result<Vec<EventResponse>> {
        require_caller(caller)?;

        let events = self.db.events.list(page.limit, page.offset).await?;
        let event_ids: Vec<i64> = events.iter().map(|event| event.id).collect();
        let counts = self.db.events.attendee_counts_for(&event_ids).await?;

        Ok(events
            .iter()
            .map(|event| {
                let (total, checked_in) = counts.get(&event.id).copied().unwrap_or((0, 0));
                EventSerializer::serialize(event, total, checked_in)
            })
            .collect())
    }

    /// Retrieve one event by identifier
    pub async fn retrieve(&self, caller: Option<&AuthContext>, id: i64) -> Result<EventResponse> {
        require_caller(caller)?;

        let event = self
            .db
            .events
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::EventNotFound { event_id: id })?;
        let (total, checked_in) = self.db.events.attendee_counts(id).await?;

        Ok(EventSerializer::serialize(&event, total, checked_in))
    }

    /// Create an event; the creator comes from the caller, never the client
    pub async fn create(
        &self,
        caller: Option<&AuthContext>,
        payload: EventPayload,
    ) -> Result<EventResponse> {
        let caller = require_caller(caller)?;
        debug!(caller_id = caller.user_id, "Creating event");

        let request = EventSerializer::validate_create(payload, caller, &self.settings.defaults)?;
        let event = self.db.events.create(request).await?;
        logging::log_event_action(event.id, "create", caller.user_id);

        // A fresh event has no attendees yet
        Ok(EventSerializer::serialize(&event, 0, 0))
    }

    /// Apply a full or partial update to the mutable fields of an event
    pub async fn update(
        &self,
        caller: Option<&AuthContext>,
        id: i64,
        patch: EventPatch,
    ) -> Result<EventResponse> {
        let caller = require_caller(caller)?;

        let request = EventSerializer::validate_update(patch)?;
        self.db
            .events
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::EventNotFound { event_id: id })?;

        let event = self.db.events.update(id, request).await?;
        let (total, checked_in) = self.db.events.attendee_counts(id).await?;
        logging::log_event_action(id, "update", caller.user_id);

        Ok(EventSerializer::serialize(&event, total, checked_in))
    }

    /// Delete an event; its attendees and certificates go with it
    pub async fn delete(&self, caller: Option<&AuthContext>, id: i64) -> Result<()> {
        let caller = require_caller(caller)?;

        self.db
            .events
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::EventNotFound { event_id: id })?;

        self.db.events.delete(id).await?;
        logging::log_event_action(id, "delete", caller.user_id);

        Ok(())
    }
}
