//! Event repository implementation

use std::collections::HashMap;
use sqlx::PgPool;
use chrono::Utc;
use crate::models::event::{Event, CreateEventRequest, UpdateEventRequest};
use crate::utils::errors::AttendHubError;

const EVENT_COLUMNS: &str = "id, name, description, organization, created_by, creator_name, \
     event_date, start_time, end_time, location, max_attendees, status, created_at, updated_at";

#[derive(Debug, Clone)]
pub struct EventRepository {
    pool: PgPool,
}

impl EventRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new event
    pub async fn create(&self, request: CreateEventRequest) -> Result<Event, AttendHubError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            INSERT INTO events (name, description, organization, created_by, creator_name,
                                event_date, start_time, end_time, location, max_attendees, status,
                                created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING id, name, description, organization, created_by, creator_name,
                      event_date, start_time, end_time, location, max_attendees, status,
                      created_at, updated_at
            "#
        )
        .bind(request.name)
        .bind(request.description)
        .bind(request.organization)
        .bind(request.created_by)
        .bind(request.creator_name)
        .bind(request.event_date)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.location)
        .bind(request.max_attendees)
        .bind(request.status)
        .bind(Utc::now())
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Find event by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AttendHubError> {
        let event = sqlx::query_as::<_, Event>(
            &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = $1")
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(event)
    }

    /// Update event; creator and creation timestamp are never touched
    pub async fn update(&self, id: i64, request: UpdateEventRequest) -> Result<Event, AttendHubError> {
        let event = sqlx::query_as::<_, Event>(
            r#"
            UPDATE events
            SET name = COALESCE($2, name),
                description = COALESCE($3, description),
                organization = COALESCE($4, organization),
                event_date = COALESCE($5, event_date),
                start_time = COALESCE($6, start_time),
                end_time = COALESCE($7, end_time),
                location = COALESCE($8, location),
                max_attendees = COALESCE($9, max_attendees),
                status = COALESCE($10, status),
                updated_at = $11
            WHERE id = $1
            RETURNING id, name, description, organization, created_by, creator_name,
                      event_date, start_time, end_time, location, max_attendees, status,
                      created_at, updated_at
            "#
        )
        .bind(id)
        .bind(request.name)
        .bind(request.description)
        .bind(request.organization)
        .bind(request.event_date)
        .bind(request.start_time)
        .bind(request.end_time)
        .bind(request.location)
        .bind(request.max_attendees)
        .bind(request.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(event)
    }

    /// Delete event; attendees and certificates cascade at the schema level
    pub async fn delete(&self, id: i64) -> Result<(), AttendHubError> {
        sqlx::query("DELETE FROM events WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List events, most recent event date first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Event>, AttendHubError> {
        let events = sqlx::query_as::<_, Event>(
            &format!("SELECT {EVENT_COLUMNS} FROM events ORDER BY event_date DESC LIMIT $1 OFFSET $2")
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(events)
    }

    /// Get attendee counts for an event: (total, checked in)
    pub async fn attendee_counts(&self, event_id: i64) -> Result<(i64, i64), AttendHubError> {
        let counts: (i64, i64) = sqlx::query_as(
            r#"
            SELECT COUNT(*), COUNT(*) FILTER (WHERE status = 'checked_in')
            FROM attendees WHERE event_id = $1
            "#
        )
        .bind(event_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(counts)
    }

    /// Get attendee counts for a set of events in one query
    pub async fn attendee_counts_for(
        &self,
        event_ids: &[i64],
    ) -> Result<HashMap<i64, (i64, i64)>, AttendHubError> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i64, i64, i64)> = sqlx::query_as(
            r#"
            SELECT event_id, COUNT(*), COUNT(*) FILTER (WHERE status = 'checked_in')
            FROM attendees WHERE event_id = ANY($1)
            GROUP BY event_id
            "#
        )
        .bind(event_ids)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|(event_id, total, checked_in)| (event_id, (total, checked_in)))
            .collect())
    }

    /// Count total events
    pub async fn count(&self) -> Result<i64, AttendHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
