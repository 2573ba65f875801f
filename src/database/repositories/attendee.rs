//! Attendee repository implementation

use sqlx::PgPool;
use chrono::{DateTime, Utc};
use crate::models::attendee::{Attendee, AttendeeStatus, CreateAttendeeRequest, UpdateAttendeeRequest};
use crate::utils::errors::AttendHubError;

/// Unique constraint guarding one registration per (event, email)
pub const EVENT_EMAIL_UNIQUE: &str = "attendees_event_id_email_key";

const ATTENDEE_COLUMNS: &str =
    "id, event_id, first_name, last_name, email, phone, status, check_in_time, created_at";

#[derive(Debug, Clone)]
pub struct AttendeeRepository {
    pool: PgPool,
}

impl AttendeeRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Register a new attendee
    pub async fn create(&self, request: CreateAttendeeRequest) -> Result<Attendee, AttendHubError> {
        let attendee = sqlx::query_as::<_, Attendee>(
            r#"
            INSERT INTO attendees (event_id, first_name, last_name, email, phone, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id, event_id, first_name, last_name, email, phone, status, check_in_time, created_at
            "#
        )
        .bind(request.event_id)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.status)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(attendee)
    }

    /// Find attendee by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Attendee>, AttendHubError> {
        let attendee = sqlx::query_as::<_, Attendee>(
            &format!("SELECT {ATTENDEE_COLUMNS} FROM attendees WHERE id = $1")
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(attendee)
    }

    /// Update attendee
    pub async fn update(&self, id: i64, request: UpdateAttendeeRequest) -> Result<Attendee, AttendHubError> {
        let attendee = sqlx::query_as::<_, Attendee>(
            r#"
            UPDATE attendees
            SET first_name = COALESCE($2, first_name),
                last_name = COALESCE($3, last_name),
                email = COALESCE($4, email),
                phone = COALESCE($5, phone),
                status = COALESCE($6, status)
            WHERE id = $1
            RETURNING id, event_id, first_name, last_name, email, phone, status, check_in_time, created_at
            "#
        )
        .bind(id)
        .bind(request.first_name)
        .bind(request.last_name)
        .bind(request.email)
        .bind(request.phone)
        .bind(request.status)
        .fetch_one(&self.pool)
        .await?;

        Ok(attendee)
    }

    /// Delete attendee; certificates cascade at the schema level
    pub async fn delete(&self, id: i64) -> Result<(), AttendHubError> {
        sqlx::query("DELETE FROM attendees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List attendees across all events, most recently created first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<Attendee>, AttendHubError> {
        let attendees = sqlx::query_as::<_, Attendee>(
            &format!("SELECT {ATTENDEE_COLUMNS} FROM attendees ORDER BY created_at DESC LIMIT $1 OFFSET $2")
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(attendees)
    }

    /// List attendees for one event, ordered by first name
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<Attendee>, AttendHubError> {
        let attendees = sqlx::query_as::<_, Attendee>(
            &format!("SELECT {ATTENDEE_COLUMNS} FROM attendees WHERE event_id = $1 ORDER BY first_name ASC")
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(attendees)
    }

    /// Mark an attendee as checked in, stamping the given time.
    /// Re-invocation refreshes the stamp; last write wins.
    pub async fn check_in(
        &self,
        id: i64,
        check_in_time: DateTime<Utc>,
    ) -> Result<Option<Attendee>, AttendHubError> {
        let attendee = sqlx::query_as::<_, Attendee>(
            r#"
            UPDATE attendees
            SET status = $2, check_in_time = $3
            WHERE id = $1
            RETURNING id, event_id, first_name, last_name, email, phone, status, check_in_time, created_at
            "#
        )
        .bind(id)
        .bind(AttendeeStatus::CheckedIn.to_string())
        .bind(check_in_time)
        .fetch_optional(&self.pool)
        .await?;

        Ok(attendee)
    }

    /// Count total attendees
    pub async fn count(&self) -> Result<i64, AttendHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM attendees")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
