//! Certificate repository implementation

use sqlx::PgPool;
use chrono::Utc;
use crate::models::certificate::{
    Certificate, CertificateDetails, CreateCertificateRequest, UpdateCertificateRequest,
};
use crate::utils::errors::AttendHubError;

/// Unique constraint guarding the globally unique certificate number
pub const NUMBER_UNIQUE: &str = "certificates_certificate_number_key";

/// Unique constraint guarding one certificate per (event, attendee)
pub const EVENT_ATTENDEE_UNIQUE: &str = "certificates_event_id_attendee_id_key";

const DETAIL_SELECT: &str = r#"
    SELECT c.id, c.event_id, c.attendee_id, c.certificate_number, c.issued_date,
           e.name AS event_name,
           a.first_name AS attendee_first_name, a.last_name AS attendee_last_name
    FROM certificates c
    INNER JOIN events e ON e.id = c.event_id
    INNER JOIN attendees a ON a.id = c.attendee_id
"#;

#[derive(Debug, Clone)]
pub struct CertificateRepository {
    pool: PgPool,
}

impl CertificateRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a new certificate; the issuance timestamp is set here and never updated
    pub async fn create(&self, request: CreateCertificateRequest) -> Result<Certificate, AttendHubError> {
        let certificate = sqlx::query_as::<_, Certificate>(
            r#"
            INSERT INTO certificates (event_id, attendee_id, certificate_number, issued_date)
            VALUES ($1, $2, $3, $4)
            RETURNING id, event_id, attendee_id, certificate_number, issued_date
            "#
        )
        .bind(request.event_id)
        .bind(request.attendee_id)
        .bind(request.certificate_number)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(certificate)
    }

    /// Find certificate by ID
    pub async fn find_by_id(&self, id: i64) -> Result<Option<Certificate>, AttendHubError> {
        let certificate = sqlx::query_as::<_, Certificate>(
            "SELECT id, event_id, attendee_id, certificate_number, issued_date FROM certificates WHERE id = $1"
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certificate)
    }

    /// Find certificate by ID with event and attendee display fields
    pub async fn find_details(&self, id: i64) -> Result<Option<CertificateDetails>, AttendHubError> {
        let details = sqlx::query_as::<_, CertificateDetails>(
            &format!("{DETAIL_SELECT} WHERE c.id = $1")
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(details)
    }

    /// Find the certificate held by an attendee for an event, if any
    pub async fn find_by_event_and_attendee(
        &self,
        event_id: i64,
        attendee_id: i64,
    ) -> Result<Option<Certificate>, AttendHubError> {
        let certificate = sqlx::query_as::<_, Certificate>(
            "SELECT id, event_id, attendee_id, certificate_number, issued_date FROM certificates WHERE event_id = $1 AND attendee_id = $2"
        )
        .bind(event_id)
        .bind(attendee_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(certificate)
    }

    /// Update certificate; the issuance timestamp is immutable
    pub async fn update(&self, id: i64, request: UpdateCertificateRequest) -> Result<Certificate, AttendHubError> {
        let certificate = sqlx::query_as::<_, Certificate>(
            r#"
            UPDATE certificates
            SET event_id = COALESCE($2, event_id),
                attendee_id = COALESCE($3, attendee_id),
                certificate_number = COALESCE($4, certificate_number)
            WHERE id = $1
            RETURNING id, event_id, attendee_id, certificate_number, issued_date
            "#
        )
        .bind(id)
        .bind(request.event_id)
        .bind(request.attendee_id)
        .bind(request.certificate_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(certificate)
    }

    /// Delete certificate
    pub async fn delete(&self, id: i64) -> Result<(), AttendHubError> {
        sqlx::query("DELETE FROM certificates WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    /// List certificates with display fields, most recently issued first
    pub async fn list(&self, limit: i64, offset: i64) -> Result<Vec<CertificateDetails>, AttendHubError> {
        let certificates = sqlx::query_as::<_, CertificateDetails>(
            &format!("{DETAIL_SELECT} ORDER BY c.issued_date DESC LIMIT $1 OFFSET $2")
        )
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    /// List certificates for one event, most recently issued first
    pub async fn list_for_event(&self, event_id: i64) -> Result<Vec<CertificateDetails>, AttendHubError> {
        let certificates = sqlx::query_as::<_, CertificateDetails>(
            &format!("{DETAIL_SELECT} WHERE c.event_id = $1 ORDER BY c.issued_date DESC")
        )
        .bind(event_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(certificates)
    }

    /// Count total certificates
    pub async fn count(&self) -> Result<i64, AttendHubError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM certificates")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }
}
