//! Certificate collection handler
//!
//! Contract: list (optionally filtered to one event), retrieve, create,
//! update, delete, subject to the global certificate-number and
//! (event, attendee) uniqueness invariants. The issue operation generates a
//! number and is idempotent per (event, attendee) pair.

use tracing::debug;
use crate::config::Settings;
use crate::database::DatabaseService;
use crate::database::repositories::certificate::{EVENT_ATTENDEE_UNIQUE, NUMBER_UNIQUE};
use crate::handlers::Page;
use crate::models::certificate::CreateCertificateRequest;
use crate::serializers::certificate::{
    CertificateSerializer, CertificateResponse, CertificatePayload, CertificatePatch,
};
use crate::services::auth::{AuthContext, require_caller};
use crate::services::certificate::CertificateNumberGenerator;
use crate::utils::errors::{AttendHubError, Result};
use crate::utils::logging;

#[derive(Debug, Clone)]
pub struct CertificatesHandler {
    db: DatabaseService,
    numbers: CertificateNumberGenerator,
}

impl CertificatesHandler {
    pub fn new(db: DatabaseService, settings: &Settings) -> Self {
        Self {
            db,
            numbers: CertificateNumberGenerator::new(&settings.certificates),
        }
    }

    /// List certificates, optionally filtered to one owning event
    pub async fn list(
        &self,
        caller: Option<&AuthContext>,
        event_id: Option<i64>,
        page: Page,
    ) -> Result<Vec<CertificateResponse>> {
        require_caller(caller)?;

        let certificates = match event_id {
            Some(event_id) => self.db.certificates.list_for_event(event_id).await?,
            None => self.db.certificates.list(page.limit, page.offset).await?,
        };

        Ok(certificates.iter().map(CertificateSerializer::serialize).collect())
    }

    /// Retrieve one certificate by identifier
    pub async fn retrieve(&self, caller: Option<&AuthContext>, id: i64) -> Result<CertificateResponse> {
        require_caller(caller)?;

        let details = self
            .db
            .certificates
            .find_details(id)
            .await?
            .ok_or(AttendHubError::CertificateNotFound { certificate_id: id })?;

        Ok(CertificateSerializer::serialize(&details))
    }

    /// Create a certificate with a caller-supplied number
    pub async fn create(
        &self,
        caller: Option<&AuthContext>,
        payload: CertificatePayload,
    ) -> Result<CertificateResponse> {
        require_caller(caller)?;

        let request = CertificateSerializer::validate_create(payload)?;
        self.ensure_references(request.event_id, request.attendee_id).await?;
        let certificate = self.insert(request).await?;

        self.details_of(certificate.id).await
    }

    /// Update a certificate; the issuance timestamp is immutable
    pub async fn update(
        &self,
        caller: Option<&AuthContext>,
        id: i64,
        patch: CertificatePatch,
    ) -> Result<CertificateResponse> {
        require_caller(caller)?;

        let request = CertificateSerializer::validate_update(patch)?;
        let existing = self
            .db
            .certificates
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::CertificateNotFound { certificate_id: id })?;

        let event_id = request.event_id.unwrap_or(existing.event_id);
        let attendee_id = request.attendee_id.unwrap_or(existing.attendee_id);
        let number = request
            .certificate_number
            .clone()
            .unwrap_or(existing.certificate_number);

        let updated = self.db.certificates.update(id, request).await.map_err(|e| {
            map_unique_violation(e, event_id, attendee_id, number)
        })?;

        self.details_of(updated.id).await
    }

    /// Delete a certificate
    pub async fn delete(&self, caller: Option<&AuthContext>, id: i64) -> Result<()> {
        require_caller(caller)?;

        self.db
            .certificates
            .find_by_id(id)
            .await?
            .ok_or(AttendHubError::CertificateNotFound { certificate_id: id })?;

        self.db.certificates.delete(id).await?;

        Ok(())
    }

    /// Issue a certificate for an attendee of an event, generating the
    /// number. Idempotent: an existing certificate for the pair is returned
    /// as-is instead of failing.
    pub async fn issue(
        &self,
        caller: Option<&AuthContext>,
        event_id: i64,
        attendee_id: i64,
    ) -> Result<CertificateResponse> {
        let caller = require_caller(caller)?;
        debug!(
            caller_id = caller.user_id,
            event_id = event_id,
            attendee_id = attendee_id,
            "Issuing certificate"
        );

        self.ensure_references(event_id, attendee_id).await?;

        if let Some(existing) = self
            .db
            .certificates
            .find_by_event_and_attendee(event_id, attendee_id)
            .await?
        {
            return self.details_of(existing.id).await;
        }

        let certificate = self
            .insert(CreateCertificateRequest {
                event_id,
                attendee_id,
                certificate_number: self.numbers.generate(),
            })
            .await?;
        logging::log_certificate_issued(
            certificate.id,
            event_id,
            attendee_id,
            &certificate.certificate_number,
        );

        self.details_of(certificate.id).await
    }

    /// Verify that both referenced records exist and belong together
    async fn ensure_references(&self, event_id: i64, attendee_id: i64) -> Result<()> {
        self.db
            .events
            .find_by_id(event_id)
            .await?
            .ok_or(AttendHubError::EventNotFound { event_id })?;

        let attendee = self
            .db
            .attendees
            .find_by_id(attendee_id)
            .await?
            .ok_or(AttendHubError::AttendeeNotFound { attendee_id })?;

        if attendee.event_id != event_id {
            return Err(AttendHubError::Validation(format!(
                "attendee {attendee_id} is not registered for event {event_id}"
            )));
        }

        Ok(())
    }

    async fn insert(&self, request: CreateCertificateRequest) -> Result<crate::models::Certificate> {
        let event_id = request.event_id;
        let attendee_id = request.attendee_id;
        let number = request.certificate_number.clone();

        self.db
            .certificates
            .create(request)
            .await
            .map_err(|e| map_unique_violation(e, event_id, attendee_id, number))
    }

    async fn details_of(&self, id: i64) -> Result<CertificateResponse> {
        let details = self
            .db
            .certificates
            .find_details(id)
            .await?
            .ok_or(AttendHubError::CertificateNotFound { certificate_id: id })?;

        Ok(CertificateSerializer::serialize(&details))
    }
}

fn map_unique_violation(
    err: AttendHubError,
    event_id: i64,
    attendee_id: i64,
    certificate_number: String,
) -> AttendHubError {
    if err.violates_constraint(NUMBER_UNIQUE) {
        AttendHubError::DuplicateCertificateNumber { certificate_number }
    } else if err.violates_constraint(EVENT_ATTENDEE_UNIQUE) {
        AttendHubError::DuplicateCertificate { event_id, attendee_id }
    } else {
        err
    }
}
