//! Certificate wire-shape mapper

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use crate::models::certificate::{
    CertificateDetails, CreateCertificateRequest, UpdateCertificateRequest,
};
use crate::utils::errors::{AttendHubError, Result};

/// Wire representation of a certificate
///
/// `event_name` and `attendee_name` are denormalized from the related
/// records for display convenience.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateResponse {
    pub id: i64,
    pub event_id: i64,
    pub event_name: String,
    pub attendee_id: i64,
    pub attendee_name: String,
    pub certificate_number: String,
    pub issued_date: DateTime<Utc>,
}

/// Client payload for creating a certificate; the issuance date is server-assigned
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificatePayload {
    pub event_id: i64,
    pub attendee_id: i64,
    pub certificate_number: String,
}

/// Client payload for a full or partial certificate update
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CertificatePatch {
    pub event_id: Option<i64>,
    pub attendee_id: Option<i64>,
    pub certificate_number: Option<String>,
}

pub struct CertificateSerializer;

impl CertificateSerializer {
    pub fn serialize(details: &CertificateDetails) -> CertificateResponse {
        CertificateResponse {
            id: details.id,
            event_id: details.event_id,
            event_name: details.event_name.clone(),
            attendee_id: details.attendee_id,
            attendee_name: format!(
                "{} {}",
                details.attendee_first_name, details.attendee_last_name
            ),
            certificate_number: details.certificate_number.clone(),
            issued_date: details.issued_date,
        }
    }

    pub fn validate_create(payload: CertificatePayload) -> Result<CreateCertificateRequest> {
        let certificate_number = validate_number(&payload.certificate_number)?;

        Ok(CreateCertificateRequest {
            event_id: payload.event_id,
            attendee_id: payload.attendee_id,
            certificate_number,
        })
    }

    pub fn validate_update(patch: CertificatePatch) -> Result<UpdateCertificateRequest> {
        let certificate_number = match patch.certificate_number {
            Some(number) => Some(validate_number(&number)?),
            None => None,
        };

        Ok(UpdateCertificateRequest {
            event_id: patch.event_id,
            attendee_id: patch.attendee_id,
            certificate_number,
        })
    }
}

fn validate_number(number: &str) -> Result<String> {
    let trimmed = number.trim();
    if trimmed.is_empty() {
        return Err(AttendHubError::Validation(
            "certificate_number is required".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_denormalizes_names() {
        let details = CertificateDetails {
            id: 3,
            event_id: 1,
            attendee_id: 2,
            certificate_number: "CERT-001".to_string(),
            issued_date: Utc::now(),
            event_name: "Rust Workshop".to_string(),
            attendee_first_name: "Ada".to_string(),
            attendee_last_name: "Lovelace".to_string(),
        };
        let response = CertificateSerializer::serialize(&details);
        assert_eq!(response.event_name, "Rust Workshop");
        assert_eq!(response.attendee_name, "Ada Lovelace");
    }

    #[test]
    fn test_create_trims_number() {
        let request = CertificateSerializer::validate_create(CertificatePayload {
            event_id: 1,
            attendee_id: 2,
            certificate_number: " CERT-001 ".to_string(),
        })
        .unwrap();
        assert_eq!(request.certificate_number, "CERT-001");
    }

    #[test]
    fn test_create_rejects_blank_number() {
        let result = CertificateSerializer::validate_create(CertificatePayload {
            event_id: 1,
            attendee_id: 2,
            certificate_number: "  ".to_string(),
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_update_passes_through_references() {
        let request = CertificateSerializer::validate_update(CertificatePatch {
            event_id: Some(9),
            attendee_id: None,
            certificate_number: None,
        })
        .unwrap();
        assert_eq!(request.event_id, Some(9));
        assert!(request.certificate_number.is_none());
    }
}
