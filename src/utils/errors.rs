//! Error handling for AttendHub
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for AttendHub application
#[derive(Error, Debug)]
pub enum AttendHubError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Authentication required")]
    AuthenticationRequired,

    #[error("Event not found: {event_id}")]
    EventNotFound { event_id: i64 },

    #[error("Attendee not found: {attendee_id}")]
    AttendeeNotFound { attendee_id: i64 },

    #[error("Certificate not found: {certificate_id}")]
    CertificateNotFound { certificate_id: i64 },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Attendee with email {email} is already registered for event {event_id}")]
    DuplicateRegistration { event_id: i64, email: String },

    #[error("Certificate number already in use: {certificate_number}")]
    DuplicateCertificateNumber { certificate_number: String },

    #[error("Attendee {attendee_id} already holds a certificate for event {event_id}")]
    DuplicateCertificate { event_id: i64, attendee_id: i64 },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for AttendHub operations
pub type Result<T> = std::result::Result<T, AttendHubError>;

/// Caller-facing classification of an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AuthenticationRequired,
    NotFound,
    ValidationFailed,
    Internal,
}

impl AttendHubError {
    /// Classify the error for the surrounding request layer
    pub fn kind(&self) -> ErrorKind {
        match self {
            AttendHubError::AuthenticationRequired => ErrorKind::AuthenticationRequired,
            AttendHubError::EventNotFound { .. }
            | AttendHubError::AttendeeNotFound { .. }
            | AttendHubError::CertificateNotFound { .. } => ErrorKind::NotFound,
            AttendHubError::Validation(_)
            | AttendHubError::DuplicateRegistration { .. }
            | AttendHubError::DuplicateCertificateNumber { .. }
            | AttendHubError::DuplicateCertificate { .. } => ErrorKind::ValidationFailed,
            AttendHubError::Database(_)
            | AttendHubError::Migration(_)
            | AttendHubError::Config(_)
            | AttendHubError::Serialization(_)
            | AttendHubError::Io(_) => ErrorKind::Internal,
        }
    }

    /// Check if the error was caused by a unique-constraint violation
    /// on the given constraint name
    pub fn violates_constraint(&self, constraint: &str) -> bool {
        if let AttendHubError::Database(sqlx::Error::Database(db_err)) = self {
            return db_err.is_unique_violation() && db_err.constraint() == Some(constraint);
        }
        false
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::AuthenticationRequired => write!(f, "AUTHENTICATION_REQUIRED"),
            ErrorKind::NotFound => write!(f, "NOT_FOUND"),
            ErrorKind::ValidationFailed => write!(f, "VALIDATION_FAILED"),
            ErrorKind::Internal => write!(f, "INTERNAL"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_classification() {
        assert_eq!(
            AttendHubError::AuthenticationRequired.kind(),
            ErrorKind::AuthenticationRequired
        );
        assert_eq!(
            AttendHubError::EventNotFound { event_id: 7 }.kind(),
            ErrorKind::NotFound
        );
        assert_eq!(
            AttendHubError::Validation("name is required".to_string()).kind(),
            ErrorKind::ValidationFailed
        );
        assert_eq!(
            AttendHubError::DuplicateRegistration {
                event_id: 1,
                email: "a@x.com".to_string()
            }
            .kind(),
            ErrorKind::ValidationFailed
        );
        assert_eq!(
            AttendHubError::Config("missing url".to_string()).kind(),
            ErrorKind::Internal
        );
    }

    #[test]
    fn test_error_display() {
        let err = AttendHubError::DuplicateCertificateNumber {
            certificate_number: "CERT-001".to_string(),
        };
        assert_eq!(err.to_string(), "Certificate number already in use: CERT-001");
        assert_eq!(ErrorKind::ValidationFailed.to_string(), "VALIDATION_FAILED");
    }
}
