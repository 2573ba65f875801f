//! Services module
//!
//! This module contains supporting services used by the request handlers

pub mod auth;
pub mod certificate;

// Re-export commonly used services
pub use auth::{AuthContext, require_caller};
pub use certificate::CertificateNumberGenerator;
