//! AttendHub event-attendance backend
//!
//! An administration backend for events, their attendees, check-in status
//! and certificate issuance. This library provides the record schemas,
//! wire-shape mappers and per-domain collection handlers; transport and
//! authentication are supplied by the surrounding infrastructure.

#![allow(non_snake_case)]

pub mod config;
pub mod database;
pub mod handlers;
pub mod models;
pub mod serializers;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{AttendHubError, ErrorKind, Result};

// Re-export main components for easy access
pub use database::DatabaseService;
pub use handlers::{Handlers, Page};
pub use services::AuthContext;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
