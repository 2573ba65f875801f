//! Shared test infrastructure
//!
//! This module provides test database management and payload builders used
//! by the integration test suites.

pub mod database_helper;
pub mod test_data;

pub use database_helper::TestDatabase;
pub use test_data::*;

/// Connect to the test database, or skip the calling test when neither
/// `TEST_DATABASE_URL` nor a container runtime is available.
pub async fn try_database() -> Option<TestDatabase> {
    match TestDatabase::new().await {
        Ok(db) => Some(db),
        Err(e) => {
            eprintln!("skipping: test database unavailable: {e}");
            None
        }
    }
}
