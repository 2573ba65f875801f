//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the AttendHub application.

use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::Result;

/// Initialize logging based on configuration
///
/// The returned guard must stay alive for the duration of the process,
/// otherwise buffered file output is lost.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "attendhub.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event management actions with structured data
pub fn log_event_action(event_id: i64, action: &str, caller_id: i64) {
    info!(
        event_id = event_id,
        action = action,
        caller_id = caller_id,
        "Event action performed"
    );
}

/// Log attendee check-ins
pub fn log_check_in(attendee_id: i64, event_id: i64, caller_id: i64) {
    info!(
        attendee_id = attendee_id,
        event_id = event_id,
        caller_id = caller_id,
        "Attendee checked in"
    );
}

/// Log certificate issuance
pub fn log_certificate_issued(certificate_id: i64, event_id: i64, attendee_id: i64, certificate_number: &str) {
    info!(
        certificate_id = certificate_id,
        event_id = event_id,
        attendee_id = attendee_id,
        certificate_number = certificate_number,
        "Certificate issued"
    );
}
