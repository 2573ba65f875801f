//! Request handlers module
//!
//! One collection handler per record domain. A generic routing layer maps
//! collection paths onto these handlers; every operation takes the
//! authenticated caller as an explicit parameter.

pub mod events;
pub mod attendees;
pub mod certificates;

pub use events::EventsHandler;
pub use attendees::AttendeesHandler;
pub use certificates::CertificatesHandler;

use crate::config::Settings;
use crate::database::DatabaseService;

/// Pagination window for unfiltered list operations
#[derive(Debug, Clone, Copy)]
pub struct Page {
    pub limit: i64,
    pub offset: i64,
}

impl Default for Page {
    fn default() -> Self {
        Self {
            limit: 50,
            offset: 0,
        }
    }
}

/// Factory bundling one handler per record domain
#[derive(Debug, Clone)]
pub struct Handlers {
    pub events: EventsHandler,
    pub attendees: AttendeesHandler,
    pub certificates: CertificatesHandler,
}

impl Handlers {
    pub fn new(db: DatabaseService, settings: Settings) -> Self {
        Self {
            events: EventsHandler::new(db.clone(), settings.clone()),
            attendees: AttendeesHandler::new(db.clone()),
            certificates: CertificatesHandler::new(db, &settings),
        }
    }
}
