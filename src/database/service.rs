//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{DatabasePool, EventRepository, AttendeeRepository, CertificateRepository};

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub events: EventRepository,
    pub attendees: AttendeeRepository,
    pub certificates: CertificateRepository,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            events: EventRepository::new(pool.clone()),
            attendees: AttendeeRepository::new(pool.clone()),
            certificates: CertificateRepository::new(pool),
        }
    }
}
