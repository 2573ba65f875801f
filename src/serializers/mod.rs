//! Wire-shape mappers module
//!
//! One mapper per record domain: renders persisted records (plus derived
//! read-only fields) for callers and validates inbound payloads.

pub mod event;
pub mod attendee;
pub mod certificate;

// Re-export commonly used serializer types
pub use event::{EventSerializer, EventResponse, EventPayload, EventPatch};
pub use attendee::{AttendeeSerializer, AttendeeResponse, AttendeePayload, AttendeePatch};
pub use certificate::{
    CertificateSerializer, CertificateResponse, CertificatePayload, CertificatePatch,
};
