//! Certificate number generation
//!
//! Generated numbers take the form `{prefix}-{timestamp}-{suffix}`: a
//! configured prefix, a second-resolution UTC timestamp, and a random
//! alphanumeric suffix. Global uniqueness is still enforced by the store;
//! the generator only makes collisions unlikely.

use chrono::Utc;
use rand::Rng;
use crate::config::CertificateConfig;

const SUFFIX_LEN: usize = 6;
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

#[derive(Debug, Clone)]
pub struct CertificateNumberGenerator {
    prefix: String,
}

impl CertificateNumberGenerator {
    pub fn new(config: &CertificateConfig) -> Self {
        Self {
            prefix: config.number_prefix.clone(),
        }
    }

    /// Generate a fresh certificate number
    pub fn generate(&self) -> String {
        let timestamp = Utc::now().format("%Y%m%d%H%M%S");
        let mut rng = rand::thread_rng();
        let suffix: String = (0..SUFFIX_LEN)
            .map(|_| {
                let idx = rng.gen_range(0..SUFFIX_CHARSET.len());
                SUFFIX_CHARSET[idx] as char
            })
            .collect();

        format!("{}-{}-{}", self.prefix, timestamp, suffix)
    }
}
