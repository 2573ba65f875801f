//! Authenticated caller context
//!
//! Authentication itself is delegated to an external identity provider; the
//! surrounding request layer resolves the caller and passes it explicitly
//! through every handler call. There is no ambient/global caller state.

use serde::{Deserialize, Serialize};
use crate::utils::errors::{AttendHubError, Result};

/// Identity of the authenticated caller, as supplied by the identity provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthContext {
    pub user_id: i64,
    pub full_name: String,
}

impl AuthContext {
    pub fn new(user_id: i64, full_name: impl Into<String>) -> Self {
        Self {
            user_id,
            full_name: full_name.into(),
        }
    }
}

/// Reject unauthenticated requests
///
/// Every handler operation starts here; a missing caller surfaces as
/// `AuthenticationRequired` rather than being defaulted.
pub fn require_caller(caller: Option<&AuthContext>) -> Result<&AuthContext> {
    caller.ok_or(AttendHubError::AuthenticationRequired)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_require_caller_passes_identity_through() {
        let ctx = AuthContext::new(7, "Pat Organizer");
        let caller = require_caller(Some(&ctx)).unwrap();
        assert_eq!(caller.user_id, 7);
        assert_eq!(caller.full_name, "Pat Organizer");
    }

    #[test]
    fn test_require_caller_rejects_anonymous() {
        let err = require_caller(None).unwrap_err();
        assert_matches!(err, AttendHubError::AuthenticationRequired);
    }
}
