//! Log-entry change construction

use chrono::Utc;

use crate::change::Change;
use crate::error::UserFacingError;

/// Build the log-entry change recording `error` in store state.
///
/// The timestamp is taken here, at the failure site, so the reducer stays
/// pure.
pub fn log_error_change(error: &UserFacingError) -> Change {
    Change::LogError {
        error: error.clone(),
        logged_at: Utc::now().timestamp(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_error_change_carries_record_and_timestamp() {
        let error = UserFacingError::new("server.unreachable", "Cannot reach the server.");

        match log_error_change(&error) {
            Change::LogError {
                error: recorded,
                logged_at,
            } => {
                assert_eq!(recorded, error);
                assert!(logged_at > 0);
            }
            other => panic!("expected LogError, got {:?}", other),
        }
    }
}
