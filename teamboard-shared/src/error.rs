/// Error types for the synchronization layer
///
/// The stores distinguish exactly two failure classes:
///
/// - [`SyncError::Validation`]: a local precondition was not met (no signed-in
///   user, no bound team, a blank required field). Store operations treat
///   these as silent no-ops; they are never shown to the user and never
///   returned to consumers.
/// - [`SyncError::Remote`]: the remote store call itself failed. These are
///   surfaced through the notification sink with the backend's message and
///   are likewise never propagated to the caller as an unhandled fault.
///
/// No operation retries automatically; every remote call is a single attempt.
///
/// # Example
///
/// ```
/// use teamboard_shared::error::SyncError;
///
/// let err = SyncError::Remote("connection reset".to_string());
/// assert!(err.is_remote());
/// assert_eq!(err.to_string(), "remote store error: connection reset");
/// ```

use thiserror::Error;

/// Result type alias used throughout the synchronization layer
pub type SyncResult<T> = Result<T, SyncError>;

/// Unified error type for store operations
#[derive(Debug, Clone, Error)]
pub enum SyncError {
    /// A local precondition was not met; the operation is a silent no-op
    #[error("precondition not met: {0}")]
    Validation(&'static str),

    /// The remote store reported a failure
    #[error("remote store error: {0}")]
    Remote(String),
}

impl SyncError {
    /// True for the silent-no-op class of errors
    pub fn is_validation(&self) -> bool {
        matches!(self, SyncError::Validation(_))
    }

    /// True for surfaced remote failures
    pub fn is_remote(&self) -> bool {
        matches!(self, SyncError::Remote(_))
    }

    /// The message shown in a user-visible notice
    ///
    /// Validation errors are never notified, so this is only meaningful for
    /// the remote variant.
    pub fn notice_message(&self) -> String {
        match self {
            SyncError::Validation(what) => what.to_string(),
            SyncError::Remote(message) => message.clone(),
        }
    }
}

/// Database failures are remote failures as far as the stores are concerned
impl From<sqlx::Error> for SyncError {
    fn from(err: sqlx::Error) -> Self {
        SyncError::Remote(err.to_string())
    }
}
