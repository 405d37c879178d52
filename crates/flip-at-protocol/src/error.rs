//! Error types for the AT-command protocol.

use thiserror::Error;

/// Errors that can occur when working with the wire protocol.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// A `VALUES:` report did not carry five comma-separated integers.
    #[error("malformed raw-value report '{payload}': {reason}")]
    MalformedValues {
        /// Payload after the `VALUES:` prefix.
        payload: String,
        /// What was wrong with it.
        reason: String,
    },
}

/// Result type alias for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;
