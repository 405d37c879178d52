//! Error types for the slot engine.

use thiserror::Error;

/// Errors that can occur when storing, displaying or managing slots.
#[derive(Debug, Error)]
pub enum SlotError {
    /// A button is bound to a description the registry does not know.
    #[error("unknown command description '{0}'")]
    UnknownAction(String),

    /// A slot line could not be decoded; fatal to the current load.
    #[error("slot '{slot}': malformed line '{line}': {reason}")]
    MalformedLine {
        /// Name of the slot being displayed.
        slot: String,
        /// The offending line, verbatim.
        line: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Adding a slot beyond the configured maximum.
    #[error("maximum number of slots reached ({max})")]
    SlotLimit {
        /// The configured maximum.
        max: usize,
    },

    /// Deleting the sole remaining slot.
    #[error("one slot must stay active")]
    LastSlot,

    /// Profile file could not be read or written.
    #[error("profile i/o error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for slot operations.
pub type SlotResult<T> = Result<T, SlotError>;
