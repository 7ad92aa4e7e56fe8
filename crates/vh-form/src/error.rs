//! Error types for the infraction form.

use thiserror::Error;

/// Result type for form operations.
pub type FormResult<T> = Result<T, FormError>;

/// Errors that can occur while working the form.
#[derive(Debug, Error)]
pub enum FormError {
    /// Stamp attempted before every required field was filled.
    #[error("form incomplete: missing {}", missing.join(", "))]
    Incomplete {
        /// Human-readable names of the unfilled fields.
        missing: Vec<&'static str>,
    },

    /// Mutation or stamp attempted on an already-submitted form.
    #[error("form already submitted")]
    AlreadySubmitted,

    /// The owner dropped the record channel; the submission has nowhere
    /// to go.
    #[error("record channel closed")]
    ChannelClosed,
}
