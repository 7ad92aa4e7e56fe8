//! Error types for shift orchestration.

use thiserror::Error;

/// Result type for shift operations.
pub type ShiftResult<T> = Result<T, ShiftError>;

/// Errors that can occur while running a shift.
#[derive(Debug, Error)]
pub enum ShiftError {
    /// A script invoked a command this layer does not provide. The
    /// engine owns the script, so this is a script bug, not a lookup
    /// miss to paper over.
    #[error("unknown script command: {0}")]
    UnknownCommand(String),

    /// A dialogue-layer failure during dispatch or routing.
    #[error(transparent)]
    Dialogue(#[from] vh_dialogue::DialogueError),

    /// A form failure during dispatch.
    #[error(transparent)]
    Form(#[from] vh_form::FormError),
}
