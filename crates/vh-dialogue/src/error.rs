//! Error types for the dialogue runtime.
//!
//! Only two things are errors here: configuration problems that make a
//! cycle unrenderable, and failures reported by the external engine.
//! Unknown stats and variables warn and substitute defaults, and a
//! cancelled presentation resolves to a sentinel value; none of those
//! pass through this type.

use thiserror::Error;

use crate::presenter::TemplateKind;

/// Result type for dialogue operations.
pub type DialogueResult<T> = Result<T, DialogueError>;

/// Errors that can occur in the dialogue runtime.
#[derive(Debug, Error)]
pub enum DialogueError {
    /// No view template is configured for a required classification, so
    /// the cycle cannot render any option. Fatal to the cycle.
    #[error("no view template configured for {0} options")]
    MissingTemplate(TemplateKind),

    /// The engine does not know the requested dialogue node.
    #[error("unknown dialogue node: {0}")]
    UnknownNode(String),

    /// The engine failed to start or resume dialogue.
    #[error("dialogue engine error: {0}")]
    Engine(String),
}
