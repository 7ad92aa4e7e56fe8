//! Error types for the mechanics crate.

/// Errors that can occur during mechanics operations.
#[derive(Debug, thiserror::Error)]
pub enum MechanicsError {
    /// A roll range whose minimum exceeds its maximum.
    #[error("invalid roll range: {min}..={max}")]
    InvalidRange {
        /// Lower bound of the rejected range.
        min: i32,
        /// Upper bound of the rejected range.
        max: i32,
    },
}

/// Convenience result type for mechanics operations.
pub type MechanicsResult<T> = Result<T, MechanicsError>;
