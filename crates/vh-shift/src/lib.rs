//! Interrogation shift orchestration for Verhoer.
//!
//! A shift is an ordered queue of suspects. Starting a suspect points
//! the dialogue engine at their interview node and resets the
//! per-suspect dialogue variables; filing their infraction form stops
//! the dialogue, waits a settle delay, resets the form, and brings in
//! the next suspect. Scripts reach back into the session through the
//! command surface in [`commands`].

pub mod commands;
pub mod error;
pub mod shift;
pub mod suspect;

pub use commands::dispatch;
pub use error::{ShiftError, ShiftResult};
pub use shift::{ShiftConfig, ShiftEvent, ShiftProgress, ShiftRunner, vars};
pub use suspect::Suspect;
