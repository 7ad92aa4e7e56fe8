//! Infraction paperwork for Verhoer.
//!
//! A suspect's infraction form is filled in from independent selections
//! during the interview and stamped when complete. The form is a small
//! cyclic state machine (`Empty → PartiallyFilled → Complete →
//! Submitted → Empty`) that emits exactly one [`InfractionRecord`] per
//! submission through a channel to its owner.

pub mod error;
pub mod form;
pub mod record;

pub use error::{FormError, FormResult};
pub use form::{FormPhase, InfractionForm};
pub use record::{InfractionRecord, Severity, Violation};
