//! The infraction form state machine.

use tokio::sync::mpsc;
use tracing::{debug, warn};

use crate::error::{FormError, FormResult};
use crate::record::{InfractionRecord, Severity, Violation};

/// Where the form is in its fill-and-stamp cycle.
///
/// The cycle is `Empty → PartiallyFilled → Complete → Submitted →
/// Empty` and is reusable across records. `Complete` is reached exactly
/// when the suspect name, a violation, and a severity all hold
/// simultaneously; the stamp is only enabled then.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// No field filled.
    Empty,
    /// Some, but not all, required fields filled.
    PartiallyFilled,
    /// Every required field filled; stamp enabled.
    Complete,
    /// Stamped and locked until reset.
    Submitted,
}

/// An infraction form under composition.
///
/// Selections arrive independently: the interview reveals the suspect's
/// name (a precondition-arming side input, not a phase of its own), and
/// the player confirms it onto the form and picks one violation and one
/// severity. Stamping a complete form emits exactly one
/// [`InfractionRecord`] through the channel handed out at construction,
/// locks the inputs, and leaves the form `Submitted` until its owner
/// resets it.
pub struct InfractionForm {
    case_id: String,
    armed_name: Option<String>,
    suspect_name: Option<String>,
    violation: Option<Violation>,
    severity: Option<Severity>,
    stamped: bool,
    locked: bool,
    records: mpsc::UnboundedSender<InfractionRecord>,
}

impl InfractionForm {
    /// Create a form and the receiving end of its record channel.
    pub fn new(case_id: impl Into<String>) -> (Self, mpsc::UnboundedReceiver<InfractionRecord>) {
        let (records, rx) = mpsc::unbounded_channel();
        let form = Self {
            case_id: case_id.into(),
            armed_name: None,
            suspect_name: None,
            violation: None,
            severity: None,
            stamped: false,
            locked: false,
            records,
        };
        (form, rx)
    }

    /// The current case identifier.
    pub fn case_id(&self) -> &str {
        &self.case_id
    }

    /// Replace the case identifier for the next record.
    pub fn set_case_id(&mut self, case_id: impl Into<String>) {
        self.case_id = case_id.into();
    }

    /// The current phase, derived from the filled fields.
    pub fn phase(&self) -> FormPhase {
        if self.locked {
            return FormPhase::Submitted;
        }
        let filled = [
            self.suspect_name.is_some(),
            self.violation.is_some(),
            self.severity.is_some(),
        ]
        .into_iter()
        .filter(|&f| f)
        .count();
        match filled {
            0 => FormPhase::Empty,
            3 => FormPhase::Complete,
            _ => FormPhase::PartiallyFilled,
        }
    }

    /// The confirmed suspect name, if any.
    pub fn suspect_name(&self) -> Option<&str> {
        self.suspect_name.as_deref()
    }

    /// The selected violation, if any.
    pub fn violation(&self) -> Option<Violation> {
        self.violation
    }

    /// The selected severity, if any.
    pub fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Whether the stamp is currently enabled.
    pub fn can_submit(&self) -> bool {
        self.phase() == FormPhase::Complete
    }

    /// Arm the name field with a revealed name.
    ///
    /// Triggered asynchronously by the interview; until confirmed, the
    /// name is not on the form. Revealing again overwrites the armed
    /// name and re-enables confirmation.
    pub fn reveal_name(&mut self, name: impl Into<String>) {
        if self.locked {
            warn!("name revealed on a submitted form, ignoring");
            return;
        }
        self.armed_name = Some(name.into());
    }

    /// Confirm the armed name onto the form.
    ///
    /// Returns `false` when no name is armed or the form is locked. The
    /// armed name is consumed, so a second confirmation is a no-op
    /// until the next reveal.
    pub fn confirm_name(&mut self) -> bool {
        if self.locked {
            return false;
        }
        match self.armed_name.take() {
            Some(name) => {
                self.suspect_name = Some(name);
                true
            }
            None => false,
        }
    }

    /// Select or deselect a violation category.
    ///
    /// The categories form a single-select group: selecting one
    /// deselects any sibling, and toggling the active one clears the
    /// field rather than leaving a stale value.
    pub fn toggle_violation(&mut self, violation: Violation) {
        if self.locked {
            return;
        }
        self.violation = if self.violation == Some(violation) {
            None
        } else {
            Some(violation)
        };
    }

    /// Select or deselect a severity level (single-select group).
    pub fn toggle_severity(&mut self, severity: Severity) {
        if self.locked {
            return;
        }
        self.severity = if self.severity == Some(severity) {
            None
        } else {
            Some(severity)
        };
    }

    /// Apply the stamp.
    ///
    /// On a complete form this emits exactly one record through the
    /// channel, locks every input, and moves the form to `Submitted`.
    /// On an incomplete form nothing changes and the missing fields are
    /// reported.
    pub fn stamp(&mut self) -> FormResult<()> {
        if self.locked {
            return Err(FormError::AlreadySubmitted);
        }

        let (Some(name), Some(violation), Some(severity)) =
            (self.suspect_name.clone(), self.violation, self.severity)
        else {
            let missing = self.missing_fields();
            warn!(missing = ?missing, "form incomplete");
            return Err(FormError::Incomplete { missing });
        };

        let record = InfractionRecord {
            case_id: self.case_id.clone(),
            suspect_name: name,
            violation,
            severity,
            stamped: true,
        };

        if let Ok(json) = serde_json::to_string(&record) {
            debug!(%json, "form submitted");
        }

        self.records
            .send(record)
            .map_err(|_| FormError::ChannelClosed)?;

        self.stamped = true;
        self.locked = true;
        Ok(())
    }

    /// Clear every field and unlock, re-arming the cycle for the next
    /// record.
    ///
    /// The owner calls this after the post-submission settle delay.
    pub fn reset(&mut self) {
        self.armed_name = None;
        self.suspect_name = None;
        self.violation = None;
        self.severity = None;
        self.stamped = false;
        self.locked = false;
    }

    fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.suspect_name.is_none() {
            missing.push("suspect name");
        }
        if self.violation.is_none() {
            missing.push("violation");
        }
        if self.severity.is_none() {
            missing.push("severity");
        }
        missing
    }
}
