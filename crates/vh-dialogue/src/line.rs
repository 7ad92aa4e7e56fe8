//! Narration lines retained for re-display.

use serde::{Deserialize, Serialize};

/// The most recently shown narration line.
///
/// The presenter keeps one of these purely so the host can re-display
/// it beside an option set; last write wins and nothing else depends on
/// it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrationLine {
    /// Speaking character, if the line has one.
    pub speaker: Option<String>,
    /// Full line text.
    pub text: String,
    /// Byte offset of a truncation marker: when set, re-display shows
    /// only the text from this position, prefixed with an ellipsis.
    pub truncate_from: Option<usize>,
}

impl NarrationLine {
    /// Create a line with no speaker and no truncation marker.
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            speaker: None,
            text: text.into(),
            truncate_from: None,
        }
    }

    /// Set the speaking character.
    pub fn with_speaker(mut self, speaker: impl Into<String>) -> Self {
        self.speaker = Some(speaker.into());
        self
    }

    /// Set the truncation marker position.
    pub fn with_truncation(mut self, position: usize) -> Self {
        self.truncate_from = Some(position);
        self
    }

    /// The text as re-displayed beside an option set.
    ///
    /// An out-of-bounds or mid-character marker is ignored and the full
    /// text is returned.
    pub fn display_text(&self) -> String {
        match self.truncate_from.and_then(|pos| self.text.get(pos..)) {
            Some(suffix) => format!("...{suffix}"),
            None => self.text.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untruncated_line() {
        let line = NarrationLine::new("State your name for the record.");
        assert_eq!(line.display_text(), "State your name for the record.");
    }

    #[test]
    fn truncated_line() {
        let line = NarrationLine::new("He sighs. Fine. Ask your questions.").with_truncation(10);
        assert_eq!(line.display_text(), "...Fine. Ask your questions.");
    }

    #[test]
    fn out_of_bounds_marker_ignored() {
        let line = NarrationLine::new("Short.").with_truncation(99);
        assert_eq!(line.display_text(), "Short.");
    }

    #[test]
    fn speaker_is_carried() {
        let line = NarrationLine::new("Sit down.").with_speaker("Inspector Brandt");
        assert_eq!(line.speaker.as_deref(), Some("Inspector Brandt"));
    }
}
