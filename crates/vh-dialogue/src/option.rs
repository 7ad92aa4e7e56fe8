//! Dialogue options and option sets.

use serde::{Deserialize, Serialize};

use crate::metadata::{SkillCheckDirective, parse_directive};

/// Identity of an option within one offered set.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct OptionId(
    /// Zero-based index the engine assigned within the offered set.
    pub u32,
);

impl std::fmt::Display for OptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "option #{}", self.0)
    }
}

/// One selectable line offered to the player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogueOption {
    /// Stable identity within the offered set.
    pub id: OptionId,
    /// Display text.
    pub text: String,
    /// Whether the engine considers this option currently available.
    pub is_available: bool,
    /// Host hint: highlight this candidate first.
    pub pre_highlighted: bool,
    /// Raw metadata tags attached by the script.
    pub tags: Vec<String>,
}

impl DialogueOption {
    /// Create an available, unhighlighted option with no tags.
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id: OptionId(id),
            text: text.into(),
            is_available: true,
            pre_highlighted: false,
            tags: Vec::new(),
        }
    }

    /// Attach a metadata tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Mark the option unavailable.
    pub fn unavailable(mut self) -> Self {
        self.is_available = false;
        self
    }

    /// Flag the option as pre-highlighted.
    pub fn highlighted(mut self) -> Self {
        self.pre_highlighted = true;
        self
    }

    /// The skill-check directive embedded in this option's tags, if any.
    pub fn directive(&self) -> Option<SkillCheckDirective> {
        parse_directive(&self.tags)
    }
}

/// An ordered set of options presented atomically.
///
/// Exactly one member resolves as the outcome of a presentation, or the
/// whole set is cancelled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionSet {
    options: Vec<DialogueOption>,
}

impl OptionSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an option.
    pub fn with_option(mut self, option: DialogueOption) -> Self {
        self.options.push(option);
        self
    }

    /// The options in presentation order.
    pub fn options(&self) -> &[DialogueOption] {
        &self.options
    }

    /// Iterate the options in presentation order.
    pub fn iter(&self) -> std::slice::Iter<'_, DialogueOption> {
        self.options.iter()
    }

    /// Number of options in the set.
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl FromIterator<DialogueOption> for OptionSet {
    fn from_iter<T: IntoIterator<Item = DialogueOption>>(iter: T) -> Self {
        Self {
            options: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_defaults() {
        let option = DialogueOption::new(0, "Press him on the ledger.");
        assert!(option.is_available);
        assert!(!option.pre_highlighted);
        assert!(option.tags.is_empty());
        assert_eq!(option.directive(), None);
    }

    #[test]
    fn directive_from_tags() {
        let option =
            DialogueOption::new(1, "[Willpower] Stare him down.").with_tag("skillcheck:Willpower:14");
        let directive = option.directive().unwrap();
        assert_eq!(directive.stat, "Willpower");
        assert_eq!(directive.difficulty, 14);
    }

    #[test]
    fn set_preserves_order() {
        let set: OptionSet = (0..3)
            .map(|i| DialogueOption::new(i, format!("choice {i}")))
            .collect();
        assert_eq!(set.len(), 3);
        let ids: Vec<u32> = set.iter().map(|o| o.id.0).collect();
        assert_eq!(ids, vec![0, 1, 2]);
    }
}
