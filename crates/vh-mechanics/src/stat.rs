//! Character statistics.
//!
//! The player character has a small fixed set of stats. Scripts refer to
//! them by name, so lookup is case-insensitive; a [`StatBlock`] owns the
//! values and is the only place they live.

use serde::{Deserialize, Serialize};

/// Identifier for one of the player's statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatId {
    /// Reading people and putting them at ease.
    Empathy,
    /// Holding a line under pressure.
    Willpower,
    /// Spotting the inconsistency in a story.
    Insight,
}

impl StatId {
    /// Every stat, in display order.
    pub const ALL: [StatId; 3] = [StatId::Empathy, StatId::Willpower, StatId::Insight];

    /// The canonical display name of this stat.
    pub fn name(self) -> &'static str {
        match self {
            Self::Empathy => "Empathy",
            Self::Willpower => "Willpower",
            Self::Insight => "Insight",
        }
    }

    /// Parse a stat name as scripts write it.
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace;
    /// anything else returns `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "empathy" => Some(Self::Empathy),
            "willpower" => Some(Self::Willpower),
            "insight" => Some(Self::Insight),
            _ => None,
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Empathy => 0,
            Self::Willpower => 1,
            Self::Insight => 2,
        }
    }
}

impl std::fmt::Display for StatId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// The player's current stat values.
///
/// A fixed-size mapping from [`StatId`] to an integer score. Values are
/// mutated in place; nothing outside the block holds a copy that can go
/// stale beyond a single check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatBlock {
    values: [i32; 3],
}

impl Default for StatBlock {
    fn default() -> Self {
        Self { values: [5, 5, 5] }
    }
}

impl StatBlock {
    /// Create a stat block with explicit scores.
    pub fn new(empathy: i32, willpower: i32, insight: i32) -> Self {
        Self {
            values: [empathy, willpower, insight],
        }
    }

    /// The current value of a stat.
    pub fn get(&self, stat: StatId) -> i32 {
        self.values[stat.index()]
    }

    /// Overwrite a stat value.
    pub fn set(&mut self, stat: StatId, value: i32) {
        self.values[stat.index()] = value;
    }

    /// Adjust a stat by a signed delta.
    pub fn modify(&mut self, stat: StatId, delta: i32) {
        self.values[stat.index()] = self.values[stat.index()].saturating_add(delta);
    }

    /// Resolve a stat by script name.
    ///
    /// Returns `None` for names that match no stat; callers decide how
    /// to surface that (the dialogue layer warns and substitutes 0).
    pub fn lookup(&self, name: &str) -> Option<i32> {
        StatId::parse(name).map(|id| self.get(id))
    }
}
