//! Skill check resolution.
//!
//! A check adds one roll to a stat value and compares the total against
//! a difficulty. The comparison is non-strict: meeting the difficulty
//! exactly succeeds, so ties favor the player.

use serde::{Deserialize, Serialize};

/// The resolved numbers of a single skill check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResult {
    /// The roll that was drawn.
    pub roll: i32,
    /// The stat value that was added to it.
    pub stat_value: i32,
    /// roll + stat_value.
    pub total: i32,
    /// Whether the total met or beat the difficulty.
    pub success: bool,
}

/// Resolve a check from its parts.
pub fn resolve_check(roll: i32, stat_value: i32, difficulty: i32) -> CheckResult {
    let total = roll.saturating_add(stat_value);
    CheckResult {
        roll,
        stat_value,
        total,
        success: total >= difficulty,
    }
}

impl std::fmt::Display for CheckResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let verdict = if self.success { "success" } else { "failure" };
        write!(
            f,
            "{} + {} = {} ({verdict})",
            self.roll, self.stat_value, self.total
        )
    }
}
