//! Shared dialogue state.
//!
//! One [`DialogueContext`] owns the player's stats, the variable store,
//! and the roll source. It is passed explicitly into the evaluator and
//! command dispatch rather than located through any ambient global, so
//! tests can build as many independent contexts as they like.

use vh_mechanics::{RollRange, RollSource, StatBlock, StdRoller};

use crate::variable::VariableStore;

/// Stats, variables, and randomness for one dialogue session.
pub struct DialogueContext {
    /// The player's stat values.
    pub stats: StatBlock,
    /// The dialogue variable store.
    pub variables: VariableStore,
    roll_range: RollRange,
    roller: Box<dyn RollSource>,
}

impl DialogueContext {
    /// Create a context with an OS-seeded roller and the default
    /// 1..=20 roll range.
    pub fn new(stats: StatBlock) -> Self {
        Self {
            stats,
            variables: VariableStore::new(),
            roll_range: RollRange::default(),
            roller: Box::new(StdRoller::new()),
        }
    }

    /// Create a context with a fixed seed for reproducible rolls.
    pub fn seeded(stats: StatBlock, seed: u64) -> Self {
        Self {
            stats,
            variables: VariableStore::new(),
            roll_range: RollRange::default(),
            roller: Box::new(StdRoller::seeded(seed)),
        }
    }

    /// Replace the roll range.
    pub fn with_roll_range(mut self, range: RollRange) -> Self {
        self.roll_range = range;
        self
    }

    /// Replace the roll source.
    pub fn with_roller(mut self, roller: Box<dyn RollSource>) -> Self {
        self.roller = roller;
        self
    }

    /// The configured roll range.
    pub fn roll_range(&self) -> RollRange {
        self.roll_range
    }

    /// Draw one roll from the configured range.
    pub fn draw_roll(&mut self) -> i32 {
        self.roller.roll(self.roll_range)
    }
}

#[cfg(test)]
mod tests {
    use vh_mechanics::SequenceRoller;

    use super::*;

    #[test]
    fn draws_come_from_injected_roller() {
        let mut ctx = DialogueContext::new(StatBlock::default())
            .with_roller(Box::new(SequenceRoller::new([12, 3])));
        assert_eq!(ctx.draw_roll(), 12);
        assert_eq!(ctx.draw_roll(), 3);
    }

    #[test]
    fn custom_range_applies() {
        let range = RollRange::new(1, 6).unwrap();
        let mut ctx = DialogueContext::seeded(StatBlock::default(), 5).with_roll_range(range);
        for _ in 0..50 {
            assert!(range.contains(ctx.draw_roll()));
        }
    }
}
