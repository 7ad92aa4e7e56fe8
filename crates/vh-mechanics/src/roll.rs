//! Roll sources.
//!
//! A skill check draws exactly one roll from an inclusive range. The
//! [`RollSource`] trait is the seam for determinism: production uses
//! [`StdRoller`], tests and replays inject a [`SequenceRoller`] or a
//! seeded rng.

use std::collections::VecDeque;

use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::error::{MechanicsError, MechanicsResult};

/// An inclusive range a roll is drawn from.
///
/// The default is 1..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RollRange {
    min: i32,
    max: i32,
}

impl Default for RollRange {
    fn default() -> Self {
        Self { min: 1, max: 20 }
    }
}

impl RollRange {
    /// Create a range, rejecting one whose minimum exceeds its maximum.
    pub fn new(min: i32, max: i32) -> MechanicsResult<Self> {
        if min > max {
            return Err(MechanicsError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// The inclusive lower bound.
    pub fn min(&self) -> i32 {
        self.min
    }

    /// The inclusive upper bound.
    pub fn max(&self) -> i32 {
        self.max
    }

    /// Whether a value lies within the range.
    pub fn contains(&self, value: i32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl std::fmt::Display for RollRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.min, self.max)
    }
}

/// A source of rolls.
///
/// Implementations must return a value inside the given range for every
/// call.
pub trait RollSource: Send {
    /// Draw one roll uniformly from the inclusive range.
    fn roll(&mut self, range: RollRange) -> i32;
}

/// Production roll source backed by [`StdRng`].
#[derive(Debug)]
pub struct StdRoller {
    rng: StdRng,
}

impl StdRoller {
    /// Create a roller seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Create a roller with a fixed seed for reproducible rolls.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for StdRoller {
    fn default() -> Self {
        Self::new()
    }
}

impl RollSource for StdRoller {
    fn roll(&mut self, range: RollRange) -> i32 {
        self.rng.random_range(range.min()..=range.max())
    }
}

/// Scripted roll source for tests and replays.
///
/// Yields its values in order, clamped into the requested range; once
/// exhausted it returns the range minimum.
#[derive(Debug, Clone, Default)]
pub struct SequenceRoller {
    values: VecDeque<i32>,
}

impl SequenceRoller {
    /// Create a roller that will yield the given values in order.
    pub fn new(values: impl IntoIterator<Item = i32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// How many scripted values remain.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl RollSource for SequenceRoller {
    fn roll(&mut self, range: RollRange) -> i32 {
        let value = self.values.pop_front().unwrap_or(range.min());
        value.clamp(range.min(), range.max())
    }
}
