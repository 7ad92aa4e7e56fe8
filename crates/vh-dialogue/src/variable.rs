//! Typed dialogue variables.
//!
//! Scripts read and write named variables of three types: booleans,
//! numbers, and strings. The store is last-write-wins with no
//! transaction semantics. Missing keys and type mismatches are ordinary
//! lookup misses: logged, then substituted with a safe default
//! (`false` / `0` / `""`), never fatal.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Well-known keys written by the skill check evaluator.
///
/// Each check unconditionally overwrites all three; no history is kept.
pub mod keys {
    /// The roll drawn by the most recent skill check.
    pub const LAST_ROLL: &str = "$last_roll";
    /// Roll plus stat value of the most recent skill check.
    pub const LAST_TOTAL: &str = "$last_total";
    /// Whether the most recent skill check succeeded.
    pub const LAST_CHECK_SUCCESS: &str = "$last_check_success";
}

/// A single dialogue variable value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Variable {
    /// A boolean flag.
    Bool(bool),
    /// A numeric value (scripts treat all numbers as floats).
    Number(f64),
    /// A text value.
    String(String),
}

impl std::fmt::Display for Variable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

impl From<bool> for Variable {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<f64> for Variable {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for Variable {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for Variable {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Variable {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Key/value store of dialogue variables.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VariableStore {
    values: HashMap<String, Variable>,
}

impl VariableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable, overwriting any prior value of any type.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<Variable>) {
        self.values.insert(name.into(), value.into());
    }

    /// The raw value of a variable, if present.
    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.values.get(name)
    }

    /// Whether a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    /// Read a boolean, substituting `false` on a miss or type mismatch.
    pub fn get_bool(&self, name: &str) -> bool {
        match self.get(name) {
            Some(Variable::Bool(b)) => *b,
            Some(other) => {
                warn!(name, value = %other, "variable is not a bool, substituting false");
                false
            }
            None => {
                warn!(name, "unknown variable, substituting false");
                false
            }
        }
    }

    /// Read a number, substituting `0.0` on a miss or type mismatch.
    pub fn get_number(&self, name: &str) -> f64 {
        match self.get(name) {
            Some(Variable::Number(n)) => *n,
            Some(other) => {
                warn!(name, value = %other, "variable is not a number, substituting 0");
                0.0
            }
            None => {
                warn!(name, "unknown variable, substituting 0");
                0.0
            }
        }
    }

    /// Read a string, substituting `""` on a miss or type mismatch.
    pub fn get_string(&self, name: &str) -> String {
        match self.get(name) {
            Some(Variable::String(s)) => s.clone(),
            Some(other) => {
                warn!(name, value = %other, "variable is not a string, substituting empty");
                String::new()
            }
            None => {
                warn!(name, "unknown variable, substituting empty");
                String::new()
            }
        }
    }

    /// Number of stored variables.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
