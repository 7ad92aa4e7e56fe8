//! Skill check evaluation.
//!
//! A check resolves a stat, draws one roll, compares the total against
//! a difficulty, records the numbers as dialogue variables, and, when
//! both branch nodes are given, routes dialogue to the pass or fail
//! node. A check is evaluated exactly once per invocation and is not
//! idempotent: invoking again draws a new roll.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use vh_mechanics::{CheckResult, resolve_check};

use crate::context::DialogueContext;
use crate::engine::DialogueRuntime;
use crate::error::DialogueResult;
use crate::router;
use crate::variable::{VariableStore, keys};

/// One skill check as requested by a script.
///
/// Transient: built per check and discarded after branching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCheckRequest {
    /// Stat name as the script wrote it.
    pub stat: String,
    /// Difficulty the total must meet or beat.
    pub difficulty: i32,
    /// Node to resume at on success. Empty disables branching.
    pub pass_node: String,
    /// Node to resume at on failure. Empty disables branching.
    pub fail_node: String,
}

impl SkillCheckRequest {
    /// A branching check: dialogue resumes at one of the two nodes.
    pub fn branching(
        stat: impl Into<String>,
        difficulty: i32,
        pass_node: impl Into<String>,
        fail_node: impl Into<String>,
    ) -> Self {
        Self {
            stat: stat.into(),
            difficulty,
            pass_node: pass_node.into(),
            fail_node: fail_node.into(),
        }
    }

    /// A check-only request: results land in variables, no branching.
    pub fn check_only(stat: impl Into<String>, difficulty: i32) -> Self {
        Self {
            stat: stat.into(),
            difficulty,
            pass_node: String::new(),
            fail_node: String::new(),
        }
    }

    /// Whether both branch nodes are present.
    pub fn is_branching(&self) -> bool {
        !self.pass_node.is_empty() && !self.fail_node.is_empty()
    }
}

/// Evaluate a skill check against the context, then branch if requested.
///
/// Unknown stat names resolve to 0 with a warning. The roll, total, and
/// success flag are written to the variable store under the fixed
/// [`keys`], unconditionally overwriting prior values.
pub fn evaluate(
    ctx: &mut DialogueContext,
    request: &SkillCheckRequest,
    runtime: &mut dyn DialogueRuntime,
) -> DialogueResult<CheckResult> {
    let stat_value = match ctx.stats.lookup(&request.stat) {
        Some(value) => value,
        None => {
            warn!(stat = %request.stat, "unknown stat in skill check, using 0");
            0
        }
    };

    let roll = ctx.draw_roll();
    let result = resolve_check(roll, stat_value, request.difficulty);

    ctx.variables.set(keys::LAST_ROLL, result.roll);
    ctx.variables.set(keys::LAST_TOTAL, result.total);
    ctx.variables.set(keys::LAST_CHECK_SUCCESS, result.success);

    debug!(
        stat = %request.stat,
        difficulty = request.difficulty,
        %result,
        "skill check resolved"
    );

    if request.is_branching() {
        router::route_outcome(runtime, result.success, &request.pass_node, &request.fail_node)?;
    }

    Ok(result)
}

/// Inline roll for dialogue conditionals: returns 1 on success, 0 on
/// failure.
///
/// Stateless with respect to dialogue state: no variables are written,
/// and the caller supplies the stat value directly.
pub fn roll_stat(ctx: &mut DialogueContext, stat_value: f64, difficulty: f64) -> i32 {
    let total = f64::from(ctx.draw_roll()) + stat_value;
    i32::from(total >= difficulty)
}

/// Debug introspection: log a variable's value and return it rendered.
///
/// Never mutates state. Unknown names warn and render as empty.
pub fn print_variable(store: &VariableStore, name: &str) -> String {
    match store.get(name) {
        Some(value) => {
            debug!(name, %value, "variable");
            value.to_string()
        }
        None => {
            warn!(name, "unknown variable");
            String::new()
        }
    }
}
