//! Branch routing.
//!
//! After a skill check resolves, dialogue resumes at the pass or fail
//! node. Routing is deterministic (same outcome, same target) and has
//! no retry logic; an unknown node is the engine's error and passes
//! through unchanged.

use tracing::debug;

use crate::engine::DialogueRuntime;
use crate::error::DialogueResult;

/// Resume dialogue at a node, stopping any running dialogue first.
pub fn resume_at(runtime: &mut dyn DialogueRuntime, node: &str) -> DialogueResult<()> {
    runtime.stop_dialogue();
    debug!(node, "resuming dialogue");
    runtime.start_dialogue(node)
}

/// Route a check outcome to its pass or fail node.
pub fn route_outcome(
    runtime: &mut dyn DialogueRuntime,
    success: bool,
    pass_node: &str,
    fail_node: &str,
) -> DialogueResult<()> {
    let node = if success { pass_node } else { fail_node };
    resume_at(runtime, node)
}
