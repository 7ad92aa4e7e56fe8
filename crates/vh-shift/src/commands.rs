//! Script command dispatch.
//!
//! Dialogue scripts call back into the session by command name with
//! string arguments. Missing arguments on player-facing commands warn
//! and no-op; an unknown command name is an error, because the engine
//! owns the script and should hear about the bug.

use tracing::warn;

use vh_dialogue::{DialogueContext, DialogueRuntime, SkillCheckRequest, evaluate, print_variable};
use vh_form::InfractionForm;

use crate::error::{ShiftError, ShiftResult};

/// Dispatch one script command against the session.
///
/// Commands:
/// - `RevealName <name>`: arm the form's name field.
/// - `SkillCheck <stat> <difficulty> [pass_node fail_node]`: evaluate
///   a skill check; with both nodes present, dialogue branches.
/// - `PrintVariable <name>`: log a variable; never mutates state.
pub fn dispatch(
    command: &str,
    args: &[String],
    ctx: &mut DialogueContext,
    form: &mut InfractionForm,
    runtime: &mut dyn DialogueRuntime,
) -> ShiftResult<()> {
    match command {
        "RevealName" => {
            match args.first() {
                Some(name) => form.reveal_name(name.clone()),
                None => warn!("RevealName requires a name argument"),
            }
            Ok(())
        }
        "SkillCheck" => {
            let stat = args.first().cloned().unwrap_or_default();
            let difficulty = match args.get(1) {
                Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                    warn!(raw = %raw, "unparseable difficulty, using 0");
                    0
                }),
                None => 0,
            };
            let pass_node = args.get(2).cloned().unwrap_or_default();
            let fail_node = args.get(3).cloned().unwrap_or_default();

            let request = SkillCheckRequest {
                stat,
                difficulty,
                pass_node,
                fail_node,
            };
            evaluate(ctx, &request, runtime)?;
            Ok(())
        }
        "PrintVariable" => {
            match args.first() {
                Some(name) => {
                    print_variable(&ctx.variables, name);
                }
                None => warn!("PrintVariable requires a variable name"),
            }
            Ok(())
        }
        other => Err(ShiftError::UnknownCommand(other.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use vh_dialogue::{DialogueResult, variable::keys};
    use vh_mechanics::{SequenceRoller, StatBlock};

    use super::*;

    #[derive(Default)]
    struct RecordingRuntime {
        started: Vec<String>,
    }

    impl DialogueRuntime for RecordingRuntime {
        fn start_dialogue(&mut self, node: &str) -> DialogueResult<()> {
            self.started.push(node.to_string());
            Ok(())
        }

        fn stop_dialogue(&mut self) {}
    }

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(ToString::to_string).collect()
    }

    fn session() -> (DialogueContext, InfractionForm, RecordingRuntime) {
        let ctx = DialogueContext::new(StatBlock::new(5, 10, 5))
            .with_roller(Box::new(SequenceRoller::new([8])));
        let (form, _rx) = InfractionForm::new("VK-221");
        // The receiver is dropped, but nothing in these tests stamps.
        (ctx, form, RecordingRuntime::default())
    }

    #[test]
    fn reveal_name_arms_the_form() {
        let (mut ctx, mut form, mut runtime) = session();
        dispatch("RevealName", &args(&["Darion Vale"]), &mut ctx, &mut form, &mut runtime)
            .unwrap();
        assert!(form.confirm_name());
        assert_eq!(form.suspect_name(), Some("Darion Vale"));
    }

    #[test]
    fn reveal_name_without_argument_is_a_warned_no_op() {
        let (mut ctx, mut form, mut runtime) = session();
        dispatch("RevealName", &[], &mut ctx, &mut form, &mut runtime).unwrap();
        assert!(!form.confirm_name());
    }

    #[test]
    fn skill_check_evaluates_and_branches() {
        let (mut ctx, mut form, mut runtime) = session();
        dispatch(
            "SkillCheck",
            &args(&["Willpower", "18", "pass_node", "fail_node"]),
            &mut ctx,
            &mut form,
            &mut runtime,
        )
        .unwrap();

        // stat 10 + scripted roll 8 meets difficulty 18.
        assert!(ctx.variables.get_bool(keys::LAST_CHECK_SUCCESS));
        assert_eq!(runtime.started, vec!["pass_node"]);
    }

    #[test]
    fn malformed_difficulty_defaults_to_zero() {
        let (mut ctx, mut form, mut runtime) = session();
        dispatch(
            "SkillCheck",
            &args(&["Willpower", "brutal"]),
            &mut ctx,
            &mut form,
            &mut runtime,
        )
        .unwrap();

        // Difficulty 0: any total passes; check-only, so no branching.
        assert!(ctx.variables.get_bool(keys::LAST_CHECK_SUCCESS));
        assert!(runtime.started.is_empty());
    }

    #[test]
    fn print_variable_never_mutates() {
        let (mut ctx, mut form, mut runtime) = session();
        ctx.variables.set("$case", "VK-221");
        let len = ctx.variables.len();

        dispatch("PrintVariable", &args(&["$case"]), &mut ctx, &mut form, &mut runtime).unwrap();
        dispatch("PrintVariable", &args(&["$missing"]), &mut ctx, &mut form, &mut runtime)
            .unwrap();

        assert_eq!(ctx.variables.len(), len);
        assert_eq!(ctx.variables.get_string("$case"), "VK-221");
    }

    #[test]
    fn unknown_command_is_an_error() {
        let (mut ctx, mut form, mut runtime) = session();
        let err = dispatch("OpenPortal", &[], &mut ctx, &mut form, &mut runtime).unwrap_err();
        assert!(matches!(err, ShiftError::UnknownCommand(name) if name == "OpenPortal"));
    }
}
