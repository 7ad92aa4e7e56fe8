//! The shift runner.
//!
//! Owns the suspect queue and the infraction form, and provides the
//! suspension points the host's cooperative loop parks on: waiting for
//! a filed record (or cancellation), and the settle-delay-then-reset
//! advance to the next suspect.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing::info;

use vh_dialogue::{DialogueContext, DialogueRuntime};
use vh_form::{InfractionForm, InfractionRecord};

use crate::error::ShiftResult;
use crate::suspect::Suspect;

/// Dialogue variables reset for every suspect.
pub mod vars {
    /// Whether the player has asked this suspect's name.
    pub const ASKED_NAME: &str = "$asked_name";
    /// Whether the player has raised the violation.
    pub const ASKED_VIOLATION: &str = "$asked_violation";
}

/// Timing policy for a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftConfig {
    /// Pause between a submission and the form reset, so the host can
    /// show the stamped form before it clears.
    pub settle_delay: Duration,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        Self {
            settle_delay: Duration::from_millis(800),
        }
    }
}

impl ShiftConfig {
    /// Set the settle delay.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }
}

/// A signal the runner resumed on.
#[derive(Debug)]
pub enum ShiftEvent {
    /// The form emitted a finished record.
    RecordFiled(InfractionRecord),
    /// The shift was cancelled before a record arrived.
    Cancelled,
}

/// What happened after advancing past a filed record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftProgress {
    /// The next suspect's interview began.
    NextSuspect,
    /// The queue is exhausted.
    ShiftComplete,
}

/// Runs one interrogation shift over a queue of suspects.
pub struct ShiftRunner {
    suspects: Vec<Suspect>,
    current: usize,
    config: ShiftConfig,
    form: InfractionForm,
    records: mpsc::UnboundedReceiver<InfractionRecord>,
}

impl ShiftRunner {
    /// Create a runner over a suspect queue.
    pub fn new(suspects: Vec<Suspect>, config: ShiftConfig) -> Self {
        let (form, records) = InfractionForm::new("");
        Self {
            suspects,
            current: 0,
            config,
            form,
            records,
        }
    }

    /// The suspect currently being interviewed.
    pub fn current_suspect(&self) -> Option<&Suspect> {
        self.suspects.get(self.current)
    }

    /// Whether every suspect has been processed.
    pub fn completed(&self) -> bool {
        self.current >= self.suspects.len()
    }

    /// The infraction form for the current suspect.
    pub fn form(&self) -> &InfractionForm {
        &self.form
    }

    /// Mutable access for the host UI filling in the form.
    pub fn form_mut(&mut self) -> &mut InfractionForm {
        &mut self.form
    }

    /// Begin the current suspect's interview.
    ///
    /// Stamps the case id onto the form, resets the per-suspect
    /// dialogue variables, and starts the suspect's dialogue node.
    /// Returns `false` when the queue is already exhausted.
    pub fn start(
        &mut self,
        ctx: &mut DialogueContext,
        runtime: &mut dyn DialogueRuntime,
    ) -> ShiftResult<bool> {
        let Some(suspect) = self.suspects.get(self.current) else {
            info!("no more suspects");
            return Ok(false);
        };

        self.form.set_case_id(&suspect.case_id);
        ctx.variables.set(vars::ASKED_NAME, false);
        ctx.variables.set(vars::ASKED_VIOLATION, false);

        info!(case = %suspect.case_id, name = %suspect.display_name, "suspect seated");
        runtime.start_dialogue(&suspect.start_node)?;
        Ok(true)
    }

    /// Suspend until the form files a record or the shift is cancelled.
    ///
    /// A record already in the channel wins a same-tick tie with
    /// cancellation. Cancellation is cooperative: it is observed here,
    /// at the suspension point.
    pub async fn next_event(&mut self, cancel: &CancellationToken) -> ShiftEvent {
        tokio::select! {
            biased;
            record = self.records.recv() => match record {
                Some(record) => ShiftEvent::RecordFiled(record),
                None => ShiftEvent::Cancelled,
            },
            () = cancel.cancelled() => ShiftEvent::Cancelled,
        }
    }

    /// Advance past a filed record to the next suspect.
    ///
    /// Stops the running dialogue, waits the settle delay, resets the
    /// form, and starts the next interview, or reports the shift
    /// complete.
    pub async fn advance(
        &mut self,
        ctx: &mut DialogueContext,
        runtime: &mut dyn DialogueRuntime,
    ) -> ShiftResult<ShiftProgress> {
        runtime.stop_dialogue();
        tokio::time::sleep(self.config.settle_delay).await;
        self.form.reset();
        self.current += 1;

        if self.start(ctx, runtime)? {
            Ok(ShiftProgress::NextSuspect)
        } else {
            info!("shift complete");
            Ok(ShiftProgress::ShiftComplete)
        }
    }
}

#[cfg(test)]
mod tests {
    use vh_dialogue::DialogueResult;
    use vh_form::{Severity, Violation};
    use vh_mechanics::StatBlock;

    use super::*;

    #[derive(Default)]
    struct RecordingRuntime {
        started: Vec<String>,
        stops: u32,
    }

    impl DialogueRuntime for RecordingRuntime {
        fn start_dialogue(&mut self, node: &str) -> DialogueResult<()> {
            self.started.push(node.to_string());
            Ok(())
        }

        fn stop_dialogue(&mut self) {
            self.stops += 1;
        }
    }

    fn two_suspects() -> Vec<Suspect> {
        vec![
            Suspect::new("VK-221", "Darion Vale", "vale_intro"),
            Suspect::new("VK-222", "Mira Osten", "osten_intro"),
        ]
    }

    fn fill_and_stamp(form: &mut InfractionForm, name: &str) {
        form.reveal_name(name);
        assert!(form.confirm_name());
        form.toggle_violation(Violation::PublicDisorder);
        form.toggle_severity(Severity::Minor);
        form.stamp().unwrap();
    }

    #[test]
    fn start_seats_the_first_suspect() {
        let mut runner = ShiftRunner::new(two_suspects(), ShiftConfig::default());
        let mut ctx = DialogueContext::new(StatBlock::default());
        ctx.variables.set(vars::ASKED_NAME, true);
        let mut runtime = RecordingRuntime::default();

        assert!(runner.start(&mut ctx, &mut runtime).unwrap());

        assert_eq!(runner.form().case_id(), "VK-221");
        assert_eq!(runtime.started, vec!["vale_intro"]);
        // Per-suspect variables are reset.
        assert!(!ctx.variables.get_bool(vars::ASKED_NAME));
        assert!(!ctx.variables.get_bool(vars::ASKED_VIOLATION));
    }

    #[test]
    fn start_on_an_empty_queue_reports_completion() {
        let mut runner = ShiftRunner::new(Vec::new(), ShiftConfig::default());
        let mut ctx = DialogueContext::new(StatBlock::default());
        let mut runtime = RecordingRuntime::default();

        assert!(!runner.start(&mut ctx, &mut runtime).unwrap());
        assert!(runner.completed());
        assert!(runtime.started.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn filed_record_advances_to_the_next_suspect() {
        let mut runner = ShiftRunner::new(two_suspects(), ShiftConfig::default());
        let mut ctx = DialogueContext::new(StatBlock::default());
        let mut runtime = RecordingRuntime::default();
        let cancel = CancellationToken::new();

        runner.start(&mut ctx, &mut runtime).unwrap();
        fill_and_stamp(runner.form_mut(), "Darion Vale");

        let ShiftEvent::RecordFiled(record) = runner.next_event(&cancel).await else {
            panic!("expected a filed record");
        };
        assert_eq!(record.case_id, "VK-221");
        assert_eq!(record.suspect_name, "Darion Vale");

        let progress = runner.advance(&mut ctx, &mut runtime).await.unwrap();
        assert_eq!(progress, ShiftProgress::NextSuspect);
        assert_eq!(runtime.stops, 1);
        assert_eq!(runtime.started, vec!["vale_intro", "osten_intro"]);
        // The form was reset and re-stamped with the new case.
        assert_eq!(runner.form().case_id(), "VK-222");
        assert!(runner.form().suspect_name().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn last_record_completes_the_shift() {
        let mut runner =
            ShiftRunner::new(vec![Suspect::new("VK-221", "Darion Vale", "vale_intro")], ShiftConfig::default());
        let mut ctx = DialogueContext::new(StatBlock::default());
        let mut runtime = RecordingRuntime::default();
        let cancel = CancellationToken::new();

        runner.start(&mut ctx, &mut runtime).unwrap();
        fill_and_stamp(runner.form_mut(), "Darion Vale");
        runner.next_event(&cancel).await;

        let progress = runner.advance(&mut ctx, &mut runtime).await.unwrap();
        assert_eq!(progress, ShiftProgress::ShiftComplete);
        assert!(runner.completed());
    }

    #[tokio::test]
    async fn cancellation_is_observed_at_the_suspension_point() {
        let mut runner = ShiftRunner::new(two_suspects(), ShiftConfig::default());
        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(matches!(runner.next_event(&cancel).await, ShiftEvent::Cancelled));
    }

    #[tokio::test]
    async fn pending_record_wins_a_tie_with_cancellation() {
        let mut runner = ShiftRunner::new(two_suspects(), ShiftConfig::default());
        runner.form_mut().set_case_id("VK-221");
        fill_and_stamp(runner.form_mut(), "Darion Vale");

        let cancel = CancellationToken::new();
        cancel.cancel();

        assert!(matches!(
            runner.next_event(&cancel).await,
            ShiftEvent::RecordFiled(_)
        ));
    }
}
