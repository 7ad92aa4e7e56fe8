//! The option-presentation rendezvous.
//!
//! A presentation cycle moves through
//! `Idle → Populating → AwaitingSelection → {Resolved | Cancelled} → Idle`.
//! Population classifies each candidate (plain vs. skill check), picks
//! its view template, and registers it as live; only then does the
//! completion channel open. Two independent triggers end the wait: the
//! player selecting a candidate, or a cancellation signal. They race;
//! selection wins same-tick ties, and the channel resolves exactly once
//! either way. Cancellation yields the sentinel
//! [`OptionOutcome::NoSelection`], never an error.
//!
//! At most one cycle is active per presenter: beginning a new cycle
//! supersedes any prior incomplete one, which resolves as cancelled.

mod slot;

pub use slot::Selector;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tokio::sync::oneshot;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{DialogueError, DialogueResult};
use crate::line::NarrationLine;
use crate::metadata::SkillCheckDirective;
use crate::option::{DialogueOption, OptionId, OptionSet};

/// How a candidate is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TemplateKind {
    /// An ordinary choice.
    Plain,
    /// A choice gated by a skill check.
    SkillCheck,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plain => write!(f, "plain"),
            Self::SkillCheck => write!(f, "skill check"),
        }
    }
}

/// Opaque handle to a view template registered by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateId(String);

impl TemplateId {
    /// Create a template handle from the host's name for it.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The host-side name of the template.
    pub fn name(&self) -> &str {
        &self.0
    }
}

/// The view templates available to a presenter.
///
/// Skill-check candidates use the dedicated skill-check template when
/// one is registered and fall back to the plain template otherwise. A
/// candidate whose resolved template is missing makes the whole cycle
/// unrenderable, which is a fatal configuration error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TemplateSet {
    plain: Option<TemplateId>,
    skill_check: Option<TemplateId>,
}

impl TemplateSet {
    /// Create an empty template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register the plain option template.
    pub fn with_plain(mut self, template: TemplateId) -> Self {
        self.plain = Some(template);
        self
    }

    /// Register the skill-check option template.
    pub fn with_skill_check(mut self, template: TemplateId) -> Self {
        self.skill_check = Some(template);
        self
    }

    fn resolve(&self, kind: TemplateKind) -> DialogueResult<TemplateId> {
        let found = match kind {
            TemplateKind::SkillCheck => self.skill_check.as_ref().or(self.plain.as_ref()),
            TemplateKind::Plain => self.plain.as_ref(),
        };
        found.cloned().ok_or(DialogueError::MissingTemplate(kind))
    }
}

/// Policy knobs for a presenter.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PresenterConfig {
    /// Present options the engine marked unavailable.
    pub include_unavailable: bool,
    /// Hand the retained narration line to the host with each cycle.
    pub show_last_line: bool,
}

impl PresenterConfig {
    /// Include options marked unavailable.
    pub fn with_unavailable(mut self) -> Self {
        self.include_unavailable = true;
        self
    }

    /// Re-display the most recent narration line beside the options.
    pub fn with_last_line(mut self) -> Self {
        self.show_last_line = true;
        self
    }
}

/// A live, selectable candidate within one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The underlying option.
    pub option: DialogueOption,
    /// Template the host renders it with.
    pub template: TemplateId,
    /// Skill-check directive, for skill-check candidates.
    pub check: Option<SkillCheckDirective>,
}

/// Everything the host needs to render one cycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Live candidates in presentation order.
    pub candidates: Vec<Candidate>,
    /// Candidate to highlight initially: the first one flagged by the
    /// host, else the first selectable one, else none.
    pub initial_highlight: Option<OptionId>,
    /// Narration line to re-display, when configured and present.
    pub last_line: Option<NarrationLine>,
}

/// The outcome of a presentation cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionOutcome {
    /// The player chose this option.
    Selected(OptionId),
    /// The cycle was cancelled or superseded before a selection.
    NoSelection,
}

impl OptionOutcome {
    /// The chosen id, if a selection happened.
    pub fn selected(self) -> Option<OptionId> {
        match self {
            Self::Selected(id) => Some(id),
            Self::NoSelection => None,
        }
    }
}

/// Offers option sets to the player and resolves exactly one choice.
pub struct OptionsPresenter {
    templates: TemplateSet,
    config: PresenterConfig,
    last_line: Option<NarrationLine>,
    active: Option<Selector>,
}

impl OptionsPresenter {
    /// Create a presenter with the given templates and default policy.
    pub fn new(templates: TemplateSet) -> Self {
        Self {
            templates,
            config: PresenterConfig::default(),
            last_line: None,
            active: None,
        }
    }

    /// Replace the policy configuration.
    pub fn with_config(mut self, config: PresenterConfig) -> Self {
        self.config = config;
        self
    }

    /// Record the most recently shown narration line.
    ///
    /// A side channel with no part in the cycle state machine; last
    /// write wins.
    pub fn record_line(&mut self, line: NarrationLine) {
        self.last_line = Some(line);
    }

    /// The retained narration line, if any.
    pub fn last_line(&self) -> Option<&NarrationLine> {
        self.last_line.as_ref()
    }

    /// Open a presentation cycle for an option set.
    ///
    /// Any prior incomplete cycle is superseded first and resolves as
    /// cancelled. Population (filtering, classifying, and template
    /// selection for every candidate) completes fully before the
    /// completion channel opens. A missing required template aborts the
    /// cycle with [`DialogueError::MissingTemplate`].
    pub fn begin(&mut self, options: &OptionSet) -> DialogueResult<PresentationCycle> {
        if let Some(previous) = self.active.take() {
            previous.disarm();
        }

        let mut candidates = Vec::new();
        for option in options.iter() {
            if !option.is_available && !self.config.include_unavailable {
                continue;
            }

            let check = option.directive();
            let kind = if check.is_some() {
                TemplateKind::SkillCheck
            } else {
                TemplateKind::Plain
            };
            let template = self.templates.resolve(kind)?;

            if let Some(directive) = &check {
                debug!(
                    option = %option.id,
                    stat = %directive.stat,
                    difficulty = directive.difficulty,
                    "skill check option"
                );
            }

            candidates.push(Candidate {
                option: option.clone(),
                template,
                check,
            });
        }

        let initial_highlight = candidates
            .iter()
            .find(|c| c.option.pre_highlighted)
            .or_else(|| candidates.first())
            .map(|c| c.option.id);

        // Population is complete; only now does the channel open.
        let (sender, receiver) = oneshot::channel();
        let ids: HashSet<OptionId> = candidates.iter().map(|c| c.option.id).collect();
        let selector = Selector::new(sender, ids);
        self.active = Some(selector.clone());

        let last_line = if self.config.show_last_line {
            self.last_line.clone()
        } else {
            None
        };

        Ok(PresentationCycle {
            presentation: Presentation {
                candidates,
                initial_highlight,
                last_line,
            },
            selector,
            receiver,
        })
    }
}

/// One live presentation cycle, from population to resolution.
#[derive(Debug)]
pub struct PresentationCycle {
    presentation: Presentation,
    selector: Selector,
    receiver: oneshot::Receiver<OptionId>,
}

impl PresentationCycle {
    /// What the host renders for this cycle.
    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    /// A handle the host uses to resolve the cycle with a selection.
    pub fn selector(&self) -> Selector {
        self.selector.clone()
    }

    /// Wait until the player selects a candidate or the cycle is
    /// cancelled.
    ///
    /// The two triggers race; if both fire in the same scheduling tick,
    /// selection wins because it is checked first. Either way the cycle
    /// resolves exactly once, and all candidates are released: a
    /// selection attempt still in flight after cancellation finds
    /// nothing to resolve.
    pub async fn await_selection(mut self, cancel: &CancellationToken) -> OptionOutcome {
        let outcome = tokio::select! {
            biased;
            chosen = &mut self.receiver => match chosen {
                Ok(id) => OptionOutcome::Selected(id),
                // Sender dropped: the cycle was superseded.
                Err(_) => OptionOutcome::NoSelection,
            },
            () = cancel.cancelled() => OptionOutcome::NoSelection,
        };
        self.selector.disarm();
        outcome
    }
}
