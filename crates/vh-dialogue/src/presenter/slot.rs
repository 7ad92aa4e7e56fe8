//! Exactly-once completion slot.
//!
//! Each presentation cycle has exactly one completion channel. The
//! sender half lives behind this slot so that whichever trigger fires
//! first (a player selection or a cancellation) consumes it, and any
//! later attempt finds the slot empty and becomes a no-op.

use std::collections::HashSet;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::oneshot;

use crate::option::OptionId;

#[derive(Debug)]
struct SlotState {
    sender: Option<oneshot::Sender<OptionId>>,
    candidates: HashSet<OptionId>,
}

/// Cloneable handle the host uses to resolve a presentation cycle.
///
/// Only ids registered as live candidates can be chosen; options that
/// were filtered out during population are unknown here and can never
/// resolve the cycle.
#[derive(Clone, Debug)]
pub struct Selector {
    state: Arc<Mutex<SlotState>>,
}

impl Selector {
    pub(crate) fn new(sender: oneshot::Sender<OptionId>, candidates: HashSet<OptionId>) -> Self {
        Self {
            state: Arc::new(Mutex::new(SlotState {
                sender: Some(sender),
                candidates,
            })),
        }
    }

    /// Attempt to resolve the cycle with a chosen option.
    ///
    /// Returns `false` (a no-op, never an error) when the id is not a
    /// live candidate, when the cycle already resolved, or when it was
    /// cancelled or superseded.
    pub fn choose(&self, id: OptionId) -> bool {
        let mut state = self.lock();
        if !state.candidates.contains(&id) {
            return false;
        }
        match state.sender.take() {
            Some(sender) => sender.send(id).is_ok(),
            None => false,
        }
    }

    /// Whether the cycle can still be resolved by a selection.
    pub fn is_armed(&self) -> bool {
        self.lock().sender.is_some()
    }

    /// Disarm the slot: drop the sender (the receiver observes
    /// cancellation) and unregister every candidate so in-flight
    /// selection attempts become no-ops.
    pub(crate) fn disarm(&self) {
        let mut state = self.lock();
        state.sender = None;
        state.candidates.clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, SlotState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(ids: &[u32]) -> (Selector, oneshot::Receiver<OptionId>) {
        let (tx, rx) = oneshot::channel();
        let candidates = ids.iter().map(|&i| OptionId(i)).collect();
        (Selector::new(tx, candidates), rx)
    }

    #[tokio::test]
    async fn first_choice_wins() {
        let (selector, rx) = slot(&[0, 1]);
        assert!(selector.choose(OptionId(1)));
        assert!(!selector.choose(OptionId(0)));
        assert_eq!(rx.await.unwrap(), OptionId(1));
    }

    #[test]
    fn unknown_candidate_is_a_no_op() {
        let (selector, _rx) = slot(&[0]);
        assert!(!selector.choose(OptionId(7)));
        assert!(selector.is_armed());
    }

    #[tokio::test]
    async fn disarm_unregisters_everything() {
        let (selector, rx) = slot(&[0, 1]);
        selector.disarm();
        assert!(!selector.is_armed());
        assert!(!selector.choose(OptionId(0)));
        assert!(rx.await.is_err());
    }

    #[test]
    fn choose_after_receiver_dropped_reports_failure() {
        let (selector, rx) = slot(&[0]);
        drop(rx);
        assert!(!selector.choose(OptionId(0)));
    }
}
