//! One-shot completion handles for overlay transitions.
//!
//! Every `show`/`hide` request returns a [`Transition`]. It resolves exactly
//! once: `Completed` when the request took effect, `Superseded` when a later
//! request replaced it before its animation finished. Dropping the handle is
//! fine; the manager never waits on it.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll};

use futures::channel::oneshot;

/// Coarse state of an [`OverlayManager`](super::OverlayManager).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    Idle,
    Showing,
    Hiding,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionOutcome {
    Completed,
    Superseded,
}

/// Receiving half of a transition's completion.
#[derive(Debug)]
pub struct Transition {
    rx: oneshot::Receiver<TransitionOutcome>,
    outcome: Option<TransitionOutcome>,
}

/// Sending half, held by the manager while the transition is pending.
#[derive(Debug)]
pub(crate) struct Completion {
    tx: oneshot::Sender<TransitionOutcome>,
}

impl Completion {
    pub(crate) fn complete(self) {
        self.resolve(TransitionOutcome::Completed);
    }

    pub(crate) fn supersede(self) {
        self.resolve(TransitionOutcome::Superseded);
    }

    fn resolve(self, outcome: TransitionOutcome) {
        // The caller may have dropped its handle.
        let _ = self.tx.send(outcome);
    }
}

impl Transition {
    pub(crate) fn pending() -> (Transition, Completion) {
        let (tx, rx) = oneshot::channel();
        (
            Transition { rx, outcome: None },
            Completion { tx },
        )
    }

    /// Non-blocking check. `None` while the transition is still in flight.
    pub fn try_outcome(&mut self) -> Option<TransitionOutcome> {
        if self.outcome.is_none() {
            self.outcome = match self.rx.try_recv() {
                Ok(outcome) => outcome,
                // Sender dropped without resolving: the manager went away.
                Err(oneshot::Canceled) => Some(TransitionOutcome::Superseded),
            };
        }
        self.outcome
    }

    pub fn is_finished(&mut self) -> bool {
        self.try_outcome().is_some()
    }

    pub fn is_completed(&mut self) -> bool {
        self.try_outcome() == Some(TransitionOutcome::Completed)
    }
}

impl Future for Transition {
    type Output = TransitionOutcome;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        if let Some(outcome) = self.outcome {
            return Poll::Ready(outcome);
        }
        let outcome = match Pin::new(&mut self.rx).poll(cx) {
            Poll::Ready(Ok(outcome)) => outcome,
            Poll::Ready(Err(oneshot::Canceled)) => TransitionOutcome::Superseded,
            Poll::Pending => return Poll::Pending,
        };
        self.outcome = Some(outcome);
        Poll::Ready(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_is_sticky() {
        let (mut t, completion) = Transition::pending();
        completion.complete();
        assert!(t.is_completed());
        // Reading twice keeps the outcome.
        assert_eq!(t.try_outcome(), Some(TransitionOutcome::Completed));
    }

    #[test]
    fn test_pending_then_complete() {
        let (mut t, completion) = Transition::pending();
        assert_eq!(t.try_outcome(), None);
        completion.complete();
        assert!(t.is_completed());
    }

    #[test]
    fn test_dropped_sender_is_superseded() {
        let (mut t, completion) = Transition::pending();
        drop(completion);
        assert_eq!(t.try_outcome(), Some(TransitionOutcome::Superseded));
    }

    #[test]
    fn test_await() {
        let (t, completion) = Transition::pending();
        completion.supersede();
        let outcome = futures::executor::block_on(t);
        assert_eq!(outcome, TransitionOutcome::Superseded);
    }
}
