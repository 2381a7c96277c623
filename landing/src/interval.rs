//! Browser timer adapter for the highlight sequencer.

use std::cell::RefCell;
use std::time::Duration;

use flock_highlight::SequencerError;
use flock_highlight::schedule::{Scheduler, TimerGuard};
use leptos::prelude::*;

/// Repeating callbacks on the browser event loop, via `setInterval`.
///
/// The event loop already provides what `Scheduler` demands: callbacks for
/// one interval are serialized and delivered in order, and `clearInterval`
/// also drops an invocation that is queued but not yet run.
pub struct IntervalScheduler;

/// Owned guard for one scheduled browser interval. Newtype over the leptos
/// handle so the `TimerGuard` impl lives in this crate.
pub struct IntervalGuard(IntervalHandle);

impl TimerGuard for IntervalGuard {
    fn cancel(&self) {
        self.0.clear();
    }
}

impl Scheduler for IntervalScheduler {
    type Timer = IntervalGuard;

    fn every(
        &self,
        period: Duration,
        tick: Box<dyn FnMut()>,
    ) -> Result<Self::Timer, SequencerError> {
        let tick = RefCell::new(tick);
        set_interval_with_handle(move || (tick.borrow_mut())(), period)
            .map(IntervalGuard)
            .map_err(|err| SequencerError::Schedule(format!("{err:?}")))
    }
}
