//! Scheduling seam between the cycling logic and the host timer.
//!
//! The sequencer only needs one thing from its environment: a repeating
//! callback it can revoke. [`Scheduler`] captures that, so the same state
//! machine runs against the browser's `setInterval` loop in production and
//! against [`ManualScheduler`], a hand-driven clock, in tests.
//!
//! Delivery contract for every implementation:
//! - ticks for one timer are serialized (a tick runs to completion before
//!   the next fires) and arrive in increasing time order;
//! - after [`TimerGuard::cancel`] returns, no further tick is delivered,
//!   including ticks already due.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use crate::error::SequencerError;

/// An owned, revocable repeating timer.
///
/// Exactly one guard exists per scheduled callback. Cancellation is hard:
/// once `cancel` returns, the callback will never run again.
pub trait TimerGuard {
    fn cancel(&self);
}

/// Source of repeating callbacks.
pub trait Scheduler {
    type Timer: TimerGuard + 'static;

    /// Schedule `tick` to fire every `period`, forever, until the returned
    /// guard is cancelled.
    fn every(
        &self,
        period: Duration,
        tick: Box<dyn FnMut()>,
    ) -> Result<Self::Timer, SequencerError>;
}

/// A deterministic scheduler driven by hand.
///
/// Owns a virtual clock that only moves when [`advance`](Self::advance) is
/// called, firing every due tick in `(due time, insertion order)` order
/// along the way. This is what the sequencer tests (and any consumer
/// wanting an off-browser harness) run against: wall time never enters the
/// picture, so timelines like "stop at t=2000, assert nothing fires
/// through t=5000" are exact rather than racy.
///
/// Cloning shares the underlying clock and task list.
#[derive(Clone, Default)]
pub struct ManualScheduler {
    inner: Rc<RefCell<Inner>>,
}

#[derive(Default)]
struct Inner {
    now: Duration,
    next_id: u64,
    cancel_count: usize,
    tasks: Vec<Task>,
}

struct Task {
    id: u64,
    period: Duration,
    due: Duration,
    // Shared so a tick can be invoked without holding the task-list borrow,
    // which lets the callback cancel timers (its own included) mid-flight.
    tick: Rc<RefCell<Box<dyn FnMut()>>>,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    pub fn now(&self) -> Duration {
        self.inner.borrow().now
    }

    /// Number of live (not yet cancelled) timers.
    pub fn timer_count(&self) -> usize {
        self.inner.borrow().tasks.len()
    }

    /// Number of cancellations performed, double-cancels included.
    pub fn cancel_count(&self) -> usize {
        self.inner.borrow().cancel_count
    }

    /// Move the clock forward by `by`, firing every tick that falls due.
    ///
    /// Ticks run serialized, earliest due time first, insertion order
    /// breaking ties. A callback that cancels a timer (even its own)
    /// suppresses every not-yet-delivered tick of that timer immediately.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;

        loop {
            let next = {
                let inner = self.inner.borrow();
                inner
                    .tasks
                    .iter()
                    .filter(|t| t.due <= target)
                    .min_by_key(|t| (t.due, t.id))
                    .map(|t| (t.id, t.due, Rc::clone(&t.tick)))
            };
            let Some((id, due, tick)) = next else { break };

            {
                let mut inner = self.inner.borrow_mut();
                inner.now = due;
                if let Some(task) = inner.tasks.iter_mut().find(|t| t.id == id) {
                    task.due = due + task.period;
                }
            }
            // No inner borrow held here: the tick may call cancel().
            (tick.borrow_mut())();
        }

        self.inner.borrow_mut().now = target;
    }
}

impl Scheduler for ManualScheduler {
    type Timer = ManualTimer;

    fn every(
        &self,
        period: Duration,
        tick: Box<dyn FnMut()>,
    ) -> Result<Self::Timer, SequencerError> {
        if period.is_zero() {
            // A zero period would make advance() loop forever.
            return Err(SequencerError::ZeroInterval);
        }

        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        let due = inner.now + period;
        inner.tasks.push(Task {
            id,
            period,
            due,
            tick: Rc::new(RefCell::new(tick)),
        });

        Ok(ManualTimer {
            inner: Rc::clone(&self.inner),
            id,
        })
    }
}

/// Guard for a timer scheduled on a [`ManualScheduler`].
pub struct ManualTimer {
    inner: Rc<RefCell<Inner>>,
    id: u64,
}

impl TimerGuard for ManualTimer {
    fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.cancel_count += 1;
        inner.tasks.retain(|t| t.id != self.id);
    }
}
