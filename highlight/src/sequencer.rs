//! The cycling state machine behind the rotating highlight.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::error::SequencerError;
use crate::schedule::{Scheduler, TimerGuard};

/// Index cursor over the bullet list.
///
/// Mutated from exactly one place: the tick closure scheduled by
/// [`SequencerHandle::start`]. Everything else reads.
#[derive(Debug)]
struct CarouselState {
    index: usize,
    len: usize,
    running: bool,
}

/// One highlight cycling session: the current index plus the owned timer
/// that advances it.
///
/// Two states: *Idle* (never started with content, or stopped) and
/// *Running*. While running, the index advances by one per tick with
/// wraparound, so after `k` ticks it reads `k % len`. [`stop`](Self::stop)
/// returns the handle to Idle, releases the timer, and guarantees that no
/// tick lands afterwards; restarting means calling
/// [`start`](Self::start) again.
///
/// The handle is single-threaded by construction (`Rc` inside), matching
/// the host UI loop's serialized callback delivery.
pub struct SequencerHandle {
    state: Rc<RefCell<CarouselState>>,
    timer: Cell<Option<Box<dyn TimerGuard>>>,
}

impl SequencerHandle {
    /// Begin cycling over `item_count` items, one step every `period`.
    ///
    /// `on_advance` fires after every tick with the new index; the landing
    /// page uses it to poke the reactive signal its render pass reads. It
    /// is invoked with no internal borrows held, so it may call
    /// [`stop`](Self::stop) on this very handle.
    ///
    /// With `item_count == 0` the handle comes back Idle and no timer is
    /// scheduled; that is a defined no-op, not an error. A zero `period`
    /// is a configuration mistake and fails fast before anything is
    /// scheduled.
    pub fn start<S: Scheduler>(
        scheduler: &S,
        item_count: usize,
        period: Duration,
        mut on_advance: impl FnMut(usize) + 'static,
    ) -> Result<Self, SequencerError> {
        if period.is_zero() {
            return Err(SequencerError::ZeroInterval);
        }

        let state = Rc::new(RefCell::new(CarouselState {
            index: 0,
            len: item_count,
            running: item_count > 0,
        }));

        if item_count == 0 {
            return Ok(Self {
                state,
                timer: Cell::new(None),
            });
        }

        let tick_state = Rc::clone(&state);
        let timer = scheduler.every(
            period,
            Box::new(move || {
                let next = {
                    let mut s = tick_state.borrow_mut();
                    if !s.running {
                        // A tick that slipped past stop() must not mutate.
                        return;
                    }
                    s.index = (s.index + 1) % s.len;
                    s.index
                };
                on_advance(next);
            }),
        )?;

        Ok(Self {
            state,
            timer: Cell::new(Some(Box::new(timer))),
        })
    }

    /// Index of the currently emphasized item, or `None` when Idle.
    pub fn current_index(&self) -> Option<usize> {
        let s = self.state.borrow();
        s.running.then_some(s.index)
    }

    /// Stop cycling and release the timer.
    ///
    /// Idempotent: the timer is cancelled at most once and stopping an
    /// already-Idle handle is a no-op. Safe to call from a teardown hook
    /// or from within `on_advance`. Once this returns, no further tick is
    /// delivered, even one already sitting in the scheduler's queue.
    pub fn stop(&self) {
        if let Some(timer) = self.timer.take() {
            timer.cancel();
        }
        self.state.borrow_mut().running = false;
    }
}

impl Drop for SequencerHandle {
    fn drop(&mut self) {
        // Backstop for exit paths that never reach an explicit stop().
        self.stop();
    }
}

impl fmt::Debug for SequencerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = self.state.borrow();
        f.debug_struct("SequencerHandle")
            .field("index", &s.index)
            .field("len", &s.len)
            .field("running", &s.running)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::ManualScheduler;

    const PERIOD: Duration = Duration::from_millis(1500);

    fn recorder() -> (Rc<RefCell<Vec<usize>>>, impl FnMut(usize) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = Rc::clone(&seen);
        (seen, move |idx| s.borrow_mut().push(idx))
    }

    #[test]
    fn starts_emphasizing_the_first_item() {
        let clock = ManualScheduler::new();
        let handle = SequencerHandle::start(&clock, 4, PERIOD, |_| {}).unwrap();
        assert_eq!(handle.current_index(), Some(0));
    }

    #[test]
    fn index_follows_tick_count_with_wraparound() {
        let clock = ManualScheduler::new();
        let handle = SequencerHandle::start(&clock, 3, PERIOD, |_| {}).unwrap();

        for k in 1..=10u32 {
            clock.advance(PERIOD);
            assert_eq!(handle.current_index(), Some(k as usize % 3));
        }
    }

    #[test]
    fn single_item_keeps_emphasizing_itself() {
        let clock = ManualScheduler::new();
        let (seen, observe) = recorder();
        let handle = SequencerHandle::start(&clock, 1, PERIOD, observe).unwrap();

        clock.advance(PERIOD * 3);
        assert_eq!(handle.current_index(), Some(0));
        assert_eq!(*seen.borrow(), vec![0, 0, 0]);
    }

    #[test]
    fn empty_sequence_stays_idle_and_schedules_nothing() {
        let clock = ManualScheduler::new();
        let (seen, observe) = recorder();
        let handle = SequencerHandle::start(&clock, 0, PERIOD, observe).unwrap();

        assert_eq!(clock.timer_count(), 0);
        assert_eq!(handle.current_index(), None);

        clock.advance(PERIOD * 5);
        assert_eq!(handle.current_index(), None);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn zero_interval_fails_before_scheduling() {
        let clock = ManualScheduler::new();
        let result = SequencerHandle::start(&clock, 3, Duration::ZERO, |_| {});

        assert!(matches!(result, Err(SequencerError::ZeroInterval)));
        assert_eq!(clock.timer_count(), 0);
    }

    #[test]
    fn stop_is_idempotent_and_releases_once() {
        let clock = ManualScheduler::new();
        let handle = SequencerHandle::start(&clock, 3, PERIOD, |_| {}).unwrap();
        clock.advance(PERIOD);

        handle.stop();
        handle.stop();
        handle.stop();

        assert_eq!(clock.timer_count(), 0);
        assert_eq!(clock.cancel_count(), 1);
        assert_eq!(handle.current_index(), None);
    }

    #[test]
    fn no_tick_lands_after_stop() {
        let clock = ManualScheduler::new();
        let (seen, observe) = recorder();
        let handle = SequencerHandle::start(&clock, 3, PERIOD, observe).unwrap();

        clock.advance(PERIOD); // -> 1
        handle.stop();
        clock.advance(PERIOD * 4);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(handle.current_index(), None);
    }

    #[test]
    fn stop_may_be_called_from_the_observer() {
        // Emulates a renderer tearing down from inside its own update path.
        let clock = ManualScheduler::new();
        let slot: Rc<RefCell<Option<SequencerHandle>>> = Rc::new(RefCell::new(None));
        let (seen, mut observe) = recorder();

        let s = Rc::clone(&slot);
        let handle = SequencerHandle::start(&clock, 3, PERIOD, move |idx| {
            observe(idx);
            if let Some(h) = s.borrow().as_ref() {
                h.stop();
            }
        })
        .unwrap();
        *slot.borrow_mut() = Some(handle);

        // Five periods due; the first tick stops the sequencer.
        clock.advance(PERIOD * 5);

        assert_eq!(*seen.borrow(), vec![1]);
        assert_eq!(clock.timer_count(), 0);
        assert_eq!(slot.borrow().as_ref().unwrap().current_index(), None);
    }

    #[test]
    fn dropping_the_handle_releases_the_timer() {
        let clock = ManualScheduler::new();
        let (seen, observe) = recorder();
        let handle = SequencerHandle::start(&clock, 3, PERIOD, observe).unwrap();

        clock.advance(PERIOD);
        drop(handle);
        clock.advance(PERIOD * 4);

        assert_eq!(clock.timer_count(), 0);
        assert_eq!(*seen.borrow(), vec![1]);
    }

    #[test]
    fn restart_after_stop_begins_a_fresh_cycle() {
        let clock = ManualScheduler::new();
        let first = SequencerHandle::start(&clock, 3, PERIOD, |_| {}).unwrap();
        clock.advance(PERIOD * 2);
        assert_eq!(first.current_index(), Some(2));
        first.stop();

        let second = SequencerHandle::start(&clock, 3, PERIOD, |_| {}).unwrap();
        assert_eq!(second.current_index(), Some(0));
        clock.advance(PERIOD);
        assert_eq!(second.current_index(), Some(1));
    }
}
