//! End-to-end timeline for the rotating highlight, driven on a virtual
//! clock: the exact cadence the landing page runs with, minus the browser.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use flock_highlight::SequencerHandle;
use flock_highlight::schedule::ManualScheduler;

const ITEMS: [&str; 3] = ["A", "B", "C"];
const INTERVAL: Duration = Duration::from_millis(1500);

#[test]
fn emphasis_walks_the_list_and_wraps() {
    let clock = ManualScheduler::new();
    let handle = SequencerHandle::start(&clock, ITEMS.len(), INTERVAL, |_| {}).unwrap();

    let emphasized = |h: &SequencerHandle| h.current_index().map(|i| ITEMS[i]);

    // t=0
    assert_eq!(emphasized(&handle), Some("A"));

    clock.advance(INTERVAL); // t=1500
    assert_eq!(emphasized(&handle), Some("B"));

    clock.advance(INTERVAL); // t=3000
    assert_eq!(emphasized(&handle), Some("C"));

    clock.advance(INTERVAL); // t=4500, wrap
    assert_eq!(emphasized(&handle), Some("A"));
}

#[test]
fn stopping_mid_cycle_freezes_the_list() {
    let clock = ManualScheduler::new();
    let seen: Rc<RefCell<Vec<&str>>> = Rc::new(RefCell::new(Vec::new()));

    let s = Rc::clone(&seen);
    let handle = SequencerHandle::start(&clock, ITEMS.len(), INTERVAL, move |idx| {
        s.borrow_mut().push(ITEMS[idx]);
    })
    .unwrap();

    clock.advance(Duration::from_millis(2000)); // one tick at t=1500
    assert_eq!(*seen.borrow(), vec!["B"]);

    handle.stop(); // t=2000
    clock.advance(Duration::from_millis(3000)); // through t=5000

    // Frozen: the tick due at t=3000 was already enqueued conceptually,
    // yet nothing may land after stop() returns.
    assert_eq!(*seen.borrow(), vec!["B"]);
    assert_eq!(handle.current_index(), None);
    assert_eq!(clock.now(), Duration::from_millis(5000));
}
