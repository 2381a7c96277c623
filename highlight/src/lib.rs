//! # flock-highlight
//!
//! Timer-driven highlight cycling for the Flock landing page.
//!
//! The "Why Use Flock?" bullet list shows all of its points at once and
//! emphasizes exactly one of them at a time, advancing on a fixed cadence
//! and wrapping around forever. This crate owns that mechanism: a small
//! cycling state machine ([`SequencerHandle`]) plus the scheduling seam
//! ([`schedule::Scheduler`]) that lets the same logic run against the
//! browser's interval timer in production and a hand-driven clock in tests.
//!
//! The renderer never mutates the index; it reads
//! [`SequencerHandle::current_index`] (or listens to the `on_advance`
//! observer) and applies the emphasized style to that item. Stopping the
//! handle releases the underlying timer and guarantees no further ticks,
//! even ones already due, so a torn-down view can never be mutated behind
//! its back.
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use flock_highlight::schedule::ManualScheduler;
//! use flock_highlight::SequencerHandle;
//!
//! let clock = ManualScheduler::new();
//! let handle = SequencerHandle::start(&clock, 3, Duration::from_millis(1500), |_| {})
//!     .expect("positive interval");
//!
//! assert_eq!(handle.current_index(), Some(0));
//! clock.advance(Duration::from_millis(1500));
//! assert_eq!(handle.current_index(), Some(1));
//!
//! handle.stop();
//! assert_eq!(handle.current_index(), None);
//! ```

mod error;
pub mod schedule;
mod sequencer;

pub use error::SequencerError;
pub use sequencer::SequencerHandle;
