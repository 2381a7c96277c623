//! Error types for the highlight sequencer.

use thiserror::Error;

/// Errors surfaced synchronously by [`SequencerHandle::start`].
///
/// Both variants are caller-visible configuration or environment problems;
/// neither is retried. An empty content sequence and a repeated `stop` are
/// deliberately *not* errors (see the sequencer docs).
///
/// [`SequencerHandle::start`]: crate::SequencerHandle::start
#[derive(Debug, Error)]
pub enum SequencerError {
    /// The cycling interval was zero. A zero interval is a caller
    /// configuration mistake, so it fails fast instead of being coerced to
    /// some default cadence. (Negative intervals cannot be expressed with
    /// `std::time::Duration`.)
    #[error("highlight interval must be greater than zero")]
    ZeroInterval,

    /// The host runtime refused to schedule the repeating callback.
    /// Never produced by the built-in manual scheduler; the browser
    /// adapter maps `setInterval` failures here.
    #[error("could not schedule highlight timer: {0}")]
    Schedule(String),
}
