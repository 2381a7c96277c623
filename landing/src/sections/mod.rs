// Landing page sections for Flock

use std::time::Duration;

/// Version string used across the landing page (single source of truth)
pub const VERSION: &str = "v0.4.0";

pub const GITHUB_URL: &str = "https://github.com/dais-polymtl/flock";
pub const DOCS_URL: &str = "https://dais-polymtl.github.io/flock/docs/what-is-flock";

/// The "Why Use Flock?" bullet list, in display order. The highlight
/// sequencer cycles over this sequence; it never mutates it.
pub const WHY_FLOCK: &[&str] = &[
    "Bring LLM reasoning to your data instead of shipping your data to an app stack.",
    "Plain SQL on top: scalar and aggregate functions, no pipelines, no glue code.",
    "Provider-agnostic: OpenAI, Azure, or local models through Ollama.",
    "Engine-aware batching and prompt caching keep token costs predictable.",
];

/// Cadence of the rotating highlight in the bullet list.
pub const HIGHLIGHT_INTERVAL: Duration = Duration::from_millis(1500);

mod cta;
mod features;
mod footer;
mod getting_started;
mod hero;
mod nav;
mod team;
mod why_flock;

pub use cta::CallToAction;
pub use features::Features;
pub use footer::Footer;
pub use getting_started::GettingStarted;
pub use hero::Hero;
pub use nav::Nav;
pub use team::Team;
pub use why_flock::WhyFlock;
