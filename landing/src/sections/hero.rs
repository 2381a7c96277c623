use leptos::prelude::*;

use super::{DOCS_URL, GITHUB_URL, VERSION};

#[component]
pub fn Hero() -> impl IntoView {
    let badge_text = format!("{} — DuckDB Community Extension", VERSION);
    view! {
        <section class="hero">
            <div class="container">
                <div class="hero-grid">
                    <div class="hero-content">
                        <div class="hero-badge">
                            <span class="hero-badge-dot"></span>
                            {badge_text}
                        </div>
                        <h1 class="hero-title">
                            <span class="hero-title-accent">"LLMs in your SQL,"</span>
                            <br />
                            "not your SQL in an LLM app."
                        </h1>
                        <p class="hero-description">
                            "Flock brings language-model and retrieval functions straight into DuckDB. "
                            "Summarize, filter, embed, and rerank rows with plain SQL, next to the "
                            "analytics you already run."
                        </p>
                        <div class="hero-actions">
                            <a href="#getting-started" class="btn btn-primary">
                                "Get Started"
                            </a>
                            <a href=GITHUB_URL target="_blank" class="btn btn-secondary">
                                "View on GitHub →"
                            </a>
                        </div>
                        <p class="hero-docs-hint">
                            <a href=DOCS_URL target="_blank">"What is Flock?"</a>
                        </p>
                    </div>
                    <SqlShell />
                </div>
            </div>
        </section>
    }
}

#[component]
fn SqlShell() -> impl IntoView {
    view! {
        <div class="hero-terminal">
            <div class="terminal-header">
                <div class="terminal-dot red"></div>
                <div class="terminal-dot yellow"></div>
                <div class="terminal-dot green"></div>
                <span class="terminal-title">"duckdb"</span>
            </div>
            <div class="terminal-body">
                <div class="terminal-line">
                    <span class="terminal-prompt">"D"</span>
                    <span class="terminal-command">"LOAD flock;"</span>
                </div>

                <div class="terminal-line" style="margin-top: 12px;">
                    <span class="terminal-prompt">"D"</span>
                    <span class="terminal-command">"SELECT llm_complete("</span>
                </div>
                <div class="terminal-line">
                    <span class="terminal-command indent-1">"{'model_name': 'gpt-4o-mini'},"</span>
                </div>
                <div class="terminal-line">
                    <span class="terminal-command indent-1">"{'prompt': 'Tagline for a DuckDB + LLM extension'});"</span>
                </div>

                <div class="terminal-output highlight" style="margin-top: 8px;">
                    "┌─────────────────────────────────────┐"
                </div>
                <div class="terminal-output highlight">
                    "│ Your data, your queries, your LLMs. │"
                </div>
                <div class="terminal-output highlight">
                    "└─────────────────────────────────────┘"
                </div>
                <div class="terminal-output muted" style="margin-top: 8px;">
                    "Run Time (s): real 0.41"
                </div>
            </div>
        </div>
    }
}
