use leptos::prelude::*;

use super::{DOCS_URL, GITHUB_URL};

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-logo">
                        <img src="assets/flock-mark.svg" alt="Flock" />
                    </span>
                    <span class="footer-title">"Flock"</span>
                </div>
                <div class="footer-links">
                    <a href=GITHUB_URL target="_blank" class="footer-link">"GitHub"</a>
                    <a href=DOCS_URL target="_blank" class="footer-link">"Docs"</a>
                    <a href="https://duckdb.org/community_extensions/extensions/flockmtl.html" target="_blank" class="footer-link">
                        "DuckDB Community Extensions"
                    </a>
                    <a href="https://github.com/dais-polymtl/flock/blob/main/LICENSE" target="_blank" class="footer-link">
                        "MIT License"
                    </a>
                </div>
                <p class="footer-copyright">
                    "Maintained by the DAIS Lab, Polytechnique Montréal (c)2025"
                </p>
            </div>
        </footer>
    }
}
