use leptos::prelude::*;

use super::{DOCS_URL, GITHUB_URL};

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section id="cta" class="cta">
            <div class="container">
                <div class="cta-box">
                    <h2 class="cta-title">"Query your data with LLMs today"</h2>
                    <p class="cta-description">
                        "Two statements in any DuckDB shell and you are running "
                        "language-model functions over your own tables."
                    </p>
                    <div class="cta-actions">
                        <a href=DOCS_URL target="_blank" class="btn btn-primary">
                            "Read the docs"
                        </a>
                        <a href=GITHUB_URL target="_blank" class="btn btn-secondary">
                            "Star on GitHub"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
