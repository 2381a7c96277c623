use leptos::prelude::*;

use super::{DOCS_URL, GITHUB_URL};

#[component]
pub fn GettingStarted() -> impl IntoView {
    let (copied_install, set_copied_install) = signal(false);
    let (copied_model, set_copied_model) = signal(false);

    let install_sql = "INSTALL flock FROM community; LOAD flock;";
    let model_sql = "CREATE MODEL('default', 'gpt-4o-mini', 'openai');";

    let copy_install = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(install_sql);
            set_copied_install.set(true);
            set_timeout(
                move || set_copied_install.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    let copy_model = move |_| {
        if let Some(window) = web_sys::window() {
            let clipboard = window.navigator().clipboard();
            let _ = clipboard.write_text(model_sql);
            set_copied_model.set(true);
            set_timeout(
                move || set_copied_model.set(false),
                std::time::Duration::from_millis(2000),
            );
        }
    };

    view! {
        <section id="getting-started" class="getting-started">
            <div class="container">
                <div class="install-box-simple">
                    <div class="install-label">"GETTING STARTED"</div>

                    <div class="install-methods">
                        <div class="install-method install-method-primary">
                            <span class="method-label">"Install"</span>
                            <div class="install-command-box">
                                <code class="install-cmd">{install_sql}</code>
                                <button class="copy-btn-small" on:click=copy_install>
                                    {move || if copied_install.get() { "OK" } else { "COPY" }}
                                </button>
                            </div>
                        </div>

                        <div class="install-method">
                            <span class="method-label">"First model"</span>
                            <div class="install-command-box">
                                <code class="install-cmd">{model_sql}</code>
                                <button class="copy-btn-small" on:click=copy_model>
                                    {move || if copied_model.get() { "OK" } else { "COPY" }}
                                </button>
                            </div>
                        </div>
                    </div>

                    <p class="install-note">
                        "Set your provider key once ("
                        <code>"CREATE SECRET"</code>
                        ") and every llm_* function can use it."
                    </p>

                    <div class="install-links">
                        <a href=DOCS_URL target="_blank">"Docs"</a>
                        <span class="sep">"|"</span>
                        <a href=GITHUB_URL target="_blank">"GitHub"</a>
                        <span class="sep">"|"</span>
                        <a href="https://duckdb.org/community_extensions/extensions/flockmtl.html" target="_blank">
                            "Community Extension"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}
