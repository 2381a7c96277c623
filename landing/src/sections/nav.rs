use leptos::prelude::*;

use super::{DOCS_URL, GITHUB_URL, VERSION};

#[component]
pub fn Nav() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/flock/" class="nav-brand">
                    <div class="nav-logo">
                        // Light/dark pair; CSS shows exactly one of them.
                        <img
                            src="assets/flock-horizontal.svg"
                            alt="Flock"
                            width="150"
                            height="50"
                            class="logo-light"
                        />
                        <img
                            src="assets/flock-horizontal-dark.svg"
                            alt="Flock"
                            width="150"
                            height="50"
                            class="logo-dark"
                        />
                    </div>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class=move || {
                    if menu_open.get() { "nav-links open" } else { "nav-links" }
                }>
                    <a href="#why-flock" class="nav-link">"Why Flock"</a>
                    <a href="#features" class="nav-link">"Functions"</a>
                    <a href="#getting-started" class="nav-link">"Install"</a>
                    <a href=DOCS_URL target="_blank" class="nav-link">"Docs"</a>
                    <a href=GITHUB_URL target="_blank" class="nav-link">"GitHub"</a>
                </div>
                <button
                    class="nav-menu-toggle"
                    on:click=move |_| set_menu_open.update(|open| *open = !*open)
                >
                    {move || if menu_open.get() { "✕" } else { "☰" }}
                </button>
            </div>
        </nav>
    }
}
