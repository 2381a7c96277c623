//! "Why Use Flock?" - the bullet list with the rotating highlight.
//!
//! Exactly one point is emphasized at a time; the emphasis advances on a
//! fixed cadence and wraps around. The cycling itself lives in
//! `flock-highlight`; this component only reads the active index and
//! styles the list.

use flock_highlight::SequencerHandle;
use leptos::prelude::*;
use send_wrapper::SendWrapper;
use wasm_bindgen::JsValue;

use super::{HIGHLIGHT_INTERVAL, WHY_FLOCK};
use crate::interval::IntervalScheduler;

#[component]
pub fn WhyFlock() -> impl IntoView {
    let (active, set_active) = signal(None::<usize>);

    match SequencerHandle::start(
        &IntervalScheduler,
        WHY_FLOCK.len(),
        HIGHLIGHT_INTERVAL,
        move |idx| set_active.set(Some(idx)),
    ) {
        Ok(handle) => {
            set_active.set(handle.current_index());
            // Paired with the acquisition above: runs on every teardown
            // path, so no tick can land on an unmounted list. The handle
            // is single-threaded by design; SendWrapper carries it across
            // on_cleanup's Send + Sync bound on the one-thread wasm
            // runtime.
            let handle = SendWrapper::new(handle);
            on_cleanup(move || handle.stop());
        }
        Err(err) => {
            // Not fatal: the list renders, it just stays unanimated.
            web_sys::console::warn_1(&JsValue::from_str(&format!(
                "why-flock highlight disabled: {err}"
            )));
        }
    }

    view! {
        <section id="why-flock" class="why-flock">
            <div class="container">
                <div class="why-grid">
                    <div class="why-visual">
                        <CodeToTable />
                    </div>
                    <div class="why-content">
                        <h2 class="section-title reveal">"Why Use Flock?"</h2>
                        <ul class="why-points">
                            {WHY_FLOCK
                                .iter()
                                .enumerate()
                                .map(|(index, point)| {
                                    view! {
                                        <li class=move || {
                                            if active.get() == Some(index) {
                                                "why-point emphasized"
                                            } else {
                                                "why-point"
                                            }
                                        }>
                                            <BulletPoint text=*point />
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn BulletPoint(text: &'static str) -> impl IntoView {
    view! {
        <span class="why-point-marker">">"</span>
        <span class="why-point-text">{text}</span>
    }
}

/// Static illustration of a code block turning into a result table.
/// Pure presentation; the sliding animation is CSS.
#[component]
fn CodeToTable() -> impl IntoView {
    view! {
        <div class="code-to-table">
            <div class="c2t-code">
                <div class="c2t-code-line">"SELECT review,"</div>
                <div class="c2t-code-line indent-1">"llm_filter("</div>
                <div class="c2t-code-line indent-2">"{'model_name': 'gpt-4o-mini'},"</div>
                <div class="c2t-code-line indent-2">"{'prompt': 'Is this review positive?'},"</div>
                <div class="c2t-code-line indent-2">"{'review': review}"</div>
                <div class="c2t-code-line indent-1">") AS positive"</div>
                <div class="c2t-code-line">"FROM product_reviews;"</div>
            </div>
            <div class="c2t-arrow">"=>"</div>
            <div class="c2t-table">
                <div class="c2t-row c2t-header">
                    <span>"review"</span>
                    <span>"positive"</span>
                </div>
                <div class="c2t-row">
                    <span>"Loved it, works great"</span>
                    <span>"true"</span>
                </div>
                <div class="c2t-row">
                    <span>"Broke after two days"</span>
                    <span>"false"</span>
                </div>
                <div class="c2t-row">
                    <span>"Does what it says"</span>
                    <span>"true"</span>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flock_highlight::schedule::ManualScheduler;

    // on_cleanup demands FnOnce() + Send + Sync; the mount path must keep
    // satisfying that even though the handle itself is single-threaded.
    fn run_cleanup<F: FnOnce() + Send + Sync + 'static>(cleanup: F) {
        cleanup();
    }

    #[test]
    fn teardown_closure_meets_the_cleanup_bounds_and_stops_the_timer() {
        let clock = ManualScheduler::new();
        let handle =
            SequencerHandle::start(&clock, WHY_FLOCK.len(), HIGHLIGHT_INTERVAL, |_| {}).unwrap();

        let handle = SendWrapper::new(handle);
        run_cleanup(move || handle.stop());

        assert_eq!(clock.timer_count(), 0);
        assert_eq!(clock.cancel_count(), 1);
    }
}
