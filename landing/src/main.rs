// Flock Landing Page - Leptos 0.8 Edition

mod interval;
mod sections;

use leptos::prelude::*;
use sections::*;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(|| view! { <App/> });
}

#[component]
fn App() -> impl IntoView {
    view! {
        <Nav />
        <main>
            <Hero />
            <WhyFlock />
            <Features />
            <GettingStarted />
            <Team />
            <CallToAction />
        </main>
        <Footer />
    }
}
