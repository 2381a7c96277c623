use leptos::prelude::*;

#[component]
pub fn Team() -> impl IntoView {
    view! {
        <section id="team" class="team">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">"The people behind Flock"</p>
                    <h2 class="section-title">"Built at the DAIS Lab"</h2>
                    <p class="section-description">
                        "Flock is developed by the Data & AI Systems laboratory at "
                        "Polytechnique Montréal, in the open, with its community."
                    </p>
                </div>
                <div class="team-grid">
                    <TeamCard
                        role="Core maintainers"
                        blurb="Design and build the extension: the SQL surface, the query-engine integration, and the provider adapters."
                    />
                    <TeamCard
                        role="Research leads"
                        blurb="Steer where declarative LLM querying goes next, from fusion scoring to cost-aware execution."
                    />
                    <TeamCard
                        role="Community contributors"
                        blurb="Issues, patches, docs, and benchmarks from DuckDB users running Flock in the wild."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn TeamCard(role: &'static str, blurb: &'static str) -> impl IntoView {
    view! {
        <article class="team-card">
            <h3 class="team-role">{role}</h3>
            <p class="team-blurb">{blurb}</p>
        </article>
    }
}
