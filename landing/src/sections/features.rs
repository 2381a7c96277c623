use leptos::prelude::*;

use super::VERSION;

#[component]
pub fn Features() -> impl IntoView {
    let eyebrow = format!("{} Functions", VERSION);
    view! {
        <section id="features" class="features">
            <div class="container">
                <div class="section-header">
                    <p class="section-eyebrow">{eyebrow}</p>
                    <h2 class="section-title">"The SQL surface"</h2>
                    <p class="section-description">
                        "Every capability is a scalar or aggregate function. "
                        "If you can write a SELECT, you can use a language model."
                    </p>
                </div>
                <div class="features-grid">
                    <FeatureCard
                        icon="[1]"
                        title="llm_complete"
                        description="Free-form generation per row. Prompt templates reference any column."
                        code=Some("SELECT llm_complete({'model_name': m}, {'prompt': p}, {'text': text}) FROM docs;")
                    />
                    <FeatureCard
                        icon="[2]"
                        title="llm_filter"
                        description="A boolean predicate answered by the model. Drop rows with WHERE, not with a sidecar service."
                        code=Some("SELECT * FROM reviews WHERE llm_filter({'model_name': m}, {'prompt': 'Positive?'}, {'review': review});")
                    />
                    <FeatureCard
                        icon="[3]"
                        title="llm_embedding"
                        description="Embedding vectors as a first-class column type, ready for array distance functions."
                        code=Some("SELECT llm_embedding({'model_name': 'text-embedding-3-small'}, {'text': body}) FROM docs;")
                    />
                    <FeatureCard
                        icon="[4]"
                        title="llm_reduce"
                        description="Aggregate a whole group into one answer: summaries, labels, deduplicated names."
                        code=Some("SELECT category, llm_reduce(...) FROM products GROUP BY category;")
                    />
                    <FeatureCard
                        icon="[5]"
                        title="llm_rerank"
                        description="Reorder a result set by model-judged relevance to a query."
                        code=Some("SELECT llm_rerank(...) FROM search_hits;")
                    />
                    <FeatureCard
                        icon="[6]"
                        title="llm_first / llm_last"
                        description="Pick the most (or least) relevant row of a group in one aggregate call."
                        code=Some("SELECT llm_first(...) FROM candidates GROUP BY job_id;")
                    />
                    <FeatureCard
                        icon="[7]"
                        title="fusion_*"
                        description="Hybrid search scoring: rrf, combsum, combmnz, combanz, combmed over BM25 and vector scores."
                        code=Some("SELECT fusion_rrf(bm25_rank, vec_rank) AS score FROM hits;")
                    />
                    <FeatureCard
                        icon="[8]"
                        title="Models & prompts as resources"
                        description="CREATE MODEL and CREATE PROMPT statements store reusable, versioned configuration inside the database."
                        code=Some("CREATE MODEL('summarizer', 'gpt-4o-mini', 'openai'); GET MODELS;")
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    icon: &'static str,
    title: &'static str,
    description: &'static str,
    code: Option<&'static str>,
) -> impl IntoView {
    view! {
        <article class="feature-card">
            <div class="feature-icon">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="feature-description">{description}</p>
            {code.map(|c| {
                view! {
                    <div class="feature-code-box">
                        <code class="feature-code-text">{c}</code>
                    </div>
                }
            })}
        </article>
    }
}
