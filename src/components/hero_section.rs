//! Landing hero with headline, call-to-action buttons, and stats.

use leptos::prelude::*;
use leptos_router::components::A;

struct HeroStat {
    label: &'static str,
    value: &'static str,
}

fn stats() -> [HeroStat; 4] {
    [
        HeroStat { label: "Questions", value: "10.2K" },
        HeroStat { label: "Developers", value: "2.5K" },
        HeroStat { label: "Answers", value: "15.8K" },
        HeroStat { label: "Resolved", value: "85%" },
    ]
}

/// Hero section at the top of the marketing page.
#[component]
pub fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">
                    "Every Developer"
                    <span class="hero__title-accent">"Deserves Answers"</span>
                </h1>
                <p class="hero__subtitle">
                    "Join thousands of developers sharing knowledge, solving problems, \
                     and building the future together. Ask questions, share solutions, \
                     and grow your skills."
                </p>

                <div class="hero__actions">
                    <A href="/ask" attr:class="btn btn--primary btn--lg">"Ask Your Question"</A>
                    <A href="/questions" attr:class="btn btn--outline btn--lg">"Browse Questions"</A>
                </div>

                <div class="hero__stats">
                    {stats()
                        .into_iter()
                        .map(|stat| {
                            view! {
                                <div class="hero__stat card">
                                    <div class="hero__stat-value">{stat.value}</div>
                                    <div class="hero__stat-label">{stat.label}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
