//! "Why Choose StackIt?" feature grid.

use leptos::prelude::*;

struct Feature {
    icon: &'static str,
    title: &'static str,
    description: &'static str,
}

fn features() -> [Feature; 6] {
    [
        Feature {
            icon: "</>",
            title: "Rich Code Support",
            description: "Share code snippets with syntax highlighting and markdown support.",
        },
        Feature {
            icon: "💬",
            title: "Real-time Discussions",
            description: "Engage in live conversations with instant notifications and updates.",
        },
        Feature {
            icon: "🛡",
            title: "Quality Control",
            description: "Community moderation ensures high-quality content and helpful answers.",
        },
        Feature {
            icon: "⚡",
            title: "Fast & Reliable",
            description: "Lightning-fast search and optimized performance for the best experience.",
        },
        Feature {
            icon: "👥",
            title: "Expert Community",
            description: "Connect with experienced developers and industry professionals.",
        },
        Feature {
            icon: "🏆",
            title: "Reputation System",
            description: "Build your reputation by providing helpful answers and quality content.",
        },
    ]
}

/// Feature cards on the marketing page.
#[component]
pub fn FeaturesSection() -> impl IntoView {
    view! {
        <section class="features">
            <div class="features__inner">
                <h2 class="features__title">"Why Choose StackIt?"</h2>
                <p class="features__subtitle">
                    "Built by developers, for developers. Experience the difference \
                     with our modern approach to Q&A."
                </p>

                <div class="features__grid">
                    {features()
                        .into_iter()
                        .map(|f| {
                            view! {
                                <div class="card feature-card">
                                    <span class="feature-card__icon">{f.icon}</span>
                                    <h3 class="feature-card__title">{f.title}</h3>
                                    <p class="feature-card__description">{f.description}</p>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
