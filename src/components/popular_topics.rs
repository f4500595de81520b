//! Trending topics grid on the marketing page.

use leptos::prelude::*;

struct Topic {
    name: &'static str,
    count: u32,
    trend: &'static str,
}

fn topics() -> [Topic; 12] {
    [
        Topic { name: "React", count: 1250, trend: "+15%" },
        Topic { name: "JavaScript", count: 980, trend: "+8%" },
        Topic { name: "TypeScript", count: 756, trend: "+22%" },
        Topic { name: "Node.js", count: 642, trend: "+12%" },
        Topic { name: "Python", count: 598, trend: "+5%" },
        Topic { name: "Next.js", count: 445, trend: "+28%" },
        Topic { name: "JWT", count: 334, trend: "+18%" },
        Topic { name: "MongoDB", count: 289, trend: "+7%" },
        Topic { name: "CSS", count: 267, trend: "+3%" },
        Topic { name: "Docker", count: 234, trend: "+14%" },
        Topic { name: "GraphQL", count: 198, trend: "+25%" },
        Topic { name: "Vue.js", count: 176, trend: "+9%" },
    ]
}

/// Topic tiles with question counts; the top six also show a trend delta.
#[component]
pub fn PopularTopics() -> impl IntoView {
    view! {
        <section class="topics">
            <div class="topics__inner">
                <h2 class="topics__title">"Trending Topics"</h2>
                <p class="topics__subtitle">
                    "Explore the most popular technologies and topics in our community"
                </p>

                <div class="card topics__grid">
                    {topics()
                        .into_iter()
                        .enumerate()
                        .map(|(i, topic)| {
                            view! {
                                <div class="topic-tile">
                                    <div class="topic-tile__header">
                                        <span class="badge badge--secondary">{topic.name}</span>
                                        <Show when=move || i < 6>
                                            <span class="topic-tile__trend">{topic.trend}</span>
                                        </Show>
                                    </div>
                                    <div class="topic-tile__count">{topic.count}</div>
                                    <div class="topic-tile__unit">"questions"</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
