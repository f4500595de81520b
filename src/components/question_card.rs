//! Question summary card shared by the dashboard and profile pages.

use leptos::prelude::*;

/// A question summary for recent-activity lists. Sample data until the
/// questions API lands.
#[derive(Clone, Debug)]
pub struct QuestionSummary {
    pub title: &'static str,
    pub votes: u32,
    pub answers: u32,
    pub views: Option<u32>,
    pub tags: &'static [&'static str],
    pub answered: bool,
    pub time_ago: &'static str,
}

/// One question row with status badge, tags, and counters.
#[component]
pub fn QuestionCard(question: QuestionSummary) -> impl IntoView {
    let status = if question.answered { "answered" } else { "open" };
    let status_class = if question.answered {
        "badge badge--default"
    } else {
        "badge badge--secondary"
    };

    view! {
        <div class="question-card">
            <div class="question-card__header">
                <h3 class="question-card__title">{question.title}</h3>
                <span class=status_class>{status}</span>
            </div>

            <div class="question-card__tags">
                {question
                    .tags
                    .iter()
                    .map(|tag| view! { <span class="badge badge--outline">{*tag}</span> })
                    .collect::<Vec<_>>()}
            </div>

            <div class="question-card__meta">
                <span>{question.votes} " votes"</span>
                <span>{question.answers} " answers"</span>
                {question.views.map(|v| view! { <span>{v} " views"</span> })}
                <span class="question-card__time">{question.time_ago}</span>
            </div>
        </div>
    }
}
