//! Dashboard page: activity summary for the signed-in user.
//!
//! Stats, recent questions, activity feed, and achievements are sample
//! data until the questions API lands.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::navbar::Navbar;
use crate::components::question_card::{QuestionCard, QuestionSummary};
use crate::components::stat_card::StatCard;
use crate::state::auth::AuthState;
use crate::state::ui::TimeRange;

struct Activity {
    icon: &'static str,
    title: &'static str,
    points: &'static str,
    time_ago: &'static str,
}

struct Achievement {
    name: &'static str,
    description: &'static str,
    earned: bool,
}

fn recent_questions() -> Vec<QuestionSummary> {
    vec![
        QuestionSummary {
            title: "How to implement JWT authentication in React?",
            votes: 12,
            answers: 3,
            views: Some(245),
            tags: &["React", "JWT", "Authentication"],
            answered: true,
            time_ago: "2 hours ago",
        },
        QuestionSummary {
            title: "Best practices for TypeScript error handling",
            votes: 8,
            answers: 1,
            views: Some(156),
            tags: &["TypeScript", "Error Handling"],
            answered: false,
            time_ago: "1 day ago",
        },
        QuestionSummary {
            title: "Optimizing React performance with useMemo",
            votes: 15,
            answers: 5,
            views: Some(387),
            tags: &["React", "Performance", "Hooks"],
            answered: true,
            time_ago: "3 days ago",
        },
    ]
}

fn recent_activity() -> Vec<Activity> {
    vec![
        Activity {
            icon: "💬",
            title: "Answered: How to center a div in CSS?",
            points: "+15",
            time_ago: "30 minutes ago",
        },
        Activity {
            icon: "⬆",
            title: "Your answer was upvoted",
            points: "+10",
            time_ago: "2 hours ago",
        },
        Activity {
            icon: "✓",
            title: "Your answer was accepted",
            points: "+15",
            time_ago: "4 hours ago",
        },
        Activity {
            icon: "💬",
            title: "Asked: JWT authentication in React",
            points: "+5",
            time_ago: "2 hours ago",
        },
    ]
}

fn achievements() -> Vec<Achievement> {
    vec![
        Achievement {
            name: "First Question",
            description: "Asked your first question",
            earned: true,
        },
        Achievement {
            name: "Helpful Answer",
            description: "Got 10 upvotes on an answer",
            earned: true,
        },
        Achievement {
            name: "Popular Question",
            description: "Question viewed 1000+ times",
            earned: false,
        },
        Achievement {
            name: "Guru",
            description: "Reached 1000 reputation",
            earned: true,
        },
    ]
}

/// Dashboard page at `/dashboard`.
/// Redirects to `/login` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    // Redirect to login if not authenticated.
    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    let time_range = RwSignal::new(TimeRange::Week);

    let range_class = move |range: TimeRange| {
        if time_range.get() == range {
            "btn btn--primary btn--sm"
        } else {
            "btn btn--outline btn--sm"
        }
    };

    view! {
        <div class="dashboard-page">
            <Navbar/>

            <div class="dashboard-page__inner">
                <header class="dashboard-page__header">
                    <div>
                        <h1>"Dashboard"</h1>
                        <p class="dashboard-page__welcome">
                            "Welcome back! Here's your activity summary."
                        </p>
                    </div>
                    <div class="dashboard-page__range">
                        <button
                            class=move || range_class(TimeRange::Week)
                            on:click=move |_| time_range.set(TimeRange::Week)
                        >
                            "This Week"
                        </button>
                        <button
                            class=move || range_class(TimeRange::Month)
                            on:click=move |_| time_range.set(TimeRange::Month)
                        >
                            "This Month"
                        </button>
                    </div>
                </header>

                <div class="dashboard-page__stats">
                    <StatCard icon="💬" value=24 label="Questions"/>
                    <StatCard icon="💬" value=67 label="Answers"/>
                    <StatCard icon="📈" value=1247 label="Reputation"/>
                    <StatCard icon="✓" value=23 label="Accepted"/>
                    <StatCard icon="⬆" value=156 label="Upvotes"/>
                    <StatCard icon="🏅" value=8 label="Badges"/>
                </div>

                <div class="dashboard-page__columns">
                    <section class="card">
                        <header class="card__header">
                            <h2>"Your Recent Questions"</h2>
                            <a href="/questions" class="form__link">"View All ›"</a>
                        </header>
                        <div class="card__body">
                            {recent_questions()
                                .into_iter()
                                .map(|q| view! { <QuestionCard question=q/> })
                                .collect::<Vec<_>>()}
                        </div>
                    </section>

                    <div class="dashboard-page__side">
                        <section class="card">
                            <header class="card__header">
                                <h2>"Recent Activity"</h2>
                                <p class="card__description">
                                    "Your latest contributions and achievements"
                                </p>
                            </header>
                            <div class="card__body">
                                {recent_activity()
                                    .into_iter()
                                    .map(|a| {
                                        view! {
                                            <div class="activity-row">
                                                <span class="activity-row__icon">{a.icon}</span>
                                                <div class="activity-row__text">
                                                    <p>{a.title}</p>
                                                    <p class="activity-row__time">{a.time_ago}</p>
                                                </div>
                                                <span class="badge badge--secondary">{a.points}</span>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>

                        <section class="card">
                            <header class="card__header">
                                <h2>"Achievements"</h2>
                                <p class="card__description">
                                    "Badges and milestones you've unlocked"
                                </p>
                            </header>
                            <div class="card__body">
                                {achievements()
                                    .into_iter()
                                    .map(|a| {
                                        let icon_class = if a.earned {
                                            "achievement-row__icon achievement-row__icon--earned"
                                        } else {
                                            "achievement-row__icon"
                                        };
                                        view! {
                                            <div class="achievement-row">
                                                <span class=icon_class>"🏅"</span>
                                                <div>
                                                    <p class="achievement-row__name">{a.name}</p>
                                                    <p class="achievement-row__description">
                                                        {a.description}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    </div>
                </div>
            </div>
        </div>
    }
}
