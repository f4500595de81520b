//! Profile page: header with edit mode, stat strip, and tabbed content.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::question_card::{QuestionCard, QuestionSummary};
use crate::state::toast::{ToastState, ToastVariant};
use crate::state::ui::ProfileTab;

/// Editable profile fields. Sample data until the profile API lands.
#[derive(Clone, Debug)]
struct ProfileData {
    display_name: String,
    username: String,
    bio: String,
}

impl Default for ProfileData {
    fn default() -> Self {
        Self {
            display_name: "John Doe".to_owned(),
            username: "johndoe".to_owned(),
            bio: "Full-stack developer passionate about React, Node.js, and clean code. \
                  Always excited to help fellow developers solve challenging problems."
                .to_owned(),
        }
    }
}

struct ProfileBadge {
    name: &'static str,
    tier: &'static str,
    description: &'static str,
}

fn badges() -> Vec<ProfileBadge> {
    vec![
        ProfileBadge {
            name: "First Question",
            tier: "bronze",
            description: "Asked your first question",
        },
        ProfileBadge {
            name: "Helpful Answer",
            tier: "silver",
            description: "Got 10 upvotes on an answer",
        },
        ProfileBadge {
            name: "Guru",
            tier: "gold",
            description: "Reached 1000 reputation",
        },
        ProfileBadge {
            name: "Commentator",
            tier: "bronze",
            description: "Left 10 comments",
        },
        ProfileBadge {
            name: "Popular Question",
            tier: "silver",
            description: "Question viewed 1000+ times",
        },
        ProfileBadge {
            name: "Teacher",
            tier: "bronze",
            description: "Answer score of 1 or more",
        },
    ]
}

fn recent_questions() -> Vec<QuestionSummary> {
    vec![
        QuestionSummary {
            title: "How to implement JWT authentication in React?",
            votes: 12,
            answers: 3,
            views: None,
            tags: &["React", "JWT", "Authentication"],
            answered: true,
            time_ago: "2 hours ago",
        },
        QuestionSummary {
            title: "Best practices for TypeScript error handling",
            votes: 8,
            answers: 1,
            views: None,
            tags: &["TypeScript", "Error Handling"],
            answered: false,
            time_ago: "1 day ago",
        },
        QuestionSummary {
            title: "Optimizing React performance with useMemo",
            votes: 15,
            answers: 5,
            views: None,
            tags: &["React", "Performance"],
            answered: true,
            time_ago: "3 days ago",
        },
    ]
}

const STATS: [(&str, u32); 6] = [
    ("Reputation", 1247),
    ("Questions", 24),
    ("Answers", 67),
    ("Badges", 8),
    ("Upvotes", 156),
    ("Accepted", 23),
];

/// Profile page at `/profile`.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let profile = RwSignal::new(ProfileData::default());
    let editing = RwSignal::new(false);

    // Draft fields bound while editing; copied into `profile` on save.
    let draft_name = RwSignal::new(String::new());
    let draft_username = RwSignal::new(String::new());
    let draft_bio = RwSignal::new(String::new());

    let on_edit = move |_| {
        let data = profile.get_untracked();
        draft_name.set(data.display_name);
        draft_username.set(data.username);
        draft_bio.set(data.bio);
        editing.set(true);
    };

    let on_save = move |_| {
        profile.update(|p| {
            p.display_name = draft_name.get_untracked();
            p.username = draft_username.get_untracked();
            p.bio = draft_bio.get_untracked();
        });
        editing.set(false);
        toasts.update(|t| {
            t.show(
                "Profile Updated",
                "Your profile has been successfully updated.",
                ToastVariant::Default,
            );
        });
    };

    let on_cancel = move |_| editing.set(false);

    let tab = RwSignal::new(ProfileTab::Activity);
    let tab_class = move |t: ProfileTab| {
        if tab.get() == t {
            "tabs__trigger tabs__trigger--active"
        } else {
            "tabs__trigger"
        }
    };

    let initials = move || {
        profile
            .get()
            .display_name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .collect::<String>()
    };

    view! {
        <div class="profile-page">
            <Navbar/>

            <div class="profile-page__inner">
                <section class="card profile-header">
                    <div class="profile-header__avatar">{initials}</div>

                    <div class="profile-header__info">
                        <div class="profile-header__top">
                            <Show
                                when=move || editing.get()
                                fallback=move || {
                                    view! {
                                        <div>
                                            <h1>{move || profile.get().display_name}</h1>
                                            <p class="profile-header__username">
                                                {move || format!("@{}", profile.get().username)}
                                            </p>
                                        </div>
                                    }
                                }
                            >
                                <div class="profile-header__edit-fields">
                                    <input
                                        class="form__input"
                                        type="text"
                                        prop:value=move || draft_name.get()
                                        on:input=move |ev| draft_name.set(event_target_value(&ev))
                                    />
                                    <input
                                        class="form__input"
                                        type="text"
                                        placeholder="@username"
                                        prop:value=move || draft_username.get()
                                        on:input=move |ev| draft_username.set(event_target_value(&ev))
                                    />
                                </div>
                            </Show>

                            <div class="profile-header__actions">
                                <Show
                                    when=move || editing.get()
                                    fallback=move || {
                                        view! {
                                            <button class="btn btn--outline btn--sm" on:click=on_edit>
                                                "Edit Profile"
                                            </button>
                                        }
                                    }
                                >
                                    <button class="btn btn--primary btn--sm" on:click=on_save>
                                        "Save"
                                    </button>
                                    <button class="btn btn--outline btn--sm" on:click=on_cancel>
                                        "Cancel"
                                    </button>
                                </Show>
                            </div>
                        </div>

                        <Show
                            when=move || editing.get()
                            fallback=move || {
                                view! { <p class="profile-header__bio">{move || profile.get().bio}</p> }
                            }
                        >
                            <textarea
                                class="form__input"
                                rows="3"
                                prop:value=move || draft_bio.get()
                                on:input=move |ev| draft_bio.set(event_target_value(&ev))
                            ></textarea>
                        </Show>

                        <div class="profile-header__contact">
                            <span>"✉ john.doe@example.com"</span>
                            <span>"📍 San Francisco, CA"</span>
                            <span>"📅 Joined January 2023"</span>
                        </div>

                        <div class="profile-header__links">
                            <a href="https://johndoe.dev" class="form__link">"Website"</a>
                            <a href="https://github.com/johndoe" class="form__link">"GitHub"</a>
                            <a href="https://twitter.com/johndoe_dev" class="form__link">"Twitter"</a>
                        </div>

                        <div class="profile-header__stats">
                            {STATS
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="profile-header__stat">
                                            <div class="profile-header__stat-value">{value}</div>
                                            <div class="profile-header__stat-label">{label}</div>
                                        </div>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </div>
                    </div>
                </section>

                <div class="tabs">
                    <div class="tabs__list">
                        <button class=move || tab_class(ProfileTab::Activity) on:click=move |_| tab.set(ProfileTab::Activity)>
                            "Activity"
                        </button>
                        <button class=move || tab_class(ProfileTab::Questions) on:click=move |_| tab.set(ProfileTab::Questions)>
                            "Questions"
                        </button>
                        <button class=move || tab_class(ProfileTab::Answers) on:click=move |_| tab.set(ProfileTab::Answers)>
                            "Answers"
                        </button>
                        <button class=move || tab_class(ProfileTab::Badges) on:click=move |_| tab.set(ProfileTab::Badges)>
                            "Badges"
                        </button>
                    </div>

                    <Show when=move || tab.get() == ProfileTab::Activity>
                        <section class="card">
                            <header class="card__header">
                                <h2>"Recent Activity"</h2>
                                <p class="card__description">"Your latest questions and answers"</p>
                            </header>
                            <div class="card__body">
                                {recent_questions()
                                    .into_iter()
                                    .map(|q| view! { <QuestionCard question=q/> })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    </Show>

                    <Show when=move || tab.get() == ProfileTab::Questions>
                        <section class="card">
                            <header class="card__header">
                                <h2>"Your Questions (24)"</h2>
                            </header>
                            <p class="card__placeholder">"Questions list would be displayed here."</p>
                        </section>
                    </Show>

                    <Show when=move || tab.get() == ProfileTab::Answers>
                        <section class="card">
                            <header class="card__header">
                                <h2>"Your Answers (67)"</h2>
                            </header>
                            <p class="card__placeholder">"Answers list would be displayed here."</p>
                        </section>
                    </Show>

                    <Show when=move || tab.get() == ProfileTab::Badges>
                        <section class="card">
                            <header class="card__header">
                                <h2>"Badges & Achievements"</h2>
                                <p class="card__description">
                                    "Recognition for your contributions to the community"
                                </p>
                            </header>
                            <div class="card__body badges-grid">
                                {badges()
                                    .into_iter()
                                    .map(|badge| {
                                        let tier_class = match badge.tier {
                                            "gold" => "badge badge--gold",
                                            "silver" => "badge badge--silver",
                                            _ => "badge badge--bronze",
                                        };
                                        view! {
                                            <div class="badge-row">
                                                <span class="badge-row__icon">"🏅"</span>
                                                <div>
                                                    <p class="badge-row__name">
                                                        {badge.name}
                                                        <span class=tier_class>{badge.tier}</span>
                                                    </p>
                                                    <p class="badge-row__description">
                                                        {badge.description}
                                                    </p>
                                                </div>
                                            </div>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        </section>
                    </Show>
                </div>
            </div>
        </div>
    }
}
