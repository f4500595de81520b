//! Signup page: registration form with local validation ahead of the
//! network call and a live password-requirements checklist.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::password_field::PasswordField;
use crate::state::forms::{SignupForm, SubmissionGate};
use crate::state::toast::{ToastState, ToastVariant};

/// Signup page at `/signup`.
///
/// Validation runs before any network call; an invalid form never
/// leaves the browser. The pending flag guards against duplicate
/// in-flight registrations.
#[component]
pub fn SignupPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    let username = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm_password = RwSignal::new(String::new());
    let agreed_to_terms = RwSignal::new(false);
    let gate = RwSignal::new(SubmissionGate::default());

    let current_form = move || SignupForm {
        username: username.get(),
        email: email.get(),
        password: password.get(),
        confirm_password: confirm_password.get(),
        agreed_to_terms: agreed_to_terms.get(),
    };

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Re-entrant submits while a request is in flight are no-ops.
        if gate.get_untracked().is_pending() {
            return;
        }

        let form = SignupForm {
            username: username.get_untracked(),
            email: email.get_untracked(),
            password: password.get_untracked(),
            confirm_password: confirm_password.get_untracked(),
            agreed_to_terms: agreed_to_terms.get_untracked(),
        };
        if let Err(reason) = form.validate() {
            toasts.update(|t| t.show(reason.title(), reason.message(), ToastVariant::Destructive));
            return;
        }

        if !gate.try_update(SubmissionGate::try_begin).unwrap_or(false) {
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::register(
                    &form.username,
                    &form.email,
                    &form.password,
                    &form.confirm_password,
                )
                .await;
                let result = crate::net::outcome::normalize(
                    crate::net::outcome::FormKind::Signup,
                    &outcome,
                );

                // The backend may auto-login by returning a token.
                if let Some(session) = &result.session {
                    crate::util::session::store(session);
                }

                let variant = if result.success {
                    ToastVariant::Default
                } else {
                    ToastVariant::Destructive
                };
                toasts.update(|t| t.show(result.title.clone(), result.message.clone(), variant));

                // Release the gate before navigating away.
                gate.update(SubmissionGate::finish);
                if let Some(to) = result.redirect {
                    navigate(to, leptos_router::NavigateOptions::default());
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &form;
            gate.update(SubmissionGate::finish);
        }
    };

    let on_social = move |provider: &'static str| {
        toasts.update(|t| {
            t.show(
                format!("{provider} Signup"),
                format!("{provider} authentication would be implemented here."),
                ToastVariant::Default,
            );
        });
    };

    view! {
        <div class="auth-page">
            <Navbar/>

            <div class="auth-page__card card">
                <div class="auth-page__header">
                    <span class="auth-page__logo">"S"</span>
                    <h1 class="auth-page__title">"Join StackIt"</h1>
                    <p class="auth-page__subtitle">
                        "Create your account and start sharing knowledge"
                    </p>
                </div>

                <div class="auth-page__social">
                    <button class="btn btn--outline" on:click=move |_| on_social("Google")>
                        "Continue with Google"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| on_social("GitHub")>
                        "Continue with GitHub"
                    </button>
                </div>

                <div class="auth-page__divider">"Or create account with email"</div>

                <form class="form" on:submit=on_submit>
                    <label class="form__label">
                        "Username"
                        <input
                            class="form__input"
                            type="text"
                            placeholder="Choose a username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                        />
                    </label>

                    <label class="form__label">
                        "Email"
                        <input
                            class="form__input"
                            type="email"
                            placeholder="Enter your email"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>

                    <PasswordField
                        label="Password"
                        placeholder="Create a password"
                        value=password
                    />

                    <Show when=move || !password.get().is_empty()>
                        <ul class="form__requirements">
                            {move || {
                                current_form()
                                    .password_requirements()
                                    .into_iter()
                                    .map(|(met, text)| {
                                        let class = if met {
                                            "form__requirement form__requirement--met"
                                        } else {
                                            "form__requirement"
                                        };
                                        view! { <li class=class>{text}</li> }
                                    })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </Show>

                    <PasswordField
                        label="Confirm Password"
                        placeholder="Confirm your password"
                        value=confirm_password
                    />

                    <label class="form__checkbox">
                        <input
                            type="checkbox"
                            prop:checked=move || agreed_to_terms.get()
                            on:change=move |ev| agreed_to_terms.set(event_target_checked(&ev))
                        />
                        <span>
                            "I agree to the "
                            <a href="/terms" class="form__link">"Terms of Service"</a>
                            " and "
                            <a href="/privacy" class="form__link">"Privacy Policy"</a>
                        </span>
                    </label>

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        disabled=move || gate.get().is_pending()
                    >
                        {move || {
                            if gate.get().is_pending() { "Creating Account..." } else { "Create Account" }
                        }}
                    </button>
                </form>

                <p class="auth-page__footer">
                    "Already have an account? "
                    <a href="/login" class="form__link">"Sign in"</a>
                </p>
            </div>
        </div>
    }
}
