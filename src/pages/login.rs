//! Login page: email + password form with the submit/normalize flow.

use leptos::prelude::*;

use crate::components::navbar::Navbar;
use crate::components::password_field::PasswordField;
use crate::state::auth::AuthState;
use crate::state::forms::{LoginForm, SubmissionGate};
use crate::state::toast::{ToastState, ToastVariant};

/// Login page at `/login`.
///
/// Submission is guarded by a pending flag: a second submit while a
/// request is in flight is a no-op, and the flag clears on every
/// settlement path before any navigation happens.
#[component]
pub fn LoginPage() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let gate = RwSignal::new(SubmissionGate::default());

    #[cfg(feature = "hydrate")]
    let navigate = leptos_router::hooks::use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        // Re-entrant submits while a request is in flight are no-ops.
        if gate.get_untracked().is_pending() {
            return;
        }

        let form = LoginForm {
            email: email.get_untracked(),
            password: password.get_untracked(),
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
                let outcome = crate::net::api::login(&form.email, &form.password).await;
                let result = crate::net::outcome::normalize(
                    crate::net::outcome::FormKind::Login,
                    &outcome,
                );

                if let Some(session) = &result.session {
                    crate::util::session::store(session);
                    auth.update(|a| a.session = Some(session.clone()));
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
            let _ = (&form, auth);
            gate.update(SubmissionGate::finish);
        }
    };

    let on_social = move |provider: &'static str| {
        toasts.update(|t| {
            t.show(
                format!("{provider} Login"),
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
                    <h1 class="auth-page__title">"Welcome Back"</h1>
                    <p class="auth-page__subtitle">"Sign in to your StackIt account"</p>
                </div>

                <div class="auth-page__social">
                    <button class="btn btn--outline" on:click=move |_| on_social("Google")>
                        "Continue with Google"
                    </button>
                    <button class="btn btn--outline" on:click=move |_| on_social("GitHub")>
                        "Continue with GitHub"
                    </button>
                </div>

                <div class="auth-page__divider">"Or continue with email"</div>

                <form class="form" on:submit=on_submit>
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
                        placeholder="Enter your password"
                        value=password
                    />

                    <div class="form__row">
                        <label class="form__checkbox">
                            <input type="checkbox"/>
                            "Remember me"
                        </label>
                        <a href="/forgot-password" class="form__link">"Forgot password?"</a>
                    </div>

                    <button
                        type="submit"
                        class="btn btn--primary btn--block"
                        disabled=move || gate.get().is_pending()
                    >
                        {move || if gate.get().is_pending() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <p class="auth-page__footer">
                    "Don't have an account? "
                    <a href="/signup" class="form__link">"Sign up"</a>
                </p>
            </div>
        </div>
    }
}
