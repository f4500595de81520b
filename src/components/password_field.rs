//! Password input with a show/hide toggle, shared by login and signup.

use leptos::prelude::*;

/// Labeled password input bound to `value`, with an eye button that
/// flips the input between `password` and `text`.
#[component]
pub fn PasswordField(
    /// Field label shown above the input.
    label: &'static str,
    /// Placeholder text inside the input.
    placeholder: &'static str,
    /// Bound field value.
    value: RwSignal<String>,
) -> impl IntoView {
    let visible = RwSignal::new(false);

    let input_type = move || if visible.get() { "text" } else { "password" };
    let eye = move || if visible.get() { "🙈" } else { "👁" };

    view! {
        <label class="form__label">
            {label}
            <div class="form__password-wrap">
                <input
                    class="form__input"
                    type=input_type
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    type="button"
                    class="form__password-toggle"
                    on:click=move |_| visible.update(|v| *v = !*v)
                >
                    {eye}
                </button>
            </div>
        </label>
    }
}
