//! Renders the current toast, if any.

use leptos::prelude::*;

use crate::state::toast::{ToastState, ToastVariant};

/// Toast overlay. Shows the latest message from `ToastState` with a
/// dismiss button; validation and submission messages both arrive here.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<RwSignal<ToastState>>();

    view! {
        <Show when=move || toasts.get().current.is_some()>
            {move || {
                toasts
                    .get()
                    .current
                    .map(|toast| {
                        let class = match toast.variant {
                            ToastVariant::Default => "toast",
                            ToastVariant::Destructive => "toast toast--destructive",
                        };
                        view! {
                            <div class=class>
                                <div class="toast__body">
                                    <p class="toast__title">{toast.title}</p>
                                    <p class="toast__message">{toast.message}</p>
                                </div>
                                <button
                                    class="toast__dismiss"
                                    on:click=move |_| toasts.update(ToastState::dismiss)
                                >
                                    "✕"
                                </button>
                            </div>
                        }
                    })
            }}
        </Show>
    }
}
