//! Top navigation bar with search, nav links, dark-mode toggle, and a
//! collapsible mobile menu.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::state::auth::AuthState;
use crate::state::ui::UiState;
use crate::util::dark_mode;

/// Sticky navbar shown on every page.
///
/// Initializes the dark-mode preference from localStorage on mount and
/// toggles it from the sun/moon button. The mobile menu mirrors the
/// desktop links.
#[component]
pub fn Navbar() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();
    let auth = expect_context::<RwSignal<AuthState>>();

    // Apply the persisted theme once the browser is available.
    Effect::new(move || {
        let enabled = dark_mode::read_preference();
        dark_mode::apply(enabled);
        ui.update(|u| u.dark_mode = enabled);
    });

    let on_toggle_theme = move |_| {
        ui.update(|u| u.dark_mode = dark_mode::toggle(u.dark_mode));
    };

    let on_toggle_menu = move |_| {
        ui.update(|u| u.menu_open = !u.menu_open);
    };

    let theme_icon = move || if ui.get().dark_mode { "☀" } else { "☾" };
    let menu_icon = move || if ui.get().menu_open { "✕" } else { "☰" };

    let on_logout = move |_| {
        crate::util::session::clear();
        auth.update(|a| a.session = None);
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <A href="/" attr:class="navbar__brand">
                    <span class="navbar__logo">"S"</span>
                    <span class="navbar__name">"StackIt"</span>
                </A>

                <div class="navbar__search">
                    <input type="text" placeholder="Search questions..." class="navbar__search-input"/>
                </div>

                <div class="navbar__links">
                    <A href="/questions" attr:class="navbar__link">"Questions"</A>
                    <A href="/dashboard" attr:class="navbar__link">"Dashboard"</A>
                    <A href="/profile" attr:class="navbar__link">"Profile"</A>
                    <A href="/ask" attr:class="btn btn--primary">"Ask Question"</A>
                    <button class="navbar__bell" title="Notifications">
                        "🔔" <span class="navbar__bell-count">"3"</span>
                    </button>
                    <button class="navbar__theme" on:click=on_toggle_theme title="Toggle theme">
                        {theme_icon}
                    </button>
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| view! { <A href="/login" attr:class="btn btn--outline">"Login"</A> }
                    >
                        <button class="btn btn--outline" on:click=on_logout>"Logout"</button>
                    </Show>
                </div>

                <button class="navbar__menu-toggle" on:click=on_toggle_menu>
                    {menu_icon}
                </button>
            </div>

            <Show when=move || ui.get().menu_open>
                <div class="navbar__mobile">
                    <input type="text" placeholder="Search questions..." class="navbar__search-input"/>
                    <A href="/questions" attr:class="navbar__link">"Questions"</A>
                    <A href="/ask" attr:class="btn btn--primary">"Ask Question"</A>
                    <button class="navbar__theme" on:click=on_toggle_theme>
                        {theme_icon} " Toggle theme"
                    </button>
                    <Show
                        when=move || auth.get().is_authenticated()
                        fallback=|| view! { <A href="/login" attr:class="btn btn--outline">"Login"</A> }
                    >
                        <button class="btn btn--outline" on:click=on_logout>"Logout"</button>
                    </Show>
                </div>
            </Show>
        </nav>
    }
}
