//! Small stat tile used in the dashboard stats grid.

use leptos::prelude::*;

/// One icon + number + label tile.
#[component]
pub fn StatCard(icon: &'static str, value: u32, label: &'static str) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <span class="stat-card__icon">{icon}</span>
            <div>
                <p class="stat-card__value">{value}</p>
                <p class="stat-card__label">{label}</p>
            </div>
        </div>
    }
}
