//! Marketing landing page: hero, features, and trending topics.

use leptos::prelude::*;

use crate::components::features_section::FeaturesSection;
use crate::components::hero_section::HeroSection;
use crate::components::navbar::Navbar;
use crate::components::popular_topics::PopularTopics;

/// Landing page at `/`.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <Navbar/>
            <HeroSection/>
            <FeaturesSection/>
            <PopularTopics/>
        </div>
    }
}
