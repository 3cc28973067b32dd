//! Landing hero introducing the assistant.

use leptos::prelude::*;

/// Hero banner with the project title and a link into the live demo.
#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero" id="top">
            <h1 class="hero__title">"Stress & Mood Assessment Assistant"</h1>
            <p class="hero__tagline">
                "Healthcare-inspired AI that analyzes your text for stress and mood indicators."
            </p>
            <a class="btn btn--primary hero__cta" href="#demo">"Try the Demo"</a>
        </section>
    }
}
