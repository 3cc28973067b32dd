//! Anchored content card used for the descriptive page sections.

use leptos::prelude::*;

/// A titled card the header navigation anchors to.
#[component]
pub fn SectionCard(id: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <section class="section-card" id=id>
            <h2 class="section-card__title">{title}</h2>
            <div class="section-card__body">{children()}</div>
        </section>
    }
}
