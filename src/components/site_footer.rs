//! Page footer.

use leptos::prelude::*;

/// Footer line shown under all sections.
#[component]
pub fn SiteFooter() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <p class="site-footer__note">"Built for practical exams • Demo purpose only"</p>
        </footer>
    }
}
