//! Top navigation bar with anchor links to the page sections.

use leptos::prelude::*;

/// Section anchors shown in the header, in page order.
const NAV_LINKS: &[(&str, &str)] = &[
    ("#intro", "Intro"),
    ("#objective", "Objective"),
    ("#tech", "Technology"),
    ("#flow", "Flowchart"),
    ("#dataset", "Dataset"),
    ("#impl", "Implementation"),
    ("#tests", "Tests"),
    ("#conclusion", "Conclusion"),
];

/// Header with the brand and in-page navigation.
#[component]
pub fn SiteHeader() -> impl IntoView {
    view! {
        <header class="site-header">
            <a class="site-header__brand" href="#top">"MindGauge"</a>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .iter()
                    .map(|&(href, label)| {
                        view! {
                            <a class="site-header__link" href=href>
                                {label}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </nav>
        </header>
    }
}
