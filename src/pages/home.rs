//! Landing page assembling the presentation shell and the live demo.

use leptos::prelude::*;

use crate::components::demo_panel::DemoPanel;
use crate::components::flow_steps::FlowSteps;
use crate::components::hero::Hero;
use crate::components::history_panel::HistoryPanel;
use crate::components::section_card::SectionCard;
use crate::components::site_footer::SiteFooter;
use crate::components::site_header::SiteHeader;

/// The single page: header, hero, descriptive sections and the demo widget.
///
/// The demo sits between the flow and dataset sections so the hero's
/// `#demo` link and the implementation card's reference to the history
/// panel both land correctly.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <SiteHeader/>
            <Hero/>

            <SectionCard id="intro" title="Introduction">
                <p>
                    "This mini-project demonstrates an AI-powered assistant that analyzes free \
                     text for stress and mood indicators. It is designed for healthcare and \
                     educational contexts, pairing a presentation-ready page with simple natural \
                     language analysis."
                </p>
            </SectionCard>

            <SectionCard id="objective" title="Need / Objective of the project">
                <ul>
                    <li>"Offer a quick preliminary screening to raise self-awareness."</li>
                    <li>"Assist educators and clinicians with a simple triage tool."</li>
                    <li>
                        "Demonstrate end-to-end AI app development (frontend + scoring service)."
                    </li>
                </ul>
            </SectionCard>

            <SectionCard id="tech" title="Technology used (software details)">
                <ul>
                    <li>"Frontend: Leptos compiled to WebAssembly"</li>
                    <li>"Server: Axum serving the rendered shell and the compiled bundle"</li>
                    <li>"Scoring: external rule-based HTTP service (assess + history endpoints)"</li>
                </ul>
            </SectionCard>

            <SectionCard id="flow" title="Flowchart">
                <FlowSteps/>
            </SectionCard>

            <section id="demo" class="demo-section">
                <div class="demo-section__grid">
                    <DemoPanel/>
                    <HistoryPanel/>
                </div>
            </section>

            <SectionCard id="dataset" title="Dataset used, ER diagrams (if any)">
                <p>
                    "For this demo, the model is rule-based and does not require a dataset. If \
                     extended, you can fine-tune on publicly available mental-health text \
                     datasets and design an ER model with entities like User, Assessment, \
                     Session, and Keyword."
                </p>
            </SectionCard>

            <SectionCard id="impl" title="Implementation: main code screenshots">
                <p>
                    "The scoring service exposes an endpoint that accepts text, computes a \
                     stress score using weighted keywords, and returns a label with matched \
                     keywords. Saved results are shown in the history panel above."
                </p>
            </SectionCard>

            <SectionCard id="tests" title="Test cases (if done)">
                <ul>
                    <li>"Input with no keywords → Minimal"</li>
                    <li>"Mixed mild terms (tired, down) → Low"</li>
                    <li>"Multiple strong terms (overwhelmed, panic, depressed) → High"</li>
                </ul>
            </SectionCard>

            <SectionCard id="conclusion" title="Conclusion">
                <p>
                    "A working, presentation-ready AI mini-project with a live demo, visual \
                     flow, and documented sections. Expand it by training a model and adding \
                     authentication and role-based access."
                </p>
            </SectionCard>

            <SiteFooter/>
        </div>
    }
}
