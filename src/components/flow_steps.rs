//! Four-step pipeline diagram for the assessment flow.

use leptos::prelude::*;

/// Pipeline stages in processing order.
const FLOW_STEPS: &[(&str, &str)] = &[
    ("Input", "User types symptoms or a journal entry"),
    ("Preprocess", "Lowercase the text and match keywords"),
    ("Assess", "Rule-based scoring for stress, anxiety and mood"),
    ("Result", "Score, label and keywords shown, then saved to history"),
];

/// Step grid rendered inside the flow section.
#[component]
pub fn FlowSteps() -> impl IntoView {
    view! {
        <div class="flow-steps">
            {FLOW_STEPS
                .iter()
                .enumerate()
                .map(|(i, &(name, detail))| {
                    view! {
                        <div class="flow-steps__step">
                            <div class="flow-steps__badge">{format!("Step {}", i + 1)}</div>
                            <div class="flow-steps__name">{name}</div>
                            <div class="flow-steps__detail">{detail}</div>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
