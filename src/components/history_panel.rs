//! Panel listing recent assessments fetched from the scoring service.

#[cfg(test)]
#[path = "history_panel_test.rs"]
mod history_panel_test;

use leptos::prelude::*;

use crate::state::assess::AssessState;

/// Placeholder shown before any assessment has been recorded.
const EMPTY_HISTORY_TEXT: &str = "No history available yet.";

/// Recent-assessments panel.
///
/// Renders whatever history the shared widget state currently holds; the
/// demo panel is responsible for refreshing it.
#[component]
pub fn HistoryPanel() -> impl IntoView {
    let demo = expect_context::<RwSignal<AssessState>>();

    view! {
        <div class="history-panel">
            <h3 class="history-panel__title">"Recent assessments"</h3>
            <div class="history-panel__entries">
                {move || {
                    let entries = demo.get().history;
                    if entries.is_empty() {
                        return view! {
                            <div class="history-panel__empty">{EMPTY_HISTORY_TEXT}</div>
                        }
                            .into_any();
                    }

                    entries
                        .iter()
                        .map(|entry| {
                            let text = entry.text.clone();
                            let summary = entry_summary(&entry.label, entry.score);
                            let keywords = joined_keywords(&entry.keywords);
                            view! {
                                <div class="history-panel__entry">
                                    <div class="history-panel__text">{text}</div>
                                    <div class="history-panel__summary">{summary}</div>
                                    {keywords
                                        .map(|kw| {
                                            view! {
                                                <div class="history-panel__keywords">{kw}</div>
                                            }
                                        })}
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()
                        .into_any()
                }}
            </div>
        </div>
    }
}

/// One-line label and score summary for a history entry.
fn entry_summary(label: &str, score: f64) -> String {
    format!("{label} • {score}")
}

/// Comma-joined keyword list, or `None` when there is nothing to show.
pub(crate) fn joined_keywords(keywords: &[String]) -> Option<String> {
    if keywords.is_empty() {
        None
    } else {
        Some(keywords.join(", "))
    }
}
