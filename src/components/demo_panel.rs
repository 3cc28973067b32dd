//! Live assessment form posting free text to the scoring service.
//!
//! DESIGN
//! ======
//! The form drives the shared [`AssessState`] through its pure transitions:
//! begin on submit, finish on reply. Failures are logged and otherwise
//! swallowed; the previous result stays on screen. Every successful
//! submission triggers one history refresh, tagged with a generation token
//! so a slow earlier fetch cannot overwrite a newer list.

#[cfg(test)]
#[path = "demo_panel_test.rs"]
mod demo_panel_test;

use leptos::prelude::*;

use crate::components::history_panel::joined_keywords;
use crate::config::ApiConfig;
use crate::state::assess::AssessState;

/// Prefilled sample sentence so the demo is one click away.
const DEFAULT_DEMO_TEXT: &str =
    "I feel overwhelmed with workload and a bit anxious, hard to sleep.";

/// Demo form: a textarea, a submit control, and the latest result.
#[component]
pub fn DemoPanel() -> impl IntoView {
    let demo = expect_context::<RwSignal<AssessState>>();
    let config = expect_context::<ApiConfig>();

    let input = RwSignal::new(DEFAULT_DEMO_TEXT.to_owned());

    // Initial history load on mount.
    spawn_history_refresh(demo, config.clone());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if demo.get().is_submitting() {
            return;
        }
        demo.update(AssessState::begin_submit);

        #[cfg(feature = "hydrate")]
        {
            let text = input.get();
            let config = config.clone();
            leptos::task::spawn_local(async move {
                let outcome = crate::net::api::assess(&config, &text).await;
                if let Err(e) = &outcome {
                    log::error!("assess request failed: {e}");
                }
                let succeeded = outcome.is_ok();
                demo.update(|s| s.finish_submit(outcome));
                if succeeded {
                    spawn_history_refresh(demo, config);
                }
            });
        }
    };

    view! {
        <div class="demo-panel">
            <h3 class="demo-panel__title">"Enter text"</h3>
            <form class="demo-panel__form" on:submit=on_submit>
                <textarea
                    class="demo-panel__input"
                    rows="6"
                    prop:value=move || input.get()
                    on:input=move |ev| input.set(event_target_value(&ev))
                >
                    // Plain-text initial value; prop:value takes over after
                    // hydration.
                    {input.get_untracked()}
                </textarea>
                <button
                    class="btn btn--primary demo-panel__submit"
                    type="submit"
                    disabled=move || demo.get().is_submitting()
                >
                    {move || submit_button_label(demo.get().is_submitting())}
                </button>
            </form>
            {move || {
                demo.get()
                    .result
                    .map(|result| {
                        let keywords = joined_keywords(&result.keywords);
                        view! {
                            <div class="demo-panel__result">
                                <div class="demo-panel__label">
                                    {format!("Result: {}", result.label)}
                                </div>
                                <div class="demo-panel__score">
                                    {format!("Score: {}", result.score)}
                                </div>
                                {keywords
                                    .map(|kw| {
                                        view! {
                                            <div class="demo-panel__keywords">
                                                {format!("Keywords: {kw}")}
                                            </div>
                                        }
                                    })}
                            </div>
                        }
                    })
            }}
        </div>
    }
}

/// Submit control label for the given in-flight state.
fn submit_button_label(submitting: bool) -> &'static str {
    if submitting { "Assessing..." } else { "Assess" }
}

/// Start a history fetch and apply the reply unless a newer fetch has been
/// issued in the meantime. No-op on the server.
fn spawn_history_refresh(demo: RwSignal<AssessState>, config: ApiConfig) {
    #[cfg(feature = "hydrate")]
    {
        let epoch = demo
            .try_update(AssessState::begin_history_fetch)
            .unwrap_or_default();
        leptos::task::spawn_local(async move {
            let outcome = crate::net::api::fetch_history(&config).await;
            if let Err(e) = &outcome {
                log::warn!("history request failed: {e}");
            }
            demo.update(|s| {
                s.apply_history(epoch, outcome);
            });
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (demo, config);
    }
}
