use std::rc::Rc;
use yew::prelude::*;

use wasm_bindgen_futures::spawn_local;

use crate::models::reading::ReadingSeries;
use crate::services::api::fetch_motion;
use crate::services::summary::generate_summary;

#[derive(Clone, PartialEq, Debug)]
pub enum SummaryState {
    Idle,
    Loading,
    Loaded(String),
    Error(String),
}

/// Handle returned by the `use_summary` hook
#[derive(Clone, PartialEq)]
pub struct SummaryHandle {
    pub state: SummaryState,
    pub generate: Callback<()>,
}

/// On-demand narrative summary of the loaded readings.
///
/// Generation posts the hourly temperature series together with the motion
/// feed (fetched lazily here, since nothing else consumes it) and stores the
/// returned markdown.
#[hook]
pub fn use_summary(readings: Option<Rc<ReadingSeries>>) -> SummaryHandle {
    let state = use_state(|| SummaryState::Idle);

    let generate = {
        let state = state.clone();
        Callback::from(move |()| {
            let Some(readings) = readings.clone() else {
                gloo::console::warn!("Summary requested before readings loaded");
                return;
            };

            let state = state.clone();
            state.set(SummaryState::Loading);

            spawn_local(async move {
                let result = async {
                    let motion = fetch_motion().await?;
                    generate_summary(readings.readings(), &motion).await
                }
                .await;

                match result {
                    Ok(summary) => state.set(SummaryState::Loaded(summary)),
                    Err(e) => {
                        gloo::console::error!(format!("Summary generation failed: {e}"));
                        state.set(SummaryState::Error(e.to_string()));
                    }
                }
            });
        })
    };

    SummaryHandle {
        state: (*state).clone(),
        generate,
    }
}
