use std::rc::Rc;
use yew::prelude::*;

use crate::config::Config;
use crate::models::reading::ReadingSeries;
use crate::services::api::fetch_readings;
use crate::services::synth::synthetic_day;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, PartialEq, Debug)]
pub enum DataState {
    Loading,
    Loaded(Rc<ReadingSeries>),
    Error(String),
}

impl DataState {
    /// Returns true if the state is loading
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<ReadingSeries>> {
        match self {
            Self::Loaded(series) => Some(series),
            _ => None,
        }
    }
}

#[hook]
pub fn use_readings() -> UseStateHandle<DataState> {
    let state = use_state(|| DataState::Loading);
    let trigger = use_state(|| 0u32); // Polling trigger

    {
        let state = state.clone();
        let trigger_value = *trigger;

        use_effect_with(trigger_value, move |_| {
            let state = state.clone();
            let trigger = trigger;

            state.set(DataState::Loading);

            spawn_local(async move {
                match fetch_readings().await {
                    Ok(series) => state.set(DataState::Loaded(Rc::new(series))),
                    Err(e) if Config::SYNTHETIC_FALLBACK => {
                        gloo::console::warn!(format!(
                            "Readings fetch failed, using synthetic data: {e}"
                        ));
                        state.set(DataState::Loaded(Rc::new(synthetic_day(Config::SYNTH_SEED))));
                    }
                    Err(e) => state.set(DataState::Error(e.to_string())),
                }

                // Schedule next poll if enabled
                if Config::ENABLE_AUTO_REFRESH {
                    TimeoutFuture::new(Config::POLLING_INTERVAL_MS).await;
                    trigger.set(*trigger + 1); // Trigger next fetch
                }
            });

            || () // Cleanup
        });
    }

    state
}
