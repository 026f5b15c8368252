use std::rc::Rc;
use yew::prelude::*;

use chrono::Utc;
use serde_json::Value;
use wasm_bindgen_futures::spawn_local;

use crate::config::Config;
use crate::services::api::{fetch_daily_motion, fetch_daily_temperature};
use crate::services::synth::{synthetic_daily_motion, synthetic_daily_temperature};

/// The two daily aggregate feeds, kept raw for field-name joining.
#[derive(Clone, PartialEq, Debug)]
pub struct DailySeries {
    pub temperature: Vec<Value>,
    pub motion: Vec<Value>,
}

#[derive(Clone, PartialEq, Debug)]
pub enum DailyState {
    Loading,
    Loaded(Rc<DailySeries>),
    Error(String),
}

impl DailyState {
    /// Returns the data if it is loaded
    pub const fn data(&self) -> Option<&Rc<DailySeries>> {
        match self {
            Self::Loaded(series) => Some(series),
            _ => None,
        }
    }
}

/// Fetches both daily aggregate feeds once on mount.
///
/// The fetches are independent but run in turn; awaiting them sequentially
/// keeps the state transition single-shot and the ordering has no effect on
/// the joined result.
#[hook]
pub fn use_daily() -> UseStateHandle<DailyState> {
    let state = use_state(|| DailyState::Loading);

    {
        let state = state.clone();

        use_effect_with((), move |_| {
            let state = state.clone();

            spawn_local(async move {
                let fetched = async {
                    let temperature = fetch_daily_temperature().await?;
                    let motion = fetch_daily_motion().await?;
                    Ok::<_, crate::models::error::AppError>(DailySeries { temperature, motion })
                }
                .await;

                match fetched {
                    Ok(series) => state.set(DailyState::Loaded(Rc::new(series))),
                    Err(e) if Config::SYNTHETIC_FALLBACK => {
                        gloo::console::warn!(format!(
                            "Daily fetch failed, using synthetic data: {e}"
                        ));
                        let today = Utc::now().date_naive();
                        state.set(DailyState::Loaded(Rc::new(DailySeries {
                            temperature: synthetic_daily_temperature(Config::SYNTH_SEED, today),
                            motion: synthetic_daily_motion(Config::SYNTH_SEED, today),
                        })));
                    }
                    Err(e) => state.set(DailyState::Error(e.to_string())),
                }
            });

            || () // Cleanup
        });
    }

    state
}
