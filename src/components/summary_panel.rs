use std::rc::Rc;
use yew::prelude::*;

use crate::hooks::use_summary::{SummaryState, use_summary};
use crate::models::reading::ReadingSeries;

#[derive(Properties, PartialEq)]
pub struct SummaryPanelProps {
    pub readings: Option<Rc<ReadingSeries>>,
}

/// On-demand narrative summary of the day's readings, generated remotely.
#[function_component(SummaryPanel)]
pub fn summary_panel(props: &SummaryPanelProps) -> Html {
    let handle = use_summary(props.readings.clone());

    let disabled = props.readings.is_none() || handle.state == SummaryState::Loading;
    let onclick = {
        let generate = handle.generate.clone();
        Callback::from(move |_| generate.emit(()))
    };

    html! {
        <div class="summary-panel">
            <div class="summary-panel-header">
                <h2>{"Narrative Summary"}</h2>
                <button class="summary-button" {onclick} {disabled}>
                    {"Generate summary"}
                </button>
            </div>
            {
                match &handle.state {
                    SummaryState::Idle => html! {
                        <p class="summary-hint">{"Summarize today's readings in a few sentences."}</p>
                    },
                    SummaryState::Loading => html! {
                        <div class="status loading">
                            <div class="spinner"></div>
                            <p>{"Generating..."}</p>
                        </div>
                    },
                    SummaryState::Loaded(text) => html! {
                        <div class="summary-text">{text}</div>
                    },
                    SummaryState::Error(msg) => html! {
                        <div class="status error">
                            <p>{"❌ Summary unavailable: "}{msg}</p>
                        </div>
                    },
                }
            }
        </div>
    }
}
