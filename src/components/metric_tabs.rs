use std::rc::Rc;
use yew::prelude::*;

use crate::components::combined_chart::CombinedChart;
use crate::components::correlated_chart::CorrelatedChart;
use crate::components::single_metric_chart::SingleMetricChart;
use crate::hooks::use_daily::DailyState;
use crate::models::{metric::Metric, reading::ReadingSeries};

/// Tabbed chart views
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Tab {
    Correlated,
    Metric(Metric),
    Combined,
}

impl Tab {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correlated => "Correlated",
            Self::Metric(metric) => metric.label(),
            Self::Combined => "Combined",
        }
    }

    /// All tabs, in display order.
    pub fn all() -> Vec<Self> {
        std::iter::once(Self::Correlated)
            .chain(Metric::all().iter().map(|m| Self::Metric(*m)))
            .chain(std::iter::once(Self::Combined))
            .collect()
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricTabsProps {
    pub readings: Rc<ReadingSeries>,
    pub daily: DailyState,
    pub dark_mode: bool,
    pub active: Tab,
    pub on_select: Callback<Tab>,
}

#[function_component(MetricTabs)]
pub fn metric_tabs(props: &MetricTabsProps) -> Html {
    let tabs = Tab::all();

    html! {
        <div class="metric-tabs">
            <div class="tab-list" role="tablist">
                {
                    tabs.iter().map(|tab| {
                        let tab = *tab;
                        let active = tab == props.active;
                        let onclick = {
                            let on_select = props.on_select.clone();
                            Callback::from(move |_| on_select.emit(tab))
                        };
                        html! {
                            <button
                                class={if active { "tab active" } else { "tab" }}
                                role="tab"
                                aria-selected={active.to_string()}
                                {onclick}
                            >
                                {tab.label()}
                            </button>
                        }
                    }).collect::<Html>()
                }
            </div>
            <div class="tab-panel" role="tabpanel">
                { render_panel(props) }
            </div>
        </div>
    }
}

fn render_panel(props: &MetricTabsProps) -> Html {
    match props.active {
        Tab::Correlated => html! {
            <CorrelatedChart series={props.readings.clone()} dark_mode={props.dark_mode} />
        },
        Tab::Metric(metric) => html! {
            <SingleMetricChart
                series={props.readings.clone()}
                {metric}
                dark_mode={props.dark_mode}
            />
        },
        Tab::Combined => match &props.daily {
            DailyState::Loading => html! {
                <div class="status loading">
                    <div class="spinner"></div>
                    <p>{"Loading daily data..."}</p>
                </div>
            },
            DailyState::Loaded(daily) => html! {
                <CombinedChart daily={daily.clone()} dark_mode={props.dark_mode} />
            },
            DailyState::Error(msg) => html! {
                <div class="status error">
                    <p>{"❌ Daily data unavailable: "}{msg}</p>
                </div>
            },
        },
    }
}
