use yew::prelude::*;

use crate::components::overview_chart;
use crate::components::{
    ChartTypeSelector, DataCard, ExportButton, MetricTabs, OverviewChart, Status, SummaryPanel,
    Tab, ThemeToggle,
};
use crate::hooks::use_chart_type::use_chart_type;
use crate::hooks::use_daily::use_daily;
use crate::hooks::use_readings::use_readings;
use crate::hooks::use_theme::use_theme;
use crate::models::metric::Metric;

/// Top-level controller. Owns theme, chart type, and tab selection; data
/// state lives in the fetch hooks and is rebuilt on each refresh.
#[function_component(App)]
pub fn app() -> Html {
    let theme = use_theme();
    let chart_type = use_chart_type();
    let readings = use_readings();
    let daily = use_daily();
    let active_tab = use_state(|| Tab::Correlated);

    let dark_mode = theme.theme.is_dark();

    let on_select_tab = {
        let active_tab = active_tab.clone();
        Callback::from(move |tab| active_tab.set(tab))
    };

    html! {
        <div class="app-container">
            <header class="app-header">
                <h1>{"Environmental Dashboard"}</h1>
                <div class="header-controls">
                    <ExportButton chart_id={overview_chart::CHART_ID} />
                    <ThemeToggle theme={theme.theme} on_toggle={theme.toggle.clone()} />
                </div>
            </header>

            <main class="app-main">
                <section class="status-section">
                    <Status state={(*readings).clone()} />
                </section>

                if let Some(series) = readings.data() {
                    <section class="cards-section">
                        {
                            Metric::all().iter().map(|metric| html! {
                                <DataCard
                                    metric={*metric}
                                    value={series.latest().map(|r| r.value(*metric))}
                                />
                            }).collect::<Html>()
                        }
                    </section>

                    <section class="chart-section">
                        <div class="chart-controls">
                            <ChartTypeSelector
                                kind={chart_type.kind}
                                on_change={chart_type.set_kind.clone()}
                            />
                        </div>
                        <OverviewChart
                            series={series.clone()}
                            kind={chart_type.kind}
                            dark_mode={dark_mode}
                        />
                    </section>

                    <section class="tabs-section">
                        <MetricTabs
                            readings={series.clone()}
                            daily={(*daily).clone()}
                            dark_mode={dark_mode}
                            active={*active_tab}
                            on_select={on_select_tab}
                        />
                    </section>
                }

                <section class="summary-section">
                    <SummaryPanel readings={readings.data().cloned()} />
                </section>
            </main>

            <style>
                {include_str!("style.css")}
            </style>
        </div>
    }
}
