use yew::prelude::*;

use crate::models::metric::Metric;

#[derive(Properties, PartialEq)]
pub struct DataCardProps {
    pub metric: Metric,
    pub value: Option<f64>,
}

/// Current value of one metric, from the most recent reading.
#[function_component(DataCard)]
pub fn data_card(props: &DataCardProps) -> Html {
    let value = props.value.map_or_else(
        || "N/A".to_string(),
        |v| props.metric.format_value(v),
    );

    html! {
        <div class="data-card">
            <div class="data-card-header">
                <h3>{props.metric.label()}</h3>
                <span class="data-card-icon" aria-hidden="true">{props.metric.icon()}</span>
            </div>
            <p class="data-card-value">{value}</p>
        </div>
    }
}
