use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::hooks::use_chart_type::ChartKind;

#[derive(Properties, PartialEq)]
pub struct ChartTypeSelectorProps {
    pub kind: ChartKind,
    pub on_change: Callback<ChartKind>,
}

/// Chart type selector dropdown component
#[function_component(ChartTypeSelector)]
pub fn chart_type_selector(props: &ChartTypeSelectorProps) -> Html {
    let on_change = {
        let callback = props.on_change.clone();
        Callback::from(move |e: Event| {
            let target: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(kind) = target.value().parse::<ChartKind>() {
                callback.emit(kind);
            }
        })
    };

    html! {
        <select
            class="chart-type-selector"
            onchange={on_change}
            aria-label="Select chart type"
            title="Select chart type"
        >
            {
                ChartKind::all().iter().map(|kind| {
                    let selected = *kind == props.kind;
                    html! {
                        <option value={kind.key()} {selected}>{kind.label()}</option>
                    }
                }).collect::<Html>()
            }
        </select>
    }
}
