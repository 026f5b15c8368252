use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::render::{palette, render_chart};
use crate::config::Config;
use crate::hooks::use_daily::DailySeries;
use crate::models::combined::{CombinedRecord, DAILY_JOIN_KEY, join_series};
use crate::utils::debounce::create_debounced_resize_listener;

const CHART_ID: &str = "combined-chart";

// Field names of the daily aggregate feeds
const TEMPERATURE_FIELD: &str = "average_temp";
const MOTION_FIELD: &str = "motion_count";

#[derive(Properties, PartialEq)]
pub struct CombinedChartProps {
    pub daily: Rc<DailySeries>,
    pub dark_mode: bool,
}

/// Daily average temperature joined with daily motion counts, on shared
/// date labels. The joined records are a derived value, recomputed whenever
/// either feed changes.
#[function_component(CombinedChart)]
pub fn combined_chart(props: &CombinedChartProps) -> Html {
    let container_ref = use_node_ref();

    let combined = use_memo(props.daily.clone(), |daily| {
        join_series(
            &daily.temperature,
            &daily.motion,
            DAILY_JOIN_KEY,
            TEMPERATURE_FIELD,
            MOTION_FIELD,
        )
    });

    {
        let dark_mode = props.dark_mode;
        let container_ref = container_ref.clone();

        use_effect_with(
            (combined, container_ref, dark_mode),
            |(combined, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    let render = {
                        let combined = combined.clone();
                        let dark_mode = *dark_mode;
                        move || {
                            let chart = build_combined(&combined, dark_mode);
                            render_chart(&container, CHART_ID, &chart);
                        }
                    };
                    render();
                    create_debounced_resize_listener(render, Config::RESIZE_DEBOUNCE_MS)
                });

                move || drop(listener)
            },
        );
    }

    html! {
        <div class="chart-container tall" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn build_combined(records: &[CombinedRecord], dark_mode: bool) -> CharmingChart {
    let colors = palette(dark_mode);
    let (temperature_color, motion_color) = if dark_mode {
        ("#f87171", "#60a5fa")
    } else {
        ("#ef4444", "#3b82f6")
    };

    let x_data: Vec<String> = records.iter().map(|r| r.key.clone()).collect();
    let temperatures: Vec<f64> = records.iter().map(|r| r.primary).collect();
    let motion_counts: Vec<f64> = records.iter().map(|r| r.secondary).collect();

    CharmingChart::new()
        .title(
            Title::new()
                .text("Daily Temperature & Motion")
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(colors.title)),
        )
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .legend(Legend::new().bottom("0").text_style(TextStyle::new().color(colors.axis)))
        .grid(
            Grid::new()
                .left("8%")
                .right("8%")
                .bottom("18%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().rotate(45).color(colors.axis)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("°C")
                .axis_label(AxisLabel::new().color(colors.axis))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(colors.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("events")
                .axis_label(AxisLabel::new().color(colors.axis))
                .split_line(SplitLine::new().show(false)),
        )
        .series(
            Line::new()
                .name("Temperature")
                .data(temperatures)
                .smooth(true)
                .show_symbol(false)
                .item_style(ItemStyle::new().color(temperature_color))
                .line_style(LineStyle::new().color(temperature_color).width(2)),
        )
        .series(
            Bar::new()
                .name("Motion Events")
                .data(motion_counts)
                .y_axis_index(1)
                .bar_width("50%")
                .item_style(ItemStyle::new().color(motion_color)),
        )
}
