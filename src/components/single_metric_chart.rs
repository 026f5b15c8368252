use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisType, ItemStyle, LineStyle, LineStyleType, SplitLine, TextStyle, Tooltip,
        Trigger,
    },
    series::Line,
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::render::{palette, render_chart};
use crate::config::Config;
use crate::models::{metric::Metric, reading::ReadingSeries};
use crate::utils::debounce::create_debounced_resize_listener;

#[derive(Properties, PartialEq)]
pub struct SingleMetricChartProps {
    pub series: Rc<ReadingSeries>,
    pub metric: Metric,
    pub dark_mode: bool,
}

/// One metric over the day, on its own axis.
#[function_component(SingleMetricChart)]
pub fn single_metric_chart(props: &SingleMetricChartProps) -> Html {
    let container_ref = use_node_ref();
    let chart_id = format!("metric-chart-{}", props.metric.key());

    {
        let series = props.series.clone();
        let metric = props.metric;
        let dark_mode = props.dark_mode;
        let container_ref = container_ref.clone();
        let chart_id = chart_id.clone();

        use_effect_with(
            (series, metric, container_ref, dark_mode),
            move |(series, metric, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    let render = {
                        let series = series.clone();
                        let metric = *metric;
                        let dark_mode = *dark_mode;
                        move || {
                            let chart = build_metric_chart(&series, metric, dark_mode);
                            render_chart(&container, &chart_id, &chart);
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
        <div class="chart-container" ref={container_ref}>
            <div id={format!("metric-chart-{}", props.metric.key())} />
        </div>
    }
}

fn build_metric_chart(series: &ReadingSeries, metric: Metric, dark_mode: bool) -> CharmingChart {
    let colors = palette(dark_mode);
    let color = metric.color(dark_mode);
    let (x_data, y_data) = series.series_data(metric);

    CharmingChart::new()
        .title(
            Title::new()
                .text(metric.to_string())
                .left("center")
                .text_style(TextStyle::new().font_size(16).color(colors.title)),
        )
        .tooltip(Tooltip::new().trigger(Trigger::Axis))
        .grid(
            Grid::new()
                .left("8%")
                .right("4%")
                .bottom("12%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(x_data)
                .axis_label(AxisLabel::new().color(colors.axis).interval(1)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name(metric.unit())
                .axis_label(AxisLabel::new().color(colors.axis))
                .split_line(
                    SplitLine::new().line_style(
                        LineStyle::new()
                            .color(colors.grid)
                            .type_(LineStyleType::Dashed),
                    ),
                ),
        )
        .series(
            Line::new()
                .name(metric.label())
                .data(y_data)
                .smooth(true)
                .show_symbol(false)
                .item_style(ItemStyle::new().color(color))
                .line_style(LineStyle::new().color(color).width(2)),
        )
}
