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
use crate::hooks::use_chart_type::ChartKind;
use crate::models::{metric::Metric, reading::ReadingSeries};
use crate::utils::debounce::create_debounced_resize_listener;

pub const CHART_ID: &str = "overview-chart";

#[derive(Properties, PartialEq)]
pub struct OverviewChartProps {
    pub series: Rc<ReadingSeries>,
    pub kind: ChartKind,
    pub dark_mode: bool,
}

/// All four hourly metrics on one dual-axis chart. Temperature and humidity
/// share the left axis, light and CO2 the right.
#[function_component(OverviewChart)]
pub fn overview_chart(props: &OverviewChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let series = props.series.clone();
        let kind = props.kind;
        let dark_mode = props.dark_mode;
        let container_ref = container_ref.clone();

        use_effect_with(
            (series, kind, container_ref, dark_mode),
            |(series, kind, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    let render = {
                        let series = series.clone();
                        let kind = *kind;
                        let dark_mode = *dark_mode;
                        move || {
                            let chart = build_overview(&series, kind, dark_mode);
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
        <div class="chart-container" ref={container_ref}>
            <div id={CHART_ID} />
        </div>
    }
}

fn build_overview(series: &ReadingSeries, kind: ChartKind, dark_mode: bool) -> CharmingChart {
    let colors = palette(dark_mode);

    let mut chart = CharmingChart::new()
        .title(
            Title::new()
                .text("Environmental Overview")
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
                .bottom("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(series.time_labels())
                .axis_label(AxisLabel::new().color(colors.axis).interval(1)),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("°C / %")
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
                .name("lux / ppm")
                .axis_label(AxisLabel::new().color(colors.axis))
                .split_line(SplitLine::new().show(false)),
        );

    for metric in Metric::all() {
        chart = add_metric_series(chart, series, *metric, kind, dark_mode);
    }

    chart
}

fn add_metric_series(
    chart: CharmingChart,
    series: &ReadingSeries,
    metric: Metric,
    kind: ChartKind,
    dark_mode: bool,
) -> CharmingChart {
    let (_, y_data) = series.series_data(metric);
    let color = metric.color(dark_mode);
    let right_axis = matches!(metric, Metric::Light | Metric::Co2);

    // Light stays a bar even in line mode; lux dwarfs the other metrics and
    // reads better as a backdrop.
    let as_bar = kind == ChartKind::Bar || metric == Metric::Light;

    if as_bar {
        chart.series(
            Bar::new()
                .name(metric.label())
                .data(y_data)
                .y_axis_index(if right_axis { 1 } else { 0 })
                .bar_width("40%")
                .item_style(ItemStyle::new().color(color)),
        )
    } else {
        chart.series(
            Line::new()
                .name(metric.label())
                .data(y_data)
                .y_axis_index(if right_axis { 1 } else { 0 })
                .smooth(true)
                .show_symbol(false)
                .item_style(ItemStyle::new().color(color))
                .line_style(LineStyle::new().color(color).width(2)),
        )
    }
}
