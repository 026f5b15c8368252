use charming::{
    Chart as CharmingChart,
    component::{Axis, Grid, Legend, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, ItemStyle, LineStyle, LineStyleType,
        MarkLine, MarkLineData, MarkLineVariant, SplitLine, TextStyle, Tooltip, Trigger,
    },
    series::{Bar, Line},
};
use std::rc::Rc;
use web_sys::HtmlElement;
use yew::prelude::*;

use crate::components::render::{palette, render_chart};
use crate::config::Config;
use crate::models::{metric::Metric, reading::ReadingSeries};
use crate::utils::debounce::create_debounced_resize_listener;

const CHART_ID: &str = "correlated-chart";

#[derive(Properties, PartialEq)]
pub struct CorrelatedChartProps {
    pub series: Rc<ReadingSeries>,
    pub dark_mode: bool,
}

/// Composed view for spotting correlations: temperature and humidity lines
/// against the light and CO2 backdrop, with the day's average temperature
/// marked.
#[function_component(CorrelatedChart)]
pub fn correlated_chart(props: &CorrelatedChartProps) -> Html {
    let container_ref = use_node_ref();

    {
        let series = props.series.clone();
        let dark_mode = props.dark_mode;
        let container_ref = container_ref.clone();

        use_effect_with(
            (series, container_ref, dark_mode),
            |(series, container_ref, dark_mode)| {
                let listener = container_ref.cast::<HtmlElement>().map(|container| {
                    let render = {
                        let series = series.clone();
                        let dark_mode = *dark_mode;
                        move || {
                            let chart = build_correlated(&series, dark_mode);
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

fn build_correlated(series: &ReadingSeries, dark_mode: bool) -> CharmingChart {
    let colors = palette(dark_mode);
    let avg_temperature = series
        .stats(Metric::Temperature)
        .map(|s| s.avg)
        .unwrap_or_default();

    let temperature = Line::new()
        .name(Metric::Temperature.label())
        .data(series.series_data(Metric::Temperature).1)
        .smooth(true)
        .show_symbol(false)
        .item_style(ItemStyle::new().color(Metric::Temperature.color(dark_mode)))
        .line_style(
            LineStyle::new()
                .color(Metric::Temperature.color(dark_mode))
                .width(2),
        )
        .mark_line(
            MarkLine::new().data(vec![MarkLineVariant::Simple(
                MarkLineData::new().name("Avg Temp").y_axis(avg_temperature),
            )]),
        );

    let humidity = Line::new()
        .name(Metric::Humidity.label())
        .data(series.series_data(Metric::Humidity).1)
        .smooth(true)
        .show_symbol(false)
        .item_style(ItemStyle::new().color(Metric::Humidity.color(dark_mode)))
        .line_style(
            LineStyle::new()
                .color(Metric::Humidity.color(dark_mode))
                .width(2),
        );

    let light = Bar::new()
        .name(Metric::Light.label())
        .data(series.series_data(Metric::Light).1)
        .y_axis_index(1)
        .bar_width("40%")
        .item_style(ItemStyle::new().color(Metric::Light.color(dark_mode)));

    let co2 = Line::new()
        .name(Metric::Co2.label())
        .data(series.series_data(Metric::Co2).1)
        .y_axis_index(1)
        .smooth(true)
        .show_symbol(false)
        .item_style(ItemStyle::new().color(Metric::Co2.color(dark_mode)))
        .line_style(
            LineStyle::new()
                .color(Metric::Co2.color(dark_mode))
                .width(2),
        );

    CharmingChart::new()
        .title(
            Title::new()
                .text("Correlated Metrics")
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
        )
        .series(temperature)
        .series(humidity)
        .series(light)
        .series(co2)
}
