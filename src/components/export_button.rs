use chrono::Utc;
use web_sys::wasm_bindgen::JsCast;
use web_sys::{Document, HtmlAnchorElement, HtmlCanvasElement};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ExportButtonProps {
    /// Container element id of the chart to export
    pub chart_id: AttrValue,
}

/// Downloads the rendered chart canvas as a PNG. Fire-and-forget; failures
/// are logged, never surfaced.
#[function_component(ExportButton)]
pub fn export_button(props: &ExportButtonProps) -> Html {
    let onclick = {
        let chart_id = props.chart_id.clone();
        Callback::from(move |_| export_chart_image(&chart_id))
    };

    html! {
        <button
            class="export-button"
            {onclick}
            aria-label="Export chart as image"
            title="Export chart as image"
        >
            {"Export as Image"}
        </button>
    }
}

fn export_chart_image(chart_id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };

    // The renderer draws into a canvas nested inside the chart container
    let canvas = document
        .query_selector(&format!("#{chart_id} canvas"))
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlCanvasElement>().ok());

    let Some(canvas) = canvas else {
        gloo::console::warn!("No rendered chart canvas to export");
        return;
    };

    match canvas.to_data_url() {
        Ok(url) => trigger_download(&document, &url),
        Err(e) => gloo::console::error!(format!("Canvas export failed: {e:?}")),
    }
}

fn trigger_download(document: &Document, url: &str) {
    let anchor = document
        .create_element("a")
        .ok()
        .and_then(|el| el.dyn_into::<HtmlAnchorElement>().ok());

    let Some(anchor) = anchor else {
        gloo::console::error!("Failed to create download link");
        return;
    };

    anchor.set_href(url);
    anchor.set_download(&format!(
        "environment-{}.png",
        Utc::now().format("%Y%m%d-%H%M%S")
    ));
    anchor.click();
}
