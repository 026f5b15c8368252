use charming::{Chart, renderer::WasmRenderer};
use web_sys::HtmlElement;

/// Theme-aware chart chrome colors
#[derive(Clone, Copy)]
pub struct Palette {
    pub title: &'static str,
    pub axis: &'static str,
    pub grid: &'static str,
}

pub const fn palette(dark_mode: bool) -> Palette {
    if dark_mode {
        Palette {
            title: "#e4e4e7",
            axis: "#a1a1aa",
            grid: "#404040",
        }
    } else {
        Palette {
            title: "#1f2937",
            axis: "#6b7280",
            grid: "#e5e7eb",
        }
    }
}

/// Renders a chart into the element with `chart_id`, sized to `container`.
/// Zero-sized containers (hidden tabs, first paint) are skipped.
pub fn render_chart(container: &HtmlElement, chart_id: &str, chart: &Chart) {
    let width = container.client_width().cast_unsigned();
    let height = container.client_height().cast_unsigned();

    if width == 0 || height == 0 {
        return;
    }

    if let Err(e) = WasmRenderer::new(width, height).render(chart_id, chart) {
        gloo::console::error!(format!("Chart render failed: {e:?}"));
    }
}
