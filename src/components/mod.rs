pub mod chart_type_selector;
pub mod combined_chart;
pub mod correlated_chart;
pub mod data_card;
pub mod export_button;
pub mod metric_tabs;
pub mod overview_chart;
pub mod render;
pub mod single_metric_chart;
pub mod status;
pub mod summary_panel;
pub mod theme_toggle;

pub use chart_type_selector::ChartTypeSelector;
pub use data_card::DataCard;
pub use export_button::ExportButton;
pub use metric_tabs::{MetricTabs, Tab};
pub use overview_chart::OverviewChart;
pub use status::Status;
pub use summary_panel::SummaryPanel;
pub use theme_toggle::ThemeToggle;
