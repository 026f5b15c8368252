pub mod use_chart_type;
pub mod use_daily;
pub mod use_readings;
pub mod use_summary;
pub mod use_theme;
