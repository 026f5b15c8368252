use gloo_storage::Storage;
use serde::{Deserialize, Serialize};
use yew::prelude::*;

use crate::models::error::AppError;

const STORAGE_KEY: &str = "chart-type";

/// Rendering style of the overview chart
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
}

impl ChartKind {
    pub const fn key(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Line => "Line chart",
            Self::Bar => "Bar chart",
        }
    }

    pub const fn all() -> &'static [Self] {
        &[Self::Line, Self::Bar]
    }
}

impl std::str::FromStr for ChartKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "line" => Ok(Self::Line),
            "bar" => Ok(Self::Bar),
            _ => Err(AppError::ConfigError(format!("Unknown chart type: {s}"))),
        }
    }
}

/// Handle returned by the `use_chart_type` hook
#[derive(Clone, PartialEq)]
pub struct ChartTypeHandle {
    pub kind: ChartKind,
    pub set_kind: Callback<ChartKind>,
}

/// Chart-type selection with localStorage persistence
#[hook]
pub fn use_chart_type() -> ChartTypeHandle {
    let kind = use_state(|| load_chart_type().unwrap_or_default());

    // Effect: persist selection on change
    {
        let kind_value = *kind;
        use_effect_with(kind_value, move |kind| {
            save_chart_type(*kind);
            || ()
        });
    }

    let set_kind = {
        let kind = kind.clone();
        Callback::from(move |new_kind| kind.set(new_kind))
    };

    ChartTypeHandle {
        kind: *kind,
        set_kind,
    }
}

fn load_chart_type() -> Option<ChartKind> {
    gloo_storage::LocalStorage::get(STORAGE_KEY).ok()
}

fn save_chart_type(kind: ChartKind) {
    if let Err(e) = gloo_storage::LocalStorage::set(STORAGE_KEY, kind) {
        gloo::console::warn!(format!("Failed to save chart type: {e:?}"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chart_kind_parsing() {
        assert_eq!("line".parse::<ChartKind>().unwrap(), ChartKind::Line);
        assert_eq!("BAR".parse::<ChartKind>().unwrap(), ChartKind::Bar);
        assert!("pie".parse::<ChartKind>().is_err());
    }

    #[test]
    fn test_key_round_trips() {
        for kind in ChartKind::all() {
            assert_eq!(kind.key().parse::<ChartKind>().unwrap(), *kind);
        }
    }
}
