use super::error::AppError;

/// Environmental metrics reported by the hourly sensor feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Metric {
    #[default]
    Temperature,
    Humidity,
    Light,
    Co2,
}

impl Metric {
    /// Returns the JSON field name used in feed records.
    pub const fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Light => "light",
            Self::Co2 => "co2",
        }
    }

    /// Returns a human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Light => "Light",
            Self::Co2 => "CO2",
        }
    }

    pub const fn unit(self) -> &'static str {
        match self {
            Self::Temperature => "°C",
            Self::Humidity => "%",
            Self::Light => "lux",
            Self::Co2 => "ppm",
        }
    }

    pub const fn icon(self) -> &'static str {
        match self {
            Self::Temperature => "🌡️",
            Self::Humidity => "💧",
            Self::Light => "☀️",
            Self::Co2 => "🌫️",
        }
    }

    /// Series color, slightly brighter in dark mode.
    pub const fn color(self, dark_mode: bool) -> &'static str {
        if dark_mode {
            match self {
                Self::Temperature => "#ff8c42",
                Self::Humidity => "#9d97e8",
                Self::Light => "#ffd166",
                Self::Co2 => "#95dbae",
            }
        } else {
            match self {
                Self::Temperature => "#ff7300",
                Self::Humidity => "#8884d8",
                Self::Light => "#ffc658",
                Self::Co2 => "#82ca9d",
            }
        }
    }

    /// Formats a value for display, with the precision the metric warrants.
    pub fn format_value(self, value: f64) -> String {
        match self {
            Self::Temperature | Self::Humidity => format!("{value:.1} {}", self.unit()),
            Self::Light | Self::Co2 => format!("{value:.0} {}", self.unit()),
        }
    }

    /// All available metrics, in display order.
    pub const fn all() -> &'static [Self] {
        &[Self::Temperature, Self::Humidity, Self::Light, Self::Co2]
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.label(), self.unit())
    }
}

impl std::str::FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "temperature" => Ok(Self::Temperature),
            "humidity" => Ok(Self::Humidity),
            "light" => Ok(Self::Light),
            "co2" => Ok(Self::Co2),
            _ => Err(AppError::ConfigError(format!("Unknown metric: {s}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_parsing() {
        assert_eq!("co2".parse::<Metric>().unwrap(), Metric::Co2);
        assert_eq!("Temperature".parse::<Metric>().unwrap(), Metric::Temperature);
        assert!("pressure".parse::<Metric>().is_err());
    }

    #[test]
    fn test_key_round_trips() {
        for metric in Metric::all() {
            assert_eq!(metric.key().parse::<Metric>().unwrap(), *metric);
        }
    }

    #[test]
    fn test_format_precision() {
        assert_eq!(Metric::Temperature.format_value(23.46), "23.5 °C");
        assert_eq!(Metric::Light.format_value(812.7), "813 lux");
    }
}
