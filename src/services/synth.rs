use std::f64::consts::PI;

use chrono::{Days, NaiveDate};
use serde_json::{Value, json};

use crate::models::reading::{Reading, ReadingSeries};

/// Deterministic jitter source (xorshift64). Seeded generation keeps the
/// fallback dashboard stable across re-renders within a session.
struct Jitter(u64);

impl Jitter {
    const fn new(seed: u64) -> Self {
        // xorshift stalls on a zero state
        Self(if seed == 0 { 0x9E37_79B9_7F4A_7C15 } else { seed })
    }

    fn next_unit(&mut self) -> f64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        (x >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform value in `[-width / 2, width / 2)`.
    fn spread(&mut self, width: f64) -> f64 {
        (self.next_unit() - 0.5) * width
    }
}

fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals.cast_signed());
    (value * factor).round() / factor
}

/// Synthesizes one day of hourly readings following a plausible subtropical
/// summer profile: warm sinusoidal temperature peaking mid-afternoon,
/// humidity moving inversely, daylight-shaped light levels, and CO2 slightly
/// elevated during the day.
pub fn synthetic_day(seed: u64) -> ReadingSeries {
    let mut jitter = Jitter::new(seed);
    let base_temperature = 28.0;
    let base_humidity = 70.0;
    let base_co2 = 400.0;

    let readings = (0..24)
        .map(|hour| {
            let h = f64::from(hour);
            let is_daytime = (6..18).contains(&hour);

            let temperature =
                base_temperature + ((h - 5.0) * PI / 12.0).sin() * 10.0 + jitter.spread(2.0);
            let humidity =
                base_humidity - ((h - 5.0) * PI / 12.0).sin() * 20.0 + jitter.spread(5.0);

            let light = if is_daytime {
                ((h - 6.0) * PI / 12.0).sin() * 1000.0 + 200.0 + jitter.next_unit() * 100.0
            } else {
                jitter.next_unit() * 10.0
            };

            let co2_lift = if is_daytime { 150.0 } else { 75.0 };
            let co2 = base_co2 + co2_lift + jitter.spread(30.0);

            Reading {
                time: format!("{hour:02}:00"),
                temperature: round_to(temperature, 1),
                humidity: round_to(humidity, 1),
                light: light.round(),
                co2: co2.round(),
            }
        })
        .collect();

    ReadingSeries::new(readings)
}

/// Synthesizes a week of daily average temperatures ending at `today`.
/// Values are quoted strings, matching the aggregate feed's wire shape.
pub fn synthetic_daily_temperature(seed: u64, today: NaiveDate) -> Vec<Value> {
    let mut jitter = Jitter::new(seed);
    last_week(today)
        .map(|date| {
            let average = 27.0 + jitter.spread(6.0);
            json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "average_temp": format!("{average:.1}"),
            })
        })
        .collect()
}

/// Synthesizes a week of daily motion counts ending at `today`.
pub fn synthetic_daily_motion(seed: u64, today: NaiveDate) -> Vec<Value> {
    let mut jitter = Jitter::new(seed);
    last_week(today)
        .map(|date| {
            let count = (jitter.next_unit() * 40.0).round() as u64 + 5;
            json!({
                "date": date.format("%Y-%m-%d").to_string(),
                "motion_count": count.to_string(),
            })
        })
        .collect()
}

fn last_week(today: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    (0..7u64).rev().filter_map(move |back| today.checked_sub_days(Days::new(back)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_series() {
        assert_eq!(synthetic_day(7), synthetic_day(7));
        assert_ne!(synthetic_day(7), synthetic_day(8));
    }

    #[test]
    fn test_full_day_of_readings() {
        let series = synthetic_day(1);
        assert_eq!(series.len(), 24);
        assert_eq!(series.readings()[0].time, "00:00");
        assert_eq!(series.latest().unwrap().time, "23:00");
    }

    #[test]
    fn test_values_stay_plausible() {
        let series = synthetic_day(42);
        for reading in series.readings() {
            assert!((10.0..45.0).contains(&reading.temperature));
            assert!((30.0..100.0).contains(&reading.humidity));
            assert!((0.0..1400.0).contains(&reading.light));
            assert!((400.0..650.0).contains(&reading.co2));
        }
    }

    #[test]
    fn test_nighttime_light_is_dim() {
        let series = synthetic_day(3);
        assert!(series.readings()[2].light < 10.5);
        assert!(series.readings()[12].light > 500.0);
    }

    #[test]
    fn test_daily_series_cover_a_week() {
        let today = NaiveDate::from_ymd_opt(2026, 8, 6).unwrap();
        let temps = synthetic_daily_temperature(1, today);
        let motion = synthetic_daily_motion(1, today);

        assert_eq!(temps.len(), 7);
        assert_eq!(motion.len(), 7);
        assert_eq!(temps[0]["date"], "2026-07-31");
        assert_eq!(temps[6]["date"], "2026-08-06");
        // Daily aggregates arrive as quoted strings
        assert!(temps[0]["average_temp"].is_string());
        assert!(motion[0]["motion_count"].is_string());
    }
}
