//! Human-friendly rendering of normalized windows.
//!
//! The core hands over optional values; placeholders happen here, never in
//! the normalization layer.

use forecast_core::{DailySample, ForecastWindow, HistoricalPoint, HourlySample};

/// Format an optional temperature value.
pub fn format_temp(temp: Option<f64>) -> String {
    match temp {
        // as i32 so -0.1 doesn't show up as -0
        Some(t) => format!("{}°", t.round() as i32),
        None => "-".to_string(),
    }
}

/// Format an optional precipitation value.
pub fn format_precip(precip: Option<f64>) -> String {
    match precip {
        Some(0.0) => String::new(),
        Some(p) if p < 5. => format!("{p:.1}mm"),
        Some(p) => format!("{p:.0}mm"),
        None => "-".to_string(),
    }
}

/// Format an optional percentage (humidity, precipitation probability).
pub fn format_pct(pct: Option<f64>) -> String {
    match pct {
        Some(p) => format!("{}%", p.round() as i32),
        None => "-".to_string(),
    }
}

fn render_hourly_line(sample: &HourlySample) -> String {
    format!(
        "  {}  {:>5}  feels {:>5}  {:>4}  {:>6}  {:>6}  {:>4}  {}",
        sample.timestamp.format("%a %H:%M"),
        format_temp(sample.temperature),
        format_temp(sample.feels_like),
        format_pct(sample.humidity),
        sample
            .wind_speed
            .map_or_else(|| "-".to_string(), |w| format!("{w:.1}km/h")),
        format_precip(sample.precipitation),
        format_pct(sample.precipitation_probability),
        sample.condition.label(),
    )
}

fn render_daily_line(sample: &DailySample) -> String {
    let sun = match (sample.sunrise, sample.sunset) {
        (Some(rise), Some(set)) => {
            format!("  sun {}-{}", rise.format("%H:%M"), set.format("%H:%M"))
        }
        _ => String::new(),
    };
    format!(
        "  {}  {:>5}/{:<5} (mean {:>5})  {:>6}  {:>4}  {}{}",
        sample.date.format("%Y-%m-%d"),
        format_temp(sample.min_temperature),
        format_temp(sample.max_temperature),
        format_temp(Some(sample.mean_temperature)),
        format_precip(sample.precipitation),
        format_pct(sample.precipitation_probability),
        sample.condition.label(),
        sun,
    )
}

/// Render the full window as a two-part table.
pub fn render_window(window: &ForecastWindow) -> String {
    let mut out = String::new();

    out.push_str(&format!("Next {} hours:\n", window.hourly.len()));
    if window.hourly.is_empty() {
        out.push_str("  (no upcoming samples)\n");
    }
    for sample in &window.hourly {
        out.push_str(&render_hourly_line(sample));
        out.push('\n');
    }

    out.push_str(&format!("\nDaily ({} days):\n", window.daily.len()));
    if window.daily.is_empty() {
        out.push_str("  (no daily samples)\n");
    }
    for sample in &window.daily {
        out.push_str(&render_daily_line(sample));
        out.push('\n');
    }

    out
}

/// Render historical chart points, one line per day.
pub fn render_history(points: &[HistoricalPoint]) -> String {
    if points.is_empty() {
        return "(no historical samples)\n".to_string();
    }

    let mut out = String::new();
    for point in points {
        out.push_str(&format!(
            "  {}  {:>5}  {}\n",
            point.date.format("%Y-%m-%d"),
            format_temp(Some(point.temperature)),
            format_precip(Some(point.precipitation)),
        ));
    }
    out
}
