//! Temporal windowing: turns a raw payload into chart-ready series.
//!
//! All functions here are pure and total. The reference instant is an
//! explicit parameter, never read from an ambient clock. No input produces
//! an error: absent sections, short arrays, and unparseable timestamps all
//! degrade to `None`, defaults, or empty output.

use chrono::{Datelike, NaiveDate, NaiveDateTime, Timelike};

use crate::classify::WeatherCondition;
use crate::model::{DailySample, ForecastWindow, HistoricalPoint, HourlySample};
use crate::payload::ProviderPayload;
use crate::resolve::{Quantity, resolve, resolve_text};

/// Hourly window length used by the dashboard.
pub const DEFAULT_HOURLY_LIMIT: usize = 24;

/// Parse a provider local-time string, with or without seconds.
pub fn parse_local_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

/// Parse a provider date string; daily `time` axes are plain dates, but a
/// full datetime is accepted too.
fn parse_local_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_local_datetime(raw).map(|dt| dt.date()))
}

/// The dashboard's "after now" predicate, kept verbatim: it compares
/// hour-of-day and day-of-month, not full timestamps. Around a month
/// boundary this drops samples from the first days of the next month
/// (pinned by `day_of_month_wraparound_drops_next_month`).
fn after_reference(ts: NaiveDateTime, now: NaiveDateTime) -> bool {
    ts.hour() > now.hour() || ts.day() > now.day()
}

/// Select the next `limit` hourly samples strictly after `now_local`.
///
/// Samples keep input order; unparseable timestamps are skipped; an absent
/// or empty hourly section yields an empty window.
pub fn window_hourly(
    payload: &ProviderPayload,
    now_local: NaiveDateTime,
    limit: usize,
) -> Vec<HourlySample> {
    let Some(section) = payload.hourly.as_ref() else {
        tracing::debug!("hourly section absent, producing empty window");
        return Vec::new();
    };

    let mut samples = Vec::new();
    for (index, raw) in ProviderPayload::time_axis(section).iter().enumerate() {
        if samples.len() == limit {
            break;
        }
        let Some(timestamp) = raw.as_str().and_then(parse_local_datetime) else {
            continue;
        };
        if !after_reference(timestamp, now_local) {
            continue;
        }
        samples.push(HourlySample {
            timestamp,
            temperature: resolve(section, Quantity::Temperature, index),
            feels_like: resolve(section, Quantity::FeelsLike, index),
            humidity: resolve(section, Quantity::Humidity, index),
            wind_speed: resolve(section, Quantity::WindSpeed, index),
            precipitation: resolve(section, Quantity::Precipitation, index),
            precipitation_probability: resolve(
                section,
                Quantity::PrecipitationProbability,
                index,
            ),
            condition: WeatherCondition::from_resolved(resolve(
                section,
                Quantity::WeatherCode,
                index,
            )),
        });
    }
    samples
}

/// Build one sample per available day; no truncation.
pub fn window_daily(payload: &ProviderPayload) -> Vec<DailySample> {
    let Some(section) = payload.daily.as_ref() else {
        tracing::debug!("daily section absent, producing empty window");
        return Vec::new();
    };

    let mut samples = Vec::new();
    for (index, raw) in ProviderPayload::time_axis(section).iter().enumerate() {
        let Some(date) = raw.as_str().and_then(parse_local_date) else {
            continue;
        };

        let min = resolve(section, Quantity::TemperatureMin, index);
        let max = resolve(section, Quantity::TemperatureMax, index);
        let mean_temperature = match (min, max) {
            (Some(lo), Some(hi)) => (lo + hi) / 2.0,
            (Some(lone), None) | (None, Some(lone)) => lone,
            (None, None) => 0.0,
        };

        samples.push(DailySample {
            date,
            min_temperature: min,
            max_temperature: max,
            mean_temperature,
            humidity: resolve(section, Quantity::Humidity, index),
            wind_speed: resolve(section, Quantity::WindSpeed, index),
            precipitation: resolve(section, Quantity::Precipitation, index),
            precipitation_probability: resolve(
                section,
                Quantity::PrecipitationProbability,
                index,
            ),
            sunrise: resolve_text(section, Quantity::Sunrise, index)
                .and_then(parse_local_datetime),
            sunset: resolve_text(section, Quantity::Sunset, index).and_then(parse_local_datetime),
            condition: WeatherCondition::from_resolved(resolve(
                section,
                Quantity::WeatherCode,
                index,
            )),
        });
    }
    samples
}

/// Per-day points for the historical chart. Temperature resolves across
/// quantities in the fixed priority min, mean, max (distinct from the
/// per-quantity alias priority), then 0; precipitation is the daily sum
/// or 0.
pub fn format_historical(payload: &ProviderPayload) -> Vec<HistoricalPoint> {
    let Some(section) = payload.daily.as_ref() else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for (index, raw) in ProviderPayload::time_axis(section).iter().enumerate() {
        let Some(date) = raw.as_str().and_then(parse_local_date) else {
            continue;
        };
        let temperature = resolve(section, Quantity::TemperatureMin, index)
            .or_else(|| resolve(section, Quantity::TemperatureMean, index))
            .or_else(|| resolve(section, Quantity::TemperatureMax, index))
            .unwrap_or(0.0);
        let precipitation = resolve(section, Quantity::Precipitation, index).unwrap_or(0.0);
        points.push(HistoricalPoint {
            date,
            temperature,
            precipitation,
        });
    }
    points
}

/// End-to-end entry point: one `ForecastWindow` per provider response.
pub fn normalize(
    payload: &ProviderPayload,
    now_local: NaiveDateTime,
    limit: usize,
) -> ForecastWindow {
    ForecastWindow {
        hourly: window_hourly(payload, now_local, limit),
        daily: window_daily(payload),
    }
}
