use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::classify::WeatherCondition;

/// One hour of the forecast window. Everything but the timestamp is
/// optional; the rendering layer substitutes a placeholder or zero, never
/// an error state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HourlySample {
    pub timestamp: NaiveDateTime,
    pub temperature: Option<f64>,
    pub feels_like: Option<f64>,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub condition: WeatherCondition,
}

/// One day of the forecast window.
///
/// `mean_temperature` is derived: the midpoint when both bounds resolve,
/// the lone bound when only one does, `0.0` when neither does.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailySample {
    pub date: NaiveDate,
    pub min_temperature: Option<f64>,
    pub max_temperature: Option<f64>,
    pub mean_temperature: f64,
    pub humidity: Option<f64>,
    pub wind_speed: Option<f64>,
    pub precipitation: Option<f64>,
    pub precipitation_probability: Option<f64>,
    pub sunrise: Option<NaiveDateTime>,
    pub sunset: Option<NaiveDateTime>,
    pub condition: WeatherCondition,
}

/// The chart-ready output handed to the rendering collaborator: plain
/// immutable data, recomputed wholesale from each provider response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ForecastWindow {
    pub hourly: Vec<HourlySample>,
    pub daily: Vec<DailySample>,
}

/// One point of the historical temperature/precipitation chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalPoint {
    pub date: NaiveDate,
    pub temperature: f64,
    pub precipitation: f64,
}
