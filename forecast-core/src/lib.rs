//! Core library for the `forecast` dashboard tools.
//!
//! This crate defines:
//! - The loosely-typed provider payload and alias-based field resolution
//! - Weather-condition classification from WMO codes
//! - Temporal windowing into chart-ready hourly/daily series
//! - Configuration handling and the payload-source abstraction
//!
//! It is used by `forecast-cli`, but can also be reused by other binaries or services.

pub mod classify;
pub mod config;
pub mod model;
pub mod payload;
pub mod resolve;
pub mod source;
pub mod window;

pub use classify::WeatherCondition;
pub use config::Config;
pub use model::{DailySample, ForecastWindow, HistoricalPoint, HourlySample};
pub use payload::{ProviderPayload, Section};
pub use resolve::{Quantity, resolve, resolve_or, resolve_text};
pub use source::{ForecastSource, SourceError};
pub use window::{
    DEFAULT_HOURLY_LIMIT, format_historical, normalize, parse_local_datetime, window_daily,
    window_hourly,
};
