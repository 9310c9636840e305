//! Alias-based field resolution.
//!
//! Providers have renamed fields over time (`weathercode` vs `weather_code`,
//! `temperature` vs `temperature_2m`), and different endpoints use different
//! spellings for the same quantity. Instead of repeating fallback chains at
//! every use site, each logical quantity carries one priority-ordered alias
//! list; adding a new provider spelling is a one-line table edit.

use serde_json::Value;

use crate::payload::Section;

/// A logical quantity that may appear in a payload section under one of
/// several field names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Temperature,
    FeelsLike,
    Humidity,
    WindSpeed,
    Precipitation,
    PrecipitationProbability,
    WeatherCode,
    TemperatureMin,
    TemperatureMax,
    TemperatureMean,
    Sunrise,
    Sunset,
}

impl Quantity {
    /// Accepted field names, highest priority first. The modern provider
    /// spelling leads; legacy/alternate spellings follow.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Quantity::Temperature => &["temperature_2m", "temperature"],
            Quantity::FeelsLike => &["apparent_temperature", "apparentTemperature"],
            Quantity::Humidity => &["relative_humidity_2m", "humidity"],
            Quantity::WindSpeed => &["wind_speed_10m", "wind_speed"],
            Quantity::Precipitation => &["precipitation", "precipitation_sum"],
            Quantity::PrecipitationProbability => {
                &["precipitation_probability", "precipitation_probability_max"]
            }
            Quantity::WeatherCode => &["weather_code", "weathercode"],
            Quantity::TemperatureMin => &["temperature_2m_min", "temperature_min"],
            Quantity::TemperatureMax => &["temperature_2m_max", "temperature_max"],
            Quantity::TemperatureMean => &["temperature_2m_mean", "temperature_mean"],
            Quantity::Sunrise => &["sunrise"],
            Quantity::Sunset => &["sunset"],
        }
    }
}

/// First present, non-null numeric value for `quantity` at `index`.
///
/// Absent arrays, out-of-range indices, nulls, and non-numeric values all
/// count as "not present" and fall through to the next alias. Never panics.
pub fn resolve(section: &Section, quantity: Quantity, index: usize) -> Option<f64> {
    quantity
        .aliases()
        .iter()
        .find_map(|alias| section.get(*alias)?.as_array()?.get(index)?.as_f64())
}

/// Like [`resolve`], degrading to a caller-supplied default.
pub fn resolve_or(section: &Section, quantity: Quantity, index: usize, default: f64) -> f64 {
    resolve(section, quantity, index).unwrap_or(default)
}

/// String variant of [`resolve`] for timestamp-valued quantities
/// (sunrise/sunset).
pub fn resolve_text(section: &Section, quantity: Quantity, index: usize) -> Option<&str> {
    quantity
        .aliases()
        .iter()
        .find_map(|alias| section.get(*alias)?.as_array()?.get(index)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn section(value: serde_json::Value) -> Section {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn primary_alias_wins_when_both_populated() {
        let s = section(json!({
            "temperature_2m": [1.5, 2.5],
            "temperature": [10.0, 20.0],
        }));
        assert_eq!(resolve(&s, Quantity::Temperature, 0), Some(1.5));
        assert_eq!(resolve(&s, Quantity::Temperature, 1), Some(2.5));
    }

    #[test]
    fn falls_back_to_legacy_alias() {
        let s = section(json!({ "temperature": [10.0] }));
        assert_eq!(resolve(&s, Quantity::Temperature, 0), Some(10.0));

        let s = section(json!({ "weathercode": [61] }));
        assert_eq!(resolve(&s, Quantity::WeatherCode, 0), Some(61.0));
    }

    #[test]
    fn null_hole_in_primary_falls_through_to_next_alias() {
        let s = section(json!({
            "temperature_2m": [1.0, null],
            "temperature": [9.0, 9.5],
        }));
        assert_eq!(resolve(&s, Quantity::Temperature, 1), Some(9.5));
    }

    #[test]
    fn short_array_is_not_present_at_that_index() {
        let s = section(json!({ "relative_humidity_2m": [50.0] }));
        assert_eq!(resolve(&s, Quantity::Humidity, 0), Some(50.0));
        assert_eq!(resolve(&s, Quantity::Humidity, 1), None);
        assert_eq!(resolve(&s, Quantity::Humidity, 400), None);
    }

    #[test]
    fn type_mismatches_are_not_present() {
        let s = section(json!({
            "wind_speed_10m": "not-an-array",
            "wind_speed": [[3.0]],
        }));
        assert_eq!(resolve(&s, Quantity::WindSpeed, 0), None);

        let s = section(json!({ "wind_speed_10m": ["7"] }));
        assert_eq!(resolve(&s, Quantity::WindSpeed, 0), None);
    }

    #[test]
    fn resolve_or_uses_caller_default() {
        let s = Section::new();
        assert_eq!(resolve_or(&s, Quantity::Precipitation, 0, 0.0), 0.0);
        assert_eq!(resolve_or(&s, Quantity::Precipitation, 0, -1.0), -1.0);
    }

    #[test]
    fn resolve_text_reads_sunrise_strings() {
        let s = section(json!({ "sunrise": ["2024-01-01T08:12"] }));
        assert_eq!(
            resolve_text(&s, Quantity::Sunrise, 0),
            Some("2024-01-01T08:12")
        );
        assert_eq!(resolve_text(&s, Quantity::Sunrise, 1), None);
    }

    #[test]
    fn integer_values_resolve_as_numbers() {
        let s = section(json!({ "precipitation_probability": [80] }));
        assert_eq!(
            resolve(&s, Quantity::PrecipitationProbability, 0),
            Some(80.0)
        );
    }
}
