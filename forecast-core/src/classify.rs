//! WMO weather-code classification.
//!
//! Two tables cooperate: an exact-match table for the discrete codes the
//! provider actually publishes, and an inclusive-upper-bound range table as
//! fallback for codes in 0..=99 that the exact table does not list. The
//! exact table takes precedence wherever it applies; both tables agree on
//! every listed code. Codes outside 0..=99 classify as `Unknown`.
//!
//! See: https://open-meteo.com/en/docs#weathervariables

use serde::{Deserialize, Serialize};

/// The discrete WMO codes published by the provider.
pub const KNOWN_CODES: [i64; 24] = [
    0, 1, 2, 3, 45, 48, 51, 53, 55, 61, 63, 65, 71, 73, 75, 77, 80, 81, 82, 85, 86, 95, 96, 99,
];

/// Categorical sky/precipitation state derived from a WMO code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum WeatherCondition {
    Clear,
    Cloudy,
    Drizzle,
    Rain,
    Snow,
    Showers,
    Thunder,
    #[default]
    Unknown,
}

impl WeatherCondition {
    /// Classify a WMO code. Total and deterministic: every integer maps to
    /// exactly one category.
    pub fn from_code(code: i64) -> Self {
        Self::exact(code).unwrap_or_else(|| Self::from_range(code))
    }

    /// Classify an already-resolved code value; a missing code is `Unknown`.
    pub fn from_resolved(code: Option<f64>) -> Self {
        code.map_or(Self::Unknown, |c| Self::from_code(c as i64))
    }

    /// Exact-match table over the published discrete codes.
    fn exact(code: i64) -> Option<Self> {
        let condition = match code {
            0 | 1 | 2 | 3 => Self::Clear,
            45 | 48 => Self::Cloudy,
            51 | 53 | 55 => Self::Drizzle,
            61 | 63 | 65 => Self::Rain,
            71 | 73 | 75 | 77 => Self::Snow,
            80 | 81 | 82 => Self::Showers,
            85 | 86 => Self::Snow,
            95 | 96 | 99 => Self::Thunder,
            _ => return None,
        };
        Some(condition)
    }

    /// Range fallback for unlisted codes. Bands are inclusive upper bounds.
    fn from_range(code: i64) -> Self {
        match code {
            0..=3 => Self::Clear,
            4..=49 => Self::Cloudy,
            50..=59 => Self::Drizzle,
            60..=69 => Self::Rain,
            70..=79 => Self::Snow,
            80..=82 => Self::Showers,
            83..=86 => Self::Snow,
            87..=99 => Self::Thunder,
            _ => Self::Unknown,
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Clear => "Clear",
            Self::Cloudy => "Cloudy",
            Self::Drizzle => "Drizzle",
            Self::Rain => "Rain",
            Self::Snow => "Snow",
            Self::Showers => "Showers",
            Self::Thunder => "Thunderstorm",
            Self::Unknown => "Unknown",
        }
    }

    /// Icon tag for the rendering collaborator.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Clear => "clear",
            Self::Cloudy => "cloudy",
            Self::Drizzle => "drizzle",
            Self::Rain => "rain",
            Self::Snow => "snow",
            Self::Showers => "showers",
            Self::Thunder => "thunder",
            Self::Unknown => "unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clear_band() {
        for code in 0..=3 {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Clear);
        }
    }

    #[test]
    fn fog_codes_classify_as_cloudy() {
        assert_eq!(WeatherCondition::from_code(45), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_code(48), WeatherCondition::Cloudy);
    }

    #[test]
    fn drizzle_codes() {
        for code in [51, 53, 55] {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Drizzle);
        }
    }

    #[test]
    fn rain_codes() {
        for code in [61, 63, 65] {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Rain);
        }
    }

    #[test]
    fn snow_codes_including_shower_variants() {
        for code in [71, 73, 75, 77, 85, 86] {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Snow);
        }
    }

    #[test]
    fn shower_codes() {
        for code in [80, 81, 82] {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Showers);
        }
    }

    #[test]
    fn thunder_codes() {
        for code in [95, 96, 99] {
            assert_eq!(WeatherCondition::from_code(code), WeatherCondition::Thunder);
        }
    }

    #[test]
    fn exact_and_range_tables_agree_on_all_known_codes() {
        for code in KNOWN_CODES {
            let exact = WeatherCondition::exact(code).expect("listed code");
            assert_eq!(
                exact,
                WeatherCondition::from_range(code),
                "tables disagree on code {code}"
            );
        }
    }

    #[test]
    fn unlisted_codes_fall_back_to_range_bands() {
        assert_eq!(WeatherCondition::from_code(40), WeatherCondition::Cloudy);
        assert_eq!(WeatherCondition::from_code(57), WeatherCondition::Drizzle);
        assert_eq!(WeatherCondition::from_code(66), WeatherCondition::Rain);
        assert_eq!(WeatherCondition::from_code(78), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_code(83), WeatherCondition::Snow);
        assert_eq!(WeatherCondition::from_code(91), WeatherCondition::Thunder);
    }

    #[test]
    fn codes_outside_both_tables_are_unknown() {
        assert_eq!(WeatherCondition::from_code(-1), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_code(100), WeatherCondition::Unknown);
        assert_eq!(WeatherCondition::from_code(9999), WeatherCondition::Unknown);
    }

    #[test]
    fn missing_code_is_unknown() {
        assert_eq!(
            WeatherCondition::from_resolved(None),
            WeatherCondition::Unknown
        );
        assert_eq!(
            WeatherCondition::from_resolved(Some(95.0)),
            WeatherCondition::Thunder
        );
    }

    #[test]
    fn labels_and_icons_are_fixed() {
        assert_eq!(WeatherCondition::Clear.label(), "Clear");
        assert_eq!(WeatherCondition::Thunder.label(), "Thunderstorm");
        assert_eq!(WeatherCondition::Clear.icon(), "clear");
        assert_eq!(WeatherCondition::Unknown.icon(), "unknown");
    }
}
