//! The loosely-typed provider response this core consumes.
//!
//! Provider payloads are kept as raw JSON maps rather than fixed structs:
//! the same logical quantity may arrive under any of several field names
//! (see [`crate::resolve::Quantity`]), arrays may be shorter than `time`,
//! and whole sections may be absent. Shape discipline is deferred to the
//! field resolver, which treats anything malformed as "not present".

use serde::Deserialize;
use serde_json::{Map, Value};

/// One time-indexed section (`hourly` or `daily`): parallel arrays keyed by
/// provider field names, plus a `time` array holding ISO-8601 strings.
pub type Section = Map<String, Value>;

/// A parsed provider response. Both sections are optional; a payload with
/// neither normalizes to empty windows.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProviderPayload {
    #[serde(default)]
    pub hourly: Option<Section>,
    #[serde(default)]
    pub daily: Option<Section>,
}

impl ProviderPayload {
    /// The `time` array of a section, or an empty slice when it is missing
    /// or not an array.
    pub fn time_axis(section: &Section) -> &[Value] {
        section
            .get("time")
            .and_then(Value::as_array)
            .map_or(&[], Vec::as_slice)
    }
}
