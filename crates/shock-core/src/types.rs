//! Request and result types for the normalization pipeline.

use serde::{Deserialize, Serialize};

/// A pair of country names supplied by the caller.
///
/// Both fields are free text and flow into the prompt verbatim; this layer
/// performs no validation against a canonical country list. Field names
/// serialize as `homeCountry` / `visitingCountry` on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryPair {
    /// Where the traveler is from.
    pub home_country: String,
    /// Where the traveler is going.
    pub visiting_country: String,
}

impl CountryPair {
    /// Create a pair from two country names.
    pub fn new(home: impl Into<String>, visiting: impl Into<String>) -> Self {
        Self {
            home_country: home.into(),
            visiting_country: visiting.into(),
        }
    }
}

/// One structured culture-shock fact.
///
/// The model is asked for severity in `{Low, Medium, High}` but is not
/// contractually bound to it, so `severity` stays a plain string and any
/// value is passed through verbatim. Missing fields default to empty
/// strings rather than failing the whole parse.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShockRecord {
    /// Short description of the shock.
    #[serde(default)]
    pub shock: String,
    /// Severity label, nominally Low/Medium/High.
    #[serde(default)]
    pub severity: String,
    /// Advice to adapt.
    #[serde(default)]
    pub tips: String,
}

impl ShockRecord {
    /// Coerce one parsed JSON array element into a record.
    ///
    /// The model's output shape is trusted once it parses as JSON, so this
    /// never fails: non-string scalars are stringified, nested values are
    /// kept as compact JSON, and missing or null fields default to empty
    /// strings. A non-object element yields an all-default record.
    pub fn from_value(value: &serde_json::Value) -> Self {
        Self {
            shock: field_as_string(value, "shock"),
            severity: field_as_string(value, "severity"),
            tips: field_as_string(value, "tips"),
        }
    }
}

fn field_as_string(value: &serde_json::Value, field: &str) -> String {
    match value.get(field) {
        None | Some(serde_json::Value::Null) => String::new(),
        Some(serde_json::Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
