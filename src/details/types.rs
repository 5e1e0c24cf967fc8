//! Data model for the details route.

use serde::{Serialize, Serializer};
use std::fmt;

/// Value substituted for a parameter the request did not supply.
pub const SENTINEL: i64 = -1;

/// Title carried by every details response.
pub const TITLE: &str = "Subitem page";

/// Application name and version reported in the `app` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub name: String,
    pub version: String,
}

impl Metadata {
    pub fn new(name: impl Into<String>, version: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
        }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new("app-name", "1.0.0")
    }
}

/// A request parameter after sentinel substitution.
///
/// Serializes as the supplied string, or as the integer `-1` when missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    Supplied(String),
    Missing,
}

impl ParamValue {
    /// Resolve an optional raw parameter. Only absence triggers the sentinel.
    pub fn from_raw(raw: Option<&str>) -> Self {
        match raw {
            Some(value) => ParamValue::Supplied(value.to_string()),
            None => ParamValue::Missing,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, ParamValue::Missing)
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Supplied(value) => f.write_str(value),
            ParamValue::Missing => write!(f, "{}", SENTINEL),
        }
    }
}

impl Serialize for ParamValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ParamValue::Supplied(value) => serializer.serialize_str(value),
            ParamValue::Missing => serializer.serialize_i64(SENTINEL),
        }
    }
}

/// Body of the details route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailsResponse {
    pub title: String,
    pub details: String,
    pub empty: ParamValue,
    pub app: String,
}
