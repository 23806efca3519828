//! Stored location payload decoding
//!
//! The persistence layer has produced location values through two different
//! write paths over time: one stores a flat JSON object, the other stores an
//! object whose `coordinate` field is itself a JSON-encoded string. This
//! module is the sole reader of that field and reduces every shape to either
//! a canonical [`LocationRecord`] or a clean absence.

use crate::error::Result;
use crate::location::{Coordinate, LocationRecord};
use serde_json::Value;

/// The shapes a stored location value can arrive in
///
/// Modeled explicitly so each case the storage layer can produce is a named,
/// tested branch rather than a runtime type check.
#[derive(Debug, Clone, PartialEq)]
pub enum RawLocation {
    /// No value stored
    Absent,
    /// A JSON-encoded string (possibly with a double-encoded coordinate)
    Text(String),
    /// An already-structured JSON value
    Structured(Value),
}

impl From<&str> for RawLocation {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<Option<String>> for RawLocation {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(s) => Self::Text(s),
            None => Self::Absent,
        }
    }
}

impl From<Value> for RawLocation {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Absent,
            Value::String(s) => Self::Text(s),
            other => Self::Structured(other),
        }
    }
}

impl From<Option<Value>> for RawLocation {
    fn from(value: Option<Value>) -> Self {
        match value {
            Some(v) => Self::from(v),
            None => Self::Absent,
        }
    }
}

/// Decode a stored location value into the canonical record
///
/// Total over its input: any decode or validation failure yields `None`,
/// never an error. A coordinate with a missing axis, a non-numeric axis, or
/// an axis outside the valid range is treated as no location rather than
/// defaulted.
pub fn parse(raw: RawLocation) -> Option<LocationRecord> {
    let value = match raw {
        RawLocation::Absent => return None,
        RawLocation::Text(text) => serde_json::from_str::<Value>(&text).ok()?,
        RawLocation::Structured(value) => value,
    };

    // The legacy write path JSON-encodes the coordinate field a second time
    let coordinate_value = match value.get("coordinate")? {
        Value::String(inner) => serde_json::from_str::<Value>(inner).ok()?,
        other => other.clone(),
    };

    let coordinate: Coordinate = serde_json::from_value(coordinate_value).ok()?;
    coordinate.validate().ok()?;

    Some(LocationRecord::new(coordinate))
}

/// Serialize a record to its stored string form
///
/// The writer side always produces single-level JSON; only the reader
/// tolerates the double-encoded legacy shape.
pub fn to_storage_string(record: &LocationRecord) -> Result<String> {
    Ok(serde_json::to_string(record)?)
}
