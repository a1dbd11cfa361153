//! Treatment line models
//!
//! `RawTreatmentLine` mirrors what the data-retrieval service delivers, including
//! its inconsistent field names. `TreatmentLine` is the canonical form produced by
//! normalization and is the only shape the graph builder consumes.

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// One treatment interval as reported upstream
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTreatmentLine {
    /// Opaque patient identifier
    #[serde(
        alias = "patientId",
        alias = "patient_id",
        deserialize_with = "deserialize_opt_text"
    )]
    pub patientid: Option<String>,

    /// Free-text treatment description
    #[serde(
        alias = "lineName",
        alias = "line_name",
        deserialize_with = "deserialize_opt_text"
    )]
    pub linename: Option<String>,

    /// Sequence position
    #[serde(alias = "lineNumber", deserialize_with = "deserialize_opt_int")]
    pub linenumber: Option<i64>,

    /// Alternate spelling of the sequence position used by older payloads
    #[serde(deserialize_with = "deserialize_opt_int")]
    pub line_number: Option<i64>,

    /// Start of the interval
    #[serde(
        alias = "lineStart",
        alias = "line_start",
        deserialize_with = "deserialize_opt_text"
    )]
    pub linestart: Option<String>,

    /// End of the interval
    #[serde(
        alias = "lineEnd",
        alias = "line_end",
        deserialize_with = "deserialize_opt_text"
    )]
    pub lineend: Option<String>,
}

impl RawTreatmentLine {
    /// Create a line with only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            linename: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the primary sequence position
    #[must_use]
    pub const fn with_line_number(mut self, number: i64) -> Self {
        self.linenumber = Some(number);
        self
    }

    /// Set the alternate sequence position
    #[must_use]
    pub const fn with_alternate_line_number(mut self, number: i64) -> Self {
        self.line_number = Some(number);
        self
    }

    /// Set the patient identifier
    #[must_use]
    pub fn with_patient(mut self, patient_id: impl Into<String>) -> Self {
        self.patientid = Some(patient_id.into());
        self
    }

    /// Set the interval timestamps
    #[must_use]
    pub fn with_interval(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.linestart = start.map(str::to_string);
        self.lineend = end.map(str::to_string);
        self
    }
}

/// Where a line's resolved position came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PositionSource {
    /// The `linenumber` field
    Primary,
    /// The `line_number` field
    Alternate,
    /// The record's 1-based place in the input
    Ordinal,
}

/// Canonical treatment line after normalization
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TreatmentLine {
    /// Opaque patient identifier, carried through untouched
    pub patient_id: Option<String>,
    /// Trimmed treatment name; may be empty
    pub name: String,
    /// Resolved sequence position, always at least 1
    pub position: u32,
    /// Which field supplied `position`
    pub position_source: PositionSource,
    /// Interval start, for display only
    pub start: Option<NaiveDate>,
    /// Interval end, for display only
    pub end: Option<NaiveDate>,
}

impl TreatmentLine {
    /// Whether the line has no usable name
    #[must_use]
    pub fn is_unnamed(&self) -> bool {
        self.name.is_empty()
    }
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::String(s)) => Some(s),
        Some(Value::Number(n)) => Some(n.to_string()),
        Some(Value::Bool(b)) => Some(b.to_string()),
        _ => None,
    })
}

/// Accepts integers, integral floats, and numeric strings; anything else is absent
fn deserialize_opt_int<'de, D>(deserializer: D) -> std::result::Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<Value>::deserialize(deserializer)? {
        Some(Value::Number(n)) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0 && f.is_finite())
                .map(|f| f as i64)
        }),
        Some(Value::String(s)) => s.trim().parse::<i64>().ok(),
        _ => None,
    })
}
