//! Diagnosis groupings
//!
//! A payload from the data-retrieval service is a list of diagnoses, each owning
//! the treatment lines reported for it. Lines are never shared between diagnoses.

use crate::error::Result;
use crate::models::treatment_line::RawTreatmentLine;
use crate::utils::logging::log_warning;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Treatment lines recorded for a single diagnosis
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiagnosisLot {
    /// Diagnosis code, e.g. an ICD-10 code
    #[serde(alias = "diagnosis_code", alias = "diagnosisCode")]
    pub code: String,
    /// Human readable diagnosis name
    #[serde(default, alias = "diagnosis_name", alias = "diagnosisName")]
    pub name: Option<String>,
    /// Treatment lines in the order they were delivered
    #[serde(default, alias = "lot", alias = "treatment_lines", alias = "treatmentLines")]
    pub lines: Vec<RawTreatmentLine>,
}

impl DiagnosisLot {
    /// Create an empty grouping for a diagnosis code
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Self::default()
        }
    }

    /// Set the diagnosis name
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the treatment lines
    #[must_use]
    pub fn with_lines(mut self, lines: Vec<RawTreatmentLine>) -> Self {
        self.lines = lines;
        self
    }

    /// Whether this diagnosis code matches `code`, ignoring case and padding
    #[must_use]
    pub fn matches_code(&self, code: &str) -> bool {
        self.code.trim().eq_ignore_ascii_case(code.trim())
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PayloadShape {
    Bare(Vec<DiagnosisLot>),
    Wrapped { diagnoses: Vec<DiagnosisLot> },
}

impl From<PayloadShape> for LotPayload {
    fn from(shape: PayloadShape) -> Self {
        match shape {
            PayloadShape::Bare(diagnoses) | PayloadShape::Wrapped { diagnoses } => {
                Self { diagnoses }
            }
        }
    }
}

/// All diagnoses returned for a patient, in delivery order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PayloadShape")]
pub struct LotPayload {
    /// Diagnosis groupings
    pub diagnoses: Vec<DiagnosisLot>,
}

impl LotPayload {
    /// Create a payload from diagnosis groupings
    #[must_use]
    pub const fn new(diagnoses: Vec<DiagnosisLot>) -> Self {
        Self { diagnoses }
    }

    /// Decode a payload from JSON (a bare array or `{"diagnoses": [...]}`)
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decode a payload from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Resolve the active diagnosis
    ///
    /// An explicit code wins when it matches; otherwise the first diagnosis is
    /// used. Returns `None` only when the payload holds no diagnoses.
    #[must_use]
    pub fn select(&self, code: Option<&str>) -> Option<&DiagnosisLot> {
        if let Some(code) = code {
            if let Some(found) = self.diagnoses.iter().find(|d| d.matches_code(code)) {
                return Some(found);
            }
            log_warning(
                "Requested diagnosis not found, falling back to the first diagnosis",
                Some(code),
            );
        }
        self.diagnoses.first()
    }

    /// Number of diagnoses
    #[must_use]
    pub fn len(&self) -> usize {
        self.diagnoses.len()
    }

    /// Whether the payload holds no diagnoses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.diagnoses.is_empty()
    }
}
