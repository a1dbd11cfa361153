//! Configuration for flow graph construction and presentation sizing.

use crate::algorithm::lot::sizing::scaled_width;
use crate::error::{LotError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Label of the synthetic origin node
pub const DEFAULT_ORIGIN_LABEL: &str = "Start";
/// Name substituted for treatment lines whose name is blank
pub const DEFAULT_PLACEHOLDER_NAME: &str = "Unknown";
/// Visual thickness of every edge
pub const DEFAULT_EDGE_WEIGHT: u32 = 2;
/// Lower bound of the presentation width
pub const MIN_WIDTH: u32 = 1200;
/// Width contributed by each node
pub const PER_NODE_WIDTH: u32 = 200;

/// Configuration for date parsing of treatment line start/end timestamps
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DateFormatConfig {
    /// List of date format strings to try when parsing dates
    pub date_formats: Vec<String>,
    /// Enable heuristic format detection
    pub enable_format_detection: bool,
}

impl Default for DateFormatConfig {
    fn default() -> Self {
        Self {
            date_formats: vec![
                "%Y-%m-%d".to_string(), // ISO format: 2023-01-15
                "%Y/%m/%d".to_string(), // 2023/01/15
                "%m/%d/%Y".to_string(), // US: 01/15/2023
                "%d.%m.%Y".to_string(), // 15.01.2023
                "%Y%m%d".to_string(),   // Compact: 20230115
                "%d %b %Y".to_string(), // 15 Jan 2023
            ],
            enable_format_detection: true,
        }
    }
}

/// Configuration for the sequence-to-graph transformer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowConfig {
    /// Label of the synthetic origin node at index 0
    pub origin_label: String,
    /// Substitute name for treatment lines with an empty name
    pub placeholder_name: String,
    /// Weight assigned to every edge
    pub edge_weight: u32,
    /// Minimum presentation width
    pub min_width: u32,
    /// Presentation width per node
    pub per_node_width: u32,
    /// Date parsing for line start/end
    pub date_format_config: DateFormatConfig,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            origin_label: DEFAULT_ORIGIN_LABEL.to_string(),
            placeholder_name: DEFAULT_PLACEHOLDER_NAME.to_string(),
            edge_weight: DEFAULT_EDGE_WEIGHT,
            min_width: MIN_WIDTH,
            per_node_width: PER_NODE_WIDTH,
            date_format_config: DateFormatConfig::default(),
        }
    }
}

impl FlowConfig {
    /// Create a new configuration with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the origin node label
    #[must_use]
    pub fn with_origin_label(mut self, label: impl Into<String>) -> Self {
        self.origin_label = label.into();
        self
    }

    /// Set the placeholder used for unnamed treatment lines
    #[must_use]
    pub fn with_placeholder_name(mut self, name: impl Into<String>) -> Self {
        self.placeholder_name = name.into();
        self
    }

    /// Set the edge weight
    #[must_use]
    pub const fn with_edge_weight(mut self, weight: u32) -> Self {
        self.edge_weight = weight;
        self
    }

    /// Set the sizing constants
    #[must_use]
    pub const fn with_widths(mut self, min_width: u32, per_node_width: u32) -> Self {
        self.min_width = min_width;
        self.per_node_width = per_node_width;
        self
    }

    /// Load a configuration from a JSON document; missing keys take defaults
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a configuration from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Reject values that would produce unlabeled nodes or invisible edges
    pub fn validate(&self) -> Result<()> {
        if self.origin_label.trim().is_empty() {
            return Err(LotError::InvalidConfig(
                "origin label must not be blank".to_string(),
            ));
        }
        if self.placeholder_name.trim().is_empty() {
            return Err(LotError::InvalidConfig(
                "placeholder name must not be blank".to_string(),
            ));
        }
        if self.edge_weight == 0 {
            return Err(LotError::InvalidConfig(
                "edge weight must be positive".to_string(),
            ));
        }
        if self.min_width == 0 {
            return Err(LotError::InvalidConfig(
                "minimum width must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Presentation width for a graph with `node_count` nodes
    #[must_use]
    pub fn presentation_width(&self, node_count: usize) -> u32 {
        scaled_width(node_count, self.min_width, self.per_node_width)
    }
}

impl fmt::Display for FlowConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Flow Configuration:")?;
        writeln!(f, "  Origin Label: {}", self.origin_label)?;
        writeln!(f, "  Placeholder Name: {}", self.placeholder_name)?;
        writeln!(f, "  Edge Weight: {}", self.edge_weight)?;
        writeln!(f, "  Minimum Width: {}", self.min_width)?;
        writeln!(f, "  Per-Node Width: {}", self.per_node_width)?;
        writeln!(
            f,
            "  Date Formats: {}",
            self.date_format_config.date_formats.join(", ")
        )
    }
}
