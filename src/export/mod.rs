//! Text renderings of flow graphs for downstream tools

pub mod mermaid;

pub use mermaid::to_mermaid_sankey;

use crate::error::Result;
use serde::Serialize;

/// Serialize any output value as JSON
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
