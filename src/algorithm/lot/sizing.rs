//! Presentation width heuristic

use crate::config::{MIN_WIDTH, PER_NODE_WIDTH};

/// `max(1200, node_count * 200)`, saturating at `u32::MAX`
#[must_use]
pub fn compute_presentation_width(node_count: usize) -> u32 {
    scaled_width(node_count, MIN_WIDTH, PER_NODE_WIDTH)
}

/// `max(min_width, node_count * per_node_width)`, saturating at `u32::MAX`
#[must_use]
pub fn scaled_width(node_count: usize, min_width: u32, per_node_width: u32) -> u32 {
    let count = u32::try_from(node_count).unwrap_or(u32::MAX);
    min_width.max(count.saturating_mul(per_node_width))
}
