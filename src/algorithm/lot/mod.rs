//! Line-of-therapy flow graph construction
//!
//! Raw treatment lines are normalized, ordered by line number, labeled and
//! chained behind a synthetic origin node.

pub mod batch;
pub mod builder;
pub mod cache;
pub mod normalize;
pub mod sizing;
pub mod view;

pub use batch::build_all;
pub use builder::{build_flow_graph, build_flow_graph_with, build_from_lines};
pub use cache::FlowGraphCache;
pub use normalize::normalize_lines;
pub use sizing::compute_presentation_width;
pub use view::FlowView;
