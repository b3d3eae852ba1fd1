#![deny(missing_docs)]

//! Deterministic small-world graph engine: Watts–Strogatz topology generation,
//! Fruchterman–Reingold style layout and labelled random walks.
//!
//! The three stages form a pipeline over a single owned [`Graph`]:
//!
//! 1. [`watts_strogatz`] builds the topology from a seeded stream,
//! 2. [`force_directed_layout`] assigns integer positions in place,
//! 3. [`random_walk`] relabels the nodes and edges a walk visits.
//!
//! Every stage takes its randomness from an explicit [`swn_core::RngHandle`];
//! identical seeds and parameters reproduce identical graphs.

mod generators;
mod graph;
mod hash;
mod ids;
mod layout;
mod serialization;
mod stats;
mod walk;

pub use generators::{watts_strogatz, CIRCLE_RADIUS};
pub use graph::{Edge, Graph, Node, DEFAULT_NODE_LABEL, UNWALKED_EDGE_LABEL};
pub use hash::canonical_hash;
pub use ids::IdIndex;
pub use layout::{
    force_directed_layout, reachable_extent, LayoutParams, MAX_STEP, MIN_DISTANCE,
};
pub use serialization::{
    graph_from_bytes, graph_from_json, graph_to_bytes, graph_to_json, WireEdge, WireGraph,
    WireNode, WireNodeData,
};
pub use stats::{degree_summary, label_counts, DegreeSummary, LabelCounts};
pub use walk::{random_walk, WalkSpec};
