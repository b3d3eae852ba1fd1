#![deny(missing_docs)]

//! End-to-end small-world graph pipeline: request validation, random stream
//! partitioning, topology generation, layout and walk annotation.

/// Request schema, defaults and validation.
pub mod config;
/// Deterministic random stream construction.
pub mod determinism;
/// Pipeline entry point and response types.
pub mod pipeline;
/// Canonical JSON and YAML helpers.
pub mod serde;

pub use config::{Limits, RandomGraphRequest, WalkerSpec};
pub use determinism::{graph_stream, walk_stream};
pub use pipeline::{run, select_start_nodes, RandomGraphResponse, WalkRecord};
