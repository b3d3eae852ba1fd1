use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::provenance::{RunProvenance, SchemaVersion};
use swn_core::{NodeId, RngHandle};
use swn_graph::{
    canonical_hash, force_directed_layout, random_walk, watts_strogatz, Graph, LayoutParams,
    WalkSpec, UNWALKED_EDGE_LABEL,
};
use tracing::{debug, info, instrument};

use crate::config::RandomGraphRequest;
use crate::determinism::{graph_stream, walk_stream};
use crate::serde::stable_hash_string;

/// Schema version of [`RandomGraphResponse`] payloads.
pub const RESPONSE_SCHEMA: SchemaVersion = SchemaVersion::new(1, 0, 0);

/// Path taken by one walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkRecord {
    /// Walker name.
    pub walker: String,
    /// Start node chosen for the walker.
    pub start: NodeId,
    /// Visited nodes, start first.
    pub path: Vec<NodeId>,
}

/// Fully annotated graph together with walk paths and provenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphResponse {
    /// Generated, laid out and walk-labelled graph.
    pub graph: Graph,
    /// One record per walker, in walker order.
    pub walks: Vec<WalkRecord>,
    /// Seeds and hashes identifying the run.
    pub provenance: RunProvenance,
}

/// Runs the full pipeline for a request.
///
/// The graph stream (`seed1`, `seed2`) drives generation, start selection and
/// layout in that order; the walk stream (`seed3`, `seed4`) drives the walks
/// only. Edges left unlabelled after all walks are marked
/// [`UNWALKED_EDGE_LABEL`]. Invalid requests fail before any work is done.
#[instrument(
    name = "pipeline.run",
    skip(request),
    fields(
        nodes = request.num_nodes,
        ring_degree = request.initial_connected,
        walkers = request.walkers.len(),
    ),
    err
)]
pub fn run(request: &RandomGraphRequest) -> Result<RandomGraphResponse, SwnError> {
    request.validate()?;
    let request_hash = stable_hash_string(request)?;

    let mut graph_rng = graph_stream(&request.seeds);
    let mut walk_rng = walk_stream(&request.seeds);

    let mut graph = watts_strogatz(
        &mut graph_rng,
        request.num_nodes,
        request.initial_connected,
        request.rewiring_probability,
    )?;

    let starts = select_start_nodes(&mut graph_rng, &graph, request.walkers.len())?;
    for (walker, start) in request.walkers.iter().zip(&starts) {
        graph.set_node_label(*start, walker.start_label.as_str())?;
    }

    force_directed_layout(
        &mut graph_rng,
        &LayoutParams::new(request.layout_iterations, request.layout_area),
        &mut graph,
    )?;

    let mut walks = Vec::with_capacity(request.walkers.len());
    for (walker, start) in request.walkers.iter().zip(starts) {
        let spec = WalkSpec {
            length: request.walk_length,
            start,
            node_label: walker.node_label.clone(),
            edge_label: walker.edge_label.clone(),
        };
        let path = random_walk(&mut walk_rng, &mut graph, &spec)?;
        debug!(walker = %walker.name, start = %start, steps = path.len() - 1, "walk finished");
        walks.push(WalkRecord {
            walker: walker.name.clone(),
            start,
            path,
        });
    }

    let unwalked = graph.label_unset_edges(UNWALKED_EDGE_LABEL);
    let graph_hash = canonical_hash(&graph);
    info!(
        edges = graph.edge_count(),
        unwalked,
        graph_hash = %graph_hash,
        "pipeline completed"
    );

    Ok(RandomGraphResponse {
        graph,
        walks,
        provenance: RunProvenance {
            schema_version: RESPONSE_SCHEMA,
            request_hash,
            graph_hash,
            seeds: request.seeds,
            tool_versions: tool_versions(),
        },
    })
}

/// Draws `count` distinct start nodes uniformly at random.
///
/// Each pick draws an index in `0..n` and redraws while it collides with an
/// earlier pick.
pub fn select_start_nodes(
    rng: &mut RngHandle,
    graph: &Graph,
    count: usize,
) -> Result<Vec<NodeId>, SwnError> {
    let n = graph.node_count();
    if count > n {
        return Err(SwnError::Config(
            ErrorInfo::new("too-many-walkers", "every walker needs a distinct start node")
                .with_context("walkers", count.to_string())
                .with_context("num_nodes", n.to_string()),
        ));
    }
    let mut chosen: Vec<usize> = Vec::with_capacity(count);
    for _ in 0..count {
        let mut candidate = rng.gen_range(0..n);
        while chosen.contains(&candidate) {
            candidate = rng.gen_range(0..n);
        }
        chosen.push(candidate);
    }
    let nodes = graph.nodes();
    Ok(chosen.into_iter().map(|idx| nodes[idx].id()).collect())
}

fn tool_versions() -> BTreeMap<String, String> {
    [("swn-pipeline".to_string(), env!("CARGO_PKG_VERSION").to_string())]
        .into_iter()
        .collect()
}
