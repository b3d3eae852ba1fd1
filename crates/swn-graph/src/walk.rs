use std::collections::BTreeMap;

use rand::Rng;
use serde::{Deserialize, Serialize};
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::rng::RngHandle;
use swn_core::NodeId;
use tracing::{debug, instrument};

use crate::graph::Graph;
use crate::ids::edge_key;

/// Describes a single unweighted random walk and the labels it leaves behind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkSpec {
    /// Maximum number of steps.
    pub length: usize,
    /// Requested start node; unknown ids fall back to the first node.
    pub start: NodeId,
    /// Label written onto every visited node other than the start.
    pub node_label: String,
    /// Label written onto every traversed edge.
    pub edge_label: String,
}

/// Walks the graph from `spec.start`, relabelling what it visits.
///
/// Edges are treated as undirected. At each step the next node is drawn
/// uniformly from the current node's neighbours, so nodes and edges may be
/// revisited. The walk stops early at a node without neighbours. The start
/// node keeps its label even if the walk passes through it again.
///
/// Returns the visited node ids, starting with the resolved start node. An
/// empty graph yields an empty path.
#[instrument(
    level = "debug",
    skip(rng, graph, spec),
    fields(start = %spec.start, length = spec.length),
    err
)]
pub fn random_walk(
    rng: &mut RngHandle,
    graph: &mut Graph,
    spec: &WalkSpec,
) -> Result<Vec<NodeId>, SwnError> {
    if spec.node_label.is_empty() || spec.edge_label.is_empty() {
        return Err(SwnError::Walk(
            ErrorInfo::new("empty-label", "walk labels must be non-empty")
                .with_context("node_label", spec.node_label.clone())
                .with_context("edge_label", spec.edge_label.clone()),
        ));
    }
    if graph.is_empty() {
        return Ok(Vec::new());
    }

    let index = graph.index();
    let start = match index.get(spec.start) {
        Some(idx) => idx,
        None => {
            debug!(requested = %spec.start, "walk start not found, using first node");
            0
        }
    };

    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); graph.node_count()];
    let mut edge_slots: BTreeMap<(usize, usize), usize> = BTreeMap::new();
    for (slot, edge) in graph.edges().iter().enumerate() {
        let (Some(source), Some(target)) = (index.get(edge.source()), index.get(edge.target()))
        else {
            continue;
        };
        adjacency[source].push(target);
        adjacency[target].push(source);
        edge_slots.insert(edge_key(source, target), slot);
    }

    let mut path = Vec::with_capacity(spec.length + 1);
    path.push(start);
    let mut current = start;
    for _ in 0..spec.length {
        let neighbours = &adjacency[current];
        if neighbours.is_empty() {
            debug!(steps = path.len() - 1, "walk reached a dead end");
            break;
        }
        let next = neighbours[rng.gen_range(0..neighbours.len())];
        if next != start {
            graph.nodes_mut()[next].set_label(spec.node_label.as_str());
        }
        if let Some(&slot) = edge_slots.get(&edge_key(current, next)) {
            graph.edges_mut()[slot].set_label(spec.edge_label.as_str());
        }
        path.push(next);
        current = next;
    }

    let nodes = graph.nodes();
    Ok(path.into_iter().map(|idx| nodes[idx].id()).collect())
}
