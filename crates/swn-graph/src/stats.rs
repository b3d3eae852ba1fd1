use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::graph::Graph;

/// Degree statistics of a graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DegreeSummary {
    /// Number of nodes.
    pub nodes: usize,
    /// Number of edges.
    pub edges: usize,
    /// Smallest node degree, zero for an empty graph.
    pub min: usize,
    /// Largest node degree, zero for an empty graph.
    pub max: usize,
    /// Mean node degree, zero for an empty graph.
    pub mean: f64,
    /// Number of nodes per degree.
    pub histogram: BTreeMap<usize, usize>,
}

/// Number of nodes and edges carrying each label.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelCounts {
    /// Node label histogram.
    pub nodes: BTreeMap<String, usize>,
    /// Edge label histogram; unlabelled edges are counted under `<unset>`.
    pub edges: BTreeMap<String, usize>,
}

/// Computes the degree statistics of a graph.
pub fn degree_summary(graph: &Graph) -> DegreeSummary {
    let index = graph.index();
    let mut degrees = vec![0usize; graph.node_count()];
    for edge in graph.edges() {
        for endpoint in [edge.source(), edge.target()] {
            if let Some(idx) = index.get(endpoint) {
                degrees[idx] += 1;
            }
        }
    }

    let mut histogram = BTreeMap::new();
    for degree in &degrees {
        *histogram.entry(*degree).or_insert(0) += 1;
    }
    let mean = if degrees.is_empty() {
        0.0
    } else {
        degrees.iter().sum::<usize>() as f64 / degrees.len() as f64
    };

    DegreeSummary {
        nodes: graph.node_count(),
        edges: graph.edge_count(),
        min: degrees.iter().copied().min().unwrap_or(0),
        max: degrees.iter().copied().max().unwrap_or(0),
        mean,
        histogram,
    }
}

/// Counts node and edge labels.
pub fn label_counts(graph: &Graph) -> LabelCounts {
    let mut counts = LabelCounts::default();
    for node in graph.nodes() {
        *counts.nodes.entry(node.label().to_string()).or_insert(0) += 1;
    }
    for edge in graph.edges() {
        let label = edge.label().unwrap_or("<unset>");
        *counts.edges.entry(label.to_string()).or_insert(0) += 1;
    }
    counts
}
