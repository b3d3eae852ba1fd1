use sha2::{Digest, Sha256};

use crate::graph::Graph;

/// Computes the canonical hash of a graph's structure, labels and positions.
///
/// Nodes and edges are hashed in their stored order; edge endpoints are hashed
/// as an unordered pair so the stored direction does not matter.
pub fn canonical_hash(graph: &Graph) -> String {
    let mut hasher = Sha256::new();

    hasher.update((graph.node_count() as u64).to_le_bytes());
    for node in graph.nodes() {
        hasher.update(node.id().as_raw().to_le_bytes());
        update_str(node.label(), &mut hasher);
        hasher.update(node.position().x.to_le_bytes());
        hasher.update(node.position().y.to_le_bytes());
    }

    hasher.update((graph.edge_count() as u64).to_le_bytes());
    for edge in graph.edges() {
        let (low, high) = edge.endpoints();
        hasher.update(edge.id().as_raw().to_le_bytes());
        hasher.update(low.as_raw().to_le_bytes());
        hasher.update(high.as_raw().to_le_bytes());
        update_str(edge.label().unwrap_or("-"), &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_str(value: &str, hasher: &mut Sha256) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}
