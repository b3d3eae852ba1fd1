use std::collections::HashMap;

use swn_core::{EdgeId, NodeId};

use crate::graph::Node;

/// Dense index over the node order of a graph, built once per stage.
#[derive(Debug, Clone, Default)]
pub struct IdIndex {
    positions: HashMap<NodeId, usize>,
}

impl IdIndex {
    pub(crate) fn build(nodes: &[Node]) -> Self {
        let positions = nodes
            .iter()
            .enumerate()
            .map(|(idx, node)| (node.id(), idx))
            .collect();
        Self { positions }
    }

    /// Returns the dense position of a node, if it belongs to the graph.
    pub fn get(&self, id: NodeId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Returns the number of indexed nodes.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Returns whether the index is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

/// Orders an unordered pair so both directions map to the same key.
pub(crate) fn edge_key<T: Ord>(a: T, b: T) -> (T, T) {
    if a <= b {
        (a, b)
    } else {
        (b, a)
    }
}

/// Creates a [`NodeId`] from a generation index.
pub(crate) fn make_node(index: usize) -> NodeId {
    NodeId::from_raw(index as u64)
}

/// Creates an [`EdgeId`] from a generation index.
pub(crate) fn make_edge(index: usize) -> EdgeId {
    EdgeId::from_raw(index as u64)
}

#[cfg(test)]
mod tests {
    use swn_core::Position;

    use super::*;

    #[test]
    fn edge_key_is_symmetric() {
        assert_eq!(edge_key(3, 1), edge_key(1, 3));
        assert_eq!(edge_key(make_node(2), make_node(9)), (make_node(2), make_node(9)));
    }

    #[test]
    fn index_follows_node_order() {
        let nodes = vec![
            Node::new(make_node(5), "a", Position::default()),
            Node::new(make_node(2), "b", Position::default()),
        ];
        let index = IdIndex::build(&nodes);
        assert_eq!(index.get(make_node(5)), Some(0));
        assert_eq!(index.get(make_node(2)), Some(1));
        assert_eq!(index.get(make_node(0)), None);
        assert_eq!(index.len(), 2);
    }
}
