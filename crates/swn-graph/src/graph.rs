use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::{EdgeId, NodeId, Position};

use crate::ids::{edge_key, IdIndex};
use crate::serialization::WireGraph;

/// Label assigned to every node at generation time.
pub const DEFAULT_NODE_LABEL: &str = "labelNode";

/// Label given to edges that no walk traversed.
pub const UNWALKED_EDGE_LABEL: &str = "unwalkedEdge";

/// A graph vertex with a rendering label and a screen position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    label: String,
    position: Position,
}

impl Node {
    /// Creates a node with the provided identity, label and position.
    pub fn new(id: NodeId, label: impl Into<String>, position: Position) -> Self {
        Self {
            id,
            label: label.into(),
            position,
        }
    }

    /// Returns the stable identifier of the node.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// Returns the rendering label of the node.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns the current position of the node.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrites the rendering label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = label.into();
    }

    /// Overwrites the position.
    pub fn set_position(&mut self, position: Position) {
        self.position = position;
    }
}

/// An undirected edge. The stored direction only matters for serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    id: EdgeId,
    source: NodeId,
    target: NodeId,
    label: Option<String>,
}

impl Edge {
    /// Creates an unlabelled edge between two nodes.
    pub fn new(id: EdgeId, source: NodeId, target: NodeId) -> Self {
        Self {
            id,
            source,
            target,
            label: None,
        }
    }

    /// Returns the stable identifier of the edge.
    pub fn id(&self) -> EdgeId {
        self.id
    }

    /// Returns the stored source endpoint.
    pub fn source(&self) -> NodeId {
        self.source
    }

    /// Returns the stored target endpoint.
    pub fn target(&self) -> NodeId {
        self.target
    }

    /// Returns the endpoints ordered by identifier.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }

    /// Returns the rendering label, if any walk or composition step set one.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Overwrites the rendering label.
    pub fn set_label(&mut self, label: impl Into<String>) {
        self.label = Some(label.into());
    }
}

/// Ordered collection of nodes and undirected edges.
///
/// Invariants: node ids are unique, every edge endpoint exists, there are no
/// self-loops and no two edges join the same unordered pair. Graphs built by
/// [`Graph::from_parts`] are checked against these rules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireGraph", try_from = "WireGraph")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl Graph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assembles a graph from nodes and edges, validating structural invariants.
    pub fn from_parts(nodes: Vec<Node>, edges: Vec<Edge>) -> Result<Self, SwnError> {
        let mut node_ids = BTreeSet::new();
        for node in &nodes {
            if !node_ids.insert(node.id) {
                return Err(SwnError::Graph(
                    ErrorInfo::new("duplicate-node", "node identifier appears more than once")
                        .with_context("node", node.id.to_string()),
                ));
            }
        }
        let mut edge_ids = BTreeSet::new();
        let mut pairs = BTreeSet::new();
        for edge in &edges {
            if !edge_ids.insert(edge.id) {
                return Err(SwnError::Graph(
                    ErrorInfo::new("duplicate-edge-id", "edge identifier appears more than once")
                        .with_context("edge", edge.id.to_string()),
                ));
            }
            for endpoint in [edge.source, edge.target] {
                if !node_ids.contains(&endpoint) {
                    return Err(SwnError::Graph(
                        ErrorInfo::new("missing-endpoint", "edge references an unknown node")
                            .with_context("edge", edge.id.to_string())
                            .with_context("node", endpoint.to_string()),
                    ));
                }
            }
            if edge.source == edge.target {
                return Err(SwnError::Graph(
                    ErrorInfo::new("self-loop", "edge joins a node to itself")
                        .with_context("edge", edge.id.to_string()),
                ));
            }
            if !pairs.insert(edge.endpoints()) {
                return Err(SwnError::Graph(
                    ErrorInfo::new("duplicate-edge", "node pair is joined by more than one edge")
                        .with_context("edge", edge.id.to_string())
                        .with_context("source", edge.source.to_string())
                        .with_context("target", edge.target.to_string()),
                ));
            }
        }
        Ok(Self { nodes, edges })
    }

    /// Assembles a graph whose invariants hold by construction.
    pub(crate) fn from_parts_unchecked(nodes: Vec<Node>, edges: Vec<Edge>) -> Self {
        Self { nodes, edges }
    }

    /// Returns the nodes in generation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Returns the edges in generation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub(crate) fn edges_mut(&mut self) -> &mut [Edge] {
        &mut self.edges
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Builds the dense index for the current node order.
    pub fn index(&self) -> IdIndex {
        IdIndex::build(&self.nodes)
    }

    /// Looks up a node by identifier.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.iter().find(|node| node.id == id)
    }

    /// Overwrites the label of the node with the given identifier.
    pub fn set_node_label(&mut self, id: NodeId, label: impl Into<String>) -> Result<(), SwnError> {
        let node = self
            .nodes
            .iter_mut()
            .find(|node| node.id == id)
            .ok_or_else(|| {
                SwnError::Graph(
                    ErrorInfo::new("unknown-node", "node is not part of the graph")
                        .with_context("node", id.to_string()),
                )
            })?;
        node.set_label(label);
        Ok(())
    }

    /// Returns whether an edge joins the two nodes, in either direction.
    pub fn contains_edge(&self, a: NodeId, b: NodeId) -> bool {
        let key = edge_key(a, b);
        self.edges.iter().any(|edge| edge.endpoints() == key)
    }

    /// Returns the neighbours of a node sorted by identifier.
    pub fn neighbours(&self, id: NodeId) -> Vec<NodeId> {
        let mut result: Vec<NodeId> = self
            .edges
            .iter()
            .filter_map(|edge| {
                if edge.source == id {
                    Some(edge.target)
                } else if edge.target == id {
                    Some(edge.source)
                } else {
                    None
                }
            })
            .collect();
        result.sort();
        result
    }

    /// Assigns `label` to every edge that has none and returns how many changed.
    pub fn label_unset_edges(&mut self, label: &str) -> usize {
        let mut changed = 0;
        for edge in self.edges.iter_mut().filter(|edge| edge.label.is_none()) {
            edge.set_label(label);
            changed += 1;
        }
        changed
    }
}
