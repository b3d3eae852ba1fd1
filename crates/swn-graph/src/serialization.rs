use serde::{Deserialize, Serialize};
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::{EdgeId, NodeId, Position};

use crate::graph::{Edge, Graph, Node};

const EDGE_ID_PREFIX: &str = "e-";

/// Serializes the graph to a compact binary representation using `bincode`.
pub fn graph_to_bytes(graph: &Graph) -> Result<Vec<u8>, SwnError> {
    bincode::serialize(&WireGraph::from(graph))
        .map_err(|err| SwnError::Serde(ErrorInfo::new("serialize-bytes", err.to_string())))
}

/// Restores a graph from its binary representation.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<Graph, SwnError> {
    let wire: WireGraph = bincode::deserialize(bytes)
        .map_err(|err| SwnError::Serde(ErrorInfo::new("deserialize-bytes", err.to_string())))?;
    Graph::try_from(wire)
}

/// Serializes the graph to a pretty-printed JSON string in wire format.
pub fn graph_to_json(graph: &Graph) -> Result<String, SwnError> {
    serde_json::to_string_pretty(&WireGraph::from(graph))
        .map_err(|err| SwnError::Serde(ErrorInfo::new("serialize-json", err.to_string())))
}

/// Restores a graph from a wire format JSON string.
pub fn graph_from_json(json: &str) -> Result<Graph, SwnError> {
    let wire: WireGraph = serde_json::from_str(json)
        .map_err(|err| SwnError::Serde(ErrorInfo::new("deserialize-json", err.to_string())))?;
    Graph::try_from(wire)
}

/// Graph shape consumed by the rendering front end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireGraph {
    /// Nodes in generation order.
    pub nodes: Vec<WireNode>,
    /// Edges in generation order.
    pub edges: Vec<WireEdge>,
}

/// Wire form of a node. Ids are decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNode {
    /// Decimal node id.
    pub id: String,
    /// Rendering label.
    #[serde(rename = "type")]
    pub kind: String,
    /// Screen position.
    pub position: Position,
    /// Display payload.
    #[serde(default)]
    pub data: WireNodeData,
}

/// Display payload attached to a wire node.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireNodeData {
    /// Caption shown next to the node.
    pub label: String,
}

/// Wire form of an edge. Ids are `e-<index>` strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireEdge {
    /// Prefixed edge id.
    pub id: String,
    /// Decimal id of the source node.
    pub source: String,
    /// Decimal id of the target node.
    pub target: String,
    /// Rendering label, `null` when no walk or composition step set one.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

impl From<&Graph> for WireGraph {
    fn from(graph: &Graph) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| WireNode {
                id: node.id().to_string(),
                kind: node.label().to_string(),
                position: node.position(),
                data: WireNodeData {
                    label: node.id().to_string(),
                },
            })
            .collect();
        let edges = graph
            .edges()
            .iter()
            .map(|edge| WireEdge {
                id: edge.id().to_string(),
                source: edge.source().to_string(),
                target: edge.target().to_string(),
                kind: edge.label().map(str::to_string),
            })
            .collect();
        Self { nodes, edges }
    }
}

impl From<Graph> for WireGraph {
    fn from(graph: Graph) -> Self {
        WireGraph::from(&graph)
    }
}

impl TryFrom<WireGraph> for Graph {
    type Error = SwnError;

    fn try_from(wire: WireGraph) -> Result<Self, Self::Error> {
        let nodes = wire
            .nodes
            .into_iter()
            .map(|node| Ok(Node::new(parse_node_id(&node.id)?, node.kind, node.position)))
            .collect::<Result<Vec<_>, SwnError>>()?;
        let edges = wire
            .edges
            .into_iter()
            .map(|edge| {
                let mut parsed = Edge::new(
                    parse_edge_id(&edge.id)?,
                    parse_node_id(&edge.source)?,
                    parse_node_id(&edge.target)?,
                );
                if let Some(kind) = edge.kind {
                    parsed.set_label(kind);
                }
                Ok(parsed)
            })
            .collect::<Result<Vec<_>, SwnError>>()?;
        Graph::from_parts(nodes, edges)
    }
}

fn parse_node_id(raw: &str) -> Result<NodeId, SwnError> {
    raw.parse::<u64>().map(NodeId::from_raw).map_err(|_| {
        SwnError::Serde(
            ErrorInfo::new("invalid-node-id", "node id is not a decimal integer")
                .with_context("id", raw),
        )
    })
}

fn parse_edge_id(raw: &str) -> Result<EdgeId, SwnError> {
    raw.strip_prefix(EDGE_ID_PREFIX)
        .and_then(|digits| digits.parse::<u64>().ok())
        .map(EdgeId::from_raw)
        .ok_or_else(|| {
            SwnError::Serde(
                ErrorInfo::new("invalid-edge-id", "edge id must look like `e-<index>`")
                    .with_context("id", raw),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_wire_ids() {
        assert_eq!(parse_node_id("42").unwrap(), NodeId::from_raw(42));
        assert_eq!(parse_edge_id("e-7").unwrap(), EdgeId::from_raw(7));
        assert_eq!(parse_node_id("n1").unwrap_err().code(), "invalid-node-id");
        assert_eq!(parse_edge_id("7").unwrap_err().code(), "invalid-edge-id");
        assert_eq!(parse_edge_id("e-x").unwrap_err().code(), "invalid-edge-id");
    }
}
