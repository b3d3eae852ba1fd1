use std::collections::BTreeSet;
use std::f64::consts::PI;

use rand::Rng;
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::rng::RngHandle;
use swn_core::Position;
use tracing::{debug, instrument};

use crate::graph::{Edge, Graph, Node, DEFAULT_NODE_LABEL};
use crate::ids::{make_edge, make_node};

/// Radius of the cosmetic circle on which freshly generated nodes are placed.
pub const CIRCLE_RADIUS: f64 = 300.0;

/// Generates a Watts–Strogatz small-world graph.
///
/// Each node `i` is first joined to the `k / 2` nodes following it on a ring.
/// Every ring edge `(i, (i + j) mod n)` with `i < (i + j) mod n` is then
/// rewired with probability `beta` to a uniformly drawn node that is neither
/// `i` nor already adjacent to it. Target draws are repeated until one is
/// valid; the freed ring neighbour is always eligible, so the loop ends with
/// probability one but has no fixed bound.
///
/// Nodes get ids `0..n`, the default label and positions on a circle of
/// radius [`CIRCLE_RADIUS`]. Edges are emitted once per unordered pair in
/// `(i, j)` order with `i < j` and carry no label. The graph always has
/// `n * k / 2` edges.
#[instrument(level = "debug", skip(rng), err)]
pub fn watts_strogatz(
    rng: &mut RngHandle,
    n: usize,
    k: usize,
    beta: f64,
) -> Result<Graph, SwnError> {
    validate_parameters(n, k, beta)?;

    let half = k / 2;
    let mut adjacency: Vec<BTreeSet<usize>> = vec![BTreeSet::new(); n];
    for i in 0..n {
        for j in 1..=half {
            let neighbour = (i + j) % n;
            adjacency[i].insert(neighbour);
            adjacency[neighbour].insert(i);
        }
    }

    let mut rewired = 0usize;
    for i in 0..n {
        for j in 1..=half {
            let old_neighbour = (i + j) % n;
            if i >= old_neighbour {
                continue;
            }
            if rng.gen::<f64>() < beta {
                adjacency[i].remove(&old_neighbour);
                adjacency[old_neighbour].remove(&i);
                let target = draw_rewire_target(rng, &adjacency[i], i, n);
                adjacency[i].insert(target);
                adjacency[target].insert(i);
                rewired += 1;
            }
        }
    }

    let nodes = (0..n)
        .map(|i| Node::new(make_node(i), DEFAULT_NODE_LABEL, circle_position(i, n)))
        .collect();

    let mut edges = Vec::with_capacity(n * half);
    for (i, neighbours) in adjacency.iter().enumerate() {
        for &j in neighbours.range(i + 1..) {
            edges.push(Edge::new(make_edge(edges.len()), make_node(i), make_node(j)));
        }
    }

    debug!(nodes = n, edges = edges.len(), rewired, "generated small-world graph");
    Ok(Graph::from_parts_unchecked(nodes, edges))
}

fn validate_parameters(n: usize, k: usize, beta: f64) -> Result<(), SwnError> {
    if n < 2 {
        return Err(SwnError::Graph(
            ErrorInfo::new("too-few-nodes", "small-world generation requires at least two nodes")
                .with_context("n", n.to_string()),
        ));
    }
    if k >= n {
        return Err(SwnError::Graph(
            ErrorInfo::new(
                "ring-degree-too-large",
                "ring degree must be smaller than the node count",
            )
            .with_context("n", n.to_string())
            .with_context("k", k.to_string()),
        ));
    }
    if k % 2 != 0 {
        return Err(SwnError::Graph(
            ErrorInfo::new("odd-ring-degree", "ring degree must be even")
                .with_context("k", k.to_string())
                .with_hint("k / 2 neighbours are joined on each side of the ring"),
        ));
    }
    if !(0.0..=1.0).contains(&beta) {
        return Err(SwnError::Graph(
            ErrorInfo::new(
                "invalid-rewiring-probability",
                "rewiring probability must lie in [0, 1]",
            )
            .with_context("beta", beta.to_string()),
        ));
    }
    Ok(())
}

fn draw_rewire_target(
    rng: &mut RngHandle,
    neighbours: &BTreeSet<usize>,
    node: usize,
    n: usize,
) -> usize {
    loop {
        let candidate = rng.gen_range(0..n);
        if candidate != node && !neighbours.contains(&candidate) {
            return candidate;
        }
    }
}

fn circle_position(index: usize, n: usize) -> Position {
    let angle = 2.0 * PI * index as f64 / n as f64;
    Position::new(
        (CIRCLE_RADIUS * angle.cos()) as i64,
        (CIRCLE_RADIUS * angle.sin()) as i64,
    )
}
