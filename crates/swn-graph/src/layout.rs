use rand::Rng;
use serde::{Deserialize, Serialize};
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::rng::RngHandle;
use swn_core::Position;
use tracing::{debug, instrument, trace};

use crate::graph::Graph;

/// Largest distance a node may travel in one iteration.
pub const MAX_STEP: f64 = 10.0;

/// Distances below this are treated as coincident nodes.
pub const MIN_DISTANCE: f64 = 1e-9;

const JITTER_SCALE: f64 = 0.01;

// 2^63; every f64 strictly below it converts to i64 without saturating.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Parameters of the force-directed layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutParams {
    /// Number of simulation steps.
    pub iterations: usize,
    /// Area of the drawing; larger areas spread nodes further apart.
    pub area: f64,
}

impl LayoutParams {
    /// Creates layout parameters.
    pub const fn new(iterations: usize, area: f64) -> Self {
        Self { iterations, area }
    }
}

/// Assigns positions with a Fruchterman–Reingold style force simulation.
///
/// Positions restart from uniform draws in a `sqrt(area)` square, discarding
/// whatever the graph held. Each iteration sums all-pairs repulsion
/// (`k² / d`) and per-edge attraction (`d² / k`) with `k = sqrt(area / n)`,
/// then moves every node by its displacement capped at [`MAX_STEP`]. There is
/// no cooling schedule. Final coordinates are rounded to the nearest integer.
///
/// An empty graph is left untouched and consumes no randomness.
///
/// Nodes start inside the `sqrt(area)` square and move at most [`MAX_STEP`]
/// per iteration, so every coordinate stays within
/// `sqrt(area) + MAX_STEP * iterations` of the origin. Parameters whose reach
/// does not fit in `i64` fail with `layout-range-overflow` before any
/// randomness is drawn.
#[instrument(
    level = "debug",
    skip(rng, graph),
    fields(nodes = graph.node_count(), edges = graph.edge_count()),
    err
)]
pub fn force_directed_layout(
    rng: &mut RngHandle,
    params: &LayoutParams,
    graph: &mut Graph,
) -> Result<(), SwnError> {
    if !params.area.is_finite() || params.area <= 0.0 {
        return Err(SwnError::Layout(
            ErrorInfo::new("invalid-area", "layout area must be finite and positive")
                .with_context("area", params.area.to_string()),
        ));
    }
    let side = params.area.sqrt();
    let reach = reachable_extent(params);
    if reach >= I64_LIMIT {
        return Err(SwnError::Layout(
            ErrorInfo::new(
                "layout-range-overflow",
                "layout coordinates could leave the integer range",
            )
            .with_context("area", params.area.to_string())
            .with_context("iterations", params.iterations.to_string())
            .with_hint("lower the layout area or the iteration count"),
        ));
    }
    let n = graph.node_count();
    if n == 0 {
        return Ok(());
    }

    let ideal = (params.area / n as f64).sqrt();

    let index = graph.index();
    let springs: Vec<(usize, usize)> = graph
        .edges()
        .iter()
        .filter_map(|edge| Some((index.get(edge.source())?, index.get(edge.target())?)))
        .collect();

    let mut positions: Vec<[f64; 2]> = (0..n)
        .map(|_| {
            let x = rng.gen::<f64>() * side;
            let y = rng.gen::<f64>() * side;
            [x, y]
        })
        .collect();
    let mut displacement = vec![[0.0f64; 2]; n];

    for iteration in 0..params.iterations {
        displacement.iter_mut().for_each(|d| *d = [0.0, 0.0]);

        for i in 0..n {
            for j in i + 1..n {
                let (dx, dy, dist) = separation(rng, positions[i], positions[j]);
                let force = ideal * ideal / dist;
                let fx = dx / dist * force;
                let fy = dy / dist * force;
                displacement[i][0] -= fx;
                displacement[i][1] -= fy;
                displacement[j][0] += fx;
                displacement[j][1] += fy;
            }
        }

        for &(source, target) in &springs {
            let (dx, dy, dist) = separation(rng, positions[source], positions[target]);
            let force = dist * dist / ideal;
            let fx = dx / dist * force;
            let fy = dy / dist * force;
            displacement[source][0] += fx;
            displacement[source][1] += fy;
            displacement[target][0] -= fx;
            displacement[target][1] -= fy;
        }

        for (position, delta) in positions.iter_mut().zip(&displacement) {
            let [mut dx, mut dy] = *delta;
            let length = dx.hypot(dy);
            if !length.is_finite() {
                return Err(SwnError::Layout(
                    ErrorInfo::new("non-finite-displacement", "layout forces overflowed")
                        .with_context("iteration", iteration.to_string())
                        .with_context("area", params.area.to_string()),
                ));
            }
            if length > MAX_STEP {
                dx = dx / length * MAX_STEP;
                dy = dy / length * MAX_STEP;
            }
            position[0] += dx;
            position[1] += dy;
        }
        trace!(iteration, "layout iteration applied");
    }

    for (node, [x, y]) in graph.nodes_mut().iter_mut().zip(positions) {
        node.set_position(Position::new(x.round() as i64, y.round() as i64));
    }
    debug!(iterations = params.iterations, ideal, "layout finished");
    Ok(())
}

/// Largest absolute coordinate a layout with `params` can reach.
pub fn reachable_extent(params: &LayoutParams) -> f64 {
    params.area.sqrt() + MAX_STEP * params.iterations as f64
}

/// Vector from `from` to `to` and its length, jittered when the points coincide.
fn separation(rng: &mut RngHandle, from: [f64; 2], to: [f64; 2]) -> (f64, f64, f64) {
    let mut dx = to[0] - from[0];
    let mut dy = to[1] - from[1];
    let mut dist = dx.hypot(dy);
    if dist < MIN_DISTANCE {
        dx = (rng.gen::<f64>() - 0.5) * JITTER_SCALE;
        dy = (rng.gen::<f64>() - 0.5) * JITTER_SCALE;
        dist = dx.hypot(dy);
    }
    (dx, dy, dist)
}
