use swn_core::rng::RngHandle;
use swn_graph::{
    force_directed_layout, reachable_extent, watts_strogatz, Graph, LayoutParams, MAX_STEP,
};

fn sample_graph(seed: u64) -> Graph {
    let mut rng = RngHandle::from_seed_pair(seed, seed + 1);
    watts_strogatz(&mut rng, 10, 4, 0.0).unwrap()
}

#[test]
fn zero_iterations_only_randomizes_positions() {
    let mut graph = sample_graph(1);
    let before = graph.clone();
    let mut rng = RngHandle::from_seed_pair(10, 20);
    force_directed_layout(&mut rng, &LayoutParams::new(0, 10_000.0), &mut graph).unwrap();

    assert_eq!(graph.edges(), before.edges());
    assert_eq!(graph.node_count(), before.node_count());
    for node in graph.nodes() {
        let position = node.position();
        assert!((0..=100).contains(&position.x), "{position:?}");
        assert!((0..=100).contains(&position.y), "{position:?}");
    }
    let moved = graph
        .nodes()
        .iter()
        .zip(before.nodes())
        .filter(|(after, prior)| after.position() != prior.position())
        .count();
    assert!(moved > 0);
}

#[test]
fn layout_is_deterministic_and_bounded() {
    let params = LayoutParams::new(200, 10_000.0);
    let mut graph_a = sample_graph(2);
    let mut graph_b = sample_graph(2);
    let mut rng_a = RngHandle::from_seed_pair(1, 1);
    let mut rng_b = RngHandle::from_seed_pair(1, 1);
    force_directed_layout(&mut rng_a, &params, &mut graph_a).unwrap();
    force_directed_layout(&mut rng_b, &params, &mut graph_b).unwrap();
    assert_eq!(graph_a, graph_b);

    let reach = (100.0 + MAX_STEP * params.iterations as f64) as i64 + 1;
    for node in graph_a.nodes() {
        let position = node.position();
        assert!(position.x.abs() <= reach && position.y.abs() <= reach);
    }
}

#[test]
fn layout_preserves_labels_and_edges() {
    let mut graph = sample_graph(3);
    graph.set_node_label(graph.nodes()[4].id(), "bobNode").unwrap();
    let before = graph.clone();
    let mut rng = RngHandle::from_seed(8);
    force_directed_layout(&mut rng, &LayoutParams::new(25, 2_500.0), &mut graph).unwrap();

    assert_eq!(graph.edges(), before.edges());
    for (after, prior) in graph.nodes().iter().zip(before.nodes()) {
        assert_eq!(after.id(), prior.id());
        assert_eq!(after.label(), prior.label());
    }
}

#[test]
fn connected_nodes_settle_closer_than_the_box() {
    let mut graph = sample_graph(4);
    let mut rng = RngHandle::from_seed(11);
    force_directed_layout(&mut rng, &LayoutParams::new(500, 10_000.0), &mut graph).unwrap();
    let index = graph.index();
    for edge in graph.edges() {
        let a = graph.nodes()[index.get(edge.source()).unwrap()].position();
        let b = graph.nodes()[index.get(edge.target()).unwrap()].position();
        let dist = ((a.x - b.x) as f64).hypot((a.y - b.y) as f64);
        assert!(dist.is_finite());
        assert!(dist < 1_000.0, "edge {:?} stretched to {dist}", edge.id());
    }
}

#[test]
fn empty_graph_is_a_no_op() {
    let mut graph = Graph::new();
    let mut rng = RngHandle::from_seed(1);
    force_directed_layout(&mut rng, &LayoutParams::new(10, 100.0), &mut graph).unwrap();
    assert!(graph.is_empty());
}

#[test]
fn non_positive_area_is_rejected() {
    let mut graph = sample_graph(5);
    let mut rng = RngHandle::from_seed(1);
    for area in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        let err = force_directed_layout(&mut rng, &LayoutParams::new(1, area), &mut graph)
            .unwrap_err();
        assert_eq!(err.code(), "invalid-area");
    }
}

#[test]
fn areas_beyond_the_integer_range_are_rejected() {
    let mut rng = RngHandle::from_seed(2);
    for area in [1e40, 1e300, f64::MAX] {
        let mut graph = sample_graph(6);
        let before = graph.clone();
        let err = force_directed_layout(&mut rng, &LayoutParams::new(10, area), &mut graph)
            .unwrap_err();
        assert_eq!(err.code(), "layout-range-overflow");
        assert!(matches!(err, swn_core::SwnError::Layout(_)));
        assert_eq!(graph, before);
    }
}

#[test]
fn iteration_budget_counts_towards_the_range() {
    let mut graph = sample_graph(7);
    let mut rng = RngHandle::from_seed(2);
    let params = LayoutParams::new(usize::MAX, 100.0);
    let err = force_directed_layout(&mut rng, &params, &mut graph).unwrap_err();
    assert_eq!(err.code(), "layout-range-overflow");
}

#[test]
fn large_areas_inside_the_range_keep_finite_positions() {
    for area in [1e20, 1e30, 8.0e36] {
        let params = LayoutParams::new(40, area);
        let mut graph = sample_graph(8);
        let mut rng = RngHandle::from_seed_pair(4, 4);
        force_directed_layout(&mut rng, &params, &mut graph).unwrap();

        let reach = reachable_extent(&params);
        assert!(graph.nodes().iter().any(|node| node.position().x != 0));
        for node in graph.nodes() {
            let position = node.position();
            assert!((position.x as f64).abs() <= reach + 1.0, "{position:?} for area {area}");
            assert!((position.y as f64).abs() <= reach + 1.0, "{position:?} for area {area}");
            assert_ne!(position.x, i64::MAX);
            assert_ne!(position.y, i64::MAX);
        }
    }
}
