use swn_core::{RngHandle, SeedSet};

/// Builds the stream used for topology generation, start selection and layout.
pub fn graph_stream(seeds: &SeedSet) -> RngHandle {
    let (first, second) = seeds.graph_pair();
    RngHandle::from_seed_pair(first, second)
}

/// Builds the stream used for random walks.
pub fn walk_stream(seeds: &SeedSet) -> RngHandle {
    let (first, second) = seeds.walk_pair();
    RngHandle::from_seed_pair(first, second)
}
