use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use swn_core::SwnError;
use swn_pipeline::serde::to_canonical_json_pretty;
use swn_pipeline::{run as run_pipeline, RandomGraphRequest};
use tracing::info;

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// YAML or JSON request file; flags below override its fields.
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// First graph stream seed word.
    #[arg(long)]
    pub seed1: Option<u64>,
    /// Second graph stream seed word.
    #[arg(long)]
    pub seed2: Option<u64>,
    /// First walk stream seed word.
    #[arg(long)]
    pub seed3: Option<u64>,
    /// Second walk stream seed word.
    #[arg(long)]
    pub seed4: Option<u64>,
    /// Number of nodes.
    #[arg(long)]
    pub nodes: Option<usize>,
    /// Even ring degree `k`.
    #[arg(long = "ring-degree")]
    pub ring_degree: Option<usize>,
    /// Rewiring probability in [0, 1].
    #[arg(long)]
    pub rewire: Option<f64>,
    /// Layout iterations.
    #[arg(long)]
    pub iterations: Option<usize>,
    /// Layout area.
    #[arg(long)]
    pub area: Option<f64>,
    /// Steps per walk.
    #[arg(long = "walk-length")]
    pub walk_length: Option<usize>,
    /// Write the response here instead of stdout.
    #[arg(long)]
    pub out: Option<PathBuf>,
}

pub fn run(args: &GenerateArgs) -> Result<(), Box<dyn Error>> {
    let request = build_request(args)?;
    let response = run_pipeline(&request)?;
    let json = to_canonical_json_pretty(&response)?;
    match &args.out {
        Some(path) => {
            fs::write(path, json)?;
            info!(
                path = %path.display(),
                graph_hash = %response.provenance.graph_hash,
                "response written"
            );
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub(crate) fn build_request(args: &GenerateArgs) -> Result<RandomGraphRequest, SwnError> {
    let mut request = match &args.config {
        Some(path) => RandomGraphRequest::load(path)?,
        None => RandomGraphRequest::default(),
    };
    let seeds = &mut request.seeds;
    override_with(&mut seeds.seed1, args.seed1);
    override_with(&mut seeds.seed2, args.seed2);
    override_with(&mut seeds.seed3, args.seed3);
    override_with(&mut seeds.seed4, args.seed4);
    override_with(&mut request.num_nodes, args.nodes);
    override_with(&mut request.initial_connected, args.ring_degree);
    override_with(&mut request.rewiring_probability, args.rewire);
    override_with(&mut request.layout_iterations, args.iterations);
    override_with(&mut request.layout_area, args.area);
    override_with(&mut request.walk_length, args.walk_length);
    Ok(request)
}

fn override_with<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}
