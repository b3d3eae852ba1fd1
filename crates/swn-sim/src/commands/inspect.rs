use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Args;
use serde::Serialize;
use swn_graph::{
    canonical_hash, degree_summary, graph_from_json, label_counts, DegreeSummary, Graph,
    LabelCounts,
};
use swn_pipeline::serde::to_canonical_json_pretty;
use swn_pipeline::pipeline::RESPONSE_SCHEMA;
use swn_pipeline::RandomGraphResponse;
use tracing::warn;

#[derive(Args, Debug)]
pub struct InspectArgs {
    /// Response or wire-format graph JSON file.
    #[arg(long)]
    pub input: PathBuf,
}

#[derive(Debug, Serialize)]
struct InspectReport {
    input: String,
    kind: &'static str,
    graph_hash: String,
    degrees: DegreeSummary,
    labels: LabelCounts,
    walks: Vec<WalkSummary>,
}

#[derive(Debug, Serialize)]
struct WalkSummary {
    walker: String,
    start: u64,
    steps: usize,
}

pub fn run(args: &InspectArgs) -> Result<(), Box<dyn Error>> {
    let raw = fs::read_to_string(&args.input)?;
    let (kind, graph, walks) = match serde_json::from_str::<RandomGraphResponse>(&raw) {
        Ok(response) => {
            let schema = response.provenance.schema_version;
            if !RESPONSE_SCHEMA.reads(&schema) {
                warn!(
                    %schema,
                    supported = %RESPONSE_SCHEMA,
                    "response schema is not fully supported"
                );
            }
            let walks = response
                .walks
                .iter()
                .map(|walk| WalkSummary {
                    walker: walk.walker.clone(),
                    start: walk.start.as_raw(),
                    steps: walk.path.len().saturating_sub(1),
                })
                .collect();
            ("response", response.graph, walks)
        }
        Err(_) => ("graph", graph_from_json(&raw)?, Vec::new()),
    };
    let report = build_report(args, kind, &graph, walks);
    println!("{}", to_canonical_json_pretty(&report)?);
    Ok(())
}

fn build_report(
    args: &InspectArgs,
    kind: &'static str,
    graph: &Graph,
    walks: Vec<WalkSummary>,
) -> InspectReport {
    InspectReport {
        input: args.input.display().to_string(),
        kind,
        graph_hash: canonical_hash(graph),
        degrees: degree_summary(graph),
        labels: label_counts(graph),
        walks,
    }
}
