use std::process::{Command, Output};

use serde_json::Value;
use tempfile::tempdir;

fn swn_sim(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_swn-sim"))
        .args(args)
        .env("RUST_LOG", "warn")
        .env_remove("SWN_LOG_FORMAT")
        .output()
        .expect("run swn-sim")
}

fn stdout_json(output: &Output) -> Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("stdout is json")
}

const SMALL: [&str; 7] = [
    "generate",
    "--nodes",
    "12",
    "--iterations",
    "20",
    "--walk-length",
    "5",
];

#[test]
fn generate_emits_a_labelled_graph() {
    let json = stdout_json(&swn_sim(&SMALL));
    let nodes = json["graph"]["nodes"].as_array().expect("nodes array");
    let edges = json["graph"]["edges"].as_array().expect("edges array");
    assert_eq!(nodes.len(), 12);
    assert_eq!(edges.len(), 24);

    let walks = json["walks"].as_array().expect("walks array");
    assert_eq!(walks.len(), 2);
    assert_eq!(walks[0]["walker"], "bob");
    assert_eq!(walks[1]["walker"], "ada");
    for walk in walks {
        let path = walk["path"].as_array().expect("path array");
        assert_eq!(path.len(), 6);
        assert_eq!(path[0], walk["start"]);
    }
    assert!(edges.iter().all(|edge| edge["type"].is_string()));
    assert!(json["provenance"]["graph_hash"].as_str().is_some());
}

#[test]
fn generate_is_reproducible_for_fixed_seeds() {
    let mut args = SMALL.to_vec();
    args.extend(["--seed1", "9", "--seed3", "11"]);
    let first = swn_sim(&args);
    let second = swn_sim(&args);
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);

    args.extend(["--seed2", "10"]);
    let third = swn_sim(&args);
    assert_ne!(first.stdout, third.stdout);
}

#[test]
fn generate_reads_config_and_inspect_summarises_output() {
    let dir = tempdir().expect("tempdir");
    let config = dir.path().join("request.yaml");
    std::fs::write(
        &config,
        "num_nodes: 10\ninitial_connected: 2\nlayout_iterations: 15\nwalk_length: 4\n",
    )
    .expect("write config");
    let out = dir.path().join("response.json");

    let generated = swn_sim(&[
        "generate",
        "--config",
        config.to_str().expect("utf-8 path"),
        "--out",
        out.to_str().expect("utf-8 path"),
    ]);
    assert!(
        generated.status.success(),
        "{}",
        String::from_utf8_lossy(&generated.stderr)
    );
    assert!(generated.stdout.is_empty());

    let response: Value =
        serde_json::from_str(&std::fs::read_to_string(&out).expect("read response"))
            .expect("response json");

    let report = stdout_json(&swn_sim(&[
        "inspect",
        "--input",
        out.to_str().expect("utf-8 path"),
    ]));
    assert_eq!(report["kind"], "response");
    assert_eq!(report["degrees"]["nodes"], 10);
    assert_eq!(report["degrees"]["edges"], 10);
    assert_eq!(report["graph_hash"], response["provenance"]["graph_hash"]);
    assert_eq!(report["walks"].as_array().expect("walks").len(), 2);
    let edge_labels: u64 = report["labels"]["edges"]
        .as_object()
        .expect("edge label counts")
        .values()
        .map(|count| count.as_u64().expect("count"))
        .sum();
    assert_eq!(edge_labels, 10);
    assert!(report["labels"]["edges"].get("<unset>").is_none());
}

#[test]
fn inspect_accepts_a_bare_graph() {
    let generated = stdout_json(&swn_sim(&SMALL));
    let dir = tempdir().expect("tempdir");
    let graph_path = dir.path().join("graph.json");
    std::fs::write(
        &graph_path,
        serde_json::to_vec(&generated["graph"]).expect("graph json"),
    )
    .expect("write graph");

    let report = stdout_json(&swn_sim(&[
        "inspect",
        "--input",
        graph_path.to_str().expect("utf-8 path"),
    ]));
    assert_eq!(report["kind"], "graph");
    assert_eq!(report["graph_hash"], generated["provenance"]["graph_hash"]);
    assert!(report["walks"].as_array().expect("walks").is_empty());
}

#[test]
fn invalid_requests_fail_without_stdout() {
    let output = swn_sim(&["generate", "--nodes", "6", "--ring-degree", "3"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("odd-ring-degree"), "stderr: {stderr}");
}

#[test]
fn json_log_format_keeps_stderr_machine_readable() {
    let output = swn_sim(&[
        "--log-format",
        "json",
        "generate",
        "--nodes",
        "6",
        "--ring-degree",
        "3",
    ]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());

    let events: Vec<Value> = String::from_utf8_lossy(&output.stderr)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| serde_json::from_str(line).expect("every stderr line is json"))
        .collect();
    let failure = events
        .iter()
        .find(|event| event["fields"]["message"] == "command execution failed")
        .expect("failure event");
    assert_eq!(failure["level"], "ERROR");
    assert_eq!(failure["fields"]["code"], "odd-ring-degree");
    assert_eq!(failure["fields"]["family"], "config");
}

#[test]
fn unknown_log_format_is_a_usage_error() {
    let output = swn_sim(&["--log-format", "xml", "version"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn version_prints_package_version() {
    let output = swn_sim(&["version"]);
    assert!(output.status.success());
    assert_eq!(
        String::from_utf8_lossy(&output.stdout).trim(),
        env!("CARGO_PKG_VERSION")
    );

    let long = stdout_json(&swn_sim(&["version", "--long"]));
    assert_eq!(long["version"], env!("CARGO_PKG_VERSION"));
}
