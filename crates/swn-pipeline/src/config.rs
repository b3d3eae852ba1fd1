use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use swn_core::errors::{ErrorInfo, SwnError};
use swn_core::SeedSet;

use crate::serde::{from_json_slice, from_yaml_slice};

/// YAML/JSON-configurable parameters of a single pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RandomGraphRequest {
    /// Seed material for the graph and walk streams.
    #[serde(default)]
    pub seeds: SeedSet,
    /// Number of nodes `n`.
    #[serde(default = "default_num_nodes")]
    pub num_nodes: usize,
    /// Ring degree `k`; each node starts joined to `k / 2` neighbours per side.
    #[serde(default = "default_initial_connected")]
    pub initial_connected: usize,
    /// Watts–Strogatz rewiring probability `beta`.
    #[serde(default = "default_rewiring_probability")]
    pub rewiring_probability: f64,
    /// Number of layout iterations.
    #[serde(default = "default_layout_iterations")]
    pub layout_iterations: usize,
    /// Layout area.
    #[serde(default = "default_layout_area")]
    pub layout_area: f64,
    /// Number of steps per walk.
    #[serde(default = "default_walk_length")]
    pub walk_length: usize,
    /// Walkers, run in order on the walk stream.
    #[serde(default = "default_walkers")]
    pub walkers: Vec<WalkerSpec>,
    /// Upper bounds on the work a request may ask for.
    #[serde(default)]
    pub limits: Limits,
}

fn default_num_nodes() -> usize {
    30
}

fn default_initial_connected() -> usize {
    4
}

fn default_rewiring_probability() -> f64 {
    0.1
}

fn default_layout_iterations() -> usize {
    500
}

fn default_layout_area() -> f64 {
    10_000.0
}

fn default_walk_length() -> usize {
    10
}

fn default_walkers() -> Vec<WalkerSpec> {
    vec![WalkerSpec::named("bob"), WalkerSpec::named("ada")]
}

impl Default for RandomGraphRequest {
    fn default() -> Self {
        Self {
            seeds: SeedSet::default(),
            num_nodes: default_num_nodes(),
            initial_connected: default_initial_connected(),
            rewiring_probability: default_rewiring_probability(),
            layout_iterations: default_layout_iterations(),
            layout_area: default_layout_area(),
            walk_length: default_walk_length(),
            walkers: default_walkers(),
            limits: Limits::default(),
        }
    }
}

/// Labels used by one walker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkerSpec {
    /// Unique walker name.
    pub name: String,
    /// Label given to the walker's start node.
    pub start_label: String,
    /// Label given to nodes the walk visits.
    pub node_label: String,
    /// Label given to edges the walk traverses.
    pub edge_label: String,
}

impl WalkerSpec {
    /// Builds a walker whose labels follow the `<name>Node`, `<name>WalkNode`
    /// and `<name>WalkEdge` convention.
    pub fn named(name: &str) -> Self {
        Self {
            name: name.to_string(),
            start_label: format!("{name}Node"),
            node_label: format!("{name}WalkNode"),
            edge_label: format!("{name}WalkEdge"),
        }
    }
}

/// Work bounds enforced before any computation starts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Limits {
    /// Largest accepted node count.
    #[serde(default = "default_max_nodes")]
    pub max_nodes: usize,
    /// Largest accepted layout iteration count.
    #[serde(default = "default_max_iterations")]
    pub max_layout_iterations: usize,
    /// Largest accepted walk length.
    #[serde(default = "default_max_walk_length")]
    pub max_walk_length: usize,
    /// Largest accepted layout area.
    #[serde(default = "default_max_layout_area")]
    pub max_layout_area: f64,
}

fn default_max_nodes() -> usize {
    5_000
}

fn default_max_iterations() -> usize {
    100_000
}

fn default_max_walk_length() -> usize {
    100_000
}

fn default_max_layout_area() -> f64 {
    1.0e12
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_nodes: default_max_nodes(),
            max_layout_iterations: default_max_iterations(),
            max_walk_length: default_max_walk_length(),
            max_layout_area: default_max_layout_area(),
        }
    }
}

fn config_error(code: &str, message: &str) -> ErrorInfo {
    ErrorInfo::new(code, message)
}

impl RandomGraphRequest {
    /// Parses a request from YAML, filling in defaults for missing fields.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, SwnError> {
        from_yaml_slice(yaml.as_bytes()).map_err(into_config_error)
    }

    /// Parses a request from JSON, filling in defaults for missing fields.
    pub fn from_json_str(json: &str) -> Result<Self, SwnError> {
        from_json_slice(json.as_bytes()).map_err(into_config_error)
    }

    /// Loads a request from disk. `.json` files are parsed as JSON, everything
    /// else as YAML.
    pub fn load(path: &Path) -> Result<Self, SwnError> {
        let raw = fs::read_to_string(path).map_err(|err| {
            SwnError::Config(
                config_error("read-config", &err.to_string())
                    .with_context("path", path.display().to_string()),
            )
        })?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        if is_json {
            Self::from_json_str(&raw)
        } else {
            Self::from_yaml_str(&raw)
        }
    }

    /// Rejects requests that break a caller contract. Nothing is clamped.
    pub fn validate(&self) -> Result<(), SwnError> {
        let n = self.num_nodes;
        let k = self.initial_connected;
        if n < 2 {
            return Err(SwnError::Config(
                config_error("too-few-nodes", "num_nodes must be at least 2")
                    .with_context("num_nodes", n.to_string()),
            ));
        }
        if n > self.limits.max_nodes {
            return Err(SwnError::Config(
                config_error("node-limit", "num_nodes exceeds the configured limit")
                    .with_context("num_nodes", n.to_string())
                    .with_context("max_nodes", self.limits.max_nodes.to_string()),
            ));
        }
        if k >= n {
            return Err(SwnError::Config(
                config_error(
                    "ring-degree-too-large",
                    "initial_connected must be smaller than num_nodes",
                )
                .with_context("num_nodes", n.to_string())
                .with_context("initial_connected", k.to_string()),
            ));
        }
        if k % 2 != 0 {
            return Err(SwnError::Config(
                config_error("odd-ring-degree", "initial_connected must be even")
                    .with_context("initial_connected", k.to_string()),
            ));
        }
        if !(0.0..=1.0).contains(&self.rewiring_probability) {
            return Err(SwnError::Config(
                config_error(
                    "invalid-rewiring-probability",
                    "rewiring_probability must lie in [0, 1]",
                )
                .with_context("rewiring_probability", self.rewiring_probability.to_string()),
            ));
        }
        if self.layout_iterations > self.limits.max_layout_iterations {
            return Err(SwnError::Config(
                config_error("iteration-limit", "layout_iterations exceeds the configured limit")
                    .with_context("layout_iterations", self.layout_iterations.to_string())
                    .with_context(
                        "max_layout_iterations",
                        self.limits.max_layout_iterations.to_string(),
                    ),
            ));
        }
        if !self.layout_area.is_finite() || self.layout_area <= 0.0 {
            return Err(SwnError::Config(
                config_error("invalid-area", "layout_area must be finite and positive")
                    .with_context("layout_area", self.layout_area.to_string()),
            ));
        }
        if self.layout_area > self.limits.max_layout_area {
            return Err(SwnError::Config(
                config_error("area-limit", "layout_area exceeds the configured limit")
                    .with_context("layout_area", self.layout_area.to_string())
                    .with_context("max_layout_area", self.limits.max_layout_area.to_string()),
            ));
        }
        if self.walk_length > self.limits.max_walk_length {
            return Err(SwnError::Config(
                config_error("walk-length-limit", "walk_length exceeds the configured limit")
                    .with_context("walk_length", self.walk_length.to_string())
                    .with_context("max_walk_length", self.limits.max_walk_length.to_string()),
            ));
        }
        self.validate_walkers()
    }

    fn validate_walkers(&self) -> Result<(), SwnError> {
        if self.walkers.len() > self.num_nodes {
            return Err(SwnError::Config(
                config_error("too-many-walkers", "every walker needs a distinct start node")
                    .with_context("walkers", self.walkers.len().to_string())
                    .with_context("num_nodes", self.num_nodes.to_string()),
            ));
        }
        let mut names = BTreeSet::new();
        for walker in &self.walkers {
            let labels = [
                &walker.name,
                &walker.start_label,
                &walker.node_label,
                &walker.edge_label,
            ];
            if labels.iter().any(|label| label.is_empty()) {
                return Err(SwnError::Config(
                    config_error("empty-walker-label", "walker names and labels must be non-empty")
                        .with_context("walker", walker.name.clone()),
                ));
            }
            if !names.insert(walker.name.as_str()) {
                return Err(SwnError::Config(
                    config_error("duplicate-walker", "walker names must be unique")
                        .with_context("walker", walker.name.clone()),
                ));
            }
        }
        Ok(())
    }
}

fn into_config_error(err: SwnError) -> SwnError {
    let info = err.info();
    SwnError::Config(
        ErrorInfo::new("parse-config", info.message.clone())
            .with_context("format", info.code.clone()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_walkers_follow_label_convention() {
        let walker = WalkerSpec::named("bob");
        assert_eq!(walker.start_label, "bobNode");
        assert_eq!(walker.node_label, "bobWalkNode");
        assert_eq!(walker.edge_label, "bobWalkEdge");
    }

    #[test]
    fn default_request_is_valid() {
        RandomGraphRequest::default().validate().unwrap();
    }
}
