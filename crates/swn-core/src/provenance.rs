//! Seeds, schema version and hashes recorded alongside every response.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// `major.minor.patch` version of the response layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SchemaVersion {
    /// Bumped when a field is removed or changes meaning.
    pub major: u32,
    /// Bumped when a field is added.
    pub minor: u32,
    /// Bumped for fixes that keep the layout.
    pub patch: u32,
}

impl SchemaVersion {
    /// Builds a version from its parts.
    pub const fn new(major: u32, minor: u32, patch: u32) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// True when a reader built for `self` can parse payloads tagged `other`.
    pub fn reads(&self, other: &SchemaVersion) -> bool {
        self.major == other.major && self.minor >= other.minor
    }
}

impl fmt::Display for SchemaVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl Default for SchemaVersion {
    fn default() -> Self {
        Self::new(1, 0, 0)
    }
}

/// Seed material for the two random streams of a pipeline run.
///
/// `seed1`/`seed2` drive topology generation, start selection and layout;
/// `seed3`/`seed4` drive the random walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SeedSet {
    /// First word of the graph stream seed.
    pub seed1: u64,
    /// Second word of the graph stream seed.
    pub seed2: u64,
    /// First word of the walk stream seed.
    pub seed3: u64,
    /// Second word of the walk stream seed.
    pub seed4: u64,
}

impl SeedSet {
    /// Creates a seed set from its four words.
    pub const fn new(seed1: u64, seed2: u64, seed3: u64, seed4: u64) -> Self {
        Self {
            seed1,
            seed2,
            seed3,
            seed4,
        }
    }

    /// Seed pair for the topology and layout stream.
    pub fn graph_pair(&self) -> (u64, u64) {
        (self.seed1, self.seed2)
    }

    /// Seed pair for the walk stream.
    pub fn walk_pair(&self) -> (u64, u64) {
        (self.seed3, self.seed4)
    }
}

impl Default for SeedSet {
    fn default() -> Self {
        Self::new(1, 2, 3, 4)
    }
}

/// Everything needed to reproduce and verify a pipeline response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct RunProvenance {
    /// Layout version of the response.
    pub schema_version: SchemaVersion,
    /// SHA-256 of the canonical JSON request.
    pub request_hash: String,
    /// Canonical hash of the final graph.
    pub graph_hash: String,
    /// Seeds of both streams.
    pub seeds: SeedSet,
    /// Crate name to version.
    pub tool_versions: BTreeMap<String, String>,
}
