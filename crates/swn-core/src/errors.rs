//! Coded errors shared by every SWN crate.
//!
//! Each error carries an [`ErrorInfo`] whose `code` is stable across
//! releases; messages and context are for humans.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Payload carried by every [`SwnError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Stable machine readable error code.
    pub code: String,
    /// Human readable diagnostic message.
    pub message: String,
    /// Offending values keyed by parameter name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to fix the request, when that is not obvious from the message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context or hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records the value that caused the failure.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches a remediation hint.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Subsystem that raised an [`SwnError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorFamily {
    /// [`SwnError::Graph`].
    Graph,
    /// [`SwnError::Layout`].
    Layout,
    /// [`SwnError::Walk`].
    Walk,
    /// [`SwnError::Config`].
    Config,
    /// [`SwnError::Serde`].
    Serde,
}

impl ErrorFamily {
    /// Lowercase family name, as used in logs.
    pub const fn as_str(self) -> &'static str {
        match self {
            ErrorFamily::Graph => "graph",
            ErrorFamily::Layout => "layout",
            ErrorFamily::Walk => "walk",
            ErrorFamily::Config => "config",
            ErrorFamily::Serde => "serde",
        }
    }
}

impl Display for ErrorFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error type shared by the generator, layout, walk and pipeline stages.
///
/// Contract violations surface as one of these before any graph is built.
/// Recoverable conditions (unknown walk start, coincident nodes, dead ends)
/// never do.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum SwnError {
    /// Topology generation and graph structure errors.
    #[error("graph error: {0}")]
    Graph(ErrorInfo),
    /// Force-directed layout errors.
    #[error("layout error: {0}")]
    Layout(ErrorInfo),
    /// Random walk annotation errors.
    #[error("walk error: {0}")]
    Walk(ErrorInfo),
    /// Request and configuration validation errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Wire format and encoding errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)?;
        let mut pairs = self.context.iter();
        if let Some((key, value)) = pairs.next() {
            write!(f, " ({key}={value}")?;
            for (key, value) in pairs {
                write!(f, ", {key}={value}")?;
            }
            f.write_str(")")?;
        }
        match &self.hint {
            Some(hint) => write!(f, "; hint: {hint}"),
            None => Ok(()),
        }
    }
}

impl SwnError {
    /// Wraps `info` in the variant for `family`.
    pub fn new(family: ErrorFamily, info: ErrorInfo) -> Self {
        match family {
            ErrorFamily::Graph => SwnError::Graph(info),
            ErrorFamily::Layout => SwnError::Layout(info),
            ErrorFamily::Walk => SwnError::Walk(info),
            ErrorFamily::Config => SwnError::Config(info),
            ErrorFamily::Serde => SwnError::Serde(info),
        }
    }

    /// Family of this error.
    pub fn family(&self) -> ErrorFamily {
        match self {
            SwnError::Graph(_) => ErrorFamily::Graph,
            SwnError::Layout(_) => ErrorFamily::Layout,
            SwnError::Walk(_) => ErrorFamily::Walk,
            SwnError::Config(_) => ErrorFamily::Config,
            SwnError::Serde(_) => ErrorFamily::Serde,
        }
    }

    /// Payload shared by all variants.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SwnError::Graph(info)
            | SwnError::Layout(info)
            | SwnError::Walk(info)
            | SwnError::Config(info)
            | SwnError::Serde(info) => info,
        }
    }

    /// Stable code, e.g. `odd-ring-degree`.
    pub fn code(&self) -> &str {
        &self.info().code
    }
}
