//! `tracing` setup for swn-sim.
//!
//! Every event goes to stderr; stdout carries only the JSON payloads that
//! `generate`, `inspect` and `version --long` print. The format comes from
//! `--log-format`, then `SWN_LOG_FORMAT`, then defaults to human. `RUST_LOG`
//! wins over `-v` when both are given.

use std::{env, str::FromStr, sync::OnceLock};

use clap::{ArgAction, Args, ValueEnum};
use thiserror::Error;
use tracing_log::LogTracer;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

const LOG_FORMAT_ENV: &str = "SWN_LOG_FORMAT";

static INSTALLED: OnceLock<LogFormat> = OnceLock::new();

/// Errors raised while installing the subscriber.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("`{name}` is not valid UTF-8")]
    InvalidUnicode { name: &'static str },
    #[error("unsupported log format `{provided}`; expected `human` or `json`")]
    UnsupportedFormat { provided: String },
    #[error("failed to install tracing subscriber: {source}")]
    InstallFailed {
        #[source]
        source: tracing_subscriber::util::TryInitError,
    },
}

/// Shape of stderr diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum LogFormat {
    /// One line per event; span timings only with `-v`.
    #[default]
    Human,
    /// One JSON object per event with the active span list, for log shippers.
    Json,
}

impl FromStr for LogFormat {
    type Err = LoggingError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "human" | "text" => Ok(LogFormat::Human),
            "json" => Ok(LogFormat::Json),
            other => Err(LoggingError::UnsupportedFormat {
                provided: other.to_owned(),
            }),
        }
    }
}

/// Logging switches shared by every subcommand.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct LogArgs {
    /// Diagnostic format on stderr; overrides SWN_LOG_FORMAT.
    #[arg(long = "log-format", value_enum, global = true)]
    pub format: Option<LogFormat>,
    /// Raise verbosity: -v for debug, -vv for trace. Ignored when RUST_LOG is set.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

impl LogArgs {
    fn default_directive(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }

    fn resolve_format(&self, from_env: Option<&str>) -> Result<LogFormat, LoggingError> {
        match (self.format, from_env) {
            (Some(format), _) => Ok(format),
            (None, Some(raw)) => raw.parse(),
            (None, None) => Ok(LogFormat::default()),
        }
    }
}

fn format_from_env() -> Result<Option<String>, LoggingError> {
    match env::var(LOG_FORMAT_ENV) {
        Ok(raw) => Ok(Some(raw)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(LoggingError::InvalidUnicode {
            name: LOG_FORMAT_ENV,
        }),
    }
}

/// Installs the global subscriber once and returns the format in effect.
pub fn init_logging(args: &LogArgs) -> Result<LogFormat, LoggingError> {
    if let Some(format) = INSTALLED.get() {
        return Ok(*format);
    }
    let format = args.resolve_format(format_from_env()?.as_deref())?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.default_directive()));
    let verbose = args.verbose > 0;

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(verbose);
    let layer = match format {
        LogFormat::Human => layer
            .with_span_events(if verbose { FmtSpan::CLOSE } else { FmtSpan::NONE })
            .boxed(),
        LogFormat::Json => layer
            .json()
            .with_span_events(FmtSpan::CLOSE)
            .with_current_span(true)
            .with_span_list(true)
            .boxed(),
    };

    // Keep an existing `log` bridge if one is already installed.
    let _ = LogTracer::init();
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|source| LoggingError::InstallFailed { source })?;
    Ok(*INSTALLED.get_or_init(|| format))
}
