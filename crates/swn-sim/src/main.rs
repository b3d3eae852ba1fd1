use std::process::ExitCode;

use clap::{Parser, Subcommand};
use commands::{
    generate::{self, GenerateArgs},
    inspect::{self, InspectArgs},
    version::{self, VersionArgs},
};
use logging::LogArgs;
use swn_core::SwnError;
use tracing::{debug, error};

mod commands;
mod logging;

#[derive(Parser, Debug)]
#[command(name = "swn-sim", about = "Small-world graph generation and layout CLI")]
struct Cli {
    #[command(flatten)]
    logging: LogArgs,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate, lay out and walk a small-world graph.
    Generate(GenerateArgs),
    /// Summarise a graph or response JSON file.
    Inspect(InspectArgs),
    /// Print version information.
    Version(VersionArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match logging::init_logging(&cli.logging) {
        Ok(format) => debug!(?format, "logging initialised"),
        Err(err) => {
            eprintln!("failed to initialize logging: {err}");
            return ExitCode::FAILURE;
        }
    }

    let result = match cli.command {
        Command::Generate(args) => generate::run(&args),
        Command::Inspect(args) => inspect::run(&args),
        Command::Version(args) => version::run(&args),
    };

    if let Err(err) = result {
        match err.downcast_ref::<SwnError>() {
            Some(swn) => error!(
                family = %swn.family(),
                code = swn.code(),
                error = %err,
                "command execution failed"
            ),
            None => error!(error = %err, "command execution failed"),
        }
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
