use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod config;
mod replay;

#[derive(Parser)]
#[command(
    name = "vigil",
    version,
    about = "Landmark-driven liveness challenge evaluator"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Replay a recorded landmark capture through a liveness session
    Replay(replay::ReplayArgs),
    /// Dump per-frame EAR and yaw without running the challenge
    Inspect(replay::InspectArgs),
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Replay(args) => replay::run(args),
        Command::Inspect(args) => replay::inspect(args),
    }
}
