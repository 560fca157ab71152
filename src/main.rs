mod cli;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cli::protocol::ProtocolArgs;
use cli::scenarios::ScenariosArgs;

#[derive(Parser)]
#[command(
    name = "zkgas",
    version,
    about = "Estimate verifier gas for aggregated range proofs under EIP-196 and EIP-1108",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    #[command(flatten)]
    scenarios: ScenariosArgs,
}

#[derive(Subcommand)]
enum Command {
    /// Compare the four standard scenarios (default)
    Scenarios(ScenariosArgs),
    /// Price a single sub-protocol
    Protocol(ProtocolArgs),
    /// List protocol names and cost tables
    List,
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();
    match cli.command {
        Some(Command::Scenarios(args)) => cli::scenarios::cmd_scenarios(args),
        Some(Command::Protocol(args)) => cli::protocol::cmd_protocol(args),
        Some(Command::List) => cli::list::cmd_list(),
        None => cli::scenarios::cmd_scenarios(cli.scenarios),
    }
}
