use aegis_cli::commands::{Cmd, Command};
use clap::Parser;

/// Aegis CLI
///
/// Aegis is a Solidity source patcher that injects security scaffolding
/// (reentrancy guards, ownership, pausability, audit events, input
/// validation) into contract files ahead of compilation.
#[derive(Parser)]
#[command(name = "aegis")]
#[command(about = "Aegis: Solidity security scaffolding patcher")]
struct Cli {
    #[command(subcommand)]
    command: Cmd,
}

/// Runs the Aegis CLI with the provided arguments.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .with_ansi(false)
        .without_time()
        .init();

    let cli = Cli::parse();
    cli.command.execute().await
}
