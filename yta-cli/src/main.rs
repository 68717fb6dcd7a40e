//! yta-cli - Command line tool for the transcript analyzer backend.

use clap::Parser;

#[derive(Parser)]
#[command(
    name = "yta-cli",
    version,
    about = "Fetch and analyze video transcripts through the analyzer backend"
)]
struct Cli {
    #[command(flatten)]
    backend: yta_cmd::Backend,

    #[command(subcommand)]
    command: yta_cmd::Command,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    yta_cmd::run(&cli.backend, cli.command).await
}
