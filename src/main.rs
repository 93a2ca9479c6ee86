use clap::Parser;
use user_registry::cli::{self, Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Demo => cli::demo::run(cli.failure_policy).await,
        Command::Import(args) => cli::import::run(args, cli.failure_policy).await,
    }
}
