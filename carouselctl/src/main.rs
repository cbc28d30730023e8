use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> Result<()> {
    let env_file_loaded = dotenvy::dotenv().is_ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if env_file_loaded {
        debug!("loaded .env file");
    }

    let cli = Cli::parse();
    match cli.command {
        Command::Window(args) => cli::commands::window(args),
        Command::Path(args) => cli::commands::path(args),
        Command::Run(args) => cli::commands::run(args).await,
    }
}
