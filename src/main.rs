use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

mod cli;
mod config;
mod error;
mod github;
mod grouping;
mod model;
mod output;
mod runner;

#[cfg(test)]
mod test_support;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize tracing - debug logs only with --verbose
    let filter = if cli.verbose {
        EnvFilter::new("prdigest=debug")
    } else {
        EnvFilter::new("prdigest=info")
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Report(args) => cli::report::execute(args).await,
        Commands::Schema(args) => cli::schema::execute(args),
    }
}
