pub mod report;
pub mod schema;

use crate::config::OutputFormat;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "prdigest")]
#[command(
    author,
    version,
    about = "Digest of open pull requests across an organization, grouped by base branch"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose/debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Collect open pull requests and print the digest
    Report(ReportArgs),

    /// Print JSON Schema for config validation
    Schema(SchemaArgs),
}

#[derive(Parser, Clone)]
pub struct ReportArgs {
    /// Organization whose repositories are scanned
    #[arg(long, env = "GITHUB_ORG")]
    pub org: Option<String>,

    /// GitHub token
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Path to config file (defaults to prdigest.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override GitHub API base URL
    #[arg(long)]
    pub api_base: Option<String>,

    /// Override max in-flight GitHub requests
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Read every page of pull requests and reviews
    #[arg(long)]
    pub all_pages: bool,

    /// Output format (markdown or json)
    #[arg(long)]
    pub format: Option<OutputFormat>,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Clone)]
pub struct SchemaArgs {
    /// Write the schema to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}
