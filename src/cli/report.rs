use crate::cli::ReportArgs;
use crate::config::{default_config_path, Config, OutputFormat};
use crate::error::ConfigError;
use crate::github::{HostingClient, OctocrabClient};
use crate::grouping::{rank, total_records, AliasTable};
use crate::output::{render_json, render_markdown, write_report};
use crate::runner::{collect_by_base, enumerate_repositories, CollectOptions};
use chrono::Utc;
use tracing::{debug, info};

/// Trim a credential-like value; blank counts as missing.
fn required(value: Option<String>, missing: ConfigError) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(missing)
}

/// Resolve config file, CLI overrides and required inputs before any remote call.
fn prepare(args: &ReportArgs) -> Result<(Config, String, String), ConfigError> {
    let org = required(args.org.clone(), ConfigError::MissingOrganization)?;
    let token = required(args.token.clone(), ConfigError::MissingToken)?;

    let (path, explicit) = match &args.config {
        Some(path) => (path.clone(), true),
        None => (default_config_path(), false),
    };
    info!("Loading config from {:?}", path);
    let mut config = Config::load_or_default(&path, explicit)?;

    // Apply CLI overrides
    if let Some(api_base) = &args.api_base {
        config.api_base = Some(api_base.clone());
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }
    if args.all_pages {
        config.all_pages = true;
    }
    if let Some(format) = args.format {
        config.format = format;
    }

    config.validate()?;
    Ok((config, org, token))
}

pub async fn execute(args: ReportArgs) -> anyhow::Result<()> {
    let (config, org, token) = prepare(&args)?;

    let client = OctocrabClient::connect(&token, config.api_base.as_deref())?;
    let report = build_report(&client, &config, &org).await?;

    write_report(args.output.as_deref(), &report)?;
    if let Some(path) = &args.output {
        info!("Wrote report: {}", path.display());
    }
    Ok(())
}

/// Run the whole scan against `client` and render it in the configured format.
pub async fn build_report<C>(client: &C, config: &Config, org: &str) -> anyhow::Result<String>
where
    C: HostingClient + ?Sized,
{
    let user = client.authenticated_user().await?;
    info!("user: {}", user);

    info!("Listing repos...");
    let repositories = enumerate_repositories(client, org).await?;
    info!("{} repos", repositories.len());

    let aliases = AliasTable::from(config.aliases.clone());
    debug!("Using {} base aliases", aliases.len());

    info!("Listing PRs per repo...");
    let options = CollectOptions {
        concurrency: config.concurrency,
        per_page: config.per_page,
        all_pages: config.all_pages,
    };
    let mut grouping = collect_by_base(client, &repositories, &aliases, options).await?;
    rank(&mut grouping);
    debug!(
        "{} pull requests across {} bases",
        total_records(&grouping),
        grouping.len()
    );

    let now = Utc::now();
    let rendered = match config.format {
        OutputFormat::Markdown => render_markdown(&grouping, now),
        OutputFormat::Json => render_json(&grouping, org, now)?,
    };
    Ok(rendered)
}
