mod cli;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Commands, ListArgs, ParseArgs};
use tag_harvest::{
    ExtractionRequest, HarvestConfig, HarvestError, HttpFetcher, Pipeline, RecordStore, Result,
    Store,
};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = HarvestConfig::load(cli.config.as_deref())
        .context("Failed to load configuration")?
        .with_overrides(cli.db.clone(), cli.timeout);

    let store = Store::open(&config.store.path).context("Failed to open the record store")?;

    let result = match &cli.command {
        Commands::Parse(args) => handle_parse_command(args, &config, &store).await,
        Commands::List(args) => handle_list_command(args, &store),
        Commands::Clear => handle_clear_command(&store),
    };

    if let Err(e) = result {
        error!("Operation failed: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn handle_parse_command(
    args: &ParseArgs,
    config: &HarvestConfig,
    store: &Store,
) -> Result<()> {
    let request = ExtractionRequest::new(args.url.as_str(), args.selected_tags());
    let fetcher = HttpFetcher::new(config.fetch.timeout())?;
    let pipeline = Pipeline::new(fetcher, store);

    let outcome = pipeline.run(&request).await?;

    for item in outcome.result.iter() {
        println!("{}", item);
    }

    for failure in &outcome.insert_failures {
        warn!("Item {} was not stored: {}", failure.index + 1, failure.error);
    }

    println!("Status: {}", outcome.status_message());
    Ok(())
}

fn handle_list_command(args: &ListArgs, store: &Store) -> Result<()> {
    let records = store.list_all()?;

    if args.json {
        let json = serde_json::to_string_pretty(&records)
            .map_err(|e| HarvestError::storage(format!("Failed to serialize records: {}", e)))?;
        println!("{}", json);
        return Ok(());
    }

    if records.is_empty() {
        println!("Status: No data to display. Parse and load data first.");
        return Ok(());
    }

    for record in &records {
        println!("{}\t{}", record.id, record.text);
    }
    info!("Listed {} records", records.len());
    Ok(())
}

fn handle_clear_command(store: &Store) -> Result<()> {
    store.clear()?;
    println!("Status: Data cleared successfully.");
    Ok(())
}
