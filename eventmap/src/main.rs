use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use rusty_events::{EventId, EventLocation};
use tracing::debug;
use tracing_subscriber::EnvFilter;
use wikiatlas::{Atlas, AtlasConfig, TracingToaster};

/// Look up where historic events took place.
#[derive(Debug, Parser)]
#[command(version)]
struct Args {
    /// Events to look up: `wd:Q83224`, `Q83224` or `83224`
    #[arg(required = true)]
    ids: Vec<String>,

    /// Print the raw result rows as JSON
    #[arg(long)]
    json: bool,
}

fn event_id(arg: &str) -> EventId {
    let digits = arg.strip_prefix('Q').unwrap_or(arg);
    match digits.parse::<u64>() {
        Ok(q) => EventId::wikidata(q),
        Err(_) => EventId::from(arg),
    }
}

fn describe(event: &EventLocation) -> String {
    let id = event.id().map_or_else(|| "?".into(), |id| id.to_string());
    let label = event.label().unwrap_or("(no label)");
    let place = event
        .location_label
        .as_ref()
        .map_or("(unknown place)", |b| b.value.as_str());

    match event.lat_lng() {
        Some((lat, lng)) => format!("{id}\t{label}\t{place}\t{lat}, {lng}"),
        None => format!("{id}\t{label}\t{place}\t-"),
    }
}

// single threaded on purpose, toasts are posted to the same loop as the fetch
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // loads from .env file

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let config = AtlasConfig::from_env()?;
    debug!(endpoint = %config.endpoint, "using sparql endpoint");

    let atlas = Atlas::from_config(&config, Arc::new(TracingToaster))?;
    let ids = args.ids.iter().map(|arg| event_id(arg)).collect::<Vec<_>>();
    let events = atlas.get_events_data(&ids)?.await?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&events)?);
    } else {
        for event in &events {
            println!("{}", describe(event));
        }
    }

    Ok(())
}
