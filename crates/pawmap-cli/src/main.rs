use std::io::Write as _;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use pawmap_core::{AppConfig, PlaceRecord};
use pawmap_overpass::{search_nearby, OverpassClient};

#[derive(Debug, Parser)]
#[command(name = "pawmap-cli")]
#[command(about = "Nearby pet-place lookup over the Overpass API")]
struct Cli {
    /// Latitude of the search origin.
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "interactive"
    )]
    lat: Option<f64>,

    /// Longitude of the search origin.
    #[arg(
        long,
        allow_negative_numbers = true,
        required_unless_present = "interactive"
    )]
    lon: Option<f64>,

    /// Search radius in meters. Defaults to PAWMAP_DEFAULT_RADIUS_M.
    #[arg(long)]
    radius_m: Option<u32>,

    /// Maximum results per search. Defaults to PAWMAP_DEFAULT_TOP_N.
    #[arg(long)]
    top_n: Option<usize>,

    /// Prompt for the search parameters on stdin instead of reading flags.
    #[arg(long)]
    interactive: bool,
}

struct SearchParams {
    lat: f64,
    lon: f64,
    radius_m: u32,
    top_n: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = pawmap_core::load_app_config_from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    let params = if cli.interactive {
        prompt_params(&config)?
    } else {
        SearchParams {
            lat: cli.lat.context("--lat is required")?,
            lon: cli.lon.context("--lon is required")?,
            radius_m: cli.radius_m.unwrap_or(config.default_radius_m),
            top_n: cli.top_n.unwrap_or(config.default_top_n),
        }
    };

    let client = OverpassClient::from_config(&config)?;

    println!("--- Nearby veterinary ---");
    let vets = search_nearby(
        &client,
        params.lat,
        params.lon,
        params.radius_m,
        params.top_n,
        "veterinary",
    )
    .await
    .context("veterinary search failed")?;
    print_records(&vets);

    println!("\n--- Nearby pet-friendly food (strict) ---");
    let food = search_nearby(
        &client,
        params.lat,
        params.lon,
        params.radius_m,
        params.top_n,
        "pet_friendly_food",
    )
    .await
    .context("pet-friendly food search failed")?;
    print_records(&food);

    Ok(())
}

fn prompt_params(config: &AppConfig) -> anyhow::Result<SearchParams> {
    let lat = prompt("Latitude: ")?
        .trim()
        .parse::<f64>()
        .context("latitude must be a number")?;
    let lon = prompt("Longitude: ")?
        .trim()
        .parse::<f64>()
        .context("longitude must be a number")?;

    let radius_raw = prompt(&format!("Radius meters (default {}): ", config.default_radius_m))?;
    let radius_m = if radius_raw.trim().is_empty() {
        config.default_radius_m
    } else {
        radius_raw
            .trim()
            .parse::<u32>()
            .context("radius must be a whole number of meters")?
    };

    let top_raw = prompt(&format!("Top N (default {}): ", config.default_top_n))?;
    let top_n = if top_raw.trim().is_empty() {
        config.default_top_n
    } else {
        top_raw
            .trim()
            .parse::<usize>()
            .context("top N must be a whole number")?
    };

    Ok(SearchParams {
        lat,
        lon,
        radius_m,
        top_n,
    })
}

fn prompt(label: &str) -> anyhow::Result<String> {
    print!("{label}");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn print_records(records: &[PlaceRecord]) {
    if records.is_empty() {
        println!("(no results)");
        return;
    }
    for (i, record) in records.iter().enumerate() {
        println!(
            "{:02}. {} | {} | rating={} | {}m",
            i + 1,
            record.name.as_deref().unwrap_or("(unnamed)"),
            record.address.as_deref().unwrap_or("(no address)"),
            record
                .rating
                .map_or_else(|| "-".to_string(), |v| v.to_string()),
            record.distance_m
        );
    }
}
