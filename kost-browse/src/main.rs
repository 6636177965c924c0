//! kost-browse - Search and browse kost listings

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use libkost::ai::{self, GeminiClient, MockAi};
use libkost::store::AppStore;
use libkost::types::Property;
use libkost::views;
use libkost::{Config, FileSessionStore, MemorySessionStore};

#[derive(Parser, Debug)]
#[command(name = "kost-browse")]
#[command(version)]
#[command(about = "Search and browse kost listings")]
#[command(long_about = r#"Search and browse kost listings.

A property matches a free-text query when the query is a case-insensitive
substring of its name or area; an optional city filter is combined with
AND semantics. Listings come from the in-memory seed catalog.

EXAMPLES:
    # List everything
    kost-browse list

    # Free-text search (name or area)
    kost-browse list --query kos
    kost-browse list --query cikarang

    # Exact city filter, combined with the query
    kost-browse list --query kost --city Bekasi

    # Only properties with an active promo
    kost-browse list --promo-only

    # JSON output for scripting
    kost-browse list --format json | jq '.[] | .name'
    kost-browse list --format jsonl

    # Nearby places around a property (Gemini Maps grounding)
    kost-browse nearby --property p1 --category "warung makan"
    kost-browse nearby --property p4 --category kampus --mock

OUTPUT FORMATS:
    text  - Human-readable listing (default)
    json  - JSON array
    jsonl - One JSON object per line (streaming-friendly)

EXIT CODES:
    0 - Success (including empty results)
    1 - Error (configuration, unknown property, bad format)
"#)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List properties matching the filters
    List {
        /// Free-text query matched against name and area
        #[arg(short, long, default_value = "")]
        query: String,

        /// Exact city filter (omit for all cities)
        #[arg(short, long)]
        city: Option<String>,

        /// Only properties with a non-empty promo text
        #[arg(long)]
        promo_only: bool,

        /// Output format: text, json, or jsonl
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Look up nearby places around a property
    Nearby {
        /// Property id (e.g. p1)
        #[arg(short, long)]
        property: String,

        /// Place category, e.g. "warung makan", "kampus", "minimarket"
        #[arg(short, long)]
        category: String,

        /// Use the offline mock AI instead of the Gemini API
        #[arg(long)]
        mock: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        libkost::logging::LoggingConfig::new(
            libkost::logging::LogFormat::Text,
            "debug".to_string(),
            true,
        )
        .init();
    } else {
        libkost::logging::init_default();
    }

    if let Err(e) = run(cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default().context("Failed to load configuration")?;

    match cli.command {
        Command::List {
            query,
            city,
            promo_only,
            format,
        } => {
            // Browsing needs no session; keep the saved one untouched
            let store = AppStore::seeded(Box::new(MemorySessionStore::new()))?;

            let mut hits = views::search_properties(store.properties(), &query, city.as_deref());
            if promo_only {
                hits.retain(|p| p.has_promo());
            }
            print_listing(&hits, &format)?;
        }
        Command::Nearby {
            property,
            category,
            mock,
        } => {
            let session = FileSessionStore::new(config.session_path());
            let store = AppStore::seeded(Box::new(session))?;
            let prop = store
                .find_property(&property)
                .with_context(|| format!("No property with id '{}'", property))?;

            let lookup = if mock {
                ai::nearby_or_fallback(&MockAi::success(), prop.lat, prop.lng, &category).await
            } else {
                match config.ai.as_ref().map(GeminiClient::from_config) {
                    Some(Ok(client)) => {
                        ai::nearby_or_fallback(&client, prop.lat, prop.lng, &category).await
                    }
                    // Missing AI setup degrades to the placeholder like any
                    // other boundary failure
                    _ => {
                        tracing::warn!("AI service not configured, returning placeholder");
                        ai::PlaceLookup {
                            summary: ai::PLACES_FAILURE.to_string(),
                            places: Vec::new(),
                        }
                    }
                }
            };

            println!("Sekitar {} ({}):", prop.name, prop.area);
            println!();
            println!("{}", lookup.summary);
            if !lookup.places.is_empty() {
                println!();
                for place in &lookup.places {
                    println!("  {} -> {}", place.label, place.uri);
                }
            }
        }
    }

    Ok(())
}

fn print_listing(properties: &[&Property], format: &str) -> Result<()> {
    match format {
        "json" => {
            println!("{}", serde_json::to_string_pretty(properties)?);
        }
        "jsonl" => {
            for prop in properties {
                println!("{}", serde_json::to_string(prop)?);
            }
        }
        "text" => {
            for prop in properties {
                let promo = prop
                    .promo_text
                    .as_deref()
                    .filter(|t| !t.is_empty())
                    .map(|t| format!(" [{}]", t))
                    .unwrap_or_default();
                println!(
                    "{} | {} | {}, {} | Rp{}/bln | {} | ★{:.1}{}",
                    prop.id, prop.name, prop.area, prop.city, prop.base_price, prop.gender,
                    prop.rating, promo
                );
            }
        }
        other => {
            anyhow::bail!("Invalid format '{}'. Valid formats: text, json, jsonl", other);
        }
    }
    Ok(())
}
