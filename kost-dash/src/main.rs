//! kost-dash - Owner dashboard statistics

use anyhow::Result;
use clap::Parser;
use libkost::store::AppStore;
use libkost::views::{self, DashboardStats, PropertyOccupancy};
use libkost::{Config, FileSessionStore};
use serde::Serialize;

#[derive(Parser, Debug)]
#[command(name = "kost-dash")]
#[command(version)]
#[command(about = "Owner dashboard statistics")]
#[command(long_about = r#"Owner dashboard statistics.

Derives revenue, active-booking count, and occupancy from current state.
All figures are recomputed from scratch on every run; nothing is cached.

    total revenue   - sum of totalPrice over PAID bookings
    active bookings - bookings that are PENDING or CONFIRMED
    occupancy rate  - occupied rooms / total rooms x 100 (0 without rooms)

EXAMPLES:
    # Human-readable dashboard
    kost-dash

    # JSON for scripting
    kost-dash --format json
    kost-dash --format json | jq '.stats.occupancyRate'

EXIT CODES:
    0 - Success
    1 - Error (configuration, bad format)
"#)]
struct Cli {
    /// Output format (text or json)
    #[arg(short, long, default_value = "text")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Dashboard {
    stats: DashboardStats,
    occupancy: Vec<PropertyOccupancy>,
}

fn main() {
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

    if let Err(e) = run(cli) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default()?;
    let session = FileSessionStore::new(config.session_path());
    let store = AppStore::seeded(Box::new(session))?;

    let dashboard = Dashboard {
        stats: views::dashboard_stats(store.properties(), store.bookings()),
        occupancy: views::occupancy_by_property(store.properties()),
    };

    match cli.format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&dashboard)?),
        "text" => {
            let s = &dashboard.stats;
            println!("Pendapatan (PAID):  Rp{}", s.total_revenue);
            println!("Booking aktif:      {}", s.active_bookings);
            println!(
                "Okupansi:           {:.1}% ({}/{} kamar)",
                s.occupancy_rate, s.occupied_rooms, s.total_rooms
            );
            println!();
            println!("Per properti:");
            for occ in &dashboard.occupancy {
                println!(
                    "  {} | {} | {}/{} kamar terisi",
                    occ.property_id, occ.name, occ.occupied, occ.total
                );
            }
        }
        other => anyhow::bail!("Invalid format '{}'. Valid formats: text, json", other),
    }

    Ok(())
}
