//! kost-rooms - Manage rooms of a property

use clap::{Parser, Subcommand};
use libkost::ai::{self, GeminiClient, MockAi};
use libkost::store::AppStore;
use libkost::{Config, FileSessionStore, KostError, Result};

#[derive(Parser, Debug)]
#[command(name = "kost-rooms")]
#[command(version)]
#[command(about = "Manage rooms of a property")]
#[command(long_about = r#"Manage rooms of a property.

Owner-side room management: list rooms, toggle availability, and generate
a marketing description with the Gemini API. AI failures never abort the
command; they degrade to a fixed placeholder text.

EXAMPLES:
    # List rooms of a property
    kost-rooms list --property p1
    kost-rooms list --property p1 --format json

    # Mark a room unavailable / available again
    kost-rooms set-status --property p1 --room r1 --available false
    kost-rooms set-status --property p1 --room r1 --available true

    # Generate a marketing description (requires GEMINI_API_KEY)
    kost-rooms describe --property p1

    # Offline, with canned text
    kost-rooms describe --property p1 --mock

EXIT CODES:
    0 - Success
    1 - Error (configuration, session storage)
    3 - Invalid input (unknown property or room id, bad format)
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
    /// List the rooms of a property
    List {
        /// Property id
        #[arg(short, long)]
        property: String,

        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Set a room's availability
    SetStatus {
        /// Property id
        #[arg(short, long)]
        property: String,

        /// Room id
        #[arg(short, long)]
        room: String,

        /// true to mark available, false to mark occupied
        #[arg(short, long, action = clap::ArgAction::Set)]
        available: bool,
    },
    /// Generate a marketing description for a property
    Describe {
        /// Property id
        #[arg(short, long)]
        property: String,

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
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

async fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default()?;
    let session = FileSessionStore::new(config.session_path());
    let mut store = AppStore::seeded(Box::new(session))?;

    match cli.command {
        Command::List { property, format } => {
            let prop = store.find_property(&property).ok_or_else(|| {
                KostError::InvalidInput(format!("No property with id '{}'", property))
            })?;

            match format.as_str() {
                "json" => println!(
                    "{}",
                    serde_json::to_string_pretty(&prop.rooms)
                        .map_err(|e| KostError::InvalidInput(e.to_string()))?
                ),
                "text" => {
                    println!("{} ({} kamar):", prop.name, prop.rooms.len());
                    for room in &prop.rooms {
                        let status = if room.is_available { "kosong" } else { "terisi" };
                        println!(
                            "  {} | No. {} | {} | Rp{}/bln | {}",
                            room.id, room.room_number, room.room_type, room.price, status
                        );
                    }
                }
                other => {
                    return Err(KostError::InvalidInput(format!(
                        "Invalid format '{}'. Valid formats: text, json",
                        other
                    )))
                }
            }
        }
        Command::SetStatus {
            property,
            room,
            available,
        } => {
            // Validate up front so the CLI can report; the store itself
            // treats unknown ids as a silent no-op
            let prop = store.find_property(&property).ok_or_else(|| {
                KostError::InvalidInput(format!("No property with id '{}'", property))
            })?;
            if !prop.rooms.iter().any(|r| r.id == room) {
                return Err(KostError::InvalidInput(format!(
                    "No room '{}' in property '{}'",
                    room, property
                )));
            }

            store.update_room_status(&property, &room, available);
            println!(
                "Room {} is now {}",
                room,
                if available { "available" } else { "occupied" }
            );
        }
        Command::Describe { property, mock } => {
            let prop = store.find_property(&property).ok_or_else(|| {
                KostError::InvalidInput(format!("No property with id '{}'", property))
            })?;

            let text = if mock {
                ai::describe_or_fallback(
                    &MockAi::success(),
                    &prop.name,
                    &prop.facilities,
                    &prop.city,
                )
                .await
            } else {
                match config.ai.as_ref().map(GeminiClient::from_config) {
                    Some(Ok(client)) => {
                        ai::describe_or_fallback(&client, &prop.name, &prop.facilities, &prop.city)
                            .await
                    }
                    _ => {
                        tracing::warn!("AI service not configured, returning placeholder");
                        ai::DESCRIPTION_FAILURE.to_string()
                    }
                }
            };

            println!("{}", text);
        }
    }

    Ok(())
}
