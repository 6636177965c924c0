//! kost-tenants - Manage bookings and tenants

use clap::{Parser, Subcommand};
use libkost::store::AppStore;
use libkost::types::{BookingStatus, PaymentStatus};
use libkost::{Config, FileSessionStore, KostError, Result};

#[derive(Parser, Debug)]
#[command(name = "kost-tenants")]
#[command(version)]
#[command(about = "Manage bookings and tenants")]
#[command(long_about = r#"Manage bookings and tenants.

Owner-side booking management. Confirming a booking marks it
CONFIRMED/PAID and sends the tenant a payment confirmation; cancelling and
completing only change the status fields.

EXAMPLES:
    # List all bookings
    kost-tenants list
    kost-tenants list --format json

    # Only bookings of one property
    kost-tenants list --property p1

    # Confirm a booking and its payment
    kost-tenants confirm --booking <BOOKING_ID>

    # Cancel / complete
    kost-tenants cancel --booking <BOOKING_ID>
    kost-tenants complete --booking <BOOKING_ID>

EXIT CODES:
    0 - Success (including empty listings)
    1 - Error (configuration, session storage)
    3 - Invalid input (unknown booking id, bad format)
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
    /// List bookings
    List {
        /// Only bookings for this property id
        #[arg(short, long)]
        property: Option<String>,

        /// Output format (text, json, or jsonl)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Confirm a booking and mark it paid
    Confirm {
        /// Booking id
        #[arg(short, long)]
        booking: String,
    },
    /// Cancel a booking
    Cancel {
        /// Booking id
        #[arg(short, long)]
        booking: String,
    },
    /// Mark a booking completed
    Complete {
        /// Booking id
        #[arg(short, long)]
        booking: String,
    },
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
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load_or_default()?;
    let session = FileSessionStore::new(config.session_path());
    let mut store = AppStore::seeded(Box::new(session))?;

    match cli.command {
        Command::List { property, format } => {
            let bookings: Vec<_> = store
                .bookings()
                .iter()
                .filter(|b| property.as_deref().map_or(true, |p| b.property_id == p))
                .collect();

            match format.as_str() {
                "json" => println!(
                    "{}",
                    serde_json::to_string_pretty(&bookings)
                        .map_err(|e| KostError::InvalidInput(e.to_string()))?
                ),
                "jsonl" => {
                    for booking in &bookings {
                        println!(
                            "{}",
                            serde_json::to_string(booking)
                                .map_err(|e| KostError::InvalidInput(e.to_string()))?
                        );
                    }
                }
                "text" => {
                    for booking in &bookings {
                        println!(
                            "{} | tenant {} | {}/{} | Rp{} | {} / {}",
                            booking.id,
                            booking.tenant_id,
                            booking.property_id,
                            booking.room_id,
                            booking.total_price,
                            booking.status,
                            booking.payment_status
                        );
                    }
                }
                other => {
                    return Err(KostError::InvalidInput(format!(
                        "Invalid format '{}'. Valid formats: text, json, jsonl",
                        other
                    )))
                }
            }
        }
        Command::Confirm { booking } => {
            update(&mut store, &booking, BookingStatus::Confirmed, PaymentStatus::Paid)?;
            println!("Booking {} confirmed and marked paid", booking);
        }
        Command::Cancel { booking } => {
            update(&mut store, &booking, BookingStatus::Cancelled, PaymentStatus::Unpaid)?;
            println!("Booking {} cancelled", booking);
        }
        Command::Complete { booking } => {
            update(&mut store, &booking, BookingStatus::Completed, PaymentStatus::Paid)?;
            println!("Booking {} completed", booking);
        }
    }

    Ok(())
}

/// Validate the id up front so the CLI can report; the store itself treats
/// unknown ids as a silent no-op
fn update(
    store: &mut AppStore,
    booking_id: &str,
    status: BookingStatus,
    payment: PaymentStatus,
) -> Result<()> {
    if store.find_booking(booking_id).is_none() {
        return Err(KostError::InvalidInput(format!(
            "No booking with id '{}'",
            booking_id
        )));
    }
    store.update_booking_status(booking_id, status, payment);
    Ok(())
}
