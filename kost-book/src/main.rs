//! kost-book - Book a room or review a property

use clap::{Parser, Subcommand};
use libkost::store::AppStore;
use libkost::types::{BookingStatus, NewBooking, NewReview, PaymentStatus, UserRole};
use libkost::{Config, FileSessionStore, KostError, Result};
use std::time::Duration;

#[derive(Parser, Debug)]
#[command(name = "kost-book")]
#[command(version)]
#[command(about = "Book a room or review a property")]
#[command(long_about = r#"Book a room or review a property.

Booking requires a tenant session (see kost-session). A booking is created
PENDING/UNPAID, the room is flipped unavailable, the owner is notified, and
the payment-reminder rule runs against the new state. Submission goes
through a simulated network delay, matching the mocked payment flow.

EXAMPLES:
    # Log in first
    kost-session login --email andi@example.com --role tenant

    # Book room r1 of property p1 for one month
    kost-book new --property p1 --room r1

    # Book for six months
    kost-book new --property p1 --room r1 --months 6

    # Leave a review (1-5 stars)
    kost-book review --property p1 --rating 5 --comment "Kamar bersih, pemilik ramah"

EXIT CODES:
    0 - Success
    1 - Error (configuration, session storage)
    2 - Not logged in as a tenant
    3 - Invalid input (unknown ids, room taken, bad rating)
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
    /// Create a booking for an available room
    New {
        /// Property id (e.g. p1)
        #[arg(short, long)]
        property: String,

        /// Room id (e.g. r1)
        #[arg(short, long)]
        room: String,

        /// Rental duration in months
        #[arg(short, long, default_value = "1")]
        months: u32,
    },
    /// Add a review to a property
    Review {
        /// Property id
        #[arg(short, long)]
        property: String,

        /// Integer rating from 1 to 5
        #[arg(short, long)]
        rating: u8,

        /// Review text
        #[arg(short, long)]
        comment: String,
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
        Command::New {
            property,
            room,
            months,
        } => {
            let tenant = match store.user() {
                Some(user) if user.role == UserRole::Tenant => user.clone(),
                _ => {
                    eprintln!("Booking requires a tenant session.");
                    eprintln!("Try: kost-session login --email you@example.com --role tenant");
                    std::process::exit(2);
                }
            };

            if months == 0 {
                return Err(KostError::InvalidInput(
                    "Duration must be at least one month".to_string(),
                ));
            }

            let (room_id, price) = {
                let prop = store.find_property(&property).ok_or_else(|| {
                    KostError::InvalidInput(format!("No property with id '{}'", property))
                })?;
                let target = prop.rooms.iter().find(|r| r.id == room).ok_or_else(|| {
                    KostError::InvalidInput(format!(
                        "No room '{}' in property '{}'",
                        room, property
                    ))
                })?;
                if !target.is_available {
                    return Err(KostError::InvalidInput(format!(
                        "Room '{}' is already occupied",
                        room
                    )));
                }
                (target.id.clone(), target.price)
            };

            let start = chrono::Utc::now();
            let end = start + chrono::Duration::days(30 * months as i64);

            // Simulated payment-gateway latency; the mocked flow has no real
            // network call to wait on
            println!("Memproses pesanan...");
            tokio::time::sleep(Duration::from_millis(1500)).await;

            let booking = store.add_booking(NewBooking {
                tenant_id: tenant.id.clone(),
                property_id: property.clone(),
                room_id: room_id.clone(),
                start_date: start.to_rfc3339(),
                end_date: end.to_rfc3339(),
                total_price: price * months as u64,
                status: BookingStatus::Pending,
                payment_status: PaymentStatus::Unpaid,
            });
            store.update_room_status(&property, &room_id, false);
            let reminders = store.sync_payment_reminders();

            println!("Booking created: {}", booking.id);
            println!("  room:   {} @ Rp{}/bln", room_id, price);
            println!("  period: {} -> {}", booking.start_date, booking.end_date);
            println!("  total:  Rp{}", booking.total_price);
            println!("  status: {} / {}", booking.status, booking.payment_status);
            if reminders > 0 {
                println!("  ({} payment reminder sent)", reminders);
            }
        }
        Command::Review {
            property,
            rating,
            comment,
        } => {
            if store.user().is_none() {
                eprintln!("Reviews require a session.");
                eprintln!("Try: kost-session login --email you@example.com --role tenant");
                std::process::exit(2);
            }
            if !(1..=5).contains(&rating) {
                return Err(KostError::InvalidInput(
                    "Rating must be between 1 and 5".to_string(),
                ));
            }
            let user_id = store.user().map(|u| u.id.clone()).unwrap_or_default();

            store.add_review(
                &property,
                NewReview {
                    user_id,
                    rating,
                    comment,
                },
            );

            match store.find_property(&property) {
                Some(prop) => println!(
                    "Review added. {} now rates ★{:.1} over {} review(s).",
                    prop.name,
                    prop.rating,
                    prop.reviews.len()
                ),
                None => println!("No property with id '{}'; nothing reviewed.", property),
            }
        }
    }

    Ok(())
}
