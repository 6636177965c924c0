//! kost-notify - Notification feed

use clap::{Parser, Subcommand};
use libkost::store::AppStore;
use libkost::{Config, FileSessionStore, KostError, Result};

#[derive(Parser, Debug)]
#[command(name = "kost-notify")]
#[command(version)]
#[command(about = "Notification feed")]
#[command(long_about = r#"Notification feed.

Lists the session's notification feed (newest first), marks it read, and
runs the unpaid-payment reminder rule. Marking read affects every
notification in the feed regardless of recipient; the feed is
session-scoped and cleared wholesale on logout.

EXAMPLES:
    # Show the feed
    kost-notify list
    kost-notify list --unread-only
    kost-notify list --format jsonl

    # Mark everything read
    kost-notify read-all

    # Ensure reminders exist for unpaid bookings of the session tenant
    kost-notify sync

EXIT CODES:
    0 - Success (including an empty feed)
    1 - Error (configuration, session storage)
    3 - Invalid input (bad format)
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
    /// List notifications, newest first
    List {
        /// Only unread notifications
        #[arg(short, long)]
        unread_only: bool,

        /// Output format (text, json, or jsonl)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
    /// Mark every notification in the feed read
    ReadAll,
    /// Run the unpaid-payment reminder rule
    Sync,
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
        Command::List {
            unread_only,
            format,
        } => {
            let notifications: Vec<_> = store
                .notifications()
                .iter()
                .filter(|n| !unread_only || !n.is_read)
                .collect();

            match format.as_str() {
                "json" => println!(
                    "{}",
                    serde_json::to_string_pretty(&notifications)
                        .map_err(|e| KostError::InvalidInput(e.to_string()))?
                ),
                "jsonl" => {
                    for notification in &notifications {
                        println!(
                            "{}",
                            serde_json::to_string(notification)
                                .map_err(|e| KostError::InvalidInput(e.to_string()))?
                        );
                    }
                }
                "text" => {
                    for notification in &notifications {
                        let marker = if notification.is_read { " " } else { "*" };
                        println!(
                            "{} [{}] {} | {} | {}",
                            marker,
                            notification.kind,
                            notification.date,
                            notification.title,
                            notification.message
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
        Command::ReadAll => {
            store.mark_notifications_read();
            println!("All notifications marked read");
        }
        Command::Sync => {
            let emitted = store.sync_payment_reminders();
            println!("{} reminder(s) emitted", emitted);
        }
    }

    Ok(())
}
