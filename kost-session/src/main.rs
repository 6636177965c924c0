//! kost-session - Manage the Kostkita login session

use clap::{Parser, Subcommand};
use libkost::logging::{LogFormat, LoggingConfig};
use libkost::{AppStore, Config, FileSessionStore, KostError, Result, UserRole};

#[derive(Parser, Debug)]
#[command(name = "kost-session")]
#[command(version)]
#[command(about = "Manage the Kostkita login session")]
#[command(long_about = r#"Manage the Kostkita login session.

The session is the only durable state: one saved user record. Logging in
fabricates a mock identity for the chosen role (there is no real identity
provider) and writes it to the session file; logging out removes the file
and clears the notification feed.

EXAMPLES:
    # Log in as a tenant
    kost-session login --email andi@example.com --role tenant

    # Log in as an owner
    kost-session login --email budi@example.com --role owner

    # Show who is logged in
    kost-session show
    kost-session show --format json

    # Log out
    kost-session logout

CONFIGURATION:
    Configuration file: ~/.config/kostkita/config.toml
    Session file:       ~/.local/share/kostkita/session.json

    Override with environment variables:
        KOSTKITA_CONFIG - Path to config file

EXIT CODES:
    0 - Success
    1 - Session storage or configuration error
    3 - Invalid input (unknown role, bad format)
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
    /// Log in with a mock identity for the given role
    Login {
        /// Email address (not validated beyond presence)
        #[arg(short, long)]
        email: String,

        /// Role: tenant or owner
        #[arg(short, long)]
        role: String,
    },
    /// Log out and clear the saved session
    Logout,
    /// Show the current session
    Show {
        /// Output format (text or json)
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        LoggingConfig::new(LogFormat::Text, "debug".to_string(), true).init();
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
    let mut store = AppStore::new(Box::new(session))?;

    match cli.command {
        Command::Login { email, role } => {
            let role: UserRole = role.parse().map_err(KostError::InvalidInput)?;
            let user = store.login(&email, role)?;
            println!("Logged in as {} <{}> ({})", user.name, user.email, user.role);
        }
        Command::Logout => {
            store.logout()?;
            println!("Logged out");
        }
        Command::Show { format } => match format.as_str() {
            "json" => match store.user() {
                Some(user) => println!("{}", serde_json::to_string_pretty(user).unwrap_or_default()),
                None => println!("null"),
            },
            "text" => match store.user() {
                Some(user) => {
                    println!("{} <{}>", user.name, user.email);
                    println!("  id:   {}", user.id);
                    println!("  role: {}", user.role);
                }
                None => println!("Not logged in"),
            },
            other => {
                return Err(KostError::InvalidInput(format!(
                    "Invalid format '{}'. Valid formats: text, json",
                    other
                )))
            }
        },
    }

    Ok(())
}
