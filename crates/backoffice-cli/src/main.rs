// Backoffice CLI
//
// One subcommand per browser route of the original dashboard: login/logout,
// the aggregate dashboard, and the four resource screens. Each invocation
// builds the screen it needs, drives it, and prints the result.

mod commands;
mod output;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use backoffice_client::ApiClient;
use backoffice_core::session::SessionStore;

#[derive(Parser)]
#[command(name = "backoffice")]
#[command(about = "Backoffice CLI - Manage categories, events, users, and guests")]
#[command(version)]
pub struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "BACKOFFICE_API_URL",
        default_value = "http://127.0.0.1:5050/backoffice"
    )]
    pub api_url: String,

    /// Output format
    #[arg(long, short, default_value = "text", value_parser = ["text", "json", "yaml"])]
    pub output: String,

    /// Suppress non-essential output
    #[arg(long, short)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Log in (demo credential check) and store the session marker
    Login {
        #[arg(long, default_value = "admin@admin.com")]
        email: String,

        #[arg(long, default_value = "admin")]
        password: String,
    },

    /// Clear the session marker
    Logout,

    /// Show aggregate resource counts
    Dashboard,

    /// Manage categories
    Categories {
        #[command(subcommand)]
        command: commands::categories::CategoriesCommand,
    },

    /// Manage events
    Events {
        #[command(subcommand)]
        command: commands::events::EventsCommand,
    },

    /// Manage users
    Users {
        #[command(subcommand)]
        command: commands::users::UsersCommand,
    },

    /// Approve or decline pending guests
    Guests {
        #[command(subcommand)]
        command: commands::guests::GuestsCommand,
    },
}

fn session_store() -> SessionStore {
    let path = std::env::var("BACKOFFICE_SESSION_FILE")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".backoffice").join("session.json")
        });
    SessionStore::new(path)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = ApiClient::new(&cli.api_url);
    let output_format = output::OutputFormat::from_str(&cli.output);

    match cli.command {
        Commands::Login { email, password } => {
            commands::auth::login(&session_store(), &email, &password, cli.quiet)
        }
        Commands::Logout => commands::auth::logout(&session_store(), cli.quiet),
        Commands::Dashboard => commands::dashboard::run(&client, output_format).await,
        Commands::Categories { command } => {
            commands::categories::run(command, client, output_format, cli.quiet).await
        }
        Commands::Events { command } => {
            commands::events::run(command, client, output_format, cli.quiet).await
        }
        Commands::Users { command } => {
            commands::users::run(command, client, output_format, cli.quiet).await
        }
        Commands::Guests { command } => {
            commands::guests::run(command, client, output_format, cli.quiet).await
        }
    }
}
