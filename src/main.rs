use clap::{Parser, Subcommand};
use dotenv::dotenv;
use ecommerce_backend::app::app::{App, AppError};
use ecommerce_backend::config::DatabaseConfig;
use ecommerce_backend::repository::database::Database;
use ecommerce_backend::util::logger::Logger;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "ecommerce-backend", about = "E-commerce user and authentication API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Create the users, customers and address tables
    #[command(name = "db_create")]
    DbCreate,
    /// Drop every table
    #[command(name = "db_drop")]
    DbDrop,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Load environment variables from .env file
    let dotenv_result = dotenv();

    let _logger = match Logger::new() {
        Ok(logger) => Some(logger),
        Err(e) => {
            init_console_logging();
            warn!("File logging unavailable, logging to console only: {e}");
            None
        }
    };

    match dotenv_result {
        Ok(_) => info!("Loaded .env file"),
        Err(e) => warn!("Failed to load .env file: {} (using system env vars)", e),
    }

    if let Err(e) = run(cli.command.unwrap_or(Command::Serve)).await {
        error!("{e}");
        std::process::exit(1);
    }
}

async fn run(command: Command) -> Result<(), AppError> {
    match command {
        Command::Serve => {
            info!("🚀 Starting E-Commerce Backend");
            let app = App::new().await?;
            app.start().await
        }
        Command::DbCreate => {
            let database = Database::connect(&DatabaseConfig::from_env()?).await?;
            database.create_all().await?;
            database.close().await;
            info!("Database created!");
            Ok(())
        }
        Command::DbDrop => {
            let database = Database::connect(&DatabaseConfig::from_env()?).await?;
            database.drop_all().await?;
            database.close().await;
            info!("Database dropped!");
            Ok(())
        }
    }
}

fn init_console_logging() {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,ecommerce_backend=debug"));

    // A subscriber may already be installed if file logging failed half way.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .try_init();
}
