//! tasklist CLI - run and migrate the todo HTTP service
//!
//! Subcommands:
//! - `serve`: start the HTTP server (runs migrations first)
//! - `migrate`: create the todo table and exit

use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use tasklist_server::db;
use tasklist_server::{run_server, ServerConfig};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "tasklist",
    author,
    version,
    about = "Todo CRUD HTTP service over PostgreSQL"
)]
struct Cli {
    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind to
        #[arg(long, default_value = "127.0.0.1:3030")]
        bind: SocketAddr,

        /// PostgreSQL connection string (defaults to $DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,

        /// Maximum connections in the pool
        #[arg(long, default_value_t = 5)]
        max_connections: u32,

        /// Allow any CORS origin (development only)
        #[arg(long)]
        cors_permissive: bool,
    },
    /// Run migrations and exit
    Migrate {
        /// PostgreSQL connection string (defaults to $DATABASE_URL)
        #[arg(long)]
        database_url: Option<String>,
    },
}

/// Resolve the database URL from the flag or the environment.
fn database_url(flag: Option<String>) -> Result<String> {
    match flag {
        Some(url) => Ok(url),
        None => std::env::var("DATABASE_URL")
            .context("DATABASE_URL not set and --database-url not given"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; explicit env vars still apply
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    tracing_setup::init_tracing(&tracing_setup::TracingConfig { debug: cli.debug })?;

    match cli.command {
        Commands::Serve {
            bind,
            database_url: url,
            max_connections,
            cors_permissive,
        } => {
            let url = database_url(url)?;
            let pool = db::pool::create_pool_with_options(&url, max_connections)
                .await
                .context("failed to connect to database")?;

            db::migrations::run(&pool)
                .await
                .context("failed to run migrations")?;

            let config = ServerConfig {
                bind_addr: bind,
                cors_permissive,
            };
            run_server(pool, config).await?;
        }
        Commands::Migrate { database_url: url } => {
            let url = database_url(url)?;
            let pool = db::create_pool(&url)
                .await
                .context("failed to connect to database")?;

            db::migrations::run(&pool)
                .await
                .context("failed to run migrations")?;
            info!("migrations applied");
        }
    }

    Ok(())
}
