//! Sumd CLI - Command-line interface for the memoizing sum service

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use sumd::config;
use sumd::storage::SqliteStore;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "sumd")]
#[command(version = "0.0.1")]
#[command(about = "Memoizing sum service - computes integer sums and persists each result under its canonical input key")]
#[command(long_about = r#"
Sumd computes the sum of a list of integers and memoizes every result in
SQLite, keyed by the exact input sequence:
  • Identical requests are served from the store without recomputation
  • A uniqueness constraint keeps one record per input sequence
  • Arithmetic is 32-bit signed with silent wraparound

Example usage:
  sumd serve --port 3000
  sumd sum 1 2 3 4 5
  sumd stats --database sumd.db
"#)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Port to listen on (overrides the config file)
        #[arg(short, long)]
        port: Option<u16>,

        /// Path to the database file (overrides the config file)
        #[arg(short, long)]
        database: Option<PathBuf>,

        /// Path to the config file
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Compute a sum once, memoizing the result
    Sum {
        /// Integers to sum
        #[arg(required = true, num_args = 1.., allow_negative_numbers = true)]
        numbers: Vec<i32>,

        /// Path to the database file
        #[arg(short, long, default_value = "sumd.db")]
        database: PathBuf,
    },

    /// Show statistics about the memoized sums
    Stats {
        /// Path to the database file
        #[arg(short, long, default_value = "sumd.db")]
        database: PathBuf,
    },

    /// Write a starter config file
    Init {
        /// Where to write the config
        #[arg(short, long)]
        path: Option<PathBuf>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    match cli.command {
        Commands::Serve { port, database, config } => {
            let file_config = config::load_config(config.as_deref())?.unwrap_or_default();
            let port = port.or(file_config.port).unwrap_or(3000);
            let database = database
                .or(file_config.database.map(PathBuf::from))
                .unwrap_or_else(config::default_database_path);

            config::ensure_db_dir(&database)?;

            println!("🚀 Starting sumd");
            println!("🗄️  Database: {:?}", database);

            sumd::server::start_server(port, database).await?;
        }

        Commands::Sum { numbers, database } => {
            config::ensure_db_dir(&database)?;
            let store = SqliteStore::open(&database)?;

            let outcome = sumd::compute_sum(&store, Some(&numbers))?;
            if outcome.from_cache {
                println!("✅ {} (memoized)", outcome.result);
            } else {
                println!("✅ {}", outcome.result);
            }
        }

        Commands::Stats { database } => {
            let store = SqliteStore::open(&database)?;

            println!("📊 Sumd Statistics ({:?})", database);
            println!("------------------------------------");
            println!("   Memoized sums: {}", store.count_records()?);
        }

        Commands::Init { path, force } => {
            let path = path.unwrap_or_else(config::default_config_path);
            let config = config::SumdConfig {
                port: Some(3000),
                database: Some("sumd.db".to_string()),
            };
            config::write_config(&path, &config, force)?;
            println!("✅ Wrote config to {:?}", path);
        }
    }

    Ok(())
}
