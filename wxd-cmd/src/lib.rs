//! Command implementations for the wxd CLI.
//!
//! Provides subcommands for serving the dashboard, preparing and importing
//! into the reading store, and running the dashboard's queries from a shell.

use clap::{Args, Subcommand};
use std::path::PathBuf;
use wxd_core::ReadingFilter;

pub mod query;
pub mod serve;
pub mod store;

/// Location of the SQLite reading store.
#[derive(Args, Debug, Clone)]
pub struct DbArgs {
    /// Path to the SQLite database file
    #[arg(long, env = "WXD_DB_PATH", default_value = "weather.db")]
    pub db: PathBuf,
}

/// Query filter shared by `readings` and `summary`.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only this city
    #[arg(long)]
    pub city: Option<String>,

    /// Inclusive lower bound: RFC 3339 instant or YYYY-MM-DD
    #[arg(long)]
    pub from: Option<String>,

    /// Inclusive upper bound: RFC 3339 instant or YYYY-MM-DD
    #[arg(long)]
    pub to: Option<String>,
}

impl From<FilterArgs> for ReadingFilter {
    fn from(args: FilterArgs) -> Self {
        ReadingFilter {
            city: args.city,
            from: args.from,
            to: args.to,
        }
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Serve the JSON API and the dashboard's static files
    Serve {
        /// Interface to bind
        #[arg(long, env = "WXD_HOST", default_value = "0.0.0.0")]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "PORT", default_value_t = 3000)]
        port: u16,

        #[command(flatten)]
        db: DbArgs,

        /// Directory served for every non-API path
        #[arg(long, env = "WXD_STATIC_DIR", default_value = "public")]
        static_dir: PathBuf,
    },

    /// Create the reading store and load the demo readings
    InitDb {
        #[command(flatten)]
        db: DbArgs,

        /// Replace an existing database file
        #[arg(long)]
        force: bool,
    },

    /// Import readings from a CSV file (city,ts,temp_c,precip_mm,wind_kph)
    Import {
        /// CSV file to import
        #[arg(short, long)]
        csv: PathBuf,

        #[command(flatten)]
        db: DbArgs,
    },

    /// List cities as JSON (the database file must already exist)
    Cities {
        #[command(flatten)]
        db: DbArgs,
    },

    /// List raw readings as JSON (the database file must already exist)
    Readings {
        #[command(flatten)]
        db: DbArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },

    /// List per-city daily summaries as JSON (the database file must already exist)
    Summary {
        #[command(flatten)]
        db: DbArgs,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

pub async fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Serve {
            host,
            port,
            db,
            static_dir,
        } => serve::run_serve(host, port, db.db, static_dir).await,
        Command::InitDb { db, force } => store::run_init_db(&db.db, force),
        Command::Import { csv, db } => store::run_import(&csv, &db.db),
        Command::Cities { db } => query::run_cities(&db.db),
        Command::Readings { db, filter } => query::run_readings(&db.db, &filter.into()),
        Command::Summary { db, filter } => query::run_summary(&db.db, &filter.into()),
    }
}
