use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// CLI arguments for pg-geocoder
#[derive(Debug, Parser)]
#[command(
    name = "pg-geocoder",
    version,
    about = "Resolve place names against a local geonames database"
)]
pub struct CliArgs {
    /// JSON file with connection settings (dbname, user, host, port, password, max_connections)
    #[arg(short = 'c', long = "config", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Query a local SQLite geonames database instead of PostgreSQL
    #[arg(long = "sqlite", global = true, value_name = "PATH")]
    pub sqlite: Option<PathBuf>,

    /// Directory containing demonyms.csv and country_codes.csv (default: bundled tables)
    #[arg(short = 'd', long = "data-dir", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log lookups and cache activity to stderr
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// PostgreSQL connection overrides; each wins over the config file.
#[derive(Debug, Default, Args)]
pub struct ConnectionArgs {
    #[arg(long, env = "PGGEO_HOST", global = true)]
    pub host: Option<String>,

    #[arg(long, env = "PGGEO_PORT", global = true)]
    pub port: Option<u16>,

    #[arg(long, env = "PGGEO_USER", global = true)]
    pub user: Option<String>,

    #[arg(long, env = "PGGEO_PASSWORD", global = true, hide_env_values = true)]
    pub password: Option<String>,

    #[arg(long, env = "PGGEO_DBNAME", global = true)]
    pub dbname: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up places by name, optionally within a country
    Place {
        /// Name or LIKE pattern (e.g. Paris, Saint-%)
        name: String,

        /// Country name or demonym (e.g. France, French)
        #[arg(short = 'C', long = "country")]
        country: Option<String>,

        /// Print the results as JSON
        #[arg(long)]
        json: bool,

        /// Print only the most likely match
        #[arg(long)]
        best: bool,
    },

    /// Resolve a country name or demonym to its country code
    Country {
        /// Country name or demonym
        name: String,
    },

    /// Show a summary of the reference tables
    Tables,
}
