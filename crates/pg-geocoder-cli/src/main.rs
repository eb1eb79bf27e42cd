//! pg-geocoder: command-line interface for pg-geocoder-core
//!
//! This binary resolves place names against a geonames database from the
//! terminal. It can look up places (optionally within a country given by
//! name or demonym), resolve a country to its code, and summarize the
//! reference tables.
//!
//! Usage examples
//! --------------
//!
//! - All places called Paris
//!   $ pg-geocoder place Paris
//!
//! - Only the French ones, by country name or demonym
//!   $ pg-geocoder place Paris --country France
//!   $ pg-geocoder place Paris -C French
//!
//! - The single most likely match, as JSON
//!   $ pg-geocoder place "Saint-%" --best --json
//!
//! - Country code for a name or demonym
//!   $ pg-geocoder country Swiss
//!
//! Data source
//! -----------
//!
//! By default the CLI connects to PostgreSQL (`geonames` on localhost:5432).
//! Connection settings come from `--config <file.json>`, then the
//! `--host/--port/--user/--password/--dbname` flags or their `PGGEO_*`
//! environment variables. Use `--sqlite <path>` for a local SQLite database
//! with the same layout. Set `RUST_LOG` or pass `-v` for logs on stderr.
mod args;
mod display;

use crate::args::{CliArgs, Commands, ConnectionArgs};
use anyhow::Context;
use clap::Parser;
use pg_geocoder_core::{
    extract_likely, Geoname, PlaceStore, ReferenceTables, Resolver, StoreConfig,
};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    init_logging(args.verbose);

    let tables = match &args.data_dir {
        Some(dir) => ReferenceTables::load_from_dir(dir)
            .with_context(|| format!("loading reference tables from {}", dir.display()))?,
        None => ReferenceTables::load_default().context("loading bundled reference tables")?,
    };

    match args.command {
        Commands::Tables => {
            println!("Reference tables:");
            println!("  Demonyms: {}", tables.demonym_count());
            println!("  Country codes: {}", tables.country_codes().len());
        }

        Commands::Place {
            name,
            country,
            json,
            best,
        } => {
            let store = open_store(
                args.sqlite.as_deref(),
                args.config.as_deref(),
                &args.connection,
            )
            .await?;
            let resolver = Resolver::new(store, tables);

            let rows = resolver.query_place(&name, country.as_deref()).await?;
            let rows = if best {
                extract_likely(&rows).cloned().into_iter().collect()
            } else {
                rows
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else if rows.is_empty() {
                match &country {
                    Some(c) => println!("No places found matching: {name} in {c}"),
                    None => println!("No places found matching: {name}"),
                }
            } else {
                for line in display::format_geonames(&rows) {
                    println!("{line}");
                }
            }
        }

        Commands::Country { name } => {
            let store = open_store(
                args.sqlite.as_deref(),
                args.config.as_deref(),
                &args.connection,
            )
            .await?;
            let resolver = Resolver::new(store, tables);

            match resolver.resolve_country_code(&name).await? {
                Some(code) => {
                    println!("Country: {name}");
                    println!("Code: {code}");
                    let country = resolver.tables().translate_demonym(&name);
                    let matches = resolver.store().query_country_fuzzy(country).await?;
                    if let Some(best) = representative(&matches, &code) {
                        println!("Matched: {}", best.name());
                        println!("Feature code: {}", best.fcode().unwrap_or("-"));
                        println!("Population: {}", best.population());
                    }
                }
                None => eprintln!("Country {name} could not be resolved"),
            }
        }
    }

    Ok(())
}

/// Most likely country record, provided it carries `code`. A code seeded from
/// the reference tables may disagree with the store's best match.
fn representative<'a>(matches: &'a [Geoname], code: &str) -> Option<&'a Geoname> {
    extract_likely(matches).filter(|g| g.country() == code)
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Config file first, then flag/env overrides.
fn store_config(config: Option<&Path>, overrides: &ConnectionArgs) -> anyhow::Result<StoreConfig> {
    let mut config = match config {
        Some(path) => StoreConfig::from_json_file(path)?,
        None => StoreConfig::default(),
    };
    let ConnectionArgs {
        host,
        port,
        user,
        password,
        dbname,
    } = overrides;
    if let Some(v) = host {
        config.host = v.clone();
    }
    if let Some(v) = port {
        config.port = *v;
    }
    if let Some(v) = user {
        config.user = v.clone();
    }
    if let Some(v) = password {
        config.password = v.clone();
    }
    if let Some(v) = dbname {
        config.dbname = v.clone();
    }
    config.validate()?;
    Ok(config)
}

async fn open_store(
    sqlite: Option<&Path>,
    config: Option<&Path>,
    overrides: &ConnectionArgs,
) -> anyhow::Result<Box<dyn PlaceStore>> {
    if let Some(path) = sqlite {
        #[cfg(feature = "sqlite")]
        {
            let store = pg_geocoder_core::SqlitePlaceStore::open(path)
                .await
                .with_context(|| format!("opening {}", path.display()))?;
            return Ok(Box::new(store));
        }
        #[cfg(not(feature = "sqlite"))]
        anyhow::bail!(
            "--sqlite {} requested but this build lacks the 'sqlite' feature",
            path.display()
        );
    }

    let config = store_config(config, overrides)?;
    tracing::debug!(?config, "store configuration");

    #[cfg(feature = "postgres")]
    {
        let store = pg_geocoder_core::PgPlaceStore::connect(&config)
            .await
            .with_context(|| {
                format!("connecting to {}:{}/{}", config.host, config.port, config.dbname)
            })?;
        Ok(Box::new(store))
    }
    #[cfg(not(feature = "postgres"))]
    anyhow::bail!(
        "PostgreSQL support is disabled; rebuild with the 'postgres' feature or use --sqlite"
    )
}
