// crates/pg-geocoder-core/src/config.rs
use crate::error::{GeoError, Result};
use serde::Deserialize;
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Connection settings for the geonames database.
///
/// Missing keys in a config file fall back to the defaults of a stock local
/// geonames import: database `geonames` on `localhost:5432` as `postgres`.
#[derive(Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub dbname: String,
    pub user: String,
    pub host: String,
    pub port: u16,
    pub password: String,
    pub max_connections: u32,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            dbname: "geonames".into(),
            user: "postgres".into(),
            host: "localhost".into(),
            port: 5432,
            password: "pass".into(),
            max_connections: 5,
        }
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("dbname", &self.dbname)
            .field("user", &self.user)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .finish()
    }
}

impl StoreConfig {
    /// Reads a JSON object; absent keys keep their defaults.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| {
            GeoError::NotFound(format!("Config not found at {}: {}", path.display(), e))
        })?;
        let config: StoreConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_connections == 0 {
            return Err(GeoError::InvalidData(
                "max_connections must be at least 1".into(),
            ));
        }
        if self.host.trim().is_empty() {
            return Err(GeoError::InvalidData("host must not be empty".into()));
        }
        Ok(())
    }

    #[cfg(feature = "postgres")]
    pub fn pg_connect_options(&self) -> sqlx::postgres::PgConnectOptions {
        sqlx::postgres::PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.dbname)
    }
}
