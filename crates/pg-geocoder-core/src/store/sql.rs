// crates/pg-geocoder-core/src/store/sql.rs

// ---------------------------------------------------------------------------
// FILE GUARD: only compiled with a relational backend ('postgres' / 'sqlite').
// ---------------------------------------------------------------------------

#[cfg(any(feature = "postgres", feature = "sqlite"))]
use super::PlaceStore;
#[cfg(feature = "postgres")]
use crate::config::StoreConfig;
use crate::error::{GeoError, Result};
use crate::model::{Geoname, GeonameFields};
#[cfg(any(feature = "postgres", feature = "sqlite"))]
use async_trait::async_trait;

/// One row of the fuzzy place query, before validation.
///
/// Every column is optional here so that a NULL in a required column turns
/// into [`GeoError::MalformedRecord`] instead of a decode failure.
#[derive(Debug, Clone, Default, sqlx::FromRow)]
pub struct GeonameRow {
    pub name: Option<String>,
    pub country: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub population: Option<i64>,
    pub admin1: Option<String>,
    pub admin2: Option<String>,
    pub admin3: Option<String>,
    pub admin4: Option<String>,
    pub alternatenames: Option<String>,
    pub fcode: Option<String>,
}

impl TryFrom<GeonameRow> for Geoname {
    type Error = GeoError;

    fn try_from(row: GeonameRow) -> Result<Self> {
        let missing = |field| GeoError::MalformedRecord { field };
        Ok(Geoname::new(GeonameFields {
            name: row.name.ok_or_else(|| missing("name"))?,
            country: row.country.ok_or_else(|| missing("country"))?,
            latitude: row.latitude.ok_or_else(|| missing("latitude"))?,
            longitude: row.longitude.ok_or_else(|| missing("longitude"))?,
            population: row.population.ok_or_else(|| missing("population"))?,
            admin1: row.admin1,
            admin2: row.admin2,
            admin3: row.admin3,
            admin4: row.admin4,
            alternatenames: row.alternatenames,
            fcode: row.fcode,
        }))
    }
}

#[cfg(any(feature = "postgres", feature = "sqlite"))]
fn rows_to_geonames(rows: Vec<GeonameRow>) -> Result<Vec<Geoname>> {
    rows.into_iter().map(Geoname::try_from).collect()
}

// -----------------------------------------------------------------------------
// POSTGRES
// -----------------------------------------------------------------------------

#[cfg(feature = "postgres")]
const PG_FUZZY_PLACE_SQL: &str = r#"
SELECT DISTINCT name, country, latitude, longitude, population,
       admin1, admin2, admin3, admin4, geoname.alternatenames, fcode
FROM geoname
INNER JOIN alternatename
ON alternatename.geonameid = geoname.geonameid
WHERE alternatename LIKE $1
"#;

/// Store backed by a geonames import in PostgreSQL.
///
/// The pool hands each query its own connection, so a single store can be
/// shared between tasks.
#[cfg(feature = "postgres")]
#[derive(Clone, Debug)]
pub struct PgPlaceStore {
    pool: sqlx::PgPool,
}

#[cfg(feature = "postgres")]
impl PgPlaceStore {
    pub fn new(pool: sqlx::PgPool) -> Self {
        Self { pool }
    }

    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        tracing::info!(
            host = %config.host,
            port = config.port,
            dbname = %config.dbname,
            user = %config.user,
            "connecting to geonames database"
        );
        let pool = sqlx::postgres::PgPoolOptions::new()
            .max_connections(config.max_connections)
            .connect_with(config.pg_connect_options())
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &sqlx::PgPool {
        &self.pool
    }
}

#[cfg(feature = "postgres")]
#[async_trait]
impl PlaceStore for PgPlaceStore {
    async fn query_place_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        let rows: Vec<GeonameRow> = sqlx::query_as(PG_FUZZY_PLACE_SQL)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(pattern = name, rows = rows.len(), "fuzzy place query");
        rows_to_geonames(rows)
    }
}

// -----------------------------------------------------------------------------
// SQLITE
// -----------------------------------------------------------------------------

#[cfg(feature = "sqlite")]
const SQLITE_FUZZY_PLACE_SQL: &str = r#"
SELECT DISTINCT name, country, latitude, longitude, population,
       admin1, admin2, admin3, admin4, geoname.alternatenames, fcode
FROM geoname
INNER JOIN alternatename
ON alternatename.geonameid = geoname.geonameid
WHERE alternatename LIKE ? ESCAPE '\'
"#;

/// Minimal two-table layout the fuzzy query runs against.
#[cfg(feature = "sqlite")]
const SQLITE_SCHEMA: [&str; 3] = [
    "CREATE TABLE IF NOT EXISTS geoname (
        geonameid INTEGER PRIMARY KEY,
        name TEXT,
        country TEXT,
        latitude REAL,
        longitude REAL,
        population INTEGER,
        admin1 TEXT,
        admin2 TEXT,
        admin3 TEXT,
        admin4 TEXT,
        alternatenames TEXT,
        fcode TEXT
    )",
    "CREATE TABLE IF NOT EXISTS alternatename (
        alternatenameid INTEGER PRIMARY KEY AUTOINCREMENT,
        geonameid INTEGER NOT NULL REFERENCES geoname (geonameid),
        alternatename TEXT NOT NULL
    )",
    "CREATE INDEX IF NOT EXISTS alternatename_name_idx ON alternatename (alternatename)",
];

/// Store backed by a local SQLite database with the geonames layout.
///
/// The pattern runs with `ESCAPE '\'`, so backslash escapes behave as in
/// PostgreSQL. Note that SQLite's `LIKE` is case-insensitive for ASCII
/// letters, unlike PostgreSQL's.
#[cfg(feature = "sqlite")]
#[derive(Clone, Debug)]
pub struct SqlitePlaceStore {
    pool: sqlx::SqlitePool,
}

#[cfg(feature = "sqlite")]
impl SqlitePlaceStore {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn open(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::info!(path = %path.display(), "opening geonames database");
        let options = sqlx::sqlite::SqliteConnectOptions::new()
            .filename(path)
            .read_only(true);
        let pool = sqlx::SqlitePool::connect_with(options).await?;
        Ok(Self { pool })
    }

    /// A private in-memory database, empty until [`create_schema`](Self::create_schema).
    pub async fn in_memory() -> Result<Self> {
        // Every in-memory connection is its own database, so pin the pool to
        // one connection that never expires.
        let pool = sqlx::sqlite::SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;
        Ok(Self { pool })
    }

    pub async fn create_schema(&self) -> Result<()> {
        for stmt in SQLITE_SCHEMA {
            sqlx::query(stmt).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Writes one place and its alternate-name index rows.
    pub async fn insert_place<I, N>(&self, geonameid: i64, place: &Geoname, names: I) -> Result<()>
    where
        I: IntoIterator<Item = N>,
        N: AsRef<str>,
    {
        let mut tx = self.pool.begin().await?;
        sqlx::query(
            "INSERT INTO geoname (geonameid, name, country, latitude, longitude, population,
                                  admin1, admin2, admin3, admin4, alternatenames, fcode)
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(geonameid)
        .bind(place.name())
        .bind(place.country())
        .bind(place.latitude())
        .bind(place.longitude())
        .bind(place.population())
        .bind(place.admin1())
        .bind(place.admin2())
        .bind(place.admin3())
        .bind(place.admin4())
        .bind(place.alternatenames().join(","))
        .bind(place.fcode())
        .execute(&mut *tx)
        .await?;

        for name in names {
            sqlx::query("INSERT INTO alternatename (geonameid, alternatename) VALUES (?, ?)")
                .bind(geonameid)
                .bind(name.as_ref())
                .execute(&mut *tx)
                .await?;
        }
        tx.commit().await?;
        Ok(())
    }

    pub fn pool(&self) -> &sqlx::SqlitePool {
        &self.pool
    }
}

#[cfg(feature = "sqlite")]
#[async_trait]
impl PlaceStore for SqlitePlaceStore {
    async fn query_place_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        let rows: Vec<GeonameRow> = sqlx::query_as(SQLITE_FUZZY_PLACE_SQL)
            .bind(name)
            .fetch_all(&self.pool)
            .await?;
        tracing::debug!(pattern = name, rows = rows.len(), "fuzzy place query");
        rows_to_geonames(rows)
    }
}
