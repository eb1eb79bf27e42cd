// crates/pg-geocoder-core/src/error.rs
use thiserror::Error;

/// Errors surfaced by the geocoder.
///
/// A lookup that simply finds nothing is *not* an error: place queries return
/// an empty `Vec` and country resolution returns `None`. Everything in this
/// enum means the lookup itself could not be carried out.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Connection or query failure against the relational store.
    #[error("Store error: {0}")]
    Store(String),

    /// A store row is missing a column the record cannot exist without.
    #[error("Malformed geoname row: required field `{field}` is missing")]
    MalformedRecord { field: &'static str },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(feature = "sql")]
impl From<sqlx::Error> for GeoError {
    fn from(e: sqlx::Error) -> Self {
        GeoError::Store(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, GeoError>;
