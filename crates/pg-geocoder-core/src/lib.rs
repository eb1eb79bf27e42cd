// crates/pg-geocoder-core/src/lib.rs

//! pg-geocoder-core
//! ================
//!
//! Resolve free-text place names against a geonames database.
//!
//! A [`Resolver`] takes a name and an optional country qualifier (a country
//! name or a demonym such as "French"), runs a LIKE match against the
//! alternate-name index of a [`PlaceStore`], and keeps the places that lie in
//! the qualifying country. Country names are turned into codes through the
//! [`ReferenceTables`], falling back to the store and caching the answer.
//!
//! ```rust
//! use pg_geocoder_core::prelude::*;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<()> {
//! let store: MemoryPlaceStore = vec![
//!     Geoname::new(GeonameFields::new("Paris", "FR", 48.85, 2.35, 2_138_551)
//!         .alternatenames("Paris,City of Light")),
//!     Geoname::new(GeonameFields::new("Paris", "US", 33.66, -95.56, 24_171)
//!         .alternatenames("Paris")),
//!     Geoname::new(GeonameFields::new("France", "FR", 46.0, 2.0, 66_987_244)
//!         .alternatenames("France,Republique Francaise,Hexagone")
//!         .fcode("PCLI")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let resolver = Resolver::new(store, ReferenceTables::empty());
//! let hits = resolver.query_place("Paris", Some("France")).await?;
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].country(), "FR");
//! # Ok(())
//! # }
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod config;
pub mod error;
pub mod model;
pub mod prelude;
pub mod rank;
pub mod resolver;
pub mod store;
pub mod tables;

// Re-exports
pub use crate::config::StoreConfig;
pub use crate::error::{GeoError, Result};
pub use crate::model::{Geoname, GeonameFields};
pub use crate::rank::extract_likely;
pub use crate::resolver::Resolver;
pub use crate::store::{MemoryPlaceStore, PlaceStore};
#[cfg(feature = "postgres")]
pub use crate::store::PgPlaceStore;
#[cfg(feature = "sqlite")]
pub use crate::store::SqlitePlaceStore;
pub use crate::tables::{CountryCodeCache, ReferenceTables};
