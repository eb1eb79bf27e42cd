//! pg-geocoder prelude: bring common types and traits into scope for demos.

pub use crate::config::StoreConfig;
pub use crate::error::{GeoError, Result};
pub use crate::model::{Geoname, GeonameFields};
pub use crate::rank::extract_likely;
pub use crate::resolver::Resolver;
pub use crate::store::{filter_countries, is_country, MemoryPlaceStore, PlaceStore};
#[cfg(feature = "postgres")]
pub use crate::store::PgPlaceStore;
#[cfg(feature = "sqlite")]
pub use crate::store::SqlitePlaceStore;
pub use crate::tables::{CountryCodeCache, ReferenceTables};
