// crates/pg-geocoder-core/src/store/mod.rs

//! # Place Stores
//!
//! A store answers one question: which places have an alternate name that
//! matches a LIKE pattern. Country lookups are the same query, post-filtered
//! to records that look like countries.

use crate::error::Result;
use crate::model::Geoname;
use async_trait::async_trait;
use std::sync::Arc;

mod memory;
#[cfg(feature = "sql")]
mod sql;

pub use memory::{like_match, MemoryPlaceStore};
#[cfg(feature = "postgres")]
pub use sql::PgPlaceStore;
#[cfg(feature = "sql")]
pub use sql::GeonameRow;
#[cfg(feature = "sqlite")]
pub use sql::SqlitePlaceStore;

/// Places that are countries in everyday speech but carry no country
/// feature code.
pub const COUNTRY_EXCEPTIONS: &[&str] = &["England"];

/// Political entity feature codes that denote a country.
pub const COUNTRY_FEATURE_CODES: &[&str] =
    &["PCL", "PCLD", "PCLF", "PCLH", "PCLI", "PCLIX", "PCLS"];

/// Query surface of the geographic names database.
#[async_trait]
pub trait PlaceStore: Send + Sync {
    /// Distinct places whose alternate-name set has an entry matching `name`.
    ///
    /// `name` is handed to the store verbatim as a LIKE pattern: `%` and `_`
    /// are wildcards and escaping is the caller's business. Order is
    /// whatever the store produces.
    async fn query_place_fuzzy(&self, name: &str) -> Result<Vec<Geoname>>;

    /// [`query_place_fuzzy`](Self::query_place_fuzzy) restricted to records
    /// accepted by [`is_country`].
    async fn query_country_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        let rows = self.query_place_fuzzy(name).await?;
        Ok(filter_countries(rows))
    }
}

#[async_trait]
impl<S: PlaceStore + ?Sized> PlaceStore for Box<S> {
    async fn query_place_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        (**self).query_place_fuzzy(name).await
    }

    async fn query_country_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        (**self).query_country_fuzzy(name).await
    }
}

#[async_trait]
impl<S: PlaceStore + ?Sized> PlaceStore for Arc<S> {
    async fn query_place_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        (**self).query_place_fuzzy(name).await
    }

    async fn query_country_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        (**self).query_country_fuzzy(name).await
    }
}

/// True for records that plausibly denote a country.
#[inline]
pub fn is_country(g: &Geoname) -> bool {
    COUNTRY_EXCEPTIONS.contains(&g.name())
        || g.fcode().is_some_and(|code| COUNTRY_FEATURE_CODES.contains(&code))
}

/// Keeps the records accepted by [`is_country`], preserving order.
pub fn filter_countries(rows: Vec<Geoname>) -> Vec<Geoname> {
    rows.into_iter().filter(is_country).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeonameFields;

    fn rec(name: &str, fcode: Option<&str>) -> Geoname {
        let mut f = GeonameFields::new(name, "XX", 0.0, 0.0, 0);
        f.fcode = fcode.map(str::to_string);
        Geoname::new(f)
    }

    #[test]
    fn every_country_code_is_accepted() {
        for code in COUNTRY_FEATURE_CODES {
            assert!(is_country(&rec("Somewhere", Some(code))), "{code}");
        }
    }

    #[test]
    fn other_codes_are_rejected() {
        for code in ["PPL", "PPLC", "ADM1", "PCLX", "pcli", ""] {
            assert!(!is_country(&rec("Somewhere", Some(code))), "{code}");
        }
        assert!(!is_country(&rec("Somewhere", None)));
    }

    #[test]
    fn exception_names_pass_without_code() {
        assert!(is_country(&rec("England", None)));
        assert!(is_country(&rec("England", Some("ADM1"))));
        assert!(!is_country(&rec("Scotland", Some("ADM1"))));
    }

    #[test]
    fn filter_keeps_order() {
        let rows = vec![
            rec("Georgia", Some("ADM1")),
            rec("Georgia", Some("PCLI")),
            rec("England", Some("ADM1")),
            rec("Jersey", Some("PCLD")),
        ];
        let kept: Vec<_> = filter_countries(rows)
            .into_iter()
            .map(|g| (g.name().to_string(), g.fcode().map(str::to_string)))
            .collect();
        assert_eq!(
            kept,
            vec![
                ("Georgia".to_string(), Some("PCLI".to_string())),
                ("England".to_string(), Some("ADM1".to_string())),
                ("Jersey".to_string(), Some("PCLD".to_string())),
            ]
        );
    }
}
