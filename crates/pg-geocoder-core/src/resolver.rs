// crates/pg-geocoder-core/src/resolver.rs
use crate::error::Result;
use crate::model::Geoname;
use crate::rank::extract_likely;
use crate::store::PlaceStore;
use crate::tables::ReferenceTables;
use tracing::{debug, info, instrument};

/// Resolves place names, optionally qualified by a country or demonym.
///
/// The resolver owns its store and its [`ReferenceTables`]. Country names it
/// has to look up in the store are written back into the tables' code cache,
/// so each country costs at most one store round-trip per resolver. Two
/// concurrent calls for the same unseen country may both query; they write
/// the same entry.
#[derive(Debug)]
pub struct Resolver<S> {
    store: S,
    tables: ReferenceTables,
}

impl<S: PlaceStore> Resolver<S> {
    pub fn new(store: S, tables: ReferenceTables) -> Self {
        Self { store, tables }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn tables(&self) -> &ReferenceTables {
        &self.tables
    }

    /// Places matching `name`, restricted to `country` when one is given.
    ///
    /// `country` may be a country name or a demonym ("French"). A qualifier
    /// that resolves to no country code yields an empty result, not an error.
    /// An empty qualifier counts as none.
    ///
    /// The result is materialized; it can be iterated as often as needed.
    #[instrument(level = "debug", skip(self))]
    pub async fn query_place(&self, name: &str, country: Option<&str>) -> Result<Vec<Geoname>> {
        let candidates = self.store.query_place_fuzzy(name).await?;

        let country = match country {
            Some(c) if !c.is_empty() => c,
            _ => return Ok(candidates),
        };

        let code = self.resolve_country_code(country).await?;
        let out: Vec<Geoname> = match code {
            Some(code) => candidates
                .into_iter()
                .filter(|g| g.country() == code)
                .collect(),
            None => Vec::new(),
        };
        debug!(matches = out.len(), "filtered by country");
        Ok(out)
    }

    /// Country code for a country name or demonym.
    ///
    /// Checks the code cache first. On a miss, the country-classified store
    /// matches are ranked with [`extract_likely`] and the winner's code is
    /// cached under both the winner's name and the (translated) query.
    #[instrument(level = "debug", skip(self))]
    pub async fn resolve_country_code(&self, country: &str) -> Result<Option<String>> {
        let country = self.tables.translate_demonym(country);
        let cache = self.tables.country_codes();

        if let Some(code) = cache.get(country).filter(|c| !c.is_empty()) {
            debug!(country, code = %code, "country code cache hit");
            return Ok(Some(code));
        }

        let matches = self.store.query_country_fuzzy(country).await?;
        let Some(best) = extract_likely(&matches) else {
            debug!(country, "no country matches");
            return Ok(None);
        };

        let code = best.country().to_string();
        cache.insert(best.name(), code.as_str());
        cache.insert(country, code.as_str());
        info!(country, matched = best.name(), code = %code, "cached country code");
        Ok(Some(code))
    }
}
