// crates/pg-geocoder-core/src/tables.rs

//! # Reference Tables
//!
//! Two lookups consulted before the store is asked about a country:
//! demonym → country name (fixed after load) and country name → country
//! code (seeded from disk, then grown by the resolver as a cache).

use crate::error::{GeoError, Result};
use once_cell::sync::OnceCell;
use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

pub const DEMONYMS_FILE: &str = "demonyms.csv";
pub const COUNTRY_CODES_FILE: &str = "country_codes.csv";

type Pairs = HashMap<String, String>;

// Bundled tables are parsed once per process; each ReferenceTables gets its
// own copy so runtime cache entries stay with the resolver that made them.
static DEFAULT_TABLES: OnceCell<(Pairs, Pairs)> = OnceCell::new();

/// Country name → country code map, safe to share between tasks.
///
/// Lookups take the read lock, inserts the write lock. Entries are never
/// removed, and all writers for a given name write the same code, so a
/// poisoned lock is simply recovered.
#[derive(Debug, Default)]
pub struct CountryCodeCache {
    entries: RwLock<Pairs>,
}

impl CountryCodeCache {
    pub fn new(entries: HashMap<String, String>) -> Self {
        Self {
            entries: RwLock::new(entries),
        }
    }

    pub fn get(&self, name: &str) -> Option<String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.get(name).cloned()
    }

    pub fn insert(&self, name: impl Into<String>, code: impl Into<String>) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.insert(name.into(), code.into());
    }

    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Sorted copy of the current entries.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// The demonym table plus the country-code cache.
#[derive(Debug, Default)]
pub struct ReferenceTables {
    demonyms: Pairs,
    country_codes: CountryCodeCache,
}

impl ReferenceTables {
    pub fn new(demonyms: HashMap<String, String>, country_codes: HashMap<String, String>) -> Self {
        Self {
            demonyms,
            country_codes: CountryCodeCache::new(country_codes),
        }
    }

    /// Tables with no entries: every country qualifier goes to the store.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Directory holding the bundled `demonyms.csv` and `country_codes.csv`.
    pub fn default_data_dir() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
    }

    /// Loads the bundled tables, parsing them at most once per process.
    pub fn load_default() -> Result<Self> {
        let (demonyms, codes) = DEFAULT_TABLES.get_or_try_init(|| {
            let dir = Self::default_data_dir();
            Ok::<_, GeoError>((
                read_pairs_from_path(&dir.join(DEMONYMS_FILE))?,
                read_pairs_from_path(&dir.join(COUNTRY_CODES_FILE))?,
            ))
        })?;
        Ok(Self::new(demonyms.clone(), codes.clone()))
    }

    /// Loads `demonyms.csv` and `country_codes.csv` from `dir`.
    pub fn load_from_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let demonyms = read_pairs_from_path(&dir.join(DEMONYMS_FILE))?;
        let codes = read_pairs_from_path(&dir.join(COUNTRY_CODES_FILE))?;
        Ok(Self::new(demonyms, codes))
    }

    /// Parses both tables from headerless two-column CSV sources.
    pub fn from_readers<D: Read, C: Read>(demonyms: D, country_codes: C) -> Result<Self> {
        Ok(Self::new(
            read_pairs(demonyms, DEMONYMS_FILE)?,
            read_pairs(country_codes, COUNTRY_CODES_FILE)?,
        ))
    }

    /// The country name for a demonym, or `country` itself when it is not one.
    pub fn translate_demonym<'a>(&'a self, country: &'a str) -> &'a str {
        self.demonyms
            .get(country)
            .map(String::as_str)
            .unwrap_or(country)
    }

    pub fn demonym_count(&self) -> usize {
        self.demonyms.len()
    }

    pub fn country_codes(&self) -> &CountryCodeCache {
        &self.country_codes
    }
}

fn read_pairs_from_path(path: &Path) -> Result<Pairs> {
    let file = File::open(path).map_err(|e| {
        GeoError::NotFound(format!("Reference table not found at {}: {}", path.display(), e))
    })?;
    let source = path.display().to_string();
    read_pairs(BufReader::new(file), &source)
}

/// Reads `key,value` rows. Extra columns are ignored, later rows override
/// earlier ones, and a row with a single column is rejected.
fn read_pairs<R: Read>(reader: R, source: &str) -> Result<Pairs> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut out = HashMap::new();
    for (idx, record) in rdr.records().enumerate() {
        let record = record?;
        match (record.get(0), record.get(1)) {
            (Some(key), Some(value)) => {
                out.insert(key.to_string(), value.to_string());
            }
            _ => {
                return Err(GeoError::InvalidData(format!(
                    "{source}: row {} needs two columns, found {}",
                    idx + 1,
                    record.len()
                )))
            }
        }
    }
    tracing::debug!(source, entries = out.len(), "loaded reference table");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn parses_two_column_rows() {
        let t = ReferenceTables::from_readers(
            "French,France\nGerman,Germany\n".as_bytes(),
            "France,FR\n\"Korea, Republic of\",KR\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(t.demonym_count(), 2);
        assert_eq!(t.country_codes().get("France").as_deref(), Some("FR"));
        assert_eq!(t.country_codes().get("Korea, Republic of").as_deref(), Some("KR"));
    }

    #[test]
    fn extra_columns_are_ignored_and_last_row_wins() {
        let t = ReferenceTables::from_readers(
            "".as_bytes(),
            "France,FX,old\nFrance,FR\n".as_bytes(),
        )
        .unwrap();
        assert_eq!(t.country_codes().get("France").as_deref(), Some("FR"));
        assert_eq!(t.country_codes().len(), 1);
    }

    #[test]
    fn single_column_row_is_invalid() {
        let err = ReferenceTables::from_readers("French\n".as_bytes(), "".as_bytes()).unwrap_err();
        assert!(matches!(err, GeoError::InvalidData(msg) if msg.contains("row 1")));
    }

    #[test]
    fn demonyms_translate_or_pass_through() {
        let t = ReferenceTables::from_readers("French,France\n".as_bytes(), "".as_bytes()).unwrap();
        assert_eq!(t.translate_demonym("French"), "France");
        assert_eq!(t.translate_demonym("France"), "France");
        // Lookups are exact.
        assert_eq!(t.translate_demonym("french"), "french");
    }

    #[test]
    fn cache_is_shared_across_threads() {
        let cache = Arc::new(CountryCodeCache::default());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let cache = Arc::clone(&cache);
                std::thread::spawn(move || {
                    cache.insert("France", "FR");
                    cache.get("France")
                })
            })
            .collect();
        for h in handles {
            assert_eq!(h.join().unwrap().as_deref(), Some("FR"));
        }
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn load_from_dir_reads_both_files() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(DEMONYMS_FILE), "Swiss,Switzerland\n").unwrap();
        std::fs::write(dir.path().join(COUNTRY_CODES_FILE), "Switzerland,CH\n").unwrap();
        let t = ReferenceTables::load_from_dir(dir.path()).unwrap();
        let country = t.translate_demonym("Swiss");
        assert_eq!(t.country_codes().get(country).as_deref(), Some("CH"));
    }

    #[test]
    fn load_from_dir_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            ReferenceTables::load_from_dir(dir.path()),
            Err(GeoError::NotFound(_))
        ));
    }

    #[test]
    fn bundled_tables_load() {
        let t = ReferenceTables::load_default().unwrap();
        assert_eq!(t.translate_demonym("French"), "France");
        assert_eq!(t.country_codes().get("France").as_deref(), Some("FR"));

        // Runtime entries stay with the instance that made them.
        t.country_codes().insert("Gaul", "FR");
        let fresh = ReferenceTables::load_default().unwrap();
        assert_eq!(fresh.country_codes().get("Gaul"), None);
    }
}
