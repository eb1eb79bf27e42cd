// crates/pg-geocoder-core/src/store/memory.rs
use super::PlaceStore;
use crate::error::Result;
use crate::model::Geoname;
use async_trait::async_trait;

/// A place plus the entries it owns in the alternate-name index.
#[derive(Clone, Debug)]
struct IndexedPlace {
    place: Geoname,
    names: Vec<String>,
}

/// In-process store with the same matching rules as the SQL backends.
///
/// Each place carries its own alternate-name index (the rows a geonames
/// `alternatename` table would hold for it). Matching is case-sensitive
/// LIKE, as in PostgreSQL, and every place is returned at most once, in
/// insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryPlaceStore {
    places: Vec<IndexedPlace>,
}

impl MemoryPlaceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a place indexed under its name and its non-empty alternate names.
    pub fn insert(&mut self, place: Geoname) {
        let mut names = vec![place.name().to_string()];
        for alt in place.alternatenames() {
            if !alt.is_empty() && !names.contains(alt) {
                names.push(alt.clone());
            }
        }
        self.places.push(IndexedPlace { place, names });
    }

    /// Adds a place indexed under exactly the given names.
    pub fn insert_with_names<I, N>(&mut self, place: Geoname, names: I)
    where
        I: IntoIterator<Item = N>,
        N: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect();
        self.places.push(IndexedPlace { place, names });
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl FromIterator<Geoname> for MemoryPlaceStore {
    fn from_iter<T: IntoIterator<Item = Geoname>>(iter: T) -> Self {
        let mut store = MemoryPlaceStore::new();
        for place in iter {
            store.insert(place);
        }
        store
    }
}

#[async_trait]
impl PlaceStore for MemoryPlaceStore {
    async fn query_place_fuzzy(&self, name: &str) -> Result<Vec<Geoname>> {
        let out = self
            .places
            .iter()
            .filter(|p| p.names.iter().any(|n| like_match(name, n)))
            .map(|p| p.place.clone())
            .collect();
        Ok(out)
    }
}

/// SQL `LIKE` with PostgreSQL's rules: `%` matches any run of characters,
/// `_` exactly one, and a backslash makes the next character literal.
///
/// A pattern ending in an unpaired backslash is malformed (PostgreSQL raises
/// an error for it) and matches nothing.
pub fn like_match(pattern: &str, text: &str) -> bool {
    let pat: Vec<char> = pattern.chars().collect();
    let txt: Vec<char> = text.chars().collect();

    if ends_with_lone_escape(&pat) {
        return false;
    }

    // Backtracking over the last `%` seen; linear for patterns without `%`.
    let (mut p, mut t) = (0usize, 0usize);
    let mut star: Option<(usize, usize)> = None;

    while t < txt.len() {
        match pat.get(p) {
            Some('%') => {
                star = Some((p, t));
                p += 1;
                continue;
            }
            Some('_') => {
                p += 1;
                t += 1;
                continue;
            }
            Some('\\') if p + 1 < pat.len() => {
                if pat[p + 1] == txt[t] {
                    p += 2;
                    t += 1;
                    continue;
                }
            }
            Some(&c) if c == txt[t] => {
                p += 1;
                t += 1;
                continue;
            }
            _ => {}
        }
        match star {
            Some((sp, st)) => {
                p = sp + 1;
                t = st + 1;
                star = Some((sp, st + 1));
            }
            None => return false,
        }
    }

    pat[p..].iter().all(|&c| c == '%')
}

fn ends_with_lone_escape(pat: &[char]) -> bool {
    let mut i = 0;
    while i < pat.len() {
        if pat[i] == '\\' {
            if i + 1 == pat.len() {
                return true;
            }
            i += 2;
        } else {
            i += 1;
        }
    }
    false
}
