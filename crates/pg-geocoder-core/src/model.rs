// crates/pg-geocoder-core/src/model.rs
use serde::{Deserialize, Serialize};

/// A normalized place record, as returned by a [`PlaceStore`](crate::store::PlaceStore).
///
/// Records are immutable once built. `name`, `country`, the coordinates and
/// the population are always present; administrative levels and the feature
/// code may be absent.
///
/// # Examples
///
/// ```rust
/// use pg_geocoder_core::{Geoname, GeonameFields};
///
/// let paris = Geoname::new(
///     GeonameFields::new("Paris", "FR", 48.85341, 2.3488, 2_138_551)
///         .admin1("11")
///         .alternatenames("Paris,City of Light")
///         .fcode("PPLC"),
/// );
///
/// assert_eq!(paris.name(), "Paris");
/// assert_eq!(paris.admin1(), Some("11"));
/// assert_eq!(paris.admin2(), None);
/// assert_eq!(paris.alternatenames(), ["Paris", "City of Light"]);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Geoname {
    name: String,
    country: String,
    admin1: Option<String>,
    admin2: Option<String>,
    admin3: Option<String>,
    admin4: Option<String>,
    longitude: f64,
    latitude: f64,
    population: i64,
    alternatenames: Vec<String>,
    fcode: Option<String>,
}

/// Parameter set for [`Geoname::new`].
///
/// The required fields are taken by [`GeonameFields::new`]. Everything else
/// defaults to absent, except `alternatenames`, which defaults to the empty
/// string *before* splitting and therefore yields one empty name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GeonameFields {
    pub name: String,
    pub country: String,
    pub latitude: f64,
    pub longitude: f64,
    pub population: i64,
    pub admin1: Option<String>,
    pub admin2: Option<String>,
    pub admin3: Option<String>,
    pub admin4: Option<String>,
    /// Raw comma-delimited field as stored in the place table.
    pub alternatenames: Option<String>,
    pub fcode: Option<String>,
}

impl GeonameFields {
    pub fn new(
        name: impl Into<String>,
        country: impl Into<String>,
        latitude: f64,
        longitude: f64,
        population: i64,
    ) -> Self {
        GeonameFields {
            name: name.into(),
            country: country.into(),
            latitude,
            longitude,
            population,
            ..Default::default()
        }
    }

    pub fn admin1(mut self, v: impl Into<String>) -> Self {
        self.admin1 = Some(v.into());
        self
    }

    pub fn admin2(mut self, v: impl Into<String>) -> Self {
        self.admin2 = Some(v.into());
        self
    }

    pub fn admin3(mut self, v: impl Into<String>) -> Self {
        self.admin3 = Some(v.into());
        self
    }

    pub fn admin4(mut self, v: impl Into<String>) -> Self {
        self.admin4 = Some(v.into());
        self
    }

    pub fn alternatenames(mut self, raw: impl Into<String>) -> Self {
        self.alternatenames = Some(raw.into());
        self
    }

    pub fn fcode(mut self, v: impl Into<String>) -> Self {
        self.fcode = Some(v.into());
        self
    }
}

impl Geoname {
    pub fn new(fields: GeonameFields) -> Self {
        Geoname {
            alternatenames: split_alternatenames(fields.alternatenames.as_deref()),
            name: fields.name,
            country: fields.country,
            admin1: fields.admin1,
            admin2: fields.admin2,
            admin3: fields.admin3,
            admin4: fields.admin4,
            longitude: fields.longitude,
            latitude: fields.latitude,
            population: fields.population,
            fcode: fields.fcode,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Country code (ISO 3166-1 alpha-2 in a standard geonames import).
    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn admin1(&self) -> Option<&str> {
        self.admin1.as_deref()
    }

    pub fn admin2(&self) -> Option<&str> {
        self.admin2.as_deref()
    }

    pub fn admin3(&self) -> Option<&str> {
        self.admin3.as_deref()
    }

    pub fn admin4(&self) -> Option<&str> {
        self.admin4.as_deref()
    }

    /// All four administrative levels, most general first.
    pub fn admins(&self) -> [Option<&str>; 4] {
        [self.admin1(), self.admin2(), self.admin3(), self.admin4()]
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn population(&self) -> i64 {
        self.population
    }

    /// Alternate names in source order. Never empty; see [`split_alternatenames`].
    pub fn alternatenames(&self) -> &[String] {
        &self.alternatenames
    }

    /// Feature code, e.g. `PCLI` for an independent political entity.
    pub fn fcode(&self) -> Option<&str> {
        self.fcode.as_deref()
    }
}

/// Splits the raw comma-delimited alternate-names column.
///
/// An absent column is read as `""`, so the result always has at least one
/// element. The ranking heuristic counts elements and relies on this.
pub fn split_alternatenames(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or("").split(',').map(str::to_string).collect()
}
