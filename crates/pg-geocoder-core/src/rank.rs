// crates/pg-geocoder-core/src/rank.rs
use crate::model::Geoname;

/// Picks the "most likely" record: the one with the most alternate names.
///
/// The number of alternate names is a rough measure of how important a
/// place is. Ties go to the record seen first, and an empty input yields
/// `None`.
///
/// # Examples
///
/// ```rust
/// use pg_geocoder_core::rank::extract_likely;
/// use pg_geocoder_core::{Geoname, GeonameFields};
///
/// let georgia_us = Geoname::new(
///     GeonameFields::new("Georgia", "US", 32.75, -83.5, 10_000_000).alternatenames("GA,Georgia"),
/// );
/// let georgia = Geoname::new(
///     GeonameFields::new("Georgia", "GE", 42.0, 43.5, 3_700_000)
///         .alternatenames("Sakartvelo,Georgie,Georgien")
///         .fcode("PCLI"),
/// );
///
/// let rows = vec![georgia_us, georgia];
/// assert_eq!(extract_likely(&rows).map(|g| g.country()), Some("GE"));
/// let none: Vec<Geoname> = Vec::new();
/// assert!(extract_likely(&none).is_none());
/// ```
pub fn extract_likely<'a, I>(records: I) -> Option<&'a Geoname>
where
    I: IntoIterator<Item = &'a Geoname>,
{
    // `Iterator::max_by_key` keeps the *last* maximum; ties must go to the first.
    records.into_iter().reduce(|best, g| {
        if g.alternatenames().len() > best.alternatenames().len() {
            g
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GeonameFields;

    fn place(name: &str, alts: &str) -> Geoname {
        Geoname::new(GeonameFields::new(name, "XX", 0.0, 0.0, 0).alternatenames(alts))
    }

    #[test]
    fn empty_input_is_none() {
        let rows: Vec<Geoname> = Vec::new();
        assert!(extract_likely(&rows).is_none());
    }

    #[test]
    fn picks_strict_maximum() {
        let rows = vec![place("a", "1"), place("b", "1,2,3"), place("c", "1,2")];
        assert_eq!(extract_likely(&rows).map(Geoname::name), Some("b"));
    }

    #[test]
    fn ties_go_to_first_seen() {
        let rows = vec![
            place("a", "1"),
            place("first", "1,2"),
            place("second", "x,y"),
            place("third", "p,q"),
        ];
        assert_eq!(extract_likely(&rows).map(Geoname::name), Some("first"));
    }

    #[test]
    fn single_record_wins_even_without_names() {
        let rows = vec![Geoname::new(GeonameFields::new("lonely", "XX", 0.0, 0.0, 0))];
        assert_eq!(extract_likely(&rows).map(Geoname::name), Some("lonely"));
    }

    #[test]
    fn absent_names_count_as_one() {
        // A record without alternate names still counts one empty name, so it
        // ties with a single-name record and the first one wins.
        let rows = vec![
            Geoname::new(GeonameFields::new("bare", "XX", 0.0, 0.0, 0)),
            place("named", "Only"),
        ];
        assert_eq!(extract_likely(&rows).map(Geoname::name), Some("bare"));
    }
}
