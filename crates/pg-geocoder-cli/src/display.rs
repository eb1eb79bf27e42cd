use pg_geocoder_core::Geoname;

/// One table row: name (right-aligned to `name_width`), country, admin1,
/// population and the number of alternate names.
pub fn format_geoname(row: &Geoname, name_width: usize) -> String {
    format!(
        "{:>name_width$} | {:>2} | {:>3} | {:>12} | {:>4}",
        row.name(),
        row.country(),
        row.admin1().unwrap_or("-"),
        row.population(),
        row.alternatenames().len(),
    )
}

/// All rows, aligned on the longest name. Empty input gives no lines.
pub fn format_geonames(rows: &[Geoname]) -> Vec<String> {
    let width = rows
        .iter()
        .map(|r| r.name().chars().count())
        .max()
        .unwrap_or(0);
    rows.iter().map(|r| format_geoname(r, width)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pg_geocoder_core::GeonameFields;

    #[test]
    fn row_layout() {
        let g = Geoname::new(
            GeonameFields::new("Paris", "FR", 48.85, 2.35, 2_138_551)
                .admin1("11")
                .alternatenames("Paris,Lutetia"),
        );
        assert_eq!(
            format_geoname(&g, 8),
            "   Paris | FR |  11 |      2138551 |    2"
        );
    }

    #[test]
    fn absent_admin1_prints_dash() {
        let g = Geoname::new(GeonameFields::new("Nice", "FR", 43.7, 7.27, 342_669));
        assert!(format_geoname(&g, 4).starts_with("Nice | FR |   - |"));
    }

    #[test]
    fn rows_align_on_longest_name() {
        let rows = vec![
            Geoname::new(GeonameFields::new("Rome", "IT", 41.9, 12.5, 1)),
            Geoname::new(GeonameFields::new("Ravenna", "IT", 44.4, 12.2, 1)),
        ];
        let lines = format_geonames(&rows);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("   Rome |"));
        assert!(lines[1].starts_with("Ravenna |"));
    }

    #[test]
    fn empty_set_has_no_lines() {
        assert!(format_geonames(&[]).is_empty());
    }
}
