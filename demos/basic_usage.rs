//! Basic usage example for pg-geocoder-rs
//!
//! This example demonstrates how to:
//! - Build an in-memory place store
//! - Look up places with and without a country qualifier
//! - Qualify by demonym through the bundled reference tables
//! - Pick the most likely match

use pg_geocoder_rs::prelude::*;

fn sample_store() -> MemoryPlaceStore {
    vec![
        Geoname::new(
            GeonameFields::new("Paris", "FR", 48.85341, 2.3488, 2_138_551)
                .admin1("11")
                .alternatenames("Paris,City of Light,Lutetia,Parigi")
                .fcode("PPLC"),
        ),
        Geoname::new(
            GeonameFields::new("Paris", "US", 33.66094, -95.55551, 24_171)
                .admin1("TX")
                .alternatenames("Paris"),
        ),
        Geoname::new(
            GeonameFields::new("France", "FR", 46.0, 2.0, 66_987_244)
                .alternatenames("France,Republique Francaise,Hexagone")
                .fcode("PCLI"),
        ),
        Geoname::new(
            GeonameFields::new("United States", "US", 39.76, -98.5, 327_167_434)
                .alternatenames("United States,USA,America")
                .fcode("PCLI"),
        ),
    ]
    .into_iter()
    .collect()
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== pg-geocoder Basic Usage Example ===\n");

    let tables = ReferenceTables::load_default()?;
    println!(
        "Reference tables: {} demonyms, {} country codes\n",
        tables.demonym_count(),
        tables.country_codes().len()
    );
    let resolver = Resolver::new(sample_store(), tables);

    // Example 1: every place called Paris
    println!("--- Example 1: Places named Paris ---");
    for place in resolver.query_place("Paris", None).await? {
        println!(
            "{} ({}), population {}",
            place.name(),
            place.country(),
            place.population()
        );
    }
    println!();

    // Example 2: only the French one
    println!("--- Example 2: Paris in France ---");
    for place in resolver.query_place("Paris", Some("France")).await? {
        println!(
            "{} ({}) at {:.3}, {:.3}",
            place.name(),
            place.country(),
            place.latitude(),
            place.longitude()
        );
    }
    println!();

    // Example 3: the qualifier may be a demonym
    println!("--- Example 3: Paris, qualified as American ---");
    for place in resolver.query_place("Paris", Some("American")).await? {
        println!(
            "{} ({}), admin1 {}",
            place.name(),
            place.country(),
            place.admin1().unwrap_or("-")
        );
    }
    println!();

    // Example 4: LIKE patterns and ranking
    println!("--- Example 4: Most likely match for 'Par%' ---");
    let hits = resolver.query_place("Par%", None).await?;
    if let Some(best) = extract_likely(&hits) {
        println!(
            "{} ({}) with {} alternate names",
            best.name(),
            best.country(),
            best.alternatenames().len()
        );
    }

    Ok(())
}
