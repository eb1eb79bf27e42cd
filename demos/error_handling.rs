//! Error handling example for pg-geocoder-rs
//!
//! This example demonstrates proper error handling and edge cases

use pg_geocoder_rs::prelude::*;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    println!("=== pg-geocoder Error Handling Example ===\n");

    // Example 1: Loading reference tables from a missing directory
    println!("--- Example 1: Loading tables with error handling ---");
    match ReferenceTables::load_from_dir("/definitely/not/here") {
        Ok(tables) => println!("✓ Loaded {} demonyms", tables.demonym_count()),
        Err(e) => println!("✗ Failed to load tables: {e}"),
    }
    println!();

    // Example 2: Invalid connection settings are caught before connecting
    println!("--- Example 2: Validating store configuration ---");
    let config = StoreConfig {
        max_connections: 0,
        ..StoreConfig::default()
    };
    match config.validate() {
        Ok(()) => println!("  Config accepted: {config:?}"),
        Err(e) => println!("  Config rejected: {e}"),
    }
    println!();

    let store: MemoryPlaceStore = vec![
        Geoname::new(
            GeonameFields::new("Paris", "FR", 48.85, 2.35, 2_138_551).alternatenames("Paris"),
        ),
        Geoname::new(
            GeonameFields::new("France", "FR", 46.0, 2.0, 66_987_244)
                .alternatenames("France")
                .fcode("PCLI"),
        ),
    ]
    .into_iter()
    .collect();
    let resolver = Resolver::new(store, ReferenceTables::load_default()?);

    // Example 3: A country nobody knows yields no places, not an error
    println!("--- Example 3: Unknown country qualifier ---");
    for country in ["Atlantis", "Narnia"] {
        let hits = resolver.query_place("Paris", Some(country)).await?;
        println!("  Paris in {country}: {} result(s)", hits.len());
    }
    println!();

    // Example 4: An empty qualifier is the same as none
    println!("--- Example 4: Empty country qualifier ---");
    let hits = resolver.query_place("Paris", Some("")).await?;
    println!("  Paris in '': {} result(s)", hits.len());
    println!();

    // Example 5: Nothing to rank
    println!("--- Example 5: Ranking an empty result ---");
    let none = resolver.query_place("Gotham", None).await?;
    match extract_likely(&none) {
        Some(place) => println!("  Best: {}", place.name()),
        None => println!("  No candidates for Gotham"),
    }

    Ok(())
}
