#![cfg(feature = "sqlite")]

use pg_geocoder_core::prelude::*;

async fn seeded_store() -> SqlitePlaceStore {
    let store = SqlitePlaceStore::in_memory().await.unwrap();
    store.create_schema().await.unwrap();

    let paris = Geoname::new(
        GeonameFields::new("Paris", "FR", 48.85341, 2.3488, 2_138_551)
            .admin1("11")
            .admin2("75")
            .alternatenames("Paris,City of Light,Lutetia")
            .fcode("PPLC"),
    );
    store
        .insert_place(2988507, &paris, ["Paris", "City of Light", "Lutetia", "Parigi"])
        .await
        .unwrap();

    let paris_tx = Geoname::new(GeonameFields::new("Paris", "US", 33.66094, -95.55551, 24_171));
    store.insert_place(4717560, &paris_tx, ["Paris"]).await.unwrap();

    let france = Geoname::new(
        GeonameFields::new("France", "FR", 46.0, 2.0, 66_987_244)
            .alternatenames("France,Republique Francaise,Hexagone")
            .fcode("PCLI"),
    );
    store
        .insert_place(3017382, &france, ["France", "Republique Francaise", "Hexagone"])
        .await
        .unwrap();

    let ile = Geoname::new(
        GeonameFields::new("Ile-de-France", "FR", 48.5, 2.5, 12_000_000)
            .alternatenames("Ile-de-France,IDF")
            .fcode("ADM1"),
    );
    store
        .insert_place(3012874, &ile, ["Ile-de-France", "IDF"])
        .await
        .unwrap();

    store
}

#[tokio::test]
async fn fuzzy_query_returns_distinct_places() {
    let store = seeded_store().await;

    // Three alternate names of the French capital match, one row comes back.
    let hits = store.query_place_fuzzy("%Pari%").await.unwrap();
    let mut codes: Vec<_> = hits.iter().map(|g| g.country().to_string()).collect();
    codes.sort();
    assert_eq!(codes, ["FR", "US"]);
}

#[tokio::test]
async fn rows_round_trip_optional_columns() {
    let store = seeded_store().await;

    let hits = store.query_place_fuzzy("Lutetia").await.unwrap();
    assert_eq!(hits.len(), 1);
    let paris = &hits[0];
    assert_eq!(paris.admin1(), Some("11"));
    assert_eq!(paris.admin2(), Some("75"));
    assert_eq!(paris.admin3(), None);
    assert_eq!(paris.fcode(), Some("PPLC"));
    assert_eq!(paris.population(), 2_138_551);
    assert_eq!(paris.alternatenames().len(), 3);
}

#[tokio::test]
async fn country_query_filters_feature_codes() {
    let store = seeded_store().await;

    let hits = store.query_country_fuzzy("%France%").await.unwrap();
    let names: Vec<_> = hits.iter().map(|g| g.name()).collect();
    assert_eq!(names, ["France"]);
}

#[tokio::test]
async fn null_required_column_is_malformed() {
    let store = seeded_store().await;
    sqlx::query(
        "INSERT INTO geoname (geonameid, name, country, latitude, longitude, population)
         VALUES (1, 'Ghost Town', 'XX', 1.0, 2.0, NULL)",
    )
    .execute(store.pool())
    .await
    .unwrap();
    sqlx::query("INSERT INTO alternatename (geonameid, alternatename) VALUES (1, 'Ghost Town')")
        .execute(store.pool())
        .await
        .unwrap();

    let err = store.query_place_fuzzy("Ghost Town").await.unwrap_err();
    assert!(matches!(
        err,
        GeoError::MalformedRecord {
            field: "population"
        }
    ));
}

#[tokio::test]
async fn missing_tables_are_a_store_error() {
    let store = SqlitePlaceStore::in_memory().await.unwrap();

    let err = store.query_place_fuzzy("Paris").await.unwrap_err();
    assert!(matches!(err, GeoError::Store(_)));
}

#[tokio::test]
async fn resolver_runs_on_sqlite() {
    let resolver = Resolver::new(seeded_store().await, ReferenceTables::empty());

    let hits = resolver.query_place("Paris", Some("France")).await.unwrap();

    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].country(), "FR");
    assert_eq!(
        resolver.tables().country_codes().get("France").as_deref(),
        Some("FR")
    );
}

#[tokio::test]
async fn escaped_wildcard_matches_like_the_memory_store() {
    let sqlite = SqlitePlaceStore::in_memory().await.unwrap();
    sqlite.create_schema().await.unwrap();
    let hundred_percent = Geoname::new(GeonameFields::new("100%", "XX", 1.0, 1.0, 1));
    let thousand = Geoname::new(GeonameFields::new("1000", "XX", 2.0, 2.0, 2));
    sqlite.insert_place(1, &hundred_percent, ["100%"]).await.unwrap();
    sqlite.insert_place(2, &thousand, ["1000"]).await.unwrap();

    let memory: MemoryPlaceStore = vec![hundred_percent, thousand].into_iter().collect();

    for pattern in ["100\\%", "100%"] {
        let mut from_sqlite: Vec<_> = sqlite
            .query_place_fuzzy(pattern)
            .await
            .unwrap()
            .iter()
            .map(|g| g.name().to_string())
            .collect();
        let mut from_memory: Vec<_> = memory
            .query_place_fuzzy(pattern)
            .await
            .unwrap()
            .iter()
            .map(|g| g.name().to_string())
            .collect();
        from_sqlite.sort();
        from_memory.sort();
        assert_eq!(from_sqlite, from_memory, "pattern {pattern}");
    }

    let escaped = sqlite.query_place_fuzzy("100\\%").await.unwrap();
    assert_eq!(escaped.len(), 1);
    assert_eq!(escaped[0].name(), "100%");
}
