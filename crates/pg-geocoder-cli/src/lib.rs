//! pg-geocoder-cli
//! ===============
//!
//! Command-line interface for the `pg-geocoder-core` place resolver.
//!
//! This crate primarily provides a binary (`pg-geocoder`). The library target
//! only carries this overview so the documentation page has something to
//! show. See the README for full usage examples.
//!
//! Basic usage:
//!
//! ```text
//! pg-geocoder --help
//! pg-geocoder tables
//! pg-geocoder place Paris --country French
//! pg-geocoder --sqlite geonames.db country Swiss
//! ```
//!
//! For programmatic access, use [`pg-geocoder-core`] directly.
//!
//! [`pg-geocoder-core`]: https://docs.rs/pg-geocoder-core
