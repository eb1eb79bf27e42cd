//! pg-geocoder-rs
//!
//! Workspace facade over [`pg_geocoder_core`]; the demos under `demos/`
//! build against this crate.

pub use pg_geocoder_core::*;
