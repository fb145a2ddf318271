//! Core types and traits for the accessibility place-finder chat engine
//!
//! This crate provides foundational types used across the other crates:
//! - Source record types (places, businesses) and the normalized candidate shape
//! - Geographic coordinates and Haversine distance ranking
//! - The `PlaceDirectory` data-access trait for pluggable backends
//! - Error types

pub mod error;
pub mod geo;
pub mod place;
pub mod traits;

pub use error::{Error, Result};
pub use geo::{haversine_distance, rank_by_distance, EARTH_RADIUS_M};
pub use place::{
    BusinessRecord, Coordinates, Place, PlaceFilter, PlaceRecord, PlaceSource,
};
pub use traits::{PlaceDirectory, StaticDirectory};
