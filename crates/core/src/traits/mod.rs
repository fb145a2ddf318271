//! Data-access traits
//!
//! The chat engine consumes whatever persistence layer the surrounding
//! application uses through these seams, which keeps handlers testable
//! with in-memory fixtures.

mod directory;

pub use directory::{PlaceDirectory, StaticDirectory};
