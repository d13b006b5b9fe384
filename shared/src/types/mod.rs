//! Type definitions shared across crates
//!
//! - `common` - Geographic coordinates and map regions

pub mod common;

pub use common::{Coordinate, CoordinateSpan, MapRegion};
