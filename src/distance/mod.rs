//! Distances between named cities.
//!
//! Provides a directed distance map consulted when computing how far each
//! truck travels.

mod map;

pub use map::{DistanceError, DistanceMap};
