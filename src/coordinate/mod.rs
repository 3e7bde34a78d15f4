//! Coordinate handling for the guide line
//!
//! This module provides the geographic point type and the spherical
//! destination point projection the guide line is built from.

mod point;
mod projector;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::point::GeoPoint;
pub use self::projector::GeodesicProjector;
