//! Destination point projection on a spherical Earth

use super::point::GeoPoint;

/// Projects a start point along a bearing for a given distance
///
/// Uses the great-circle destination formula on a sphere with the mean Earth
/// radius. Accurate enough for guide lines of a few kilometers; not an
/// ellipsoidal solution.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeodesicProjector;

impl GeodesicProjector {
    /// Mean Earth radius in meters
    pub const EARTH_RADIUS: f64 = 6371000.0;

    /// Create a new projector
    pub fn new() -> Self {
        GeodesicProjector
    }

    /// Compute the point reached from `start` after `distance_meters` on `heading_degrees`
    ///
    /// # Arguments
    /// * `start` - Start point in degrees
    /// * `heading_degrees` - Bearing clockwise from true north, any real value
    /// * `distance_meters` - Distance along the great circle
    ///
    /// # Returns
    /// The destination point. Longitude is not wrapped and latitude is not
    /// clamped, see [`GeoPoint::normalized`].
    pub fn destination_point(&self, start: &GeoPoint, heading_degrees: f64, distance_meters: f64) -> GeoPoint {
        let angular_distance = distance_meters / Self::EARTH_RADIUS;
        let bearing = heading_degrees.to_radians();

        let lat1 = start.latitude.to_radians();
        let lon1 = start.longitude.to_radians();

        let lat2 = f64::asin(
            lat1.sin() * angular_distance.cos()
                + lat1.cos() * angular_distance.sin() * bearing.cos(),
        );

        let lon2 = lon1 + f64::atan2(
            bearing.sin() * angular_distance.sin() * lat1.cos(),
            angular_distance.cos() - lat1.sin() * lat2.sin(),
        );

        GeoPoint::new(lat2.to_degrees(), lon2.to_degrees())
    }
}
