//! Geographic point in degrees

use crate::guide::errors::{GuideError, GuideResult};

/// A latitude/longitude pair in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    /// Latitude in degrees, positive north
    pub latitude: f64,
    /// Longitude in degrees, positive east
    pub longitude: f64,
}

impl GeoPoint {
    /// Create a new point
    pub fn new(latitude: f64, longitude: f64) -> Self {
        GeoPoint { latitude, longitude }
    }

    /// Parse a point from a string (format: "lat,lon")
    pub fn from_string(point_str: &str) -> GuideResult<Self> {
        let parts: Vec<&str> = point_str.split(',').collect();
        if parts.len() != 2 {
            return Err(GuideError::InvalidCoordinate(format!(
                "'{}' must be in format 'lat,lon'", point_str
            )));
        }

        let latitude = parts[0].trim().parse::<f64>()
            .map_err(|_| GuideError::InvalidCoordinate(format!("Invalid latitude '{}'", parts[0].trim())))?;
        let longitude = parts[1].trim().parse::<f64>()
            .map_err(|_| GuideError::InvalidCoordinate(format!("Invalid longitude '{}'", parts[1].trim())))?;

        let point = GeoPoint::new(latitude, longitude);
        if !point.is_valid() {
            return Err(GuideError::InvalidCoordinate(format!(
                "{} is outside [-90, 90] x [-180, 180]", point
            )));
        }

        Ok(point)
    }

    /// Check that latitude is within [-90, 90] and longitude within [-180, 180]
    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Wrap longitude into [-180, 180] and clamp latitude into [-90, 90]
    ///
    /// Projection results are never normalized implicitly; callers that need
    /// a displayable coordinate near the antimeridian or the poles opt in here.
    pub fn normalized(&self) -> Self {
        let latitude = self.latitude.clamp(-90.0, 90.0);
        let mut longitude = (self.longitude + 180.0).rem_euclid(360.0) - 180.0;
        // rem_euclid maps +180 to -180, keep the caller's sign for the seam
        if longitude == -180.0 && self.longitude > 0.0 {
            longitude = 180.0;
        }

        GeoPoint { latitude, longitude }
    }

    /// Compare two points component-wise within `tolerance` degrees
    pub fn approx_eq(&self, other: &GeoPoint, tolerance: f64) -> bool {
        (self.latitude - other.latitude).abs() <= tolerance
            && (self.longitude - other.longitude).abs() <= tolerance
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.latitude, self.longitude)
    }
}
