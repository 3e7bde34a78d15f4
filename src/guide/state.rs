//! Guide line state and the segment derived from it

use crate::coordinate::GeoPoint;
use crate::guide::errors::{GuideError, GuideResult};
use crate::guide::palette::line_colors;

/// Default heading in degrees
pub const DEFAULT_HEADING: f64 = 0.0;
/// Default line length in meters
pub const DEFAULT_LENGTH: f64 = 500.0;
/// Default stroke width in pixels
pub const DEFAULT_STROKE_WIDTH: f32 = 6.0;

/// RGB line color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

impl LineColor {
    /// Create a color from its components
    pub fn new(red: u8, green: u8, blue: u8) -> Self {
        LineColor { red, green, blue }
    }

    /// Parse a color from "#RRGGBB" or "RRGGBB"
    pub fn from_hex(hex: &str) -> GuideResult<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(GuideError::UnknownColor(hex.to_string()));
        }

        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| GuideError::UnknownColor(hex.to_string()))?;

        Ok(LineColor::new(
            ((value >> 16) & 0xFF) as u8,
            ((value >> 8) & 0xFF) as u8,
            (value & 0xFF) as u8,
        ))
    }

    /// Resolve a palette name or a hex string
    pub fn from_name(name: &str) -> GuideResult<Self> {
        if let Some(color) = line_colors().get(name) {
            return Ok(color);
        }

        Self::from_hex(name).map_err(|_| GuideError::UnknownColor(name.to_string()))
    }

    /// Opaque ARGB value as consumed by map renderers
    pub fn to_argb(&self) -> u32 {
        0xFF00_0000 | ((self.red as u32) << 16) | ((self.green as u32) << 8) | (self.blue as u32)
    }

    /// Hex notation "#RRGGBB"
    pub fn to_hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
    }
}

impl Default for LineColor {
    fn default() -> Self {
        line_colors().default_color()
    }
}

impl std::fmt::Display for LineColor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match line_colors().name_of(*self) {
            Some(name) => write!(f, "{} ({})", name, self.to_hex()),
            None => write!(f, "{}", self.to_hex()),
        }
    }
}

/// Accepted range for the line length in meters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LengthLimits {
    min: f64,
    max: f64,
}

impl LengthLimits {
    /// Create limits, requiring finite bounds with `0 < min <= max`
    pub fn new(min: f64, max: f64) -> GuideResult<Self> {
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(GuideError::InvalidLengthLimits(min, max));
        }
        Ok(LengthLimits { min, max })
    }

    pub fn min(&self) -> f64 {
        self.min
    }

    pub fn max(&self) -> f64 {
        self.max
    }

    /// Clamp a length into the limits
    pub fn clamp(&self, length: f64) -> f64 {
        length.clamp(self.min, self.max)
    }
}

impl Default for LengthLimits {
    fn default() -> Self {
        LengthLimits { min: 50.0, max: 5000.0 }
    }
}

/// User controlled guide line settings
#[derive(Debug, Clone, PartialEq)]
pub struct GuideLineState {
    /// Heading in degrees clockwise from north, kept in [0, 360)
    pub heading: f64,
    /// Line length in meters
    pub length: f64,
    /// Stroke color
    pub color: LineColor,
    /// Whether the map re-centers on the live position
    pub follow_mode: bool,
    /// Stroke width in pixels
    pub stroke_width: f32,
}

impl Default for GuideLineState {
    fn default() -> Self {
        GuideLineState {
            heading: DEFAULT_HEADING,
            length: DEFAULT_LENGTH,
            color: LineColor::default(),
            follow_mode: true,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// The two-point line published to the map renderer
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GuideLineSegment {
    pub start: GeoPoint,
    pub end: GeoPoint,
    pub color: LineColor,
    pub stroke_width: f32,
}

impl GuideLineSegment {
    /// Both endpoints in drawing order
    pub fn points(&self) -> [GeoPoint; 2] {
        [self.start, self.end]
    }
}

/// Location fix progress as observed by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FixStatus {
    /// No live position yet, the line hangs off the map center
    AwaitingFix,
    /// A live position is known
    Tracking,
    /// The first-fix polling budget ran out
    TimedOut,
    /// Location permission was refused
    PermissionDenied,
}

impl FixStatus {
    /// Human readable status
    pub fn description(&self) -> &'static str {
        match self {
            FixStatus::AwaitingFix => "awaiting first location fix",
            FixStatus::Tracking => "tracking live location",
            FixStatus::TimedOut => "no location fix within the polling budget",
            FixStatus::PermissionDenied => "location permission denied",
        }
    }
}

/// Wrap a heading into [0, 360)
///
/// Non-finite headings have no direction and are rejected.
pub fn normalize_heading(heading: f64) -> GuideResult<f64> {
    if !heading.is_finite() {
        return Err(GuideError::InvalidHeading(heading));
    }

    let wrapped = heading.rem_euclid(360.0);
    // rem_euclid can round tiny negatives up to exactly 360
    if wrapped >= 360.0 {
        Ok(0.0)
    } else {
        Ok(wrapped)
    }
}
