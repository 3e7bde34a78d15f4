//! TOML backed settings for the map screen

use std::fs;
use std::time::Duration;

use log::debug;

use crate::coordinate::GeoPoint;
use crate::guide::errors::{GuideError, GuideResult};
use crate::guide::fix_poller::FixPollPolicy;
use crate::guide::state::{normalize_heading, GuideLineState, LengthLimits, LineColor};

/// Default zoom level of the map view
pub const DEFAULT_ZOOM: f64 = 16.0;

/// Initial viewport of the map
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapSettings {
    /// Zoom level set when the screen is created
    pub zoom: f64,
    /// Center shown until a live fix arrives
    pub initial_center: GeoPoint,
}

impl Default for MapSettings {
    fn default() -> Self {
        MapSettings {
            zoom: DEFAULT_ZOOM,
            initial_center: GeoPoint::new(0.0, 0.0),
        }
    }
}

/// Complete configuration of a map screen
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GuideConfig {
    /// Initial guide line settings
    pub guide_line: GuideLineState,
    /// Range the line length is clamped into
    pub length_limits: LengthLimits,
    /// Initial viewport
    pub map: MapSettings,
    /// First-fix polling budget
    pub poll: FixPollPolicy,
}

impl GuideConfig {
    /// Parse a configuration from a TOML string
    ///
    /// Recognized tables are `[guide_line]`, `[guide_line.length_limits]`,
    /// `[map]` and `[location]`. Unknown keys are ignored.
    pub fn from_str(content: &str) -> GuideResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GuideError::ConfigError(format!("Failed to parse TOML: {}", e)))?;

        let mut config = GuideConfig::default();

        if let Some(line) = toml_value.get("guide_line") {
            Self::parse_length_limits(line, &mut config.length_limits)?;
            Self::parse_guide_line(line, &config.length_limits, &mut config.guide_line)?;
        }

        if let Some(map) = toml_value.get("map") {
            Self::parse_map(map, &mut config.map)?;
        }

        if let Some(location) = toml_value.get("location") {
            Self::parse_poll_policy(location, &mut config.poll)?;
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load a configuration from a TOML file
    pub fn from_file(path: &str) -> GuideResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    fn parse_guide_line(table: &toml::Value, limits: &LengthLimits, target: &mut GuideLineState) -> GuideResult<()> {
        if let Some(heading) = get_number(table, "guide_line", "heading")? {
            target.heading = normalize_heading(heading)?;
        }

        if let Some(length) = get_number(table, "guide_line", "length")? {
            if !length.is_finite() || length <= 0.0 {
                return Err(GuideError::InvalidLength(length));
            }
            target.length = limits.clamp(length);
        } else {
            target.length = limits.clamp(target.length);
        }

        if let Some(color) = table.get("color") {
            let name = color.as_str()
                .ok_or_else(|| GuideError::ConfigError("guide_line.color must be a string".to_string()))?;
            target.color = LineColor::from_name(name)?;
        }

        if let Some(follow) = table.get("follow_location") {
            target.follow_mode = follow.as_bool()
                .ok_or_else(|| GuideError::ConfigError("guide_line.follow_location must be a boolean".to_string()))?;
        }

        if let Some(width) = get_number(table, "guide_line", "stroke_width")? {
            if !width.is_finite() || width <= 0.0 {
                return Err(GuideError::ConfigError(format!("guide_line.stroke_width must be positive, got {}", width)));
            }
            target.stroke_width = width as f32;
        }

        Ok(())
    }

    fn parse_length_limits(line: &toml::Value, target: &mut LengthLimits) -> GuideResult<()> {
        let Some(table) = line.get("length_limits") else {
            return Ok(());
        };

        let min = get_number(table, "guide_line.length_limits", "min")?.unwrap_or(target.min());
        let max = get_number(table, "guide_line.length_limits", "max")?.unwrap_or(target.max());
        *target = LengthLimits::new(min, max)?;

        Ok(())
    }

    fn parse_map(table: &toml::Value, target: &mut MapSettings) -> GuideResult<()> {
        if let Some(zoom) = get_number(table, "map", "zoom")? {
            if !zoom.is_finite() || zoom < 0.0 {
                return Err(GuideError::ConfigError(format!("map.zoom must be a finite non-negative number, got {}", zoom)));
            }
            target.zoom = zoom;
        }

        let latitude = get_number(table, "map", "initial_latitude")?;
        let longitude = get_number(table, "map", "initial_longitude")?;
        let center = GeoPoint::new(
            latitude.unwrap_or(target.initial_center.latitude),
            longitude.unwrap_or(target.initial_center.longitude),
        );
        if !center.is_valid() {
            return Err(GuideError::InvalidCoordinate(format!("map initial center {} is out of range", center)));
        }
        target.initial_center = center;

        Ok(())
    }

    fn parse_poll_policy(table: &toml::Value, target: &mut FixPollPolicy) -> GuideResult<()> {
        if let Some(interval) = table.get("poll_interval_ms") {
            let millis = interval.as_integer()
                .filter(|ms| *ms > 0)
                .ok_or_else(|| GuideError::ConfigError("location.poll_interval_ms must be a positive integer".to_string()))?;
            target.interval = Duration::from_millis(millis as u64);
        }

        if let Some(attempts) = table.get("max_poll_attempts") {
            let attempts = attempts.as_integer()
                .filter(|n| *n > 0 && *n <= u32::MAX as i64)
                .ok_or_else(|| GuideError::ConfigError("location.max_poll_attempts must be a positive integer".to_string()))?;
            target.max_attempts = attempts as u32;
        }

        Ok(())
    }
}

/// Read a float or integer value from a table
fn get_number(table: &toml::Value, section: &str, key: &str) -> GuideResult<Option<f64>> {
    match table.get(key) {
        None => Ok(None),
        Some(toml::Value::Float(v)) => Ok(Some(*v)),
        Some(toml::Value::Integer(v)) => Ok(Some(*v as f64)),
        Some(other) => Err(GuideError::ConfigError(format!(
            "{}.{} must be a number, got {}", section, key, other.type_str()
        ))),
    }
}
