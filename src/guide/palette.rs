//! Named guide line colors
//!
//! The selectable colors are defined in `line_colors.toml` and parsed once
//! on first use.

use lazy_static::lazy_static;
use log::warn;

use crate::guide::errors::{GuideError, GuideResult};
use crate::guide::state::LineColor;

lazy_static! {
    // Parse the embedded palette at startup
    static ref LINE_COLORS: Palette = {
        let content = include_str!("../../line_colors.toml");
        Palette::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse line color palette: {}", e);
            Palette::fallback()
        })
    };
}

/// Ordered list of named colors
#[derive(Debug, Clone)]
pub struct Palette {
    entries: Vec<(String, LineColor)>,
}

impl Palette {
    /// Parse a palette from a TOML string with `[[color]]` entries
    pub fn from_str(content: &str) -> GuideResult<Self> {
        let toml_value: toml::Value = content.parse()
            .map_err(|e| GuideError::ConfigError(format!("Failed to parse palette TOML: {}", e)))?;

        let colors = toml_value.get("color")
            .and_then(|v| v.as_array())
            .ok_or_else(|| GuideError::ConfigError("Palette has no [[color]] entries".to_string()))?;

        let mut entries = Vec::with_capacity(colors.len());
        for entry in colors {
            let name = entry.get("name").and_then(|v| v.as_str())
                .ok_or_else(|| GuideError::ConfigError("Palette entry without name".to_string()))?;
            let hex = entry.get("hex").and_then(|v| v.as_str())
                .ok_or_else(|| GuideError::ConfigError(format!("Palette entry '{}' without hex", name)))?;
            entries.push((name.to_lowercase(), LineColor::from_hex(hex)?));
        }

        if entries.is_empty() {
            return Err(GuideError::ConfigError("Palette is empty".to_string()));
        }

        Ok(Palette { entries })
    }

    /// Palette used when the embedded definitions cannot be read
    fn fallback() -> Self {
        Palette {
            entries: vec![("teal".to_string(), LineColor::new(0x00, 0xBC, 0xD4))],
        }
    }

    /// Look up a color by name, ignoring case and treating '-' and ' ' as '_'
    pub fn get(&self, name: &str) -> Option<LineColor> {
        let key = name.trim().to_lowercase().replace(['-', ' '], "_");
        self.entries.iter()
            .find(|(entry_name, _)| *entry_name == key)
            .map(|(_, color)| *color)
    }

    /// Reverse lookup of a color's name
    pub fn name_of(&self, color: LineColor) -> Option<&str> {
        self.entries.iter()
            .find(|(_, entry_color)| *entry_color == color)
            .map(|(name, _)| name.as_str())
    }

    /// Color names in menu order
    pub fn names(&self) -> Vec<&str> {
        self.entries.iter().map(|(name, _)| name.as_str()).collect()
    }

    /// The first color of the palette
    pub fn default_color(&self) -> LineColor {
        self.entries[0].1
    }
}

/// The palette shipped with the crate
pub fn line_colors() -> &'static Palette {
    &LINE_COLORS
}
