pub mod coordinate;
pub mod guide;
pub mod config;
pub mod sim;
pub mod utils;
pub mod commands;

pub use coordinate::{GeoPoint, GeodesicProjector};
pub use config::GuideConfig;
pub use guide::{
    FixStatus, GuideError, GuideLineController, GuideLineSegment, GuideLineState, GuideResult,
    LineColor, MapScreen,
};
