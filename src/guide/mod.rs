//! Heading guide line
//!
//! This module holds the guide line settings, the controller that keeps the
//! published line in sync with them, the interfaces to the map, location and
//! permission services, and the screen scope that ties them together.

pub mod errors;
pub mod state;
pub mod palette;
pub mod collaborators;
pub mod controller;
pub mod fix_poller;
pub mod screen;

pub use errors::{GuideError, GuideResult};
pub use state::{FixStatus, GuideLineSegment, GuideLineState, LengthLimits, LineColor};
pub use palette::{line_colors, Palette};
pub use collaborators::{LocationProvider, MapRenderer, OverlayKind, PermissionService};
pub use controller::GuideLineController;
pub use fix_poller::{poll_first_fix, FixPollPolicy, FixPollTask};
pub use screen::MapScreen;
