//! In-process stand-ins for the platform services
//!
//! These drive the CLI's simulated session and the tests. Each keeps its
//! state behind a shared handle so callers can keep inspecting or steering
//! it after ownership moved into a screen.

mod location;
mod permissions;
mod renderer;

pub use self::location::ScriptedLocationProvider;
pub use self::permissions::StaticPermissions;
pub use self::renderer::{RecordingRenderer, RendererLog};
