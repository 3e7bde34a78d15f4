//! Interfaces to the platform services the guide line depends on
//!
//! The map view, the live location source and the permission prompt live
//! outside this crate. The controller and the screen only talk to them
//! through these traits.

use crate::coordinate::GeoPoint;
use crate::guide::state::GuideLineSegment;

/// Overlays the screen places on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverlayKind {
    /// Live position marker
    MyLocation,
    /// Compass rose
    Compass,
    /// The heading guide polyline
    GuideLine,
}

/// Source of the device's live position
pub trait LocationProvider {
    /// Current best-known position, if any
    fn current_fix(&self) -> Option<GeoPoint>;

    /// Start receiving location updates
    fn enable(&mut self);

    /// Stop receiving location updates
    fn disable(&mut self);

    /// Enable or disable automatic re-centering on the live position
    fn set_follow(&mut self, follow: bool);
}

/// The map view the guide line is drawn on
pub trait MapRenderer {
    /// Add an overlay to the map
    fn attach_overlay(&mut self, overlay: OverlayKind);

    /// Remove an overlay from the map
    fn detach_overlay(&mut self, overlay: OverlayKind);

    /// Current visual center of the viewport
    fn map_center(&self) -> GeoPoint;

    /// Move the viewport without animation
    fn set_center(&mut self, center: GeoPoint);

    /// Set the zoom level
    fn set_zoom(&mut self, zoom: f64);

    /// Animate the viewport to a point
    fn animate_to(&mut self, target: GeoPoint);

    /// Replace the guide polyline's points and stroke
    fn set_guide_line(&mut self, segment: &GuideLineSegment);

    /// Turn the compass overlay on or off
    fn set_compass_enabled(&mut self, enabled: bool);

    /// Request a redraw
    fn invalidate(&mut self);

    /// Pause the view when the screen goes away
    fn pause(&mut self);
}

/// Location permission gate
#[allow(async_fn_in_trait)]
pub trait PermissionService {
    /// Synchronous query of the current permission state
    fn check(&self) -> bool;

    /// Ask the user for permission, resolves to whether it was granted
    async fn request(&mut self) -> bool;
}
