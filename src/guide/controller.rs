//! Guide line controller
//!
//! Owns the user settings and keeps the published guide line consistent with
//! them. Every setter that affects the line recomputes the segment from the
//! latest known position and pushes it to the renderer straight away.

use log::{debug, info, warn};

use crate::coordinate::{GeoPoint, GeodesicProjector};
use crate::guide::collaborators::{LocationProvider, MapRenderer};
use crate::guide::errors::{GuideError, GuideResult};
use crate::guide::state::{
    normalize_heading, FixStatus, GuideLineSegment, GuideLineState, LengthLimits, LineColor,
    DEFAULT_HEADING, DEFAULT_LENGTH,
};

/// Reactive owner of the guide line settings
pub struct GuideLineController<L, R> {
    /// Current user settings
    state: GuideLineState,
    /// Accepted line length range
    limits: LengthLimits,
    /// Destination point projection
    projector: GeodesicProjector,
    /// Live location source
    location: L,
    /// Map the line is drawn on
    renderer: R,
    /// Whether location permission is granted
    has_permission: bool,
    /// First-fix progress
    fix_status: FixStatus,
    /// Last published segment
    segment: Option<GuideLineSegment>,
    /// Number of segments published so far
    publish_count: u64,
}

impl<L: LocationProvider, R: MapRenderer> GuideLineController<L, R> {
    /// Create a controller without publishing anything
    ///
    /// # Arguments
    /// * `state` - Initial settings
    /// * `limits` - Range the line length is clamped into
    /// * `location` - Live location source
    /// * `renderer` - Map the line is drawn on
    /// * `has_permission` - Permission state at creation time
    pub fn new(state: GuideLineState, limits: LengthLimits, location: L, renderer: R, has_permission: bool) -> Self {
        let heading = normalize_heading(state.heading).unwrap_or_else(|e| {
            warn!("{}, using {} deg", e, DEFAULT_HEADING);
            DEFAULT_HEADING
        });
        let length = if state.length.is_finite() && state.length > 0.0 {
            limits.clamp(state.length)
        } else {
            warn!("Invalid initial line length {} m, using {} m", state.length, DEFAULT_LENGTH);
            limits.clamp(DEFAULT_LENGTH)
        };
        let state = GuideLineState { heading, length, ..state };

        GuideLineController {
            state,
            limits,
            projector: GeodesicProjector::new(),
            location,
            renderer,
            has_permission,
            fix_status: FixStatus::AwaitingFix,
            segment: None,
            publish_count: 0,
        }
    }

    pub fn state(&self) -> &GuideLineState {
        &self.state
    }

    pub fn limits(&self) -> LengthLimits {
        self.limits
    }

    pub fn has_permission(&self) -> bool {
        self.has_permission
    }

    pub fn fix_status(&self) -> FixStatus {
        self.fix_status
    }

    /// The segment most recently handed to the renderer
    pub fn segment(&self) -> Option<&GuideLineSegment> {
        self.segment.as_ref()
    }

    pub fn publish_count(&self) -> u64 {
        self.publish_count
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    pub fn location_mut(&mut self) -> &mut L {
        &mut self.location
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    /// Position the line starts from: the live fix, else the map center
    pub fn current_position(&self) -> GeoPoint {
        self.location.current_fix()
            .unwrap_or_else(|| self.renderer.map_center())
    }

    /// Build the segment for the current settings without publishing it
    pub fn compute_segment(&self) -> GuideLineSegment {
        let start = self.current_position();
        let end = self.projector.destination_point(&start, self.state.heading, self.state.length);

        GuideLineSegment {
            start,
            end,
            color: self.state.color,
            stroke_width: self.state.stroke_width,
        }
    }

    /// Recompute the segment and publish it to the renderer
    pub fn recompute(&mut self) -> GuideLineSegment {
        let segment = self.compute_segment();
        debug!("Guide line {} -> {} ({:.1} deg, {:.0} m, {})",
               segment.start, segment.end, self.state.heading, self.state.length, segment.color);

        self.renderer.set_guide_line(&segment);
        self.renderer.invalidate();
        self.segment = Some(segment);
        self.publish_count += 1;
        segment
    }

    /// Change the heading
    ///
    /// Finite values are wrapped into [0, 360). Non-finite values are
    /// rejected and leave the line untouched.
    pub fn set_heading(&mut self, heading: f64) -> GuideResult<GuideLineSegment> {
        self.state.heading = normalize_heading(heading)?;
        Ok(self.recompute())
    }

    /// Change the line length
    ///
    /// Non-finite and non-positive lengths are rejected and leave the line
    /// untouched. Accepted lengths are clamped into the configured limits.
    pub fn set_length(&mut self, length: f64) -> GuideResult<GuideLineSegment> {
        if !length.is_finite() || length <= 0.0 {
            return Err(GuideError::InvalidLength(length));
        }

        let clamped = self.limits.clamp(length);
        if clamped != length {
            debug!("Line length {} m clamped to {} m", length, clamped);
        }

        self.state.length = clamped;
        Ok(self.recompute())
    }

    /// Change the stroke color
    pub fn set_color(&mut self, color: LineColor) -> GuideLineSegment {
        self.state.color = color;
        self.recompute()
    }

    /// Toggle automatic re-centering; does not touch the line
    pub fn set_follow_mode(&mut self, follow: bool) {
        self.state.follow_mode = follow;
        self.location.set_follow(follow);
        debug!("Follow mode {}", if follow { "enabled" } else { "disabled" });
    }

    /// Record a permission result and republish
    pub fn on_permission_changed(&mut self, granted: bool) -> GuideLineSegment {
        self.has_permission = granted;

        if granted {
            if self.fix_status == FixStatus::PermissionDenied {
                self.fix_status = FixStatus::AwaitingFix;
            }
            info!("Location permission granted");
        } else {
            self.fix_status = FixStatus::PermissionDenied;
            warn!("Location permission denied, guide line stays on the map center");
        }

        self.recompute()
    }

    /// Mark the start of a new wait for the first fix
    pub fn begin_fix_wait(&mut self) {
        if self.fix_status != FixStatus::Tracking {
            self.fix_status = FixStatus::AwaitingFix;
        }
    }

    /// First live position arrived: center the view on it and republish
    pub fn on_first_fix(&mut self, fix: GeoPoint) -> GuideLineSegment {
        info!("First location fix at {}", fix);
        self.fix_status = FixStatus::Tracking;
        self.renderer.animate_to(fix);
        self.recompute()
    }

    /// A later location update; republishes without moving the view
    pub fn on_location_update(&mut self) -> GuideLineSegment {
        if self.fix_status != FixStatus::Tracking && self.location.current_fix().is_some() && self.has_permission {
            self.fix_status = FixStatus::Tracking;
        }
        self.recompute()
    }

    /// The first-fix polling budget ran out
    pub fn on_fix_timeout(&mut self, attempts: u32) {
        if self.fix_status == FixStatus::AwaitingFix {
            self.fix_status = FixStatus::TimedOut;
            warn!("No location fix after {} attempts", attempts);
        }
    }

    /// Turn on the compass overlay once location access is available
    pub fn enable_compass(&mut self) {
        self.renderer.set_compass_enabled(true);
    }

    /// User requested refresh; ignored without location permission
    pub fn refresh(&mut self) -> Option<GuideLineSegment> {
        if self.has_permission {
            Some(self.recompute())
        } else {
            debug!("Refresh ignored without location permission");
            None
        }
    }
}
