//! Map renderer that records what it is asked to draw

use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, trace};

use crate::coordinate::GeoPoint;
use crate::guide::collaborators::{MapRenderer, OverlayKind};
use crate::guide::state::GuideLineSegment;

/// Everything a `RecordingRenderer` was told
#[derive(Debug, Clone, PartialEq)]
pub struct RendererLog {
    /// Attached overlays in attach order
    pub overlays: Vec<OverlayKind>,
    /// Current viewport center
    pub center: GeoPoint,
    /// Current zoom level
    pub zoom: f64,
    /// Targets of `animate_to`, oldest first
    pub animations: Vec<GeoPoint>,
    /// Every published guide line, oldest first
    pub lines: Vec<GuideLineSegment>,
    pub compass_enabled: bool,
    pub invalidations: u32,
    pub paused: bool,
}

impl RendererLog {
    /// The line currently on the map
    pub fn current_line(&self) -> Option<&GuideLineSegment> {
        self.lines.last()
    }
}

/// Headless map renderer; clones share the same log
#[derive(Debug, Clone)]
pub struct RecordingRenderer {
    log: Rc<RefCell<RendererLog>>,
}

impl RecordingRenderer {
    /// Create a renderer whose viewport starts at `center`
    pub fn new(center: GeoPoint) -> Self {
        RecordingRenderer {
            log: Rc::new(RefCell::new(RendererLog {
                overlays: Vec::new(),
                center,
                zoom: 0.0,
                animations: Vec::new(),
                lines: Vec::new(),
                compass_enabled: false,
                invalidations: 0,
                paused: false,
            })),
        }
    }

    /// Copy of the current log
    pub fn snapshot(&self) -> RendererLog {
        self.log.borrow().clone()
    }

    /// Pan the viewport the way a user drag would
    pub fn pan_to(&self, center: GeoPoint) {
        self.log.borrow_mut().center = center;
    }
}

impl MapRenderer for RecordingRenderer {
    fn attach_overlay(&mut self, overlay: OverlayKind) {
        let mut log = self.log.borrow_mut();
        if !log.overlays.contains(&overlay) {
            log.overlays.push(overlay);
        }
    }

    fn detach_overlay(&mut self, overlay: OverlayKind) {
        self.log.borrow_mut().overlays.retain(|o| *o != overlay);
    }

    fn map_center(&self) -> GeoPoint {
        self.log.borrow().center
    }

    fn set_center(&mut self, center: GeoPoint) {
        self.log.borrow_mut().center = center;
    }

    fn set_zoom(&mut self, zoom: f64) {
        self.log.borrow_mut().zoom = zoom;
    }

    fn animate_to(&mut self, target: GeoPoint) {
        debug!("Animating map to {}", target);
        let mut log = self.log.borrow_mut();
        log.center = target;
        log.animations.push(target);
    }

    fn set_guide_line(&mut self, segment: &GuideLineSegment) {
        trace!("Guide line stroke {:#010X}, width {}", segment.color.to_argb(), segment.stroke_width);
        self.log.borrow_mut().lines.push(*segment);
    }

    fn set_compass_enabled(&mut self, enabled: bool) {
        self.log.borrow_mut().compass_enabled = enabled;
    }

    fn invalidate(&mut self) {
        self.log.borrow_mut().invalidations += 1;
    }

    fn pause(&mut self) {
        self.log.borrow_mut().paused = true;
    }
}
