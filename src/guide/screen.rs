//! Map screen lifetime
//!
//! A `MapScreen` is the scope the guide line lives in. Creating it attaches
//! the overlays and publishes the first line; dropping it aborts any pending
//! fix poll and releases everything it attached.

use std::cell::{Ref, RefCell};
use std::rc::Rc;

use log::{debug, info, warn};

use crate::config::GuideConfig;
use crate::guide::collaborators::{LocationProvider, MapRenderer, OverlayKind, PermissionService};
use crate::guide::controller::GuideLineController;
use crate::guide::errors::GuideResult;
use crate::guide::fix_poller::{FixPollPolicy, FixPollTask};
use crate::guide::state::{FixStatus, GuideLineSegment, LineColor};

/// Overlays in the order they are attached
const OVERLAYS: [OverlayKind; 3] = [OverlayKind::MyLocation, OverlayKind::Compass, OverlayKind::GuideLine];

/// Owns the controller and the collaborators for one screen session
pub struct MapScreen<L, R, P>
where
    L: LocationProvider + 'static,
    R: MapRenderer + 'static,
    P: PermissionService,
{
    controller: Rc<RefCell<GuideLineController<L, R>>>,
    permissions: P,
    policy: FixPollPolicy,
    poll_task: Option<FixPollTask>,
}

impl<L, R, P> MapScreen<L, R, P>
where
    L: LocationProvider + 'static,
    R: MapRenderer + 'static,
    P: PermissionService,
{
    /// Set up the map, attach overlays and publish the initial line
    ///
    /// The initial line starts at the configured map center until a live
    /// fix is available. When permission is already held the first-fix poll
    /// starts right away.
    ///
    /// # Arguments
    /// * `config` - Initial settings, viewport and polling budget
    /// * `location` - Live location source
    /// * `renderer` - Map view
    /// * `permissions` - Permission gate, queried synchronously here
    ///
    /// # Panics
    /// Panics when permission is already granted and this is called outside
    /// of a `tokio::task::LocalSet`.
    pub fn create(config: &GuideConfig, mut location: L, mut renderer: R, permissions: P) -> Self {
        renderer.set_zoom(config.map.zoom);

        location.enable();
        location.set_follow(config.guide_line.follow_mode);

        for overlay in OVERLAYS {
            renderer.attach_overlay(overlay);
        }
        renderer.set_center(config.map.initial_center);

        let has_permission = permissions.check();
        let mut controller = GuideLineController::new(
            config.guide_line.clone(),
            config.length_limits,
            location,
            renderer,
            has_permission,
        );
        controller.recompute();

        info!("Map screen created (permission {})", if has_permission { "granted" } else { "pending" });

        let mut screen = MapScreen {
            controller: Rc::new(RefCell::new(controller)),
            permissions,
            policy: config.poll,
            poll_task: None,
        };
        if has_permission {
            screen.start_fix_poll();
        }
        screen
    }

    /// Read access to the controller
    pub fn controller(&self) -> Ref<'_, GuideLineController<L, R>> {
        self.controller.borrow()
    }

    /// Ask for location permission and react to the answer
    ///
    /// A grant starts the first-fix poll unless one already ran for the
    /// current grant. A denial aborts any running poll.
    ///
    /// Must be awaited inside a `tokio::task::LocalSet`.
    pub async fn request_permission(&mut self) -> bool {
        let granted = self.permissions.request().await;
        let was_granted = self.controller.borrow().has_permission();

        self.controller.borrow_mut().on_permission_changed(granted);

        if granted {
            if !was_granted || self.poll_task.is_none() {
                self.start_fix_poll();
            }
        } else if let Some(task) = self.poll_task.take() {
            task.cancel();
        }

        granted
    }

    /// Restart the first-fix poll after a timeout
    ///
    /// Returns false when there is no permission or a fix is already known.
    pub fn retry_location_fix(&mut self) -> bool {
        let status = {
            let controller = self.controller.borrow();
            if !controller.has_permission() {
                return false;
            }
            controller.fix_status()
        };

        if status == FixStatus::Tracking {
            return false;
        }

        self.start_fix_poll();
        true
    }

    /// Whether a first-fix poll is still in flight
    pub fn is_polling(&self) -> bool {
        self.poll_task.as_ref().is_some_and(|task| !task.is_finished())
    }

    pub fn fix_status(&self) -> FixStatus {
        self.controller.borrow().fix_status()
    }

    pub fn set_heading(&mut self, heading: f64) -> GuideResult<GuideLineSegment> {
        self.controller.borrow_mut().set_heading(heading)
    }

    pub fn set_length(&mut self, length: f64) -> GuideResult<GuideLineSegment> {
        self.controller.borrow_mut().set_length(length)
    }

    pub fn set_color(&mut self, color: LineColor) -> GuideLineSegment {
        self.controller.borrow_mut().set_color(color)
    }

    pub fn set_follow_mode(&mut self, follow: bool) {
        self.controller.borrow_mut().set_follow_mode(follow);
    }

    /// Republish after the location provider reported a new position
    pub fn on_location_update(&mut self) -> GuideLineSegment {
        self.controller.borrow_mut().on_location_update()
    }

    /// Manual refresh, only honored with location permission
    pub fn refresh(&mut self) -> Option<GuideLineSegment> {
        self.controller.borrow_mut().refresh()
    }

    fn start_fix_poll(&mut self) {
        self.controller.borrow_mut().begin_fix_wait();
        debug!("Polling for first location fix (every {:?}, {} attempts)",
               self.policy.interval, self.policy.max_attempts);
        // Replacing the handle aborts a previous poll
        self.poll_task = Some(FixPollTask::spawn(Rc::clone(&self.controller), self.policy));
    }
}

impl<L, R, P> Drop for MapScreen<L, R, P>
where
    L: LocationProvider + 'static,
    R: MapRenderer + 'static,
    P: PermissionService,
{
    fn drop(&mut self) {
        if let Some(task) = self.poll_task.take() {
            task.cancel();
        }

        let Ok(mut controller) = self.controller.try_borrow_mut() else {
            warn!("Map screen torn down while the controller was borrowed");
            return;
        };

        let location = controller.location_mut();
        location.disable();
        location.set_follow(false);

        let renderer = controller.renderer_mut();
        renderer.set_compass_enabled(false);
        for overlay in OVERLAYS {
            renderer.detach_overlay(overlay);
        }
        renderer.pause();

        info!("Map screen torn down");
    }
}
