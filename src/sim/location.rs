//! Scripted location source

use std::cell::RefCell;
use std::rc::Rc;

use log::trace;

use crate::coordinate::GeoPoint;
use crate::guide::collaborators::LocationProvider;

#[derive(Debug)]
struct ScriptedLocation {
    position: Option<GeoPoint>,
    reveal_after: u32,
    queries: u32,
    enabled: bool,
    following: bool,
}

/// Location provider that only reports its position after a number of queries
///
/// Models a receiver that needs some time to acquire a fix. Clones share
/// the same state.
#[derive(Debug, Clone)]
pub struct ScriptedLocationProvider {
    inner: Rc<RefCell<ScriptedLocation>>,
}

impl ScriptedLocationProvider {
    /// Create a provider
    ///
    /// # Arguments
    /// * `position` - Position reported once a fix is available, `None` for never
    /// * `reveal_after` - Number of queries answered with no fix first
    pub fn new(position: Option<GeoPoint>, reveal_after: u32) -> Self {
        ScriptedLocationProvider {
            inner: Rc::new(RefCell::new(ScriptedLocation {
                position,
                reveal_after,
                queries: 0,
                enabled: false,
                following: false,
            })),
        }
    }

    /// Provider that already has a fix
    pub fn fixed(position: GeoPoint) -> Self {
        Self::new(Some(position), 0)
    }

    /// Replace the reported position
    pub fn move_to(&self, position: Option<GeoPoint>) {
        self.inner.borrow_mut().position = position;
    }

    /// Number of `current_fix` calls so far
    pub fn queries(&self) -> u32 {
        self.inner.borrow().queries
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.borrow().enabled
    }

    pub fn is_following(&self) -> bool {
        self.inner.borrow().following
    }
}

impl LocationProvider for ScriptedLocationProvider {
    fn current_fix(&self) -> Option<GeoPoint> {
        let mut inner = self.inner.borrow_mut();
        inner.queries += 1;

        if !inner.enabled || inner.queries <= inner.reveal_after {
            trace!("Location query {}: no fix", inner.queries);
            return None;
        }
        inner.position
    }

    fn enable(&mut self) {
        self.inner.borrow_mut().enabled = true;
    }

    fn disable(&mut self) {
        self.inner.borrow_mut().enabled = false;
    }

    fn set_follow(&mut self, follow: bool) {
        self.inner.borrow_mut().following = follow;
    }
}
