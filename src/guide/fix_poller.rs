//! Bounded polling for the first location fix
//!
//! Location providers report nothing until the receiver has a fix. After
//! permission is granted the screen polls the provider at a fixed interval
//! for a limited number of attempts. The poll runs as a local task so the
//! screen can abort it when it is torn down.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use log::{debug, trace};
use tokio::task::JoinHandle;

use crate::coordinate::GeoPoint;
use crate::guide::collaborators::{LocationProvider, MapRenderer};
use crate::guide::controller::GuideLineController;

/// Default delay between two polls
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(500);
/// Default number of polls before giving up
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// How often and how long to wait for the first fix
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixPollPolicy {
    pub interval: Duration,
    pub max_attempts: u32,
}

impl FixPollPolicy {
    /// Upper bound on the time spent waiting
    pub fn budget(&self) -> Duration {
        self.interval * self.max_attempts
    }
}

impl Default for FixPollPolicy {
    fn default() -> Self {
        FixPollPolicy {
            interval: DEFAULT_POLL_INTERVAL,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Poll `probe` until it yields a fix or the attempts are used up
///
/// The probe receives the 1-based attempt number. Each miss is followed by
/// a sleep of `policy.interval`.
pub async fn poll_first_fix<F>(policy: FixPollPolicy, mut probe: F) -> Option<GeoPoint>
where
    F: FnMut(u32) -> Option<GeoPoint>,
{
    for attempt in 1..=policy.max_attempts {
        if let Some(fix) = probe(attempt) {
            debug!("Location fix on attempt {}/{}", attempt, policy.max_attempts);
            return Some(fix);
        }

        trace!("No location fix on attempt {}/{}", attempt, policy.max_attempts);
        tokio::time::sleep(policy.interval).await;
    }

    None
}

/// Handle to a running first-fix poll
///
/// Dropping the handle aborts the poll.
pub struct FixPollTask {
    handle: JoinHandle<()>,
}

impl FixPollTask {
    /// Spawn the poll on the current `LocalSet`
    ///
    /// Enables the compass, polls the controller's location provider and on
    /// success hands the fix to the controller. When the budget runs out the
    /// controller is told about the timeout.
    ///
    /// # Panics
    /// Panics when called outside of a `tokio::task::LocalSet`.
    pub fn spawn<L, R>(controller: Rc<RefCell<GuideLineController<L, R>>>, policy: FixPollPolicy) -> Self
    where
        L: LocationProvider + 'static,
        R: MapRenderer + 'static,
    {
        let handle = tokio::task::spawn_local(async move {
            controller.borrow_mut().enable_compass();

            let fix = poll_first_fix(policy, |_| controller.borrow().location().current_fix()).await;

            let mut controller = controller.borrow_mut();
            match fix {
                Some(fix) => {
                    controller.on_first_fix(fix);
                }
                None => controller.on_fix_timeout(policy.max_attempts),
            }
        });

        FixPollTask { handle }
    }

    /// Whether the poll has completed or was aborted
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Abort the poll; a no-op once it has finished
    pub fn cancel(&self) {
        if !self.handle.is_finished() {
            debug!("Cancelling first-fix poll");
            self.handle.abort();
        }
    }
}

impl Drop for FixPollTask {
    fn drop(&mut self) {
        self.cancel();
    }
}
