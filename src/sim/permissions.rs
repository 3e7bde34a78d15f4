//! Fixed-answer permission gate

use crate::guide::collaborators::PermissionService;

/// Permission service with a predetermined answer
#[derive(Debug, Clone)]
pub struct StaticPermissions {
    granted: bool,
    grant_on_request: bool,
    requests: u32,
}

impl StaticPermissions {
    /// # Arguments
    /// * `granted` - State reported by `check` before any request
    /// * `grant_on_request` - Answer given to `request`
    pub fn new(granted: bool, grant_on_request: bool) -> Self {
        StaticPermissions { granted, grant_on_request, requests: 0 }
    }

    pub fn requests(&self) -> u32 {
        self.requests
    }
}

impl PermissionService for StaticPermissions {
    fn check(&self) -> bool {
        self.granted
    }

    async fn request(&mut self) -> bool {
        // The platform prompt always answers asynchronously
        tokio::task::yield_now().await;
        self.requests += 1;
        self.granted = self.grant_on_request;
        self.granted
    }
}
