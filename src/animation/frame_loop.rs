use serde::{Deserialize, Serialize};

/// Handle for one requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FrameRequest(pub u64);

/// Cooperative request/fire/cancel scheduling for a per-refresh callback.
///
/// At most one request is pending. A fired request must be re-requested by the caller to keep
/// the loop going, which is how the loop stops when a step decides not to continue.
#[derive(Clone, Debug, Default)]
pub struct FrameLoop {
    pending: Option<FrameRequest>,
    next_id: u64,
}

impl FrameLoop {
    /// Idle loop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request the next frame. Returns the already pending request if there is one.
    pub fn request(&mut self) -> FrameRequest {
        if let Some(req) = self.pending {
            return req;
        }
        self.next_id += 1;
        let req = FrameRequest(self.next_id);
        self.pending = Some(req);
        req
    }

    /// Cancel the pending request, returning it.
    pub fn cancel(&mut self) -> Option<FrameRequest> {
        let req = self.pending.take();
        if let Some(req) = req {
            tracing::trace!(request = req.0, "frame request cancelled");
        }
        req
    }

    /// Consume the pending request so its callback can run.
    pub fn fire(&mut self) -> Option<FrameRequest> {
        self.pending.take()
    }

    /// Return `true` while a request is pending.
    pub fn is_running(&self) -> bool {
        self.pending.is_some()
    }

    /// The pending request, if any.
    pub fn pending(&self) -> Option<FrameRequest> {
        self.pending
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/frame_loop.rs"]
mod tests;
