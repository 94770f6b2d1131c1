//! Request-generation tracking for dependent fetches
//!
//! Each region with an asynchronous load (posts, comments) owns a
//! `RequestSeq`. Issuing a fetch bumps the generation; a settle is only
//! applied when its id still matches the latest issued. A slow response for
//! a superseded selection can therefore never overwrite newer state.

/// Opaque id tying one fetch to the generation that issued it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestId(u64);

/// Monotonically increasing generation counter for one region.
#[derive(Debug, Default)]
pub struct RequestSeq {
    latest: u64,
}

impl RequestSeq {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a new generation, superseding any outstanding request.
    pub fn issue(&mut self) -> RequestId {
        self.latest += 1;
        RequestId(self.latest)
    }

    /// Whether a settle with this id may commit state.
    pub fn is_current(&self, id: RequestId) -> bool {
        id.0 == self.latest
    }

    /// Invalidate all outstanding requests without starting a new one.
    pub fn supersede(&mut self) {
        self.latest += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_is_current() {
        let mut seq = RequestSeq::new();
        let id = seq.issue();
        assert!(seq.is_current(id));
    }

    #[test]
    fn test_newer_issue_supersedes() {
        let mut seq = RequestSeq::new();
        let stale = seq.issue();
        let fresh = seq.issue();

        assert!(!seq.is_current(stale));
        assert!(seq.is_current(fresh));
    }

    #[test]
    fn test_supersede_invalidates_without_new_id() {
        let mut seq = RequestSeq::new();
        let id = seq.issue();
        seq.supersede();
        assert!(!seq.is_current(id));
    }
}
