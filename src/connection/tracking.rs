//! Which extensions have been requested and answered on a connection.

use std::collections::HashSet;

/// Request/response bookkeeping the dispatcher keeps per connection.
///
/// A client records the requests it sent so that it can reject unsolicited
/// responses. A server records the requests it received so that it only
/// answers extensions the client asked for.
#[derive(Debug, Clone, Default)]
pub struct ExtensionTracker {
    requests_sent: HashSet<u16>,
    requests_received: HashSet<u16>,
    responses_received: HashSet<u16>,
}

impl ExtensionTracker {
    /// True if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.requests_sent.is_empty()
            && self.requests_received.is_empty()
            && self.responses_received.is_empty()
    }

    /// We sent a request for `id`.
    pub fn request_sent(&self, id: u16) -> bool {
        self.requests_sent.contains(&id)
    }

    /// The peer sent a request for `id`.
    pub fn request_received(&self, id: u16) -> bool {
        self.requests_received.contains(&id)
    }

    /// The peer answered our request for `id`.
    pub fn response_received(&self, id: u16) -> bool {
        self.responses_received.contains(&id)
    }

    pub(crate) fn mark_request_sent(&mut self, id: u16) {
        self.requests_sent.insert(id);
    }

    pub(crate) fn mark_request_received(&mut self, id: u16) {
        self.requests_received.insert(id);
    }

    pub(crate) fn mark_response_received(&mut self, id: u16) {
        self.responses_received.insert(id);
    }
}
