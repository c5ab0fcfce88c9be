//! Conversion tracking
//!
//! Tags every conversion request with a sequence number so that responses
//! for superseded or abandoned requests can be recognised and dropped.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionTracker {
    /// Next sequence number to hand out (monotonic, starts at 1)
    next_seq: u64,

    /// Sequence number of the request whose response is still wanted
    pending: Option<u64>,
}

impl ConversionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Issue a new request id; it replaces any earlier pending one
    pub fn begin(&mut self) -> u64 {
        self.next_seq += 1;
        self.pending = Some(self.next_seq);
        self.next_seq
    }

    /// Stop waiting for the pending request, if any
    pub fn abandon(&mut self) -> Option<u64> {
        self.pending.take()
    }

    /// Accept a response: true (and clears pending) only for the latest request
    pub fn complete(&mut self, seq: u64) -> bool {
        if self.pending == Some(seq) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    pub fn pending(&self) -> Option<u64> {
        self.pending
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}
