//! Stack statistics

/// Counters describing the lifetime activity of a stack instance
///
/// Counters are plain integers rather than atomics: the stack is a
/// single-threaded structure and all mutation goes through `&mut self`.
/// Recording is gated on [`StackConfig::track_stats`].
///
/// [`StackConfig::track_stats`]: crate::stack::StackConfig
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StackStats {
    /// Number of successful push operations
    pub total_pushes: usize,

    /// Number of successful pop operations
    pub total_pops: usize,

    /// Number of times the backing buffer was reallocated to a larger capacity
    pub grow_events: usize,

    /// Highest element count observed
    pub peak_len: usize,
}

impl StackStats {
    pub(crate) fn record_push(&mut self, len_after: usize) {
        self.total_pushes += 1;
        self.peak_len = self.peak_len.max(len_after);
    }

    pub(crate) fn record_pop(&mut self) {
        self.total_pops += 1;
    }

    pub(crate) fn record_grow(&mut self) {
        self.grow_events += 1;
    }
}
