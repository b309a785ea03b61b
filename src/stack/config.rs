//! Stack configuration

/// Configuration for stack instances
#[derive(Debug, Clone)]
pub struct StackConfig {
    /// Number of element slots allocated at creation (clamped to at least 1)
    pub initial_capacity: usize,

    /// Enable statistics tracking
    pub track_stats: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 8,
            track_stats: cfg!(debug_assertions),
        }
    }
}

impl StackConfig {
    /// Production configuration - optimized for performance
    pub fn production() -> Self {
        Self {
            initial_capacity: 8,
            track_stats: false,
        }
    }

    /// Debug configuration - optimized for debugging
    pub fn debug() -> Self {
        Self {
            initial_capacity: 1,
            track_stats: true,
        }
    }

    /// Returns the initial capacity, never less than one slot
    pub(crate) fn effective_initial_capacity(&self) -> usize {
        self.initial_capacity.max(1)
    }
}
