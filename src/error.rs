//! Error types for stack operations

/// Result type for stack operations
pub type StackResult<T> = Result<T, StackError>;

/// Stack operation errors
///
/// Every failing operation surfaces one of these kinds synchronously to its
/// caller. No kind is retried internally; the stack's visible state is always
/// exactly what it was before the failing call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StackError {
    /// Invalid argument at creation or push
    #[error("invalid argument: {reason}")]
    InvalidArgument {
        /// What was wrong with the argument
        reason: String,
    },

    /// Pop or peek attempted on an empty stack
    #[error("stack underflow: pop or peek on empty stack")]
    Underflow,

    /// Allocation failure during creation or growth
    #[error("out of memory: failed to allocate {requested} bytes")]
    OutOfMemory {
        /// Number of bytes the failed allocation asked for
        requested: usize,
    },

    /// Operation attempted on a destroyed instance
    #[error("stack not initialized: instance was destroyed")]
    NotInitialized,
}

impl StackError {
    /// Creates an invalid argument error
    pub fn invalid_argument(reason: impl Into<String>) -> Self {
        Self::InvalidArgument { reason: reason.into() }
    }

    /// Creates an out of memory error for a failed allocation
    pub fn out_of_memory(requested: usize) -> Self {
        Self::OutOfMemory { requested }
    }

    /// Checks if this is an invalid argument error
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Checks if this is an underflow error
    pub fn is_underflow(&self) -> bool {
        matches!(self, Self::Underflow)
    }

    /// Checks if this is an out of memory error
    pub fn is_out_of_memory(&self) -> bool {
        matches!(self, Self::OutOfMemory { .. })
    }

    /// Checks if this is a not initialized error
    pub fn is_not_initialized(&self) -> bool {
        matches!(self, Self::NotInitialized)
    }
}
