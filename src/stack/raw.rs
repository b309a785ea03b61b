//! Byte-block stack with a runtime element width
//!
//! ## Invariants
//!
//! - `0 <= len <= capacity`, `capacity >= 1` while initialized
//! - Backing buffer holds exactly `capacity * element_size` bytes
//! - Element `i` occupies bytes `[i * element_size, (i + 1) * element_size)`
//! - Destroyed state is `buf == None`; every operation checks it first
//! - Growth allocates the new buffer before touching the old one, so a failed
//!   grow leaves the stack exactly as it was

use tracing::{debug, trace};

use super::{StackConfig, StackStats};
use crate::error::{StackError, StackResult};

/// LIFO stack of opaque fixed-width byte blocks
///
/// The element width is a runtime value fixed at creation. Elements are
/// copied in and out verbatim; the stack never interprets their contents.
/// Storage grows transparently by capacity doubling, so a push only fails
/// when allocation itself fails.
///
/// # Example
/// ```
/// use bytestack::RawStack;
///
/// let mut stack = RawStack::new(2)?;
/// stack.push(&[0xBE, 0xEF])?;
/// assert_eq!(stack.peek_top()?, &[0xBE, 0xEF]);
/// stack.pop()?;
/// assert!(stack.is_empty()?);
/// # Ok::<(), bytestack::StackError>(())
/// ```
#[derive(Debug)]
pub struct RawStack {
    /// Owned backing buffer; `None` once destroyed
    buf: Option<Box<[u8]>>,

    /// Bytes per element, fixed at creation
    element_size: usize,

    /// Number of occupied slots
    len: usize,

    /// Configuration
    config: StackConfig,

    /// Statistics (recorded only if `config.track_stats`)
    stats: StackStats,
}

impl RawStack {
    /// Creates a new stack for elements of `element_size` bytes
    ///
    /// # Errors
    /// Returns [`StackError::InvalidArgument`] if `element_size` is zero and
    /// [`StackError::OutOfMemory`] if the initial allocation fails.
    pub fn new(element_size: usize) -> StackResult<Self> {
        Self::with_config(element_size, StackConfig::default())
    }

    /// Creates a new stack with a custom configuration
    pub fn with_config(element_size: usize, config: StackConfig) -> StackResult<Self> {
        if element_size == 0 {
            return Err(StackError::invalid_argument("element size cannot be zero"));
        }

        let capacity = config.effective_initial_capacity();
        let bytes = capacity
            .checked_mul(element_size)
            .ok_or(StackError::OutOfMemory { requested: usize::MAX })?;
        let buf = alloc_zeroed(bytes)?;

        trace!(element_size, capacity, "created raw stack");

        Ok(Self {
            buf: Some(buf),
            element_size,
            len: 0,
            config,
            stats: StackStats::default(),
        })
    }

    /// Returns the element width in bytes
    #[must_use]
    pub const fn element_size(&self) -> usize {
        self.element_size
    }

    /// Returns the number of currently stored elements
    ///
    /// Cannot fail on a live stack; errors only with
    /// [`StackError::NotInitialized`] after [`destroy`](Self::destroy).
    pub fn len(&self) -> StackResult<usize> {
        self.require_init()?;
        Ok(self.len)
    }

    /// Checks whether the stack holds no elements
    ///
    /// Cannot fail on a live stack; errors only with
    /// [`StackError::NotInitialized`] after [`destroy`](Self::destroy).
    pub fn is_empty(&self) -> StackResult<bool> {
        self.require_init()?;
        Ok(self.len == 0)
    }

    /// Returns the number of allocated element slots
    pub fn capacity(&self) -> StackResult<usize> {
        let buf = self.require_init()?;
        Ok(buf.len() / self.element_size)
    }

    /// Returns a snapshot of the recorded statistics
    #[must_use]
    pub fn stats(&self) -> StackStats {
        self.stats
    }

    /// Copies `element` onto the top of the stack
    ///
    /// `element` must be exactly [`element_size`](Self::element_size) bytes.
    /// A full stack grows transparently before the copy.
    ///
    /// # Errors
    /// - [`StackError::NotInitialized`] after destroy
    /// - [`StackError::InvalidArgument`] on a length mismatch
    /// - [`StackError::OutOfMemory`] if growth allocation fails; the stack is
    ///   left unchanged
    pub fn push(&mut self, element: &[u8]) -> StackResult<()> {
        self.require_init()?;
        if element.len() != self.element_size {
            return Err(StackError::invalid_argument(format!(
                "element is {} bytes, stack stores {}-byte elements",
                element.len(),
                self.element_size
            )));
        }

        if self.len * self.element_size == self.buf_len() {
            self.grow()?;
        }

        let offset = self.len * self.element_size;
        match self.buf.as_deref_mut() {
            Some(buf) => buf[offset..offset + element.len()].copy_from_slice(element),
            None => return Err(StackError::NotInitialized),
        }
        self.len += 1;

        if self.config.track_stats {
            self.stats.record_push(self.len);
        }
        Ok(())
    }

    /// Discards the top element
    ///
    /// The element bytes are not erased, only the count moves; a later push
    /// overwrites them.
    ///
    /// # Errors
    /// [`StackError::Underflow`] on an empty stack,
    /// [`StackError::NotInitialized`] after destroy. Either way the count is
    /// left unchanged.
    pub fn pop(&mut self) -> StackResult<()> {
        self.require_init()?;
        if self.len == 0 {
            return Err(StackError::Underflow);
        }
        self.len -= 1;

        if self.config.track_stats {
            self.stats.record_pop();
        }
        Ok(())
    }

    /// Returns a read-only view of the top element's bytes
    ///
    /// The borrow is a view into the live buffer; any subsequent mutating
    /// call invalidates it, which the borrow checker enforces.
    ///
    /// # Errors
    /// [`StackError::Underflow`] on an empty stack,
    /// [`StackError::NotInitialized`] after destroy.
    pub fn peek_top(&self) -> StackResult<&[u8]> {
        let buf = self.require_init()?;
        if self.len == 0 {
            return Err(StackError::Underflow);
        }
        let offset = (self.len - 1) * self.element_size;
        Ok(&buf[offset..offset + self.element_size])
    }

    /// Releases the backing buffer and marks the instance uninitialized
    ///
    /// Idempotent in the fail-clean sense: a second call reports
    /// [`StackError::NotInitialized`] instead of double-freeing. Dropping a
    /// live stack releases storage the same way without the explicit call.
    pub fn destroy(&mut self) -> StackResult<()> {
        if self.buf.take().is_none() {
            return Err(StackError::NotInitialized);
        }
        self.len = 0;
        trace!(element_size = self.element_size, "destroyed raw stack");
        Ok(())
    }

    fn require_init(&self) -> StackResult<&[u8]> {
        self.buf.as_deref().ok_or(StackError::NotInitialized)
    }

    fn buf_len(&self) -> usize {
        self.buf.as_deref().map_or(0, <[u8]>::len)
    }

    /// Doubles capacity, copying the occupied prefix into the new buffer
    fn grow(&mut self) -> StackResult<()> {
        let old_capacity = self.buf_len() / self.element_size;
        let new_capacity = old_capacity.saturating_mul(2).max(1);
        // A byte-count overflow can never be satisfied by the allocator,
        // so it reports as the allocation failure it would become.
        let bytes = new_capacity
            .checked_mul(self.element_size)
            .ok_or(StackError::OutOfMemory { requested: usize::MAX })?;

        let mut new_buf = alloc_zeroed(bytes)?;
        let used = self.len * self.element_size;
        if let Some(old_buf) = self.buf.as_deref() {
            new_buf[..used].copy_from_slice(&old_buf[..used]);
        }
        self.buf = Some(new_buf);

        debug!(
            element_size = self.element_size,
            old_capacity, new_capacity, "raw stack grew"
        );
        if self.config.track_stats {
            self.stats.record_grow();
        }
        Ok(())
    }
}

/// Allocates a zero-filled byte buffer, reporting failure instead of aborting
fn alloc_zeroed(bytes: usize) -> StackResult<Box<[u8]>> {
    let mut storage: Vec<u8> = Vec::new();
    storage
        .try_reserve_exact(bytes)
        .map_err(|_| StackError::out_of_memory(bytes))?;
    storage.resize(bytes, 0);
    Ok(storage.into_boxed_slice())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_doubles_capacity() {
        let config = StackConfig {
            initial_capacity: 1,
            track_stats: true,
        };
        let mut stack = RawStack::with_config(4, config).expect("create failed");
        assert_eq!(stack.capacity().unwrap(), 1);

        stack.push(&1u32.to_le_bytes()).expect("push failed");
        stack.push(&2u32.to_le_bytes()).expect("push failed");
        assert_eq!(stack.capacity().unwrap(), 2);

        stack.push(&3u32.to_le_bytes()).expect("push failed");
        assert_eq!(stack.capacity().unwrap(), 4);
        assert_eq!(stack.stats().grow_events, 2);
    }

    #[test]
    fn test_stats_recording() {
        let config = StackConfig {
            initial_capacity: 4,
            track_stats: true,
        };
        let mut stack = RawStack::with_config(1, config).expect("create failed");

        stack.push(&[1]).unwrap();
        stack.push(&[2]).unwrap();
        stack.pop().unwrap();
        stack.push(&[3]).unwrap();

        let stats = stack.stats();
        assert_eq!(stats.total_pushes, 3);
        assert_eq!(stats.total_pops, 1);
        assert_eq!(stats.peak_len, 2);
    }

    #[test]
    fn test_failed_grow_leaves_state() {
        // Zero-slot buffer with an element width no allocator can satisfy:
        // the next grow must fail without mutating anything. Constructed
        // directly because any element size this large also fails at create.
        let mut stack = RawStack {
            buf: Some(Box::default()),
            element_size: usize::MAX / 2,
            len: 0,
            config: StackConfig {
                initial_capacity: 1,
                track_stats: true,
            },
            stats: StackStats::default(),
        };

        let err = stack.grow().unwrap_err();
        assert!(err.is_out_of_memory());
        assert_eq!(stack.len().unwrap(), 0);
        assert_eq!(stack.capacity().unwrap(), 0);
        assert_eq!(stack.stats().grow_events, 0);
    }

    #[test]
    fn test_push_length_mismatch() {
        let mut stack = RawStack::new(4).expect("create failed");
        let err = stack.push(&[1, 2]).unwrap_err();
        assert!(err.is_invalid_argument());
        assert_eq!(stack.len().unwrap(), 0);
    }
}
