//! Type-safe stack for elements of a single compile-time type
//!
//! # Safety
//!
//! This module manages initialization manually on top of uninitialized slots:
//! - Storage is `Box<[MaybeUninit<T>]>`; slots `0..len` are initialized
//! - Pop drops the top element in place before surrendering its slot
//! - Growth moves initialized slots bitwise; the old buffer is then released
//!   without dropping its (now moved-out) contents, which `MaybeUninit`
//!   guarantees
//! - Destroy and Drop both drop the initialized prefix exactly once

use core::mem::MaybeUninit;
use core::ptr;

use tracing::{debug, trace};

use super::{StackConfig, StackStats};
use crate::error::{StackError, StackResult};

/// LIFO stack of elements of a single type `T`
///
/// The compile-time counterpart of [`RawStack`](crate::RawStack): the element
/// width is `size_of::<T>()` and the type system replaces the byte-block
/// surface. Storage grows transparently by capacity doubling.
///
/// # Example
/// ```
/// use bytestack::Stack;
///
/// let mut stack: Stack<u64> = Stack::new()?;
/// stack.push(7)?;
/// stack.push(11)?;
/// assert_eq!(*stack.peek_top()?, 11);
/// stack.pop()?;
/// assert_eq!(stack.len()?, 1);
/// # Ok::<(), bytestack::StackError>(())
/// ```
#[derive(Debug)]
pub struct Stack<T> {
    /// Slot storage; `None` once destroyed. Slots `0..len` are initialized.
    slots: Option<Box<[MaybeUninit<T>]>>,

    /// Number of initialized slots
    len: usize,

    /// Configuration
    config: StackConfig,

    /// Statistics (recorded only if `config.track_stats`)
    stats: StackStats,
}

impl<T> Stack<T> {
    /// Creates a new empty stack
    ///
    /// # Errors
    /// Returns [`StackError::InvalidArgument`] for zero-sized `T` (mirroring
    /// the byte-block rendition's zero element size) and
    /// [`StackError::OutOfMemory`] if the initial allocation fails.
    pub fn new() -> StackResult<Self> {
        Self::with_config(StackConfig::default())
    }

    /// Creates a new stack with a custom configuration
    pub fn with_config(config: StackConfig) -> StackResult<Self> {
        if size_of::<T>() == 0 {
            return Err(StackError::invalid_argument(
                "zero-sized element types are not supported",
            ));
        }

        let capacity = config.effective_initial_capacity();
        let slots = alloc_slots::<T>(capacity)?;

        trace!(
            element_size = size_of::<T>(),
            capacity,
            "created typed stack"
        );

        Ok(Self {
            slots: Some(slots),
            len: 0,
            config,
            stats: StackStats::default(),
        })
    }

    /// Returns the element width in bytes
    #[must_use]
    pub const fn element_size(&self) -> usize {
        size_of::<T>()
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
        let slots = self.require_init()?;
        Ok(slots.len())
    }

    /// Returns a snapshot of the recorded statistics
    #[must_use]
    pub fn stats(&self) -> StackStats {
        self.stats
    }

    /// Moves `value` onto the top of the stack
    ///
    /// A full stack grows transparently first.
    ///
    /// # Errors
    /// [`StackError::NotInitialized`] after destroy;
    /// [`StackError::OutOfMemory`] if growth allocation fails, in which case
    /// the stack is unchanged and `value` is dropped.
    pub fn push(&mut self, value: T) -> StackResult<()> {
        self.require_init()?;
        if self.len == self.slot_count() {
            self.grow()?;
        }

        match self.slots.as_deref_mut() {
            Some(slots) => {
                slots[self.len].write(value);
            }
            None => return Err(StackError::NotInitialized),
        }
        self.len += 1;

        if self.config.track_stats {
            self.stats.record_push(self.len);
        }
        Ok(())
    }

    /// Discards the top element, dropping it in place
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
        if let Some(slots) = self.slots.as_deref_mut() {
            // SAFETY: Dropping the former top element.
            // - Slot `len` (after the decrement) was initialized by push
            // - The count no longer covers it, so it cannot be dropped again
            unsafe { ptr::drop_in_place(slots[self.len].as_mut_ptr()) };
        }

        if self.config.track_stats {
            self.stats.record_pop();
        }
        Ok(())
    }

    /// Returns a read-only reference to the top element
    ///
    /// The borrow is a view into the live buffer; any subsequent mutating
    /// call invalidates it, which the borrow checker enforces.
    ///
    /// # Errors
    /// [`StackError::Underflow`] on an empty stack,
    /// [`StackError::NotInitialized`] after destroy.
    pub fn peek_top(&self) -> StackResult<&T> {
        let slots = self.require_init()?;
        if self.len == 0 {
            return Err(StackError::Underflow);
        }
        // SAFETY: Reading the top element.
        // - Slots `0..len` are initialized (module invariant)
        // - `len > 0` checked above, so `len - 1` is in the initialized prefix
        // - Shared borrow of self prevents concurrent mutation
        Ok(unsafe { slots[self.len - 1].assume_init_ref() })
    }

    /// Drops all elements, releases storage, and marks the instance
    /// uninitialized
    ///
    /// Idempotent in the fail-clean sense: a second call reports
    /// [`StackError::NotInitialized`] instead of double-freeing. Dropping a
    /// live stack releases everything the same way without the explicit call.
    pub fn destroy(&mut self) -> StackResult<()> {
        let Some(mut slots) = self.slots.take() else {
            return Err(StackError::NotInitialized);
        };
        // SAFETY: Dropping the initialized prefix exactly once.
        // - Slots `0..len` are initialized (module invariant)
        // - The buffer was just detached, so no other path drops them
        unsafe { drop_prefix(&mut slots, self.len) };
        self.len = 0;
        trace!(element_size = size_of::<T>(), "destroyed typed stack");
        Ok(())
    }

    fn require_init(&self) -> StackResult<&[MaybeUninit<T>]> {
        self.slots.as_deref().ok_or(StackError::NotInitialized)
    }

    fn slot_count(&self) -> usize {
        self.slots.as_deref().map_or(0, <[MaybeUninit<T>]>::len)
    }

    /// Doubles capacity, moving the initialized prefix into the new buffer
    fn grow(&mut self) -> StackResult<()> {
        let old_capacity = self.slot_count();
        let new_capacity = old_capacity.saturating_mul(2).max(1);
        let mut new_slots = alloc_slots::<T>(new_capacity)?;

        if let Some(old_slots) = self.slots.as_deref() {
            // SAFETY: Moving initialized slots into the new buffer.
            // - Source and destination are distinct allocations
            // - `len <= old_capacity < new_capacity`, both ranges in bounds
            // - The old buffer is released below without dropping contents
            //   (MaybeUninit never drops), so each element is owned once
            unsafe {
                ptr::copy_nonoverlapping(old_slots.as_ptr(), new_slots.as_mut_ptr(), self.len);
            }
        }
        self.slots = Some(new_slots);

        debug!(
            element_size = size_of::<T>(),
            old_capacity, new_capacity, "typed stack grew"
        );
        if self.config.track_stats {
            self.stats.record_grow();
        }
        Ok(())
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        if let Some(mut slots) = self.slots.take() {
            // SAFETY: Same contract as destroy; the buffer was just detached
            // and slots `0..len` are initialized.
            unsafe { drop_prefix(&mut slots, self.len) };
        }
    }
}

/// Drops the first `len` slots of `slots` in place
///
/// # Safety
/// - Slots `0..len` must be initialized
/// - No slot in that range may be dropped again afterwards
unsafe fn drop_prefix<T>(slots: &mut [MaybeUninit<T>], len: usize) {
    for slot in &mut slots[..len] {
        // SAFETY: Slot is within the initialized prefix (caller contract)
        // and is dropped exactly once.
        unsafe { ptr::drop_in_place(slot.as_mut_ptr()) };
    }
}

/// Allocates uninitialized slot storage, reporting failure instead of aborting
fn alloc_slots<T>(capacity: usize) -> StackResult<Box<[MaybeUninit<T>]>> {
    let requested = capacity.saturating_mul(size_of::<T>());
    let mut storage: Vec<MaybeUninit<T>> = Vec::new();
    storage
        .try_reserve_exact(capacity)
        .map_err(|_| StackError::out_of_memory(requested))?;
    storage.resize_with(capacity, MaybeUninit::uninit);
    Ok(storage.into_boxed_slice())
}
