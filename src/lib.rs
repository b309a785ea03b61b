//! LIFO stack storage over fixed-size elements
//!
//! This crate provides a growable last-in-first-out stack in two renditions
//! sharing one contract:
//!
//! - [`RawStack`] stores opaque byte blocks of a width chosen at runtime
//! - [`Stack`] stores elements of a single compile-time type
//!
//! Both own their backing buffer exclusively, grow transparently by capacity
//! doubling, report allocation failure as an error instead of aborting, and
//! support an explicit destroyed state after which every operation fails with
//! [`StackError::NotInitialized`]. Instances are independent; there is no
//! shared or global state.
//!
//! The design is single-threaded and synchronous: no operation blocks, and
//! sharing an instance across threads requires external synchronization.
//!
//! # Example
//!
//! ```
//! use bytestack::{Stack, StackError};
//!
//! fn main() -> Result<(), StackError> {
//!     let mut stack: Stack<u8> = Stack::new()?;
//!     stack.push(3)?;
//!     stack.push(20)?;
//!     assert_eq!(*stack.peek_top()?, 20);
//!     stack.pop()?;
//!     assert_eq!(stack.len()?, 1);
//!     stack.destroy()?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod error;
pub mod stack;

// Re-export common types for convenience
pub use error::{StackError, StackResult};
pub use stack::{RawStack, Stack, StackConfig, StackStats};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
