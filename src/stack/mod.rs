//! LIFO stack storage over fixed-size elements
//!
//! ## Modules
//! - `raw` - [`RawStack`], the byte-block rendition with a runtime element width
//! - `typed` - [`Stack`], the generic rendition for a compile-time element type
//! - `config` - [`StackConfig`] creation-time tuning
//! - `stats` - [`StackStats`] activity counters

pub mod config;
pub mod raw;
pub mod stats;
pub mod typed;

pub use config::StackConfig;
pub use raw::RawStack;
pub use stats::StackStats;
pub use typed::Stack;
