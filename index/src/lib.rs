//! Membership indices over sets of `u32` values (typically IPv4 addresses).
//!
//! Known values are either compacted into maximal ranges of consecutive values ([`compact`]) and queried with
//! one of the range indices, or stored one by one in a hash set. All indices implement the [`Strategy`] trait
//! so that they can be built and queried uniformly.

pub mod branchless;
pub mod compact;
pub mod echo;
pub mod error;
pub mod exact;
pub mod interval;
pub mod ordered;
pub mod sorted;
pub mod strategy;

pub use compact::{compact, compact_unsorted};
pub use error::IndexError;
pub use interval::Interval;
pub use strategy::{Strategy, StrategyKind};

/// A single element of the indexed sets.
pub type Value = u32;
