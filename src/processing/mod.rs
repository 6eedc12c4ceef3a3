//! CIDR range algebra.
//!
//! This module contains the merge and remove logic:
//! - [`split`] - Splitting an address range into minimal CIDR blocks
//! - [`merge`] - Coalescing blocks of one address width
//! - [`remove`] - Set difference of blocks of one address width
//! - [`family`] - Mixed IPv4/IPv6 entry points

mod family;
mod merge;
mod remove;
mod split;

// Re-export public functions
pub use family::{merge_cidrs, merge_ip_cidrs, remove_cidrs, remove_ip_cidrs, split_families};
pub use merge::{coalesce, merge, to_intervals};
pub use remove::{remove, subtract};
pub use split::{intervals_to_cidrs, range_to_cidrs, split_range};
