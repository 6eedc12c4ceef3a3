//! Domain models for CIDR range algebra.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`Address`] - fixed-width address arithmetic for `u32` (IPv4) and `u128` (IPv6)
//! - [`CidrBlock`] and [`Interval`] - a block and the closed range it covers
//! - [`IpCidr`] - textual CIDR of either family

mod address;
mod block;
mod cidr;

// Re-export public types
pub use address::{
    broadcast, check_prefix, hostmask, netmask, network, upper_half, Address, IPV4_BITS,
    IPV6_BITS,
};
pub use block::{CidrBlock, Interval};
pub use cidr::IpCidr;
