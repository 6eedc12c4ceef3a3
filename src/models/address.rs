//! Fixed-width address arithmetic.
//!
//! Addresses are plain unsigned integers, `u32` for IPv4 and `u128` for IPv6.
//! The [`Address`] trait ties each width to its `std::net` type so the range
//! algebra is written once and instantiated per family.

use crate::error::{CidrError, Result};
use num_traits::PrimInt;
use std::fmt;
use std::net::{Ipv4Addr, Ipv6Addr};

/// Maximum prefix length of an IPv4 address (32 bits).
pub const IPV4_BITS: u8 = 32;
/// Maximum prefix length of an IPv6 address (128 bits).
pub const IPV6_BITS: u8 = 128;

/// An unsigned integer holding one address of a fixed bit-width.
pub trait Address: PrimInt + fmt::Debug + fmt::LowerHex + Into<u128> {
    /// Width of the address in bits, also the longest valid prefix.
    const BITS: u8;

    /// Matching `std::net` address type.
    type Ip: Copy + fmt::Display + fmt::Debug + Eq;

    fn from_ip(ip: Self::Ip) -> Self;

    fn to_ip(self) -> Self::Ip;
}

impl Address for u32 {
    const BITS: u8 = IPV4_BITS;
    type Ip = Ipv4Addr;

    fn from_ip(ip: Ipv4Addr) -> Self {
        u32::from(ip)
    }

    fn to_ip(self) -> Ipv4Addr {
        Ipv4Addr::from(self)
    }
}

impl Address for u128 {
    const BITS: u8 = IPV6_BITS;
    type Ip = Ipv6Addr;

    fn from_ip(ip: Ipv6Addr) -> Self {
        u128::from(ip)
    }

    fn to_ip(self) -> Ipv6Addr {
        Ipv6Addr::from(self)
    }
}

/// Fail with [`CidrError::InvalidPrefix`] unless `prefix` is in `[0, A::BITS]`.
pub fn check_prefix<A: Address>(prefix: u8) -> Result<()> {
    if prefix > A::BITS {
        Err(CidrError::InvalidPrefix {
            prefix: prefix.into(),
            width: A::BITS,
        })
    } else {
        Ok(())
    }
}

/// Host bits of a prefix, `2^(W - prefix) - 1`.
///
/// # Examples
/// ```
/// use cidr_merge::models::hostmask;
/// assert_eq!(hostmask::<u32>(24).unwrap(), 0x0000_00FF);
/// assert_eq!(hostmask::<u32>(0).unwrap(), u32::MAX);
/// ```
pub fn hostmask<A: Address>(prefix: u8) -> Result<A> {
    check_prefix::<A>(prefix)?;
    if prefix == A::BITS {
        // A shift by the full width is not defined on primitive integers.
        Ok(A::zero())
    } else {
        Ok(A::max_value() >> prefix as usize)
    }
}

/// Network bits of a prefix; zero for `/0`.
pub fn netmask<A: Address>(prefix: u8) -> Result<A> {
    Ok(!hostmask::<A>(prefix)?)
}

/// First address of the block `addr/prefix`.
pub fn network<A: Address>(addr: A, prefix: u8) -> Result<A> {
    Ok(addr & netmask::<A>(prefix)?)
}

/// Last address of the block `addr/prefix`.
pub fn broadcast<A: Address>(addr: A, prefix: u8) -> Result<A> {
    Ok(addr | hostmask::<A>(prefix)?)
}

/// Base address of the upper half of `base/(prefix - 1)`, i.e. `base` with
/// bit `W - prefix` set. `prefix` must be in `[1, W]`.
pub fn upper_half<A: Address>(base: A, prefix: u8) -> Result<A> {
    if prefix == 0 {
        return Err(CidrError::InvalidPrefix {
            prefix: prefix.into(),
            width: A::BITS,
        });
    }
    check_prefix::<A>(prefix)?;
    Ok(base | (A::one() << (A::BITS - prefix) as usize))
}
