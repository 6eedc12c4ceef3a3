//! CIDR blocks and the closed intervals they cover.

use super::address::{broadcast, check_prefix, network, Address};
use crate::error::Result;
use std::cmp::Ordering;
use std::fmt;

/// A network address paired with a prefix length.
///
/// The address is not required to be the network address; the host bits are
/// ignored whenever the block is turned into an [`Interval`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CidrBlock<A> {
    pub addr: A,
    pub prefix: u8,
}

impl<A: Address> CidrBlock<A> {
    /// Create a block, rejecting a prefix longer than the address width.
    pub fn new(addr: A, prefix: u8) -> Result<Self> {
        check_prefix::<A>(prefix)?;
        Ok(CidrBlock { addr, prefix })
    }

    pub fn from_ip(ip: A::Ip, prefix: u8) -> Result<Self> {
        Self::new(A::from_ip(ip), prefix)
    }

    /// Lowest (network) address in the block.
    pub fn first(&self) -> Result<A> {
        network(self.addr, self.prefix)
    }

    /// Highest (broadcast) address in the block.
    pub fn last(&self) -> Result<A> {
        broadcast(self.addr, self.prefix)
    }

    /// Same block with the host bits cleared.
    pub fn normalized(&self) -> Result<Self> {
        Ok(CidrBlock {
            addr: self.first()?,
            prefix: self.prefix,
        })
    }

    pub fn interval(&self) -> Result<Interval<A>> {
        Interval::from_block(self)
    }
}

impl<A: Address> fmt::Display for CidrBlock<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.addr.to_ip(), self.prefix)
    }
}

/// Closed address interval `[first, last]`, `first <= last`.
///
/// Intervals sort by `last`, then by `first`. Coalescing and the remove
/// sweep both depend on that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval<A> {
    pub first: A,
    pub last: A,
}

impl<A: Address> Interval<A> {
    /// Returns `None` if `first > last`.
    pub fn new(first: A, last: A) -> Option<Self> {
        (first <= last).then_some(Interval { first, last })
    }

    pub fn from_block(block: &CidrBlock<A>) -> Result<Self> {
        Ok(Interval {
            first: block.first()?,
            last: block.last()?,
        })
    }

    /// True if `other` lies entirely inside `self`.
    pub fn contains(&self, other: &Interval<A>) -> bool {
        self.first <= other.first && other.last <= self.last
    }

    /// True if `next` overlaps `self` or starts right after `self.last`.
    pub fn touches(&self, next: &Interval<A>) -> bool {
        // self.last == MAX: nothing can start after it, and `+ 1` would overflow
        self.last == A::max_value() || next.first <= self.last + A::one()
    }

    /// Widen `self` to also cover `other`.
    pub fn absorb(&mut self, other: &Interval<A>) {
        self.first = self.first.min(other.first);
        self.last = self.last.max(other.last);
    }
}

impl<A: Address> Ord for Interval<A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.last
            .cmp(&other.last)
            .then_with(|| self.first.cmp(&other.first))
    }
}

impl<A: Address> PartialOrd for Interval<A> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<A: Address> fmt::Display for Interval<A> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}-{}", self.first.to_ip(), self.last.to_ip())
    }
}
