//! Range-to-CIDR splitting.
//!
//! Re-expresses a closed address interval as the minimal list of aligned
//! CIDR blocks by walking down the binary trie of the address space.

use crate::error::{CidrError, Result};
use crate::models::{broadcast, check_prefix, network, upper_half, Address, CidrBlock, Interval};

/// Append to `cidrs` the minimal blocks covering exactly `[lo, hi]`.
///
/// `[lo, hi]` must lie inside the network `base/prefix`. Blocks are appended
/// in ascending address order. Recursion depth is bounded by the address width.
///
/// # Errors
/// * [`CidrError::InvalidPrefix`] if `prefix` is longer than the address width
/// * [`CidrError::RangeOutOfBounds`] if `[lo, hi]` is empty or not inside `base/prefix`
pub fn split_range<A: Address>(
    base: A,
    prefix: u8,
    lo: A,
    hi: A,
    cidrs: &mut Vec<CidrBlock<A>>,
) -> Result<()> {
    check_prefix::<A>(prefix)?;

    let first = network(base, prefix)?;
    let last = broadcast(base, prefix)?;
    if lo < first || hi > last || lo > hi {
        return Err(CidrError::RangeOutOfBounds {
            lo: lo.into(),
            hi: hi.into(),
            base: base.into(),
            prefix,
            broadcast: last.into(),
        });
    }

    if lo == first && hi == last {
        cidrs.push(CidrBlock {
            addr: first,
            prefix,
        });
        return Ok(());
    }

    // Not the whole network, so prefix < W here.
    let prefix = prefix + 1;
    let lower = first;
    let upper = upper_half(first, prefix)?;
    if hi < upper {
        split_range(lower, prefix, lo, hi, cidrs)
    } else if lo >= upper {
        split_range(upper, prefix, lo, hi, cidrs)
    } else {
        split_range(lower, prefix, lo, broadcast(lower, prefix)?, cidrs)?;
        split_range(upper, prefix, upper, hi, cidrs)
    }
}

/// Minimal CIDR blocks for one interval, splitting from the whole address space.
pub fn range_to_cidrs<A: Address>(interval: &Interval<A>) -> Result<Vec<CidrBlock<A>>> {
    let mut cidrs = Vec::new();
    split_range(A::zero(), 0, interval.first, interval.last, &mut cidrs)?;
    log::trace!("range {} -> {} block(s)", interval, cidrs.len());
    Ok(cidrs)
}

/// Split every interval in order and concatenate the results.
pub fn intervals_to_cidrs<A: Address>(intervals: &[Interval<A>]) -> Result<Vec<CidrBlock<A>>> {
    let mut cidrs = Vec::with_capacity(intervals.len());
    for interval in intervals {
        split_range(A::zero(), 0, interval.first, interval.last, &mut cidrs)?;
    }
    Ok(cidrs)
}
