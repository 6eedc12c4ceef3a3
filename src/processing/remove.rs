//! Subtracting one list of CIDR blocks from another.

use super::merge::{coalesce, to_intervals};
use super::split::intervals_to_cidrs;
use crate::error::Result;
use crate::models::{Address, CidrBlock, Interval};

/// Set difference `blocks \ removes` over sorted, non-overlapping intervals.
///
/// Both inputs must already be coalesced (see [`coalesce`]). A removal that
/// falls strictly inside a kept interval splits it in two.
pub fn subtract<A: Address>(blocks: &[Interval<A>], removes: &[Interval<A>]) -> Vec<Interval<A>> {
    let mut kept = Vec::with_capacity(blocks.len());
    let mut pending = blocks.iter().copied();
    let mut current = pending.next();
    let mut j = 0;

    while let Some(mut block) = current {
        let Some(rm) = removes.get(j) else {
            break;
        };

        if rm.last < block.first {
            // remove-block entirely before block
            j += 1;
        } else if block.last < rm.first {
            // block entirely before remove-block, nothing later can touch it
            kept.push(block);
            current = pending.next();
        } else if rm.contains(&block) {
            current = pending.next();
        } else if block.first >= rm.first {
            // block starts inside remove-block and extends past it
            block.first = rm.last + A::one();
            current = Some(block);
            j += 1;
        } else if block.last <= rm.last {
            // block ends inside remove-block
            block.last = rm.first - A::one();
            kept.push(block);
            current = pending.next();
        } else {
            // remove-block strictly inside block: keep the lower part,
            // carry on with the upper part against the next remove-block
            kept.push(Interval {
                first: block.first,
                last: rm.first - A::one(),
            });
            current = Some(Interval {
                first: rm.last + A::one(),
                last: block.last,
            });
            j += 1;
        }
    }

    kept.extend(current);
    kept.extend(pending);
    kept
}

/// Remove `removes` from `blocks` (same address width) and return the minimal
/// ordered block list for what is left.
///
/// Both lists are coalesced first, so callers may pass raw, unsorted input.
pub fn remove<A: Address>(
    blocks: &[CidrBlock<A>],
    removes: &[CidrBlock<A>],
) -> Result<Vec<CidrBlock<A>>> {
    let blocks_merged = coalesce(to_intervals(blocks)?);
    let removes_merged = coalesce(to_intervals(removes)?);

    let remaining = subtract(&blocks_merged, &removes_merged);
    log::debug!(
        "remove /{}: {} range(s) minus {} range(s) leaves {} range(s)",
        A::BITS,
        blocks_merged.len(),
        removes_merged.len(),
        remaining.len()
    );

    intervals_to_cidrs(&remaining)
}
