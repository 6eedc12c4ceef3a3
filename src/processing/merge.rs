//! Merging CIDR blocks into the smallest equivalent list.
//!
//! Duplicates, contained blocks and adjacent blocks collapse away; the
//! remaining maximal ranges are split back into aligned blocks.

use super::split::intervals_to_cidrs;
use crate::error::Result;
use crate::models::{Address, CidrBlock, Interval};

/// Convert blocks to intervals, failing on the first invalid prefix.
pub fn to_intervals<A: Address>(blocks: &[CidrBlock<A>]) -> Result<Vec<Interval<A>>> {
    blocks.iter().map(CidrBlock::interval).collect()
}

/// Sort intervals and coalesce overlapping or touching ones.
///
/// The result is sorted and no two intervals overlap or touch.
pub fn coalesce<A: Address>(mut intervals: Vec<Interval<A>>) -> Vec<Interval<A>> {
    intervals.sort();

    // Walk from the highest `last` down; anything touching the current run
    // widens it. Sorting by `last` means a run can only grow downward.
    let mut merged: Vec<Interval<A>> = Vec::with_capacity(intervals.len());
    let mut run: Option<Interval<A>> = None;
    while let Some(mut interval) = intervals.pop() {
        match run {
            Some(current) if interval.touches(&current) => {
                interval.absorb(&current);
            }
            Some(current) => merged.push(current),
            None => {}
        }
        run = Some(interval);
    }
    merged.extend(run);
    merged.reverse();
    merged
}

/// Merge blocks of one address width into the minimal ordered block list
/// covering the same addresses.
///
/// # Errors
/// * [`crate::CidrError::InvalidPrefix`] if any block has a prefix longer than the width
pub fn merge<A: Address>(blocks: &[CidrBlock<A>]) -> Result<Vec<CidrBlock<A>>> {
    let intervals = to_intervals(blocks)?;
    let merged = coalesce(intervals);
    log::debug!(
        "merge /{}: {} block(s) coalesced into {} range(s)",
        A::BITS,
        blocks.len(),
        merged.len()
    );
    intervals_to_cidrs(&merged)
}
