//! The fold shared by root computation and proof generation.
//!
//! Every level is a fresh `Vec` derived from the one below; an odd-length
//! level pairs its last node with itself.

use log::debug;
use rayon::prelude::*;
use std::time::Instant;

use super::{
    error::{MerkleError, Result},
    hash::{HashMethod, InnerHash},
};

/// Number of folds needed to reduce `leaf_count` nodes to one, `ceil(log2(n))`.
pub fn depth(leaf_count: usize) -> usize {
    if leaf_count <= 1 {
        0
    } else {
        (usize::BITS - (leaf_count - 1).leading_zeros()) as usize
    }
}

/// Compress one level into the next, preserving pair order.
pub fn fold_level<Method: HashMethod>(level: &[InnerHash]) -> Vec<InnerHash> {
    level
        .par_chunks(2)
        .map(|pair| {
            let left = &pair[0];
            let right = pair.get(1).unwrap_or(left);
            Method::hash_nodes(left, right)
        })
        .collect()
}

/// Fold `leaves` down to the root. A single leaf is its own root.
pub fn fold_to_root<Method: HashMethod>(leaves: Vec<InnerHash>) -> Result<InnerHash> {
    let start = Instant::now();
    let leaf_count = leaves.len();

    let mut level = leaves;
    while level.len() > 1 {
        level = fold_level::<Method>(&level);
    }
    let root = level.pop().ok_or(MerkleError::EmptyTree)?;

    debug!(
        "Folding {} leaves over {} levels took {:?}",
        leaf_count,
        depth(leaf_count),
        start.elapsed()
    );
    Ok(root)
}

/// Fold `leaves` while collecting the sibling of the node at `index` on every
/// level, bottom to top. Returns the root together with the siblings.
///
/// The target is tracked by position only: its sibling is `index ^ 1` and its
/// parent `index / 2`. When the target is the unpaired last node of an odd
/// level, its sibling is itself.
pub fn authentication_path<Method: HashMethod>(
    leaves: Vec<InnerHash>,
    index: usize,
) -> Result<(InnerHash, Vec<InnerHash>)> {
    if leaves.is_empty() {
        return Err(MerkleError::EmptyTree);
    }
    if index >= leaves.len() {
        return Err(MerkleError::IndexOutOfRange {
            index: index as i128,
            leaf_count: Some(leaves.len()),
        });
    }

    let start = Instant::now();
    let mut siblings = Vec::with_capacity(depth(leaves.len()));
    let mut level = leaves;
    let mut position = index;

    while level.len() > 1 {
        let sibling = level.get(position ^ 1).unwrap_or(&level[position]);
        siblings.push(*sibling);

        level = fold_level::<Method>(&level);
        position /= 2;
    }
    let root = level.pop().ok_or(MerkleError::EmptyTree)?;

    debug!(
        "Authentication path for index {} ({} siblings) took {:?}",
        index,
        siblings.len(),
        start.elapsed()
    );
    Ok((root, siblings))
}
