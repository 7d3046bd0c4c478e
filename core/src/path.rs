//! Geometry of the left-complete binary tree.
//!
//! Leaves are laid out left to right. The left subtree under any node covers the largest
//! power of two strictly less than the node's leaf count, and the remainder hangs off the
//! right spine. Proof shapes are fully determined by this geometry: the number of siblings
//! between a leaf and the root depends only on the leaf index and the leaf count.

/// Compute the number of leaves covered by the left subtree of a tree over `num_leaves`
/// leaves: the largest power of two strictly less than `num_leaves`.
///
/// # Panics
///
/// Panics if `num_leaves` is less than 2.
pub fn split_point(num_leaves: u64) -> u64 {
    assert!(num_leaves >= 2, "split point of a tree with a single leaf");
    1 << (u64::BITS - 1 - (num_leaves - 1).leading_zeros())
}

/// The number of hash-combination steps between leaf `key` and the root of a left-complete
/// binary tree over `num_leaves` leaves.
///
/// Walks the recursive decomposition of the tree: each step descends into either the
/// power-of-two left subtree or the remainder on the right. The result is bounded by 64.
pub fn path_length_from_key(mut key: u64, mut num_leaves: u64) -> u32 {
    let mut length = 0;
    while num_leaves > 1 {
        let split = split_point(num_leaves);
        if key < split {
            num_leaves = split;
        } else {
            key -= split;
            num_leaves -= split;
        }
        length += 1;
    }
    length
}
