//! Verifying membership proofs against a namespaced merkle tree root.
//!
//! A [`MembershipProof`] carries the sibling nodes between a leaf (or a pre-combined inner
//! node) and the root, ordered from the leaf's own level upward. Verification recomputes the
//! root by climbing the tree and compares the result structurally against the trusted root.
//!
//! The climb visits three kinds of combination in order. First, the aligned power-of-two
//! blocks containing the key are folded as long as they lie fully inside the tree. When the
//! leaf count is not a power of two, the rightmost branch leaves an orphan subtree which is
//! folded in next, with the running node on the left. Any remaining siblings are ancestors on
//! the spine above, each combined with the running node on the right.
//!
//! Proof shape is validated before any hashing: the sibling count must match the path length
//! determined by the key and the leaf count, and the key must index a leaf inside the tree.

use crate::hasher::{NodeHasher, NodeHasherExt};
use crate::path::path_length_from_key;
use crate::tree::{NamespaceId, NamespaceNode};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// A proof that a leaf is included at a given position in the tree.
///
/// The proof commits to a position: `key` is the index of the proven leaf and `num_leaves`
/// the total leaf count of the tree. `side_nodes` holds exactly one sibling per combination
/// step between the leaf level and the root.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MembershipProof {
    /// Sibling nodes encountered while climbing from the leaf to the root, in ascending
    /// order by level.
    pub side_nodes: Vec<NamespaceNode>,
    /// The index of the proven leaf within the tree.
    pub key: u64,
    /// The total number of leaves in the tree.
    pub num_leaves: u64,
}

/// The distinct ways verification can reject a proof.
///
/// Callers only ever observe a boolean result; these states are kept apart internally so
/// that tests can pin down which check rejected a proof.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VerificationFailure {
    /// The generalized entry point was given a starting height of zero.
    InvalidStartingHeight,
    /// The key indexes a leaf beyond the end of the tree.
    KeyOutOfRange,
    /// The sibling count does not pin the path length implied by the key and leaf count.
    SideNodeMismatch,
    /// The climb needed a sibling beyond the end of the proof.
    ProofExhausted,
    /// The recomputed node differs from the trusted root in digest or namespace range.
    RootMismatch,
}

impl MembershipProof {
    /// Verify that `(namespace, data)` is the leaf at index `key` of the tree with
    /// `num_leaves` leaves rooted at `root`.
    ///
    /// Returns `false` for any proof that is malformed or does not recompute to `root`.
    pub fn verify<H: NodeHasher>(
        &self,
        root: &NamespaceNode,
        namespace: &NamespaceId,
        data: &[u8],
    ) -> bool {
        let leaf = H::leaf_node(namespace, data);
        self.check::<H>(root, leaf, 1).is_ok()
    }

    /// Verify that `node` is the ancestor, at `starting_height`, of the leaf at index `key`
    /// in the tree rooted at `root`. Height 1 is the leaf level, so
    /// `verify_inner(root, leaf, 1)` is equivalent to [`verify`][Self::verify] on the leaf's
    /// preimage.
    ///
    /// `key` may be any leaf index inside the subtree under `node`; it is used only to
    /// resolve left/right positioning at the levels still to be climbed.
    pub fn verify_inner<H: NodeHasher>(
        &self,
        root: &NamespaceNode,
        node: NamespaceNode,
        starting_height: u64,
    ) -> bool {
        self.check::<H>(root, node, starting_height).is_ok()
    }

    pub(crate) fn check<H: NodeHasher>(
        &self,
        root: &NamespaceNode,
        mut node: NamespaceNode,
        starting_height: u64,
    ) -> Result<(), VerificationFailure> {
        let height_offset = match starting_height.checked_sub(1) {
            Some(offset) => offset,
            None => return Err(VerificationFailure::InvalidStartingHeight),
        };

        // The sibling count pins the exact number of combination steps before any hashing
        // occurs. A tree of zero or one leaf needs no siblings at all.
        if self.num_leaves <= 1 {
            if !self.side_nodes.is_empty() {
                return Err(VerificationFailure::SideNodeMismatch);
            }
        } else {
            let expected = u64::from(path_length_from_key(self.key, self.num_leaves));
            let supplied = (self.side_nodes.len() as u64).checked_add(height_offset);
            if supplied != Some(expected) {
                return Err(VerificationFailure::SideNodeMismatch);
            }
        }

        if self.key >= self.num_leaves {
            return Err(VerificationFailure::KeyOutOfRange);
        }

        // With no siblings the only tree left is the single-leaf one, where the candidate
        // is the root itself. The starting height is irrelevant here.
        if self.side_nodes.is_empty() {
            if self.num_leaves == 1 {
                return if node == *root {
                    Ok(())
                } else {
                    Err(VerificationFailure::RootMismatch)
                };
            }
            return Err(VerificationFailure::SideNodeMismatch);
        }

        let mut height = starting_height;
        let mut stable_end = self.key;

        // Climb the complete subtrees containing the key. Each level folds in one sibling,
        // on the side determined by the key's position within the aligned block.
        loop {
            // The aligned block of 2^height leaves containing the key. A span that
            // overflows u64 cannot lie inside the tree, so the climb is over.
            let span = match u32::try_from(height)
                .ok()
                .and_then(|h| 1u64.checked_shl(h))
            {
                Some(span) => span,
                None => break,
            };
            let subtree_start = (self.key / span) * span;
            let subtree_end = match subtree_start.checked_add(span - 1) {
                Some(end) => end,
                None => break,
            };
            if subtree_end >= self.num_leaves {
                break;
            }
            stable_end = subtree_end;

            let (step, side_node) = self.side_node_at(height, height_offset)?;
            let half = match 1u64.checked_shl(step) {
                Some(half) => half,
                None => return Err(VerificationFailure::ProofExhausted),
            };
            if self.key - subtree_start < half {
                node = H::internal_node(&node, side_node);
            } else {
                node = H::internal_node(side_node, &node);
            }
            height += 1;
        }

        // A non-power-of-two tree leaves an orphan subtree on the right spine at the level
        // the climb stopped. It participates directly in the next combination, with the
        // running node on the left.
        if stable_end != self.num_leaves - 1 {
            let (_, side_node) = self.side_node_at(height, height_offset)?;
            node = H::internal_node(&node, side_node);
            height += 1;
        }

        // Whatever siblings remain are left siblings on the spine above the local subtree
        // structure.
        while let Ok((_, side_node)) = self.side_node_at(height, height_offset) {
            node = H::internal_node(side_node, &node);
            height += 1;
        }

        if node == *root {
            Ok(())
        } else {
            Err(VerificationFailure::RootMismatch)
        }
    }

    // Resolve the sibling consumed at `height`, along with its index into `side_nodes`.
    // The index doubles as the span exponent of the running node's own block at that level.
    fn side_node_at(
        &self,
        height: u64,
        height_offset: u64,
    ) -> Result<(u32, &NamespaceNode), VerificationFailure> {
        let step = height
            .checked_sub(height_offset)
            .and_then(|h| h.checked_sub(1))
            .and_then(|s| u32::try_from(s).ok())
            .ok_or(VerificationFailure::ProofExhausted)?;
        let side_node = self
            .side_nodes
            .get(step as usize)
            .ok_or(VerificationFailure::ProofExhausted)?;
        Ok((step, side_node))
    }
}
