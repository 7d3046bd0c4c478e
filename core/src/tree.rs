//! This module defines the types of a namespaced merkle tree, generalized over a 256 bit hash
//! function.
//!
//! The tree is a left-complete binary merkle tree over an ordered list of leaves, each tagged
//! with a fixed-width namespace identifier. Every node carries, alongside its hash digest, the
//! minimum and maximum namespace spanned by its subtree:
//!   1. Leaf nodes span exactly their own namespace: `min_ns = max_ns = namespace`.
//!   2. Internal nodes span the union of their children:
//!      `min_ns = min(left.min_ns, right.min_ns)`, `max_ns = max(left.max_ns, right.max_ns)`.
//!
//! Node digests are labeled by the [`NodeHasher`][crate::hasher::NodeHasher] used, so that a
//! leaf digest can never collide with an internal digest.

use core::fmt;

/// The number of bytes in a namespace identifier.
pub const NAMESPACE_ID_SIZE: usize = 8;

/// A namespace identifier. Namespaces are ordered lexicographically by their bytes.
pub type NamespaceId = [u8; NAMESPACE_ID_SIZE];

/// A raw hash digest. In this schema, it is always 256 bits.
pub type Hash = [u8; 32];

/// The number of bytes in the canonical encoding of a [`NamespaceNode`].
pub const NAMESPACE_NODE_SIZE: usize = 2 * NAMESPACE_ID_SIZE + 32;

/// A node in the namespaced merkle tree: a hash digest together with the namespace range
/// spanned by the node's subtree.
///
/// Two nodes are equal only if all three fields match. A correct digest with a mismatched
/// namespace range is a different node.
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "borsh",
    derive(borsh::BorshDeserialize, borsh::BorshSerialize)
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NamespaceNode {
    /// The minimum namespace identifier spanned by this node's subtree.
    pub min_ns: NamespaceId,
    /// The maximum namespace identifier spanned by this node's subtree.
    pub max_ns: NamespaceId,
    /// The hash digest of this node.
    pub digest: Hash,
}

impl NamespaceNode {
    /// The canonical `min_ns ++ max_ns ++ digest` encoding of this node, used as the
    /// hash preimage of its parent.
    pub fn encode(&self) -> [u8; NAMESPACE_NODE_SIZE] {
        let mut buf = [0u8; NAMESPACE_NODE_SIZE];
        buf[0..NAMESPACE_ID_SIZE].copy_from_slice(&self.min_ns);
        buf[NAMESPACE_ID_SIZE..2 * NAMESPACE_ID_SIZE].copy_from_slice(&self.max_ns);
        buf[2 * NAMESPACE_ID_SIZE..].copy_from_slice(&self.digest);
        buf
    }
}

impl fmt::Debug for NamespaceNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "NamespaceNode({}..{}, {})",
            hex::encode(&self.min_ns),
            hex::encode(&self.max_ns),
            hex::encode(&self.digest),
        )
    }
}
