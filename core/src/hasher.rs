//! Hashers (feature-gated) and utilities for implementing them.

use crate::tree::{Hash, NamespaceId, NamespaceNode};

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// The domain separation prefix of leaf digests.
pub const LEAF_PREFIX: u8 = 0x00;

/// The domain separation prefix of internal digests.
pub const INTERNAL_PREFIX: u8 = 0x01;

/// A namespaced tree node hash function.
///
/// A node hasher must domain-separate leaf and internal preimages in some specific way, so
/// that a leaf digest can never collide with an internal digest. The recommended approach for
/// binary hashes is to prepend a distinct prefix byte to each kind of preimage, as
/// [`BinaryHasher`] does. For other kinds of hashes (e.g. algebraic hashes), other labeling
/// schemes may be required.
pub trait NodeHasher {
    /// Hash a leaf: the digest of a namespace identifier and the raw leaf data. This should
    /// domain-separate the hash according to the node kind.
    fn hash_leaf(namespace: &NamespaceId, data: &[u8]) -> Hash;

    /// Hash an internal node: the digest of two child nodes, including their namespace
    /// ranges. This should domain-separate the hash according to the node kind.
    fn hash_internal(left: &NamespaceNode, right: &NamespaceNode) -> Hash;
}

/// Extension trait over [`NodeHasher`] producing complete nodes, namespace range included.
pub trait NodeHasherExt: NodeHasher {
    /// Compute the leaf node for a namespace and raw leaf data.
    ///
    /// The leaf spans exactly its own namespace.
    fn leaf_node(namespace: &NamespaceId, data: &[u8]) -> NamespaceNode {
        NamespaceNode {
            min_ns: *namespace,
            max_ns: *namespace,
            digest: Self::hash_leaf(namespace, data),
        }
    }

    /// Combine two child nodes into their parent.
    ///
    /// The parent spans the union of the children's namespace ranges.
    fn internal_node(left: &NamespaceNode, right: &NamespaceNode) -> NamespaceNode {
        NamespaceNode {
            min_ns: core::cmp::min(left.min_ns, right.min_ns),
            max_ns: core::cmp::max(left.max_ns, right.max_ns),
            digest: Self::hash_internal(left, right),
        }
    }
}

impl<H: NodeHasher> NodeHasherExt for H {}

/// A simple trait for representing binary hash functions.
pub trait BinaryHash {
    /// Given a byte-string, produce a 32-byte hash.
    fn hash(input: &[u8]) -> Hash;

    /// An optional specialization of `hash` where the input is a single prefix byte followed
    /// by two byte-strings.
    fn hash_prefixed2(prefix: u8, a: &[u8], b: &[u8]) -> Hash {
        let mut buf = Vec::with_capacity(1 + a.len() + b.len());
        buf.push(prefix);
        buf.extend_from_slice(a);
        buf.extend_from_slice(b);
        Self::hash(&buf)
    }
}

/// A node hasher constructed from a simple binary hasher.
///
/// This implements a [`NodeHasher`] where the node kind is tagged by prepending
/// [`LEAF_PREFIX`] or [`INTERNAL_PREFIX`] to the preimage. The leaf preimage is the prefixed
/// `namespace ++ data` and the internal preimage is the prefixed concatenation of the two
/// children's canonical encodings.
///
/// The binary hash wrapped by this structure must behave approximately like a random oracle
/// over the space 2^256.
///
/// Functions like Sha2/Blake3/Keccak/Groestl all meet these criteria.
pub struct BinaryHasher<H>(core::marker::PhantomData<H>);

impl<H: BinaryHash> NodeHasher for BinaryHasher<H> {
    fn hash_leaf(namespace: &NamespaceId, data: &[u8]) -> Hash {
        H::hash_prefixed2(LEAF_PREFIX, namespace, data)
    }

    fn hash_internal(left: &NamespaceNode, right: &NamespaceNode) -> Hash {
        H::hash_prefixed2(INTERNAL_PREFIX, &left.encode(), &right.encode())
    }
}

/// Blanket implementation for all implementations of `Digest`
impl<H: digest::Digest<OutputSize = digest::typenum::U32> + Send + Sync> BinaryHash for H {
    fn hash(input: &[u8]) -> Hash {
        H::digest(input).into()
    }

    fn hash_prefixed2(prefix: u8, a: &[u8], b: &[u8]) -> Hash {
        let mut hasher = H::new();
        hasher.update([prefix]);
        hasher.update(a);
        hasher.update(b);
        hasher.finalize().into()
    }
}

#[cfg(any(feature = "blake3-hasher", test))]
pub use blake3::Blake3Hasher;

/// A node hasher making use of blake3.
#[cfg(any(feature = "blake3-hasher", test))]
pub mod blake3 {
    use super::{BinaryHash, BinaryHasher};
    use crate::tree::Hash;

    /// A [`BinaryHash`] implementation for Blake3.
    pub struct Blake3BinaryHasher;

    /// A wrapper around Blake3 for use in the NMT.
    pub type Blake3Hasher = BinaryHasher<Blake3BinaryHasher>;

    impl BinaryHash for Blake3BinaryHasher {
        fn hash(value: &[u8]) -> Hash {
            blake3::hash(value).into()
        }

        fn hash_prefixed2(prefix: u8, a: &[u8], b: &[u8]) -> Hash {
            let mut hasher = blake3::Hasher::new();
            hasher.update(&[prefix]);
            hasher.update(a);
            hasher.update(b);
            hasher.finalize().into()
        }
    }
}

#[cfg(feature = "sha2-hasher")]
pub use sha2::Sha2Hasher;

/// A node hasher making use of sha2-256.
#[cfg(feature = "sha2-hasher")]
pub mod sha2 {
    use super::{BinaryHash, BinaryHasher};
    use crate::tree::Hash;
    use sha2::{Digest, Sha256};

    /// A [`BinaryHash`] implementation for Sha2.
    pub struct Sha2BinaryHasher;

    /// A wrapper around sha2-256 for use in the NMT.
    pub type Sha2Hasher = BinaryHasher<Sha2BinaryHasher>;

    impl BinaryHash for Sha2BinaryHasher {
        fn hash(value: &[u8]) -> Hash {
            let mut hasher = Sha256::new();
            hasher.update(value);
            hasher.finalize().into()
        }

        fn hash_prefixed2(prefix: u8, a: &[u8], b: &[u8]) -> Hash {
            let mut hasher = Sha256::new();
            hasher.update([prefix]);
            hasher.update(a);
            hasher.update(b);
            hasher.finalize().into()
        }
    }
}
