#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

use nmt_core::hasher::{Blake3Hasher, NodeHasherExt};
use nmt_core::tree::{NamespaceId, NamespaceNode};
use nmt_core::MembershipProof;

#[derive(Debug, Arbitrary)]
struct Run {
    side_nodes: Vec<RawNode>,
    key: u64,
    num_leaves: u64,
    namespace: NamespaceId,
    data: Vec<u8>,
    root: RawNode,
    starting_height: u64,
}

#[derive(Debug, Arbitrary)]
struct RawNode {
    min_ns: NamespaceId,
    max_ns: NamespaceId,
    digest: [u8; 32],
}

impl From<RawNode> for NamespaceNode {
    fn from(raw: RawNode) -> Self {
        NamespaceNode {
            min_ns: raw.min_ns,
            max_ns: raw.max_ns,
            digest: raw.digest,
        }
    }
}

fuzz_target!(|run: Run| {
    let proof = MembershipProof {
        side_nodes: run.side_nodes.into_iter().map(Into::into).collect(),
        key: run.key,
        num_leaves: run.num_leaves,
    };
    let root: NamespaceNode = run.root.into();

    // No input may panic the verifier, and the leaf entry point must agree with the
    // generalized one started at the leaf level.
    let by_leaf = proof.verify::<Blake3Hasher>(&root, &run.namespace, &run.data);
    let leaf = Blake3Hasher::leaf_node(&run.namespace, &run.data);
    let by_inner = proof.verify_inner::<Blake3Hasher>(&root, leaf, 1);
    assert_eq!(by_leaf, by_inner);

    let _ = proof.verify_inner::<Blake3Hasher>(&root, leaf, run.starting_height);
});
