//! Proof extraction: the sibling digests met while walking from the root
//! toward a target leaf

use super::{MerkleNode, MerkleTree};
use crate::model::{Digest, LeafHasher};

/// Sibling digests ordered root-to-leaf
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Proof(Vec<Digest>);

impl Proof {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Digest> {
        self.0
    }

    /// Every step as lowercase hex
    pub fn to_hex(&self) -> Vec<String> {
        self.0.iter().map(Digest::to_hex).collect()
    }
}

impl<H: LeafHasher> MerkleTree<H> {
    /// Extract the proof path for `data`.
    ///
    /// At each internal node only the immediate left child's own digest is
    /// compared with the target leaf digest; the subtree below it is not
    /// searched. On a match the walk records the right sibling and goes
    /// left, otherwise it records the left sibling and goes right. The walk
    /// ends at a leaf, so data that is not in the tree still yields a path.
    pub fn proof(&self, data: &[u8]) -> Proof {
        let target = H::hash(data);
        let mut path = Vec::with_capacity(self.depth());
        let mut current = self.root();

        while let Some((left, right)) = current.children() {
            if *left.digest() == target {
                path.push(*right.digest());
                current = left;
            } else {
                path.push(*left.digest());
                current = right;
            }
        }

        tracing::trace!(leaf = %target.short(), steps = path.len(), "extracted proof");
        Proof(path)
    }

    /// Whether `data` hashes to the leaf this tree's proof walk ends on
    pub fn walk_ends_at(&self, data: &[u8]) -> bool {
        let target = H::hash(data);
        let mut current: &MerkleNode = self.root();
        while let Some((left, right)) = current.children() {
            current = if *left.digest() == target { left } else { right };
        }
        *current.digest() == target
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sha256;

    fn h(data: &[u8]) -> Digest {
        Sha256::hash(data)
    }

    fn tree(blocks: &[&[u8]]) -> MerkleTree<Sha256> {
        MerkleTree::build(blocks).unwrap()
    }

    #[test]
    fn test_single_leaf_proof_is_empty() {
        let t = tree(&[b"a"]);
        assert!(t.proof(b"a").is_empty());
        assert!(t.proof(b"missing").is_empty());
    }

    #[test]
    fn test_two_leaf_proofs() {
        let t = tree(&[b"a", b"b"]);
        assert_eq!(t.proof(b"a").into_inner(), vec![h(b"b")]);
        assert_eq!(t.proof(b"b").into_inner(), vec![h(b"a")]);
    }

    #[test]
    fn test_four_leaf_proofs_compare_immediate_child_only() {
        let t = tree(&[b"a", b"b", b"c", b"d"]);
        let ab = h(b"a") ^ h(b"b");

        // The root's left child is an internal node, so "a" is never matched
        // at the top level and the walk goes right.
        assert_eq!(t.proof(b"a").into_inner(), vec![ab, h(b"c")]);
        assert_eq!(t.proof(b"b").into_inner(), vec![ab, h(b"c")]);
        assert_eq!(t.proof(b"c").into_inner(), vec![ab, h(b"d")]);
        assert_eq!(t.proof(b"d").into_inner(), vec![ab, h(b"c")]);
    }

    #[test]
    fn test_missing_data_walks_right() {
        let t = tree(&[b"a", b"b", b"c", b"d"]);
        let proof = t.proof(b"not in tree");
        assert_eq!(proof.len(), t.depth());
        assert_eq!(proof.into_inner(), vec![h(b"a") ^ h(b"b"), h(b"c")]);
        assert!(!t.walk_ends_at(b"not in tree"));
    }

    #[test]
    fn test_proof_through_mirrored_pair() {
        let t = tree(&[b"a", b"b", b"c"]);
        // Root right child is (c, c); its left child matches "c".
        assert_eq!(
            t.proof(b"c").into_inner(),
            vec![h(b"a") ^ h(b"b"), h(b"c")]
        );
        assert!(t.walk_ends_at(b"c"));
    }

    #[test]
    fn test_walk_ends_at() {
        let t = tree(&[b"a", b"b", b"c", b"d"]);
        assert!(t.walk_ends_at(b"c"));
        assert!(t.walk_ends_at(b"d"));
        assert!(!t.walk_ends_at(b"a"));
    }

    #[test]
    fn test_proof_hex() {
        let t = tree(&[b"a", b"b"]);
        let hex = t.proof(b"a").to_hex();
        assert_eq!(hex, vec![h(b"b").to_hex()]);
        assert!(hex.iter().all(|s| s.len() == 64));
    }
}
