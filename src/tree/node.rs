//! Tree node types

use crate::model::{combine, Digest, LeafHasher};

/// A node in the hash tree
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MerkleNode {
    /// Digest of one input block
    Leaf { digest: Digest },
    /// XOR of two children
    Internal {
        digest: Digest,
        left: Box<MerkleNode>,
        right: RightChild,
    },
}

/// The right slot of an internal node
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RightChild {
    /// An exclusively owned child
    Owned(Box<MerkleNode>),
    /// The odd trailing node of a level, paired with itself: refers back to
    /// the left child instead of owning a second copy
    Mirror,
}

impl MerkleNode {
    /// Hash a data block into a leaf
    pub fn leaf<H: LeafHasher>(data: &[u8]) -> Self {
        MerkleNode::Leaf {
            digest: H::hash(data),
        }
    }

    /// Combine two adjacent nodes
    pub fn internal(left: MerkleNode, right: MerkleNode) -> Self {
        MerkleNode::Internal {
            digest: combine(left.digest(), right.digest()),
            left: Box::new(left),
            right: RightChild::Owned(Box::new(right)),
        }
    }

    /// Pair an unpartnered node with itself
    pub fn mirrored(node: MerkleNode) -> Self {
        MerkleNode::Internal {
            digest: combine(node.digest(), node.digest()),
            left: Box::new(node),
            right: RightChild::Mirror,
        }
    }

    pub fn digest(&self) -> &Digest {
        match self {
            MerkleNode::Leaf { digest } | MerkleNode::Internal { digest, .. } => digest,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, MerkleNode::Leaf { .. })
    }

    /// Left child, if this is an internal node
    pub fn left(&self) -> Option<&MerkleNode> {
        match self {
            MerkleNode::Leaf { .. } => None,
            MerkleNode::Internal { left, .. } => Some(&**left),
        }
    }

    /// Right child, if this is an internal node. A mirror resolves to the
    /// left child.
    pub fn right(&self) -> Option<&MerkleNode> {
        match self {
            MerkleNode::Leaf { .. } => None,
            MerkleNode::Internal { left, right, .. } => match right {
                RightChild::Owned(node) => Some(&**node),
                RightChild::Mirror => Some(&**left),
            },
        }
    }

    /// Both children, if this is an internal node
    pub fn children(&self) -> Option<(&MerkleNode, &MerkleNode)> {
        Some((self.left()?, self.right()?))
    }

    /// Whether the right child is a mirror of the left
    pub fn is_mirrored(&self) -> bool {
        matches!(
            self,
            MerkleNode::Internal {
                right: RightChild::Mirror,
                ..
            }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Sha256;

    #[test]
    fn test_leaf_digest_is_hash() {
        let node = MerkleNode::leaf::<Sha256>(b"block");
        assert!(node.is_leaf());
        assert_eq!(*node.digest(), Sha256::hash(b"block"));
        assert!(node.children().is_none());
    }

    #[test]
    fn test_internal_digest_is_xor() {
        let a = MerkleNode::leaf::<Sha256>(b"a");
        let b = MerkleNode::leaf::<Sha256>(b"b");
        let expected = Sha256::hash(b"a") ^ Sha256::hash(b"b");

        let node = MerkleNode::internal(a, b);
        assert!(!node.is_leaf());
        assert!(!node.is_mirrored());
        assert_eq!(*node.digest(), expected);

        let (left, right) = node.children().unwrap();
        assert_eq!(*left.digest(), Sha256::hash(b"a"));
        assert_eq!(*right.digest(), Sha256::hash(b"b"));
    }

    #[test]
    fn test_mirrored_aliases_left() {
        let node = MerkleNode::mirrored(MerkleNode::leaf::<Sha256>(b"c"));
        assert!(node.is_mirrored());
        assert!(node.digest().is_zero());

        let (left, right) = node.children().unwrap();
        assert!(std::ptr::eq(left, right));
    }
}
