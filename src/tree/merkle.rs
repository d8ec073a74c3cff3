//! Tree construction and read-only queries

use super::MerkleNode;
use crate::model::{Digest, LeafHasher, Sha256};
use crate::{Error, Result};
use std::fmt;
use std::marker::PhantomData;

/// A hash tree built once from an ordered sequence of blocks.
///
/// The tree is immutable after [`MerkleTree::build`]; every query takes
/// `&self`, so a built tree can be shared across threads freely.
pub struct MerkleTree<H: LeafHasher = Sha256> {
    root: MerkleNode,
    leaf_count: usize,
    depth: usize,
    _hasher: PhantomData<fn() -> H>,
}

impl<H: LeafHasher> MerkleTree<H> {
    /// Build a tree from an ordered, non-empty sequence of blocks
    pub fn build<I>(blocks: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let mut level: Vec<MerkleNode> = blocks
            .into_iter()
            .map(|block| MerkleNode::leaf::<H>(block.as_ref()))
            .collect();

        if level.is_empty() {
            return Err(Error::InvalidInput(
                "cannot build a tree from zero blocks".into(),
            ));
        }

        let leaf_count = level.len();
        let mut depth = 0;

        while level.len() > 1 {
            let mut next = Vec::with_capacity((level.len() + 1) / 2);
            let mut nodes = level.into_iter();
            while let Some(left) = nodes.next() {
                let parent = match nodes.next() {
                    Some(right) => MerkleNode::internal(left, right),
                    None => MerkleNode::mirrored(left),
                };
                next.push(parent);
            }
            depth += 1;
            tracing::trace!(depth, width = next.len(), "combined level");
            level = next;
        }

        let root = level
            .pop()
            .ok_or_else(|| Error::InvalidInput("tree reduced to zero nodes".into()))?;

        tracing::debug!(
            hasher = H::NAME,
            leaves = leaf_count,
            depth,
            root = %root.digest().short(),
            "built merkle tree"
        );

        Ok(MerkleTree {
            root,
            leaf_count,
            depth,
            _hasher: PhantomData,
        })
    }

    /// The root node
    pub fn root(&self) -> &MerkleNode {
        &self.root
    }

    /// The root digest, the commitment to the whole input sequence
    pub fn root_digest(&self) -> Digest {
        *self.root.digest()
    }

    /// The root digest as lowercase hex
    pub fn root_hex(&self) -> String {
        self.root.digest().to_hex()
    }

    /// Number of input blocks
    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    /// Number of combination rounds; zero when the root is a leaf
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Name of the leaf hasher this tree was built with
    pub fn hasher_name(&self) -> &'static str {
        H::NAME
    }

    /// Digests level by level, leaves first and the root last.
    ///
    /// A mirrored right child is the same node as its left sibling, so it is
    /// listed once: each level holds exactly the nodes built for it.
    pub fn levels(&self) -> Vec<Vec<Digest>> {
        let mut levels = Vec::with_capacity(self.depth + 1);
        let mut current = vec![&self.root];

        loop {
            levels.push(current.iter().map(|node| *node.digest()).collect());

            let mut below = Vec::with_capacity(current.len() * 2);
            for node in &current {
                if let MerkleNode::Internal { left, right, .. } = node {
                    below.push(&**left);
                    if let super::RightChild::Owned(right) = right {
                        below.push(&**right);
                    }
                }
            }
            if below.is_empty() {
                break;
            }
            current = below;
        }

        levels.reverse();
        levels
    }
}

impl<H: LeafHasher> Clone for MerkleTree<H> {
    fn clone(&self) -> Self {
        MerkleTree {
            root: self.root.clone(),
            leaf_count: self.leaf_count,
            depth: self.depth,
            _hasher: PhantomData,
        }
    }
}

impl<H: LeafHasher> fmt::Debug for MerkleTree<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MerkleTree")
            .field("hasher", &H::NAME)
            .field("root", self.root.digest())
            .field("leaf_count", &self.leaf_count)
            .field("depth", &self.depth)
            .finish()
    }
}
