//! Binary hash tree with XOR node combination
//!
//! - Leaves hold the digest of one input block
//! - Internal nodes hold the XOR of their two children's digests
//! - An odd trailing node on any level is paired with itself, so the parent
//!   of such a pair always carries the zero digest

mod merkle;
mod node;
mod proof;

pub use merkle::MerkleTree;
pub use node::{MerkleNode, RightChild};
pub use proof::Proof;
