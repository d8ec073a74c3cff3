//! # xor_merkle
//!
//! A binary hash tree over an ordered sequence of data blocks.
//!
//! The root digest is a compact commitment to the whole sequence, and a
//! proof path can be extracted for any block.
//!
//! ## Construction
//!
//! - **Leaves**: the 32-byte digest of one block (SHA-256 by default)
//! - **Internal nodes**: the byte-wise XOR of their two children's digests
//! - **Odd levels**: the trailing node is paired with itself, which always
//!   yields the all-zero digest
//!
//! ## Example
//!
//! ```
//! use xor_merkle::{MerkleTree, Sha256, LeafHasher};
//!
//! let tree = MerkleTree::<Sha256>::build([b"a", b"b"])?;
//! assert_eq!(tree.root_digest(), Sha256::hash(b"a") ^ Sha256::hash(b"b"));
//!
//! let proof = tree.proof(b"a");
//! assert_eq!(proof.to_hex(), vec![Sha256::hash(b"b").to_hex()]);
//! # Ok::<(), xor_merkle::Error>(())
//! ```

pub mod config;
pub mod model;
pub mod tree;

mod error;

pub use config::Config;
pub use error::{Error, Result};
pub use model::{combine, Blake3, Digest, HashAlgorithm, LeafHasher, Sha256, DIGEST_LEN};
pub use tree::{MerkleNode, MerkleTree, Proof, RightChild};
