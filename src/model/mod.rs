//! Core data model: digests and the leaf hashers that produce them

mod digest;
mod hasher;

pub use digest::{combine, Digest, DIGEST_LEN};
pub use hasher::{Blake3, HashAlgorithm, LeafHasher, Sha256};
