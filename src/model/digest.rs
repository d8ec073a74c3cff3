//! Fixed-length digest type shared by leaves and internal nodes

use crate::Result;
use std::fmt;
use std::ops::BitXor;
use std::str::FromStr;

/// Length in bytes of every digest in a tree
pub const DIGEST_LEN: usize = 32;

/// A 32-byte digest, rendered externally as lowercase hex
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Digest([u8; DIGEST_LEN]);

impl Digest {
    /// The all-zero digest. Every internal node built from an odd trailing
    /// node paired with itself carries this value.
    pub const ZERO: Digest = Digest([0u8; DIGEST_LEN]);

    /// Create a digest from raw bytes
    pub fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Digest(bytes)
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Convert to lowercase hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Parse from hex text.
    ///
    /// Malformed hex and any length other than `DIGEST_LEN` bytes are
    /// rejected with [`crate::Error::Decode`].
    pub fn from_hex(s: &str) -> Result<Self> {
        let mut arr = [0u8; DIGEST_LEN];
        hex::decode_to_slice(s, &mut arr)?;
        Ok(Digest(arr))
    }

    /// Get a short prefix for display (first 7 chars)
    pub fn short(&self) -> String {
        self.to_hex()[..7].to_string()
    }

    /// Check if this is the zero digest
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; DIGEST_LEN]
    }
}

/// Node combiner: byte-wise XOR of two digests.
///
/// Commutative, so `combine(a, b) == combine(b, a)`, and `combine(x, x)` is
/// always [`Digest::ZERO`].
pub fn combine(left: &Digest, right: &Digest) -> Digest {
    let mut out = [0u8; DIGEST_LEN];
    for (o, (l, r)) in out.iter_mut().zip(left.0.iter().zip(right.0.iter())) {
        *o = l ^ r;
    }
    Digest(out)
}

impl BitXor for Digest {
    type Output = Digest;

    fn bitxor(self, rhs: Digest) -> Digest {
        combine(&self, &rhs)
    }
}

impl FromStr for Digest {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Digest::from_hex(s)
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({})", self.short())
    }
}

impl Default for Digest {
    fn default() -> Self {
        Digest::ZERO
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
