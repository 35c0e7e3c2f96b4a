//! The 32-byte digest output type.

use std::fmt;

use super::{DIGEST_SIZE, STATE_WORDS};

/// An immutable SHA-256 digest.
///
/// The big-endian serialization of the 8 final state words, in word order.
/// Equality comparison runs in constant time so digests derived from secret
/// material can be compared without a timing side channel.
#[derive(Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Digest([u8; DIGEST_SIZE]);

impl Digest {
    /// Serialize the final hash state, each word big-endian.
    pub(crate) fn from_words(words: &[u32; STATE_WORDS]) -> Self {
        let mut bytes = [0u8; DIGEST_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }
        Self(bytes)
    }

    /// View the digest as a byte array.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_SIZE] {
        &self.0
    }

    /// Consume the digest into its byte array.
    #[must_use]
    pub const fn into_bytes(self) -> [u8; DIGEST_SIZE] {
        self.0
    }
}

impl From<[u8; DIGEST_SIZE]> for Digest {
    fn from(bytes: [u8; DIGEST_SIZE]) -> Self {
        Self(bytes)
    }
}

impl From<Digest> for [u8; DIGEST_SIZE] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl PartialEq for Digest {
    /// Constant-time comparison: fold the XOR of every byte pair before
    /// the single final test.
    fn eq(&self, other: &Self) -> bool {
        let mut diff = 0u8;
        for (lhs, rhs) in self.0.iter().zip(other.0.iter()) {
            diff |= lhs ^ rhs;
        }
        diff == 0
    }
}

impl Eq for Digest {}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}
