//! SHA-256 hash engine core.
//!
//! This module provides the block compressor, padding encoder, and the
//! incremental hashing session built on top of them.

mod compress;
mod digest;
mod error;
mod hasher;
mod padding;

pub use digest::Digest;
pub use error::{Error, Result};
pub use hasher::Sha256;

/// Input block size in bytes (512 bits)
pub const BLOCK_SIZE: usize = 64;

/// Digest size in bytes (256 bits)
pub const DIGEST_SIZE: usize = 32;

/// Number of 32-bit words in the hash state
pub const STATE_WORDS: usize = 8;

/// Size of the big-endian bit-length field in the final padded block
pub const LENGTH_FIELD_SIZE: usize = 8;
