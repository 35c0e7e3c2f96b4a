//! Incremental FIPS 180-4 SHA-256 engine.
//!
//! This library provides a streaming SHA-256 implementation that accepts
//! input through repeated bounded-size `update` calls, so arbitrarily large
//! messages can be hashed in O(1) memory. The engine retains only an 8-word
//! hash state and a 64-byte partial-block buffer between calls.
//!
//! # Quick Start
//!
//! ```rust
//! use sha256_stream::Sha256;
//!
//! // Stream a message in pieces...
//! let mut hasher = Sha256::new();
//! hasher.update(b"hello ")?;
//! hasher.update(b"world")?;
//! let digest = hasher.finalize()?;
//!
//! // ...or hash it in one shot.
//! assert_eq!(digest, Sha256::digest(b"hello world"));
//! # Ok::<(), sha256_stream::Error>(())
//! ```
//!
//! # Features
//!
//! - **Chunking invariance** - the digest depends only on the concatenated
//!   byte sequence, never on how it was split across `update` calls
//! - **O(1) streaming** - gigabyte-scale inputs hash without materializing
//!   the message
//! - **Explicit session contract** - `update` or `finalize` on an already
//!   finalized session returns [`Error::AlreadyFinalized`] instead of a
//!   stale digest
//! - **Bit-exact output** - big-endian length field and digest
//!   serialization per FIPS 180-4

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod engine;

pub use engine::{BLOCK_SIZE, DIGEST_SIZE, Digest, Error, Result, STATE_WORDS, Sha256};
