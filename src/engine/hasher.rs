//! Incremental SHA-256 hashing session.

use tracing::trace;

use super::compress::{H0, compress};
use super::padding::encode_trailer;
use super::{BLOCK_SIZE, Digest, Error, Result, STATE_WORDS};

/// A streaming SHA-256 session.
///
/// Feed input through any number of [`update`](Sha256::update) calls, in
/// chunks of any size, then call [`finalize`](Sha256::finalize) exactly
/// once. The session retains only the 8-word hash state, a 64-byte
/// partial-block buffer, and a byte counter, so memory use is constant
/// regardless of message size.
///
/// A session is exclusively owned by one logical caller; the engine does no
/// internal locking. Independent sessions share nothing mutable and may run
/// on separate threads. Once finalized, a session is terminal: further
/// `update` or `finalize` calls return [`Error::AlreadyFinalized`].
#[derive(Clone)]
pub struct Sha256 {
    state: [u32; STATE_WORDS],
    buffer: [u8; BLOCK_SIZE],
    buffer_len: usize,
    total_bytes: u64,
    finalized: bool,
}

impl Sha256 {
    /// Create a fresh session with the standard initial state.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: H0,
            buffer: [0u8; BLOCK_SIZE],
            buffer_len: 0,
            total_bytes: 0,
            finalized: false,
        }
    }

    /// Consume more message bytes.
    ///
    /// Accepts any length, including zero (a legal no-op). Full 64-byte
    /// blocks are compressed as they become available; at most 63 bytes are
    /// buffered between calls.
    pub fn update(&mut self, data: &[u8]) -> Result<()> {
        if self.finalized {
            return Err(Error::AlreadyFinalized { op: "update" });
        }
        self.absorb(data);
        Ok(())
    }

    /// Close the session and produce the digest.
    ///
    /// Pads the buffered tail, compresses the 1-2 trailer blocks, and
    /// serializes the state big-endian. The session is terminal afterwards.
    pub fn finalize(&mut self) -> Result<Digest> {
        if self.finalized {
            return Err(Error::AlreadyFinalized { op: "finalize" });
        }
        Ok(self.finish())
    }

    /// Hash an in-memory message in one shot.
    #[must_use]
    pub fn digest(data: &[u8]) -> Digest {
        let mut hasher = Self::new();
        hasher.absorb(data);
        hasher.finish()
    }

    /// Return the session to its fresh state for reuse.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    fn absorb(&mut self, mut data: &[u8]) {
        self.total_bytes = self.total_bytes.wrapping_add(data.len() as u64);

        // Top up a partially filled buffer first.
        if self.buffer_len > 0 {
            let take = (BLOCK_SIZE - self.buffer_len).min(data.len());
            let (head, rest) = data.split_at(take);
            self.buffer[self.buffer_len..self.buffer_len + take].copy_from_slice(head);
            self.buffer_len += take;
            data = rest;

            if self.buffer_len < BLOCK_SIZE {
                return;
            }
            self.state = compress(&self.state, &self.buffer);
            self.buffer_len = 0;
        }

        // Full blocks straight from the input, no intermediate copy.
        while let Some((block, rest)) = data.split_first_chunk() {
            self.state = compress(&self.state, block);
            data = rest;
        }

        // Buffer the remainder (< 64 bytes).
        self.buffer[..data.len()].copy_from_slice(data);
        self.buffer_len = data.len();
    }

    fn finish(&mut self) -> Digest {
        let trailer = encode_trailer(&self.buffer[..self.buffer_len], self.total_bytes);
        for block in trailer.blocks() {
            self.state = compress(&self.state, block);
        }
        self.finalized = true;
        trace!(total_bytes = self.total_bytes, "digest finalized");
        Digest::from_words(&self.state)
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}
