//! Padding and length encoding for the final block(s).
//!
//! Converts the buffered tail of a message plus its total byte count into
//! one or two full 64-byte trailer blocks: a `0x80` marker directly after
//! the last message byte, zero fill, and the total bit length as a
//! big-endian 64-bit integer in the last 8 bytes of the final block.

use super::{BLOCK_SIZE, LENGTH_FIELD_SIZE};

/// The 1-2 blocks that close out a message.
pub(crate) struct TrailerBlocks {
    blocks: [[u8; BLOCK_SIZE]; 2],
    count: usize,
}

impl TrailerBlocks {
    /// The populated blocks, in compression order.
    pub(crate) fn blocks(&self) -> &[[u8; BLOCK_SIZE]] {
        &self.blocks[..self.count]
    }
}

/// Encode the trailer for a message whose unprocessed tail is `tail` and
/// whose total length is `total_bytes`.
///
/// `tail` must be shorter than one block; the accumulator compresses full
/// blocks eagerly so this always holds. The bit length wraps modulo 2^64
/// per the standard's length encoding.
pub(crate) fn encode_trailer(tail: &[u8], total_bytes: u64) -> TrailerBlocks {
    debug_assert!(tail.len() < BLOCK_SIZE);

    let mut blocks = [[0u8; BLOCK_SIZE]; 2];
    blocks[0][..tail.len()].copy_from_slice(tail);
    blocks[0][tail.len()] = 0x80;

    // The marker and the length field must both fit, otherwise the length
    // spills into a second all-zero block.
    let count = if tail.len() + 1 + LENGTH_FIELD_SIZE > BLOCK_SIZE {
        2
    } else {
        1
    };

    let bit_len = total_bytes.wrapping_mul(8);
    blocks[count - 1][BLOCK_SIZE - LENGTH_FIELD_SIZE..].copy_from_slice(&bit_len.to_be_bytes());

    TrailerBlocks { blocks, count }
}
