//! Hash engine error types.

use thiserror::Error;

/// Usage-contract errors reported by the hash engine.
///
/// The engine has no data-dependent failures: every byte sequence of every
/// length is valid input, and the fixed-size internal state never allocates
/// after construction. The only runtime error is driving a session past its
/// terminal state.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    /// Operation attempted on an already finalized session
    #[error("hashing session already finalized: {op} rejected")]
    AlreadyFinalized {
        /// The rejected operation
        op: &'static str,
    },
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
