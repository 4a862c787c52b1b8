use thiserror::Error;

/// Errors that can occur while building an RC5 engine or transforming a block.
///
/// Every variant is detected before any arithmetic takes place, so a failed
/// call never leaves an engine in a partially updated state.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum Rc5Error {
    /// Occurs when the secret key is empty.
    #[error("Key must contain at least one byte")]
    InvalidKey,

    /// Occurs when a block passed to encryption or decryption does not have
    /// exactly the size of two words.
    #[error("Block must be exactly {expected} bytes, got {actual}")]
    InvalidLength {
        /// The block size required by the cipher parameters.
        expected: usize,
        /// The length of the rejected input.
        actual: usize,
    },

    /// Occurs when the requested word size has no matching magic constants.
    #[error("Unsupported word size of {0} bits, only 32-bit words are supported")]
    UnsupportedWordSize(u32),
}
