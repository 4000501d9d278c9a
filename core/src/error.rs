//! Error types for unseal-core.
//!
//! Every way an input can be malformed has its own variant so callers (and
//! tests) can tell validation failures apart; the FFI layer collapses all of
//! them into a single null sentinel. Display strings never echo key or
//! plaintext bytes.

use thiserror::Error;

/// Result type alias for unseal-core operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while decrypting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Input is not valid standard base64 (RFC 4648, padded alphabet).
    #[error("input is not valid base64")]
    Decode,

    /// Key length does not match any supported AES key size.
    #[error("invalid key length {len}: expected 16, 24 or 32 bytes")]
    InvalidKeyLength {
        /// Actual key length in bytes.
        len: usize,
    },

    /// Decoded ciphertext is too short to contain an IV and one data block.
    #[error("ciphertext too short: {len} bytes, need at least {minimum}")]
    CiphertextTooShort {
        /// Decoded length in bytes.
        len: usize,
        /// Minimum decoded length in bytes.
        minimum: usize,
    },

    /// Ciphertext body (after the IV) is not a whole number of blocks.
    #[error("ciphertext body of {len} bytes is not a multiple of the block size")]
    MisalignedCiphertext {
        /// Body length in bytes.
        len: usize,
    },

    /// Decrypted data does not end in a well-formed PKCS#7 padding run.
    ///
    /// Covers a padding byte of zero, a padding byte larger than the block
    /// size or the buffer, and a non-uniform padding run. With a wrong key
    /// this is the variant that usually surfaces.
    #[error("invalid padding")]
    InvalidPadding,
}
