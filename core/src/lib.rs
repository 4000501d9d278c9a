//! Unseal Core - AES-CBC decryption primitive.
//!
//! This library provides one operation: recover plaintext from a
//! base64-encoded `IV || ciphertext` blob under a caller-supplied AES key.
//! It exists to back a foreign-function boundary (see the `unseal-bindings`
//! crate), so the pipeline is a single stateless function with an explicit
//! error for every way an input can be malformed.
//!
//! # Properties
//!
//! - Accepts AES-128/192/256 keys (16/24/32 raw bytes)
//! - Standard base64 (RFC 4648, padded alphabet) input
//! - IV taken from the first cipher block of the decoded input
//! - PKCS#7 padding removal with full range and uniformity validation
//! - Deterministic: identical inputs produce byte-identical plaintext
//!
//! # Constraints
//!
//! This library intentionally does NOT:
//! - Perform file or network I/O
//! - Retain key, ciphertext, or plaintext bytes between calls
//! - Log anything (every input is secret material)
//! - Hold global or cached cipher state - safe to call from any thread
//!
//! # Example
//!
//! ```
//! use unseal_core::{decrypt, Error};
//!
//! // 16 zero bytes of IV followed by one encrypted block, base64-encoded.
//! let blob = "AAAAAAAAAAAAAAAAAAAAADLf80PLSKMuXev4RlrfXzY=";
//! let plaintext = decrypt(blob, b"0123456789abcdef").unwrap();
//! assert_eq!(plaintext, b"hello world!");
//!
//! // A 10-byte key is not a valid AES key.
//! let err = decrypt(blob, b"too-short!").unwrap_err();
//! assert!(matches!(err, Error::InvalidKeyLength { len: 10 }));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod consts;
pub mod decrypt;
pub mod error;

// Internal module - padding handling is an implementation detail of decrypt.
pub(crate) mod padding;

// Re-export the high-level API at the crate root.
pub use consts::{BLOCK_SIZE, KEY_SIZES};
pub use decrypt::decrypt;
pub use error::{Error, Result};
