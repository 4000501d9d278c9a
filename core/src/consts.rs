//! Cipher geometry constants.

/// AES block size in bytes. Also the IV length and the upper bound on a
/// valid PKCS#7 padding run.
pub const BLOCK_SIZE: usize = 16;

/// Raw key lengths accepted by [`decrypt`](crate::decrypt::decrypt): AES-128,
/// AES-192 and AES-256 respectively.
pub const KEY_SIZES: [usize; 3] = [16, 24, 32];
