//! PKCS#7 padding removal.
//!
//! The last decrypted byte announces the padding length `p`; a well-formed
//! buffer ends in `p` copies of `p` with `1 <= p <= BLOCK_SIZE`. All three
//! conditions are checked before truncating, so a corrupted or adversarial
//! ciphertext fails cleanly instead of slicing out of bounds.

use crate::consts::BLOCK_SIZE;
use crate::error::{Error, Result};

/// Strip a PKCS#7 padding run from the end of `data`, in place.
pub fn strip(data: &mut Vec<u8>) -> Result<()> {
    let pad = match data.last() {
        Some(&b) => b as usize,
        None => return Err(Error::InvalidPadding),
    };

    if pad == 0 || pad > BLOCK_SIZE || pad > data.len() {
        return Err(Error::InvalidPadding);
    }

    if data[data.len() - pad..].iter().any(|&b| b as usize != pad) {
        return Err(Error::InvalidPadding);
    }

    data.truncate(data.len() - pad);
    Ok(())
}
