//! The decryption pipeline.
//!
//! One linear pass: base64 decode, validate key and ciphertext geometry,
//! split off the IV, CBC-decrypt, strip padding. Any validation failure
//! aborts the call; no partial plaintext is ever returned.

use aes::cipher::{block_padding::NoPadding, BlockDecryptMut, KeyIvInit};
use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::consts::{BLOCK_SIZE, KEY_SIZES};
use crate::error::{Error, Result};
use crate::padding;

type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;
type Aes192CbcDec = cbc::Decryptor<aes::Aes192>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Decrypt a base64-encoded `IV || ciphertext` blob with `key`.
///
/// The first [`BLOCK_SIZE`] decoded bytes are the IV; the rest is the CBC
/// ciphertext body. The decrypted body must end in a well-formed PKCS#7
/// padding run, which is validated and removed.
///
/// # Arguments
///
/// * `encoded_ciphertext` - standard base64 (RFC 4648, padded alphabet)
/// * `key` - raw AES key bytes, 16, 24 or 32 of them
///
/// # Errors
///
/// * [`Error::Decode`] - `encoded_ciphertext` is not valid base64
/// * [`Error::InvalidKeyLength`] - key is not an accepted AES key size
/// * [`Error::CiphertextTooShort`] - decoded input smaller than an IV plus
///   one data block
/// * [`Error::MisalignedCiphertext`] - body is not a whole number of blocks
/// * [`Error::InvalidPadding`] - decrypted data does not end in a valid
///   padding run (typical symptom of a wrong key or corrupted ciphertext)
pub fn decrypt(encoded_ciphertext: &str, key: &[u8]) -> Result<Vec<u8>> {
    let decoded = STANDARD
        .decode(encoded_ciphertext)
        .map_err(|_| Error::Decode)?;

    if !KEY_SIZES.contains(&key.len()) {
        return Err(Error::InvalidKeyLength { len: key.len() });
    }

    // An IV alone carries no data, so the floor is two blocks.
    let minimum = 2 * BLOCK_SIZE;
    if decoded.len() < minimum {
        return Err(Error::CiphertextTooShort {
            len: decoded.len(),
            minimum,
        });
    }

    let (iv, body) = decoded.split_at(BLOCK_SIZE);

    if body.len() % BLOCK_SIZE != 0 {
        return Err(Error::MisalignedCiphertext { len: body.len() });
    }

    // Key length is matched above, so cipher construction cannot fail here.
    let bad_key = |_| Error::InvalidKeyLength { len: key.len() };
    let misaligned = |_| Error::MisalignedCiphertext { len: body.len() };
    let mut plaintext = match key.len() {
        16 => Aes128CbcDec::new_from_slices(key, iv)
            .map_err(bad_key)?
            .decrypt_padded_vec_mut::<NoPadding>(body)
            .map_err(misaligned)?,
        24 => Aes192CbcDec::new_from_slices(key, iv)
            .map_err(bad_key)?
            .decrypt_padded_vec_mut::<NoPadding>(body)
            .map_err(misaligned)?,
        _ => Aes256CbcDec::new_from_slices(key, iv)
            .map_err(bad_key)?
            .decrypt_padded_vec_mut::<NoPadding>(body)
            .map_err(misaligned)?,
    };

    padding::strip(&mut plaintext)?;
    Ok(plaintext)
}
