//! C FFI bindings for unseal-core.
//!
//! This crate is the foreign-function surface: two `extern "C"` entry points
//! a host runtime (PHP FFI, Python ctypes, anything that can load a shared
//! library) binds against. All core errors collapse to a null pointer here;
//! no error detail crosses the boundary because the host cannot be assumed
//! to understand it.
//!
//! # Memory contract
//!
//! [`DecryptString`] returns a buffer allocated by the Rust allocator and
//! ownership transfers to the caller at return. The caller releases it by
//! passing it back to [`FreeDecryptedString`], never to its own `free`.
//!
//! ```c
//! char *DecryptString(const char *encrypted_base64, const char *key);
//! void FreeDecryptedString(char *ptr);
//! ```

#![warn(unsafe_op_in_unsafe_fn)]

use std::ffi::{CStr, CString};
use std::os::raw::c_char;
use std::ptr;

/// Decrypt a base64-encoded `IV || ciphertext` C string with a raw-byte key.
///
/// `encrypted_base64` must be NUL-terminated base64 text; `key` is a
/// NUL-terminated byte string used directly as the AES key (16, 24 or 32
/// bytes before the terminator). Returns a newly allocated NUL-terminated
/// plaintext string, or null on any failure: null argument, invalid base64,
/// unsupported key length, malformed ciphertext, bad padding, or a
/// plaintext containing an interior NUL byte (unrepresentable as a C
/// string; the call fails rather than truncating).
///
/// # Safety
///
/// Both pointers must be null or point to valid NUL-terminated strings that
/// outlive the call. A non-null return must be released exactly once via
/// [`FreeDecryptedString`].
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn DecryptString(
    encrypted_base64: *const c_char,
    key: *const c_char,
) -> *mut c_char {
    if encrypted_base64.is_null() || key.is_null() {
        return ptr::null_mut();
    }

    let encoded = match unsafe { CStr::from_ptr(encrypted_base64) }.to_str() {
        Ok(s) => s,
        Err(_) => return ptr::null_mut(),
    };
    let key = unsafe { CStr::from_ptr(key) }.to_bytes();

    match unseal_core::decrypt(encoded, key) {
        Ok(plaintext) => match CString::new(plaintext) {
            Ok(s) => s.into_raw(),
            Err(_) => ptr::null_mut(),
        },
        Err(_) => ptr::null_mut(),
    }
}

/// Release a buffer previously returned by [`DecryptString`].
///
/// Null is a no-op.
///
/// # Safety
///
/// `ptr` must be null or a pointer obtained from [`DecryptString`] that has
/// not already been freed.
#[no_mangle]
#[allow(non_snake_case)]
pub unsafe extern "C" fn FreeDecryptedString(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(unsafe { CString::from_raw(ptr) });
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "0123456789abcdef";
    // "hello world!" under the key above, zero IV, PKCS#7 padded.
    const BLOB: &str = "AAAAAAAAAAAAAAAAAAAAADLf80PLSKMuXev4RlrfXzY=";

    fn cstr(s: &str) -> CString {
        CString::new(s).unwrap()
    }

    /// Call the exported entry point and copy the result out, freeing the
    /// returned buffer through the exported release function.
    fn call(encoded: &str, key: &str) -> Option<Vec<u8>> {
        let encoded = cstr(encoded);
        let key = cstr(key);
        let out = unsafe { DecryptString(encoded.as_ptr(), key.as_ptr()) };
        if out.is_null() {
            return None;
        }
        let bytes = unsafe { CStr::from_ptr(out) }.to_bytes().to_vec();
        unsafe { FreeDecryptedString(out) };
        Some(bytes)
    }

    #[test]
    fn decrypts_known_vector() {
        assert_eq!(call(BLOB, KEY).unwrap(), b"hello world!");
    }

    #[test]
    fn identical_calls_identical_output() {
        assert_eq!(call(BLOB, KEY), call(BLOB, KEY));
    }

    #[test]
    fn null_arguments_return_null() {
        let blob = cstr(BLOB);
        let key = cstr(KEY);
        unsafe {
            assert!(DecryptString(ptr::null(), key.as_ptr()).is_null());
            assert!(DecryptString(blob.as_ptr(), ptr::null()).is_null());
            assert!(DecryptString(ptr::null(), ptr::null()).is_null());
        }
    }

    #[test]
    fn bad_base64_returns_null() {
        assert_eq!(call("not-valid-base64!!", KEY), None);
    }

    #[test]
    fn bad_key_length_returns_null() {
        assert_eq!(call(BLOB, "10bytekey!"), None);
    }

    #[test]
    fn short_ciphertext_returns_null() {
        assert_eq!(call("AAAAAAAA", KEY), None);
    }

    #[test]
    fn interior_nul_plaintext_returns_null() {
        // Decrypts to "ab\0cd", which no C string can carry.
        assert_eq!(call("AAAAAAAAAAAAAAAAAAAAAGaPdpRXQHv68MqoCCs3OsI=", KEY), None);
    }

    #[test]
    fn free_null_is_noop() {
        unsafe { FreeDecryptedString(ptr::null_mut()) };
    }
}
