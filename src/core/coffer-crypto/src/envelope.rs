//! AES-CFB envelope encryption.
//!
//! Every stored payload is encrypted under the master key with AES in CFB
//! mode (128-bit feedback). A fresh random IV is generated per call and
//! prepended to the ciphertext.
//!
//! Format: `iv (16 bytes) || ciphertext`
//!
//! CFB provides confidentiality only. There is no authentication tag, so
//! decrypting under the wrong key returns different bytes instead of an
//! error. Callers must validate the plaintext (UTF-8, PEM framing) before
//! trusting it.

use aes::{Aes128, Aes192, Aes256};
use cfb_mode::cipher::{AsyncStreamCipher, KeyIvInit};
use zeroize::Zeroizing;

use crate::error::CryptoError;
use crate::random::generate_iv;

/// Size of the CFB initialization vector in bytes.
pub const IV_SIZE: usize = 16;

/// Encrypts plaintext under `key` using AES-CFB.
///
/// The AES variant follows the key length: 16, 24 or 32 bytes select
/// AES-128, AES-192 or AES-256.
///
/// # Returns
///
/// `iv || ciphertext`, where the ciphertext has the same length as the plaintext.
pub fn aes_encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let iv = generate_iv();

    let mut buf = plaintext.to_vec();
    match key.len() {
        16 => cfb_mode::Encryptor::<Aes128>::new_from_slices(key, &iv)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?
            .encrypt(&mut buf),
        24 => cfb_mode::Encryptor::<Aes192>::new_from_slices(key, &iv)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?
            .encrypt(&mut buf),
        32 => cfb_mode::Encryptor::<Aes256>::new_from_slices(key, &iv)
            .map_err(|e| CryptoError::EncryptionFailed(e.to_string()))?
            .encrypt(&mut buf),
        n => return Err(invalid_key_length(n)),
    }

    let mut result = Vec::with_capacity(IV_SIZE + buf.len());
    result.extend_from_slice(&iv);
    result.extend_from_slice(&buf);

    Ok(result)
}

/// Decrypts a blob produced by [`aes_encrypt`].
///
/// Splits off the leading IV and decrypts the remainder under `key`.
///
/// # Returns
///
/// Plaintext wrapped in `Zeroizing` for automatic memory cleanup.
pub fn aes_decrypt(key: &[u8], blob: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if blob.len() < IV_SIZE {
        return Err(CryptoError::InvalidInput(format!(
            "ciphertext too short: {} bytes",
            blob.len()
        )));
    }

    let (iv, ciphertext) = blob.split_at(IV_SIZE);
    let mut buf = Zeroizing::new(ciphertext.to_vec());

    match key.len() {
        16 => cfb_mode::Decryptor::<Aes128>::new_from_slices(key, iv)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?
            .decrypt(&mut buf),
        24 => cfb_mode::Decryptor::<Aes192>::new_from_slices(key, iv)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?
            .decrypt(&mut buf),
        32 => cfb_mode::Decryptor::<Aes256>::new_from_slices(key, iv)
            .map_err(|e| CryptoError::DecryptionFailed(e.to_string()))?
            .decrypt(&mut buf),
        n => return Err(invalid_key_length(n)),
    }

    Ok(buf)
}

/// Returns true if `len` is a valid AES key length.
pub fn is_valid_key_length(len: usize) -> bool {
    matches!(len, 16 | 24 | 32)
}

fn invalid_key_length(len: usize) -> CryptoError {
    CryptoError::InvalidKey(format!("expected 16, 24 or 32 bytes, got {len}"))
}
