//! Master key type with automatic memory zeroization.
//!
//! The master key encrypts every payload stored by Coffer. It is loaded once
//! at startup and handed explicitly to each service call.

use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::envelope::is_valid_key_length;
use crate::error::CryptoError;
use crate::random::generate_key_bytes;

/// Size of a freshly generated master key in bytes (AES-256).
pub const MASTER_KEY_SIZE: usize = 32;

/// A versioned master key.
///
/// The version is recorded on every record written under this key. It is
/// not used to choose a key during decryption.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct MasterKey {
    version: u32,
    bytes: Vec<u8>,
}

impl MasterKey {
    /// Generates a new random 256-bit master key.
    pub fn generate(version: u32) -> Self {
        let bytes = generate_key_bytes(MASTER_KEY_SIZE);
        Self {
            version,
            bytes: bytes.to_vec(),
        }
    }

    /// Creates a master key from raw bytes.
    ///
    /// # Errors
    ///
    /// Returns an error unless the input is 16, 24 or 32 bytes.
    pub fn from_bytes(version: u32, bytes: &[u8]) -> Result<Self, CryptoError> {
        if !is_valid_key_length(bytes.len()) {
            return Err(CryptoError::InvalidKey(format!(
                "master key must be 16, 24 or 32 bytes, got {}",
                bytes.len()
            )));
        }

        Ok(Self {
            version,
            bytes: bytes.to_vec(),
        })
    }

    /// Creates a master key from a hex string.
    pub fn from_hex(version: u32, hex_key: &str) -> Result<Self, CryptoError> {
        let bytes = Zeroizing::new(
            hex::decode(hex_key.trim())
                .map_err(|e| CryptoError::InvalidKey(format!("invalid hex: {e}")))?,
        );
        Self::from_bytes(version, &bytes)
    }

    /// Returns the key version.
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Returns the raw key bytes.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the key bytes as lowercase hex.
    pub fn to_hex(&self) -> Zeroizing<String> {
        Zeroizing::new(hex::encode(&self.bytes))
    }
}

impl std::fmt::Debug for MasterKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterKey")
            .field("version", &self.version)
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}
