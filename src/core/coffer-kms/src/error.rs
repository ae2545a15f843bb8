//! KMS error types.

use coffer_storage::StorageError;
use thiserror::Error;

/// Errors that can occur in the key management service.
#[derive(Debug, Error)]
pub enum KmsError {
    /// No active record exists for the requested name.
    #[error("not found: {0}")]
    NotFound(String),

    /// Stored ciphertext could not be decrypted under the supplied master key.
    #[error("decryption failed: {0}")]
    Decryption(String),

    /// Decrypted bytes are not valid UTF-8 where text is required.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// Caller supplied an argument outside the accepted range.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Storage error.
    #[error("storage error: {0}")]
    Storage(String),

    /// Cryptographic error.
    #[error("crypto error: {0}")]
    Crypto(#[from] coffer_crypto::CryptoError),
}

impl From<StorageError> for KmsError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::InvalidInput(msg) => Self::InvalidArgument(msg),
            other => Self::Storage(other.to_string()),
        }
    }
}
