//! Symmetric key generation.

use chrono::{DateTime, Utc};
use zeroize::Zeroizing;

use crate::kid::generate_kid;
use crate::random::generate_key_bytes;

/// A freshly generated symmetric key.
pub struct GeneratedSymmetricKey {
    /// Identifier assigned at generation time.
    pub kid: String,
    /// Raw key bytes.
    pub key_bytes: Zeroizing<Vec<u8>>,
    /// Generation instant.
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for GeneratedSymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeneratedSymmetricKey")
            .field("kid", &self.kid)
            .field("key_bytes", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Generates `key_size` bytes of key material from the OS CSPRNG.
pub fn generate_symmetric_key(key_size: usize) -> GeneratedSymmetricKey {
    let created_at = Utc::now();

    GeneratedSymmetricKey {
        kid: generate_kid(created_at),
        key_bytes: generate_key_bytes(key_size),
        created_at,
    }
}
