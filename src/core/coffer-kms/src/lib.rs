//! # Coffer KMS
//!
//! Key management service for secrets, RSA key pairs and symmetric keys.
//!
//! ## Features
//!
//! - Envelope encryption of every stored payload under the master key
//! - Versioning by name: each create retires the previous active version
//! - RSA key generation off the async runtime
//! - Version history per name
//!
//! The master key is never held by the service. Every call receives it
//! explicitly, so the caller decides how long it stays resident.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;

use std::ops::RangeInclusive;

use chrono::Utc;
use tracing::{debug, info};
use zeroize::Zeroizing;

use coffer_crypto::{
    aes_decrypt, aes_encrypt, generate_asymmetric_key_pair, generate_kid, generate_symmetric_key,
    CryptoError, MasterKey,
};
use coffer_storage::{
    KeyPairMaterial, MaterialStore, Record, RecordKind, RecordMetadata, ReturnKeyType,
    SecretValue, SymmetricKeyMaterial,
};

pub use error::KmsError;

/// Accepted RSA modulus sizes in bits.
pub const RSA_KEY_SIZE_RANGE: RangeInclusive<usize> = 1024..=4096;

/// Accepted symmetric key sizes in bytes.
pub const SYMMETRIC_KEY_SIZE_RANGE: RangeInclusive<usize> = 1..=1024;

/// Framing every stored PEM starts with.
const PEM_PREFIX: &str = "-----BEGIN";

/// Creates and reads versioned key material on top of a [`MaterialStore`].
pub struct KeyManagementService<S> {
    store: S,
}

impl<S: MaterialStore> KeyManagementService<S> {
    /// Creates a service backed by `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Returns the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // ========================================================================
    // Secrets
    // ========================================================================

    /// Stores `value` as the new active secret for `key_name`.
    ///
    /// The returned record carries the caller's plaintext, not a re-read of
    /// the stored row.
    pub async fn create_secrets_key(
        &self,
        key_name: &str,
        value: &str,
        master_key: &MasterKey,
        mk_version: u32,
        key_type: Option<&str>,
    ) -> Result<Record<SecretValue>, KmsError> {
        validate_key_name(key_name)?;

        let created_at = Utc::now();
        let kid = generate_kid(created_at);
        let ciphertext = aes_encrypt(master_key.as_bytes(), value.as_bytes())?;

        let stored = self
            .store
            .create(Record {
                kid,
                key_name: key_name.to_string(),
                key_type: key_type.map(str::to_string),
                payload: SecretValue { value: ciphertext },
                created_at,
                mk_version,
                is_active: true,
            })
            .await?;

        info!(key_name = %key_name, kid = %stored.kid, "Secret created");

        Ok(stored.with_payload(SecretValue {
            value: value.as_bytes().to_vec(),
        }))
    }

    /// Returns the active secret for `key_name` with its value decrypted.
    ///
    /// # Errors
    ///
    /// - [`KmsError::NotFound`] if no secret is active under this name
    /// - [`KmsError::Decryption`] if the ciphertext is malformed
    /// - [`KmsError::Encoding`] if the plaintext is not UTF-8, which is what
    ///   a wrong master key usually produces
    pub async fn get_secret_by_name(
        &self,
        key_name: &str,
        master_key: &MasterKey,
    ) -> Result<Record<SecretValue>, KmsError> {
        validate_key_name(key_name)?;

        let record = self
            .store
            .find_active::<SecretValue>(key_name)
            .await?
            .ok_or_else(|| KmsError::NotFound(format!("secret '{key_name}'")))?;

        let plaintext = decrypt(master_key, &record.payload.value)?;
        let value = String::from_utf8(plaintext.to_vec())
            .map_err(|e| KmsError::Encoding(format!("secret '{key_name}': {e}")))?;

        debug!(key_name = %key_name, kid = %record.kid, "Secret read");

        Ok(record.with_payload(SecretValue {
            value: value.into_bytes(),
        }))
    }

    // ========================================================================
    // Asymmetric key pairs
    // ========================================================================

    /// Generates an RSA key pair and stores it as the active pair for
    /// `key_name`.
    ///
    /// The row written by this call is read back by `kid` and decrypted
    /// before returning, so a failure there fails the call even though the
    /// write succeeded.
    pub async fn create_asymmetric_key_pair(
        &self,
        key_size: usize,
        key_name: &str,
        master_key: &MasterKey,
        mk_version: u32,
        key_type: Option<&str>,
    ) -> Result<Record<KeyPairMaterial>, KmsError> {
        validate_key_name(key_name)?;
        validate_key_size("RSA key_size (bits)", key_size, &RSA_KEY_SIZE_RANGE)?;

        let generated = tokio::task::spawn_blocking(move || generate_asymmetric_key_pair(key_size))
            .await
            .map_err(|e| {
                CryptoError::KeyGenerationFailed(format!("key generation task failed: {e}"))
            })??;

        let public_key = aes_encrypt(master_key.as_bytes(), generated.public_key_pem.as_bytes())?;
        let private_key = aes_encrypt(master_key.as_bytes(), generated.private_key_pem.as_bytes())?;

        let stored = self
            .store
            .create(Record {
                kid: generated.kid,
                key_name: key_name.to_string(),
                key_type: key_type.map(str::to_string),
                payload: KeyPairMaterial {
                    public_key,
                    private_key: Some(private_key),
                },
                created_at: generated.created_at,
                mk_version,
                is_active: true,
            })
            .await?;

        info!(
            key_name = %key_name,
            kid = %stored.kid,
            key_size,
            "Asymmetric key pair created"
        );

        let written = self
            .store
            .find_by_kid::<KeyPairMaterial>(&stored.kid)
            .await?
            .ok_or_else(|| {
                KmsError::Storage(format!("asymmetric key pair {} missing after write", stored.kid))
            })?
            .restrict_to(ReturnKeyType::Pair);

        decrypt_key_pair(master_key, written)
    }

    /// Returns the active key pair for `key_name`.
    ///
    /// The private key is decrypted and returned only for
    /// [`ReturnKeyType::Pair`].
    pub async fn get_asymmetric_key_pair_by_key_name(
        &self,
        key_name: &str,
        master_key: &MasterKey,
        return_key_type: ReturnKeyType,
    ) -> Result<Record<KeyPairMaterial>, KmsError> {
        validate_key_name(key_name)?;

        let record = self
            .store
            .find_active_key_pair(key_name, return_key_type)
            .await?
            .ok_or_else(|| KmsError::NotFound(format!("asymmetric key pair '{key_name}'")))?;

        debug!(
            key_name = %key_name,
            kid = %record.kid,
            return_key_type = return_key_type.as_str(),
            "Asymmetric key pair read"
        );

        decrypt_key_pair(master_key, record)
    }

    // ========================================================================
    // Symmetric keys
    // ========================================================================

    /// Generates `key_size` random bytes and stores them as the active
    /// symmetric key for `key_name`.
    pub async fn create_symmetric_key(
        &self,
        key_size: usize,
        key_name: &str,
        master_key: &MasterKey,
        mk_version: u32,
        key_type: Option<&str>,
    ) -> Result<Record<SymmetricKeyMaterial>, KmsError> {
        validate_key_name(key_name)?;
        validate_key_size("symmetric key_size (bytes)", key_size, &SYMMETRIC_KEY_SIZE_RANGE)?;

        let generated = generate_symmetric_key(key_size);
        let ciphertext = aes_encrypt(master_key.as_bytes(), &generated.key_bytes)?;

        let stored = self
            .store
            .create(Record {
                kid: generated.kid.clone(),
                key_name: key_name.to_string(),
                key_type: key_type.map(str::to_string),
                payload: SymmetricKeyMaterial {
                    key_value: ciphertext,
                },
                created_at: generated.created_at,
                mk_version,
                is_active: true,
            })
            .await?;

        info!(key_name = %key_name, kid = %stored.kid, key_size, "Symmetric key created");

        Ok(stored.with_payload(SymmetricKeyMaterial {
            key_value: generated.key_bytes.to_vec(),
        }))
    }

    /// Returns the active symmetric key for `key_name` with its bytes
    /// decrypted.
    ///
    /// Raw key bytes carry no framing, so a wrong master key is not
    /// detected here: the call succeeds with unrelated bytes.
    pub async fn get_symmetric_key_by_key_name(
        &self,
        key_name: &str,
        master_key: &MasterKey,
    ) -> Result<Record<SymmetricKeyMaterial>, KmsError> {
        validate_key_name(key_name)?;

        let record = self
            .store
            .find_active::<SymmetricKeyMaterial>(key_name)
            .await?
            .ok_or_else(|| KmsError::NotFound(format!("symmetric key '{key_name}'")))?;

        let key_value = decrypt(master_key, &record.payload.key_value)?;

        debug!(key_name = %key_name, kid = %record.kid, "Symmetric key read");

        Ok(record.with_payload(SymmetricKeyMaterial {
            key_value: key_value.to_vec(),
        }))
    }

    // ========================================================================
    // History
    // ========================================================================

    /// Lists every version stored under `key_name` for `kind`, newest first.
    ///
    /// Returns an empty list for unknown names.
    pub async fn history(
        &self,
        kind: RecordKind,
        key_name: &str,
    ) -> Result<Vec<RecordMetadata>, KmsError> {
        validate_key_name(key_name)?;
        Ok(self.store.history(kind, key_name).await?)
    }
}

fn validate_key_name(key_name: &str) -> Result<(), KmsError> {
    if key_name.is_empty() {
        return Err(KmsError::InvalidArgument("key_name cannot be empty".into()));
    }
    Ok(())
}

fn validate_key_size(
    what: &str,
    key_size: usize,
    range: &RangeInclusive<usize>,
) -> Result<(), KmsError> {
    if !range.contains(&key_size) {
        return Err(KmsError::InvalidArgument(format!(
            "{what} must be between {} and {}, got {key_size}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

fn decrypt(master_key: &MasterKey, blob: &[u8]) -> Result<Zeroizing<Vec<u8>>, KmsError> {
    aes_decrypt(master_key.as_bytes(), blob).map_err(|e| KmsError::Decryption(e.to_string()))
}

/// Decrypts the public key and, when present, the private key of `record`.
fn decrypt_key_pair(
    master_key: &MasterKey,
    record: Record<KeyPairMaterial>,
) -> Result<Record<KeyPairMaterial>, KmsError> {
    let public_key = decrypt_pem(master_key, &record.payload.public_key)?;
    let private_key = record
        .payload
        .private_key
        .as_deref()
        .map(|blob| decrypt_pem(master_key, blob))
        .transpose()?;

    Ok(record.with_payload(KeyPairMaterial {
        public_key,
        private_key,
    }))
}

/// Decrypts a stored PEM and checks that it still looks like one.
fn decrypt_pem(master_key: &MasterKey, blob: &[u8]) -> Result<Vec<u8>, KmsError> {
    let plaintext = decrypt(master_key, blob)?;

    match std::str::from_utf8(&plaintext) {
        Ok(pem) if pem.starts_with(PEM_PREFIX) => Ok(plaintext.to_vec()),
        _ => Err(KmsError::Decryption(
            "decrypted key material is not a PEM document".into(),
        )),
    }
}
