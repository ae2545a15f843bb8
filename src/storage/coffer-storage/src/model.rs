//! Versioned record model.
//!
//! Secrets, asymmetric key pairs and symmetric keys share one record shape,
//! [`Record<P>`], and differ only in their payload `P`. The same payload
//! types carry ciphertext inside the store and plaintext above it.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::error::StorageError;

/// The three independent record kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    /// Opaque secret value.
    Secret,
    /// RSA public/private key pair.
    AsymmetricKeyPair,
    /// Raw symmetric key.
    SymmetricKey,
}

impl RecordKind {
    /// Returns a stable lowercase name for logs and table names.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Secret => "secret",
            Self::AsymmetricKeyPair => "asymmetric_key_pair",
            Self::SymmetricKey => "symmetric_key",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload shape of a record kind.
///
/// Each payload maps onto one or more binary columns in the backing store.
pub trait Payload: Clone + Send + Sync + Sized + 'static {
    /// Record kind this payload belongs to.
    const KIND: RecordKind;

    /// Column names, in the order used by [`Payload::to_columns`].
    const COLUMNS: &'static [&'static str];

    /// Returns the column values in [`Payload::COLUMNS`] order.
    fn to_columns(&self) -> Vec<Option<&[u8]>>;

    /// Rebuilds the payload from column values in [`Payload::COLUMNS`] order.
    fn from_columns(columns: Vec<Option<Vec<u8>>>) -> Result<Self, StorageError>;
}

/// Metadata common to every record kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordMetadata {
    /// Unique identifier assigned at creation.
    pub kid: String,
    /// Logical, non-unique name.
    pub key_name: String,
    /// Optional free-form tag.
    pub key_type: Option<String>,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Version of the master key the payload was encrypted under.
    pub mk_version: u32,
    /// Whether this is the current version for `key_name`.
    pub is_active: bool,
}

/// A versioned record carrying payload `P`.
#[derive(Debug, Clone)]
pub struct Record<P> {
    /// Unique identifier assigned at creation.
    pub kid: String,
    /// Logical, non-unique name.
    pub key_name: String,
    /// Optional free-form tag.
    pub key_type: Option<String>,
    /// Key material or secret value.
    pub payload: P,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Version of the master key the payload was encrypted under.
    pub mk_version: u32,
    /// Whether this is the current version for `key_name`.
    pub is_active: bool,
}

impl<P> Record<P> {
    /// Returns the record metadata without the payload.
    pub fn metadata(&self) -> RecordMetadata {
        RecordMetadata {
            kid: self.kid.clone(),
            key_name: self.key_name.clone(),
            key_type: self.key_type.clone(),
            created_at: self.created_at,
            mk_version: self.mk_version,
            is_active: self.is_active,
        }
    }

    /// Replaces the payload, keeping the metadata.
    pub fn with_payload<Q>(self, payload: Q) -> Record<Q> {
        Record {
            kid: self.kid,
            key_name: self.key_name,
            key_type: self.key_type,
            payload,
            created_at: self.created_at,
            mk_version: self.mk_version,
            is_active: self.is_active,
        }
    }
}

impl Record<KeyPairMaterial> {
    /// Drops the private key unless the caller asked for the full pair.
    pub fn restrict_to(mut self, return_key_type: ReturnKeyType) -> Self {
        if return_key_type == ReturnKeyType::Public {
            self.payload.private_key = None;
        }
        self
    }
}

/// Payload of a secret record.
#[derive(Clone, PartialEq, Eq)]
pub struct SecretValue {
    /// Secret bytes.
    pub value: Vec<u8>,
}

/// Payload of an asymmetric key pair record.
#[derive(Clone, PartialEq, Eq)]
pub struct KeyPairMaterial {
    /// Public key PEM bytes.
    pub public_key: Vec<u8>,
    /// Private key PEM bytes. `None` when only the public half was requested.
    pub private_key: Option<Vec<u8>>,
}

/// Payload of a symmetric key record.
#[derive(Clone, PartialEq, Eq)]
pub struct SymmetricKeyMaterial {
    /// Raw key bytes.
    pub key_value: Vec<u8>,
}

impl fmt::Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretValue")
            .field("value", &"[REDACTED]")
            .finish()
    }
}

impl fmt::Debug for KeyPairMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyPairMaterial")
            .field("public_key", &"[REDACTED]")
            .field("private_key", &self.private_key.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl fmt::Debug for SymmetricKeyMaterial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SymmetricKeyMaterial")
            .field("key_value", &"[REDACTED]")
            .finish()
    }
}

fn required(column: Option<Vec<u8>>, name: &str) -> Result<Vec<u8>, StorageError> {
    column.ok_or_else(|| StorageError::Serialization(format!("column {name} is null")))
}

fn expect_columns(columns: &[Option<Vec<u8>>], expected: usize) -> Result<(), StorageError> {
    if columns.len() != expected {
        return Err(StorageError::Serialization(format!(
            "expected {expected} payload columns, got {}",
            columns.len()
        )));
    }
    Ok(())
}

impl Payload for SecretValue {
    const KIND: RecordKind = RecordKind::Secret;
    const COLUMNS: &'static [&'static str] = &["value"];

    fn to_columns(&self) -> Vec<Option<&[u8]>> {
        vec![Some(self.value.as_slice())]
    }

    fn from_columns(columns: Vec<Option<Vec<u8>>>) -> Result<Self, StorageError> {
        expect_columns(&columns, 1)?;
        let mut columns = columns.into_iter();
        Ok(Self {
            value: required(columns.next().flatten(), "value")?,
        })
    }
}

impl Payload for KeyPairMaterial {
    const KIND: RecordKind = RecordKind::AsymmetricKeyPair;
    const COLUMNS: &'static [&'static str] = &["public_key", "private_key"];

    fn to_columns(&self) -> Vec<Option<&[u8]>> {
        vec![Some(self.public_key.as_slice()), self.private_key.as_deref()]
    }

    fn from_columns(columns: Vec<Option<Vec<u8>>>) -> Result<Self, StorageError> {
        expect_columns(&columns, 2)?;
        let mut columns = columns.into_iter();
        Ok(Self {
            public_key: required(columns.next().flatten(), "public_key")?,
            private_key: columns.next().flatten(),
        })
    }
}

impl Payload for SymmetricKeyMaterial {
    const KIND: RecordKind = RecordKind::SymmetricKey;
    const COLUMNS: &'static [&'static str] = &["key_value"];

    fn to_columns(&self) -> Vec<Option<&[u8]>> {
        vec![Some(self.key_value.as_slice())]
    }

    fn from_columns(columns: Vec<Option<Vec<u8>>>) -> Result<Self, StorageError> {
        expect_columns(&columns, 1)?;
        let mut columns = columns.into_iter();
        Ok(Self {
            key_value: required(columns.next().flatten(), "key_value")?,
        })
    }
}

/// Which half of an asymmetric key pair a lookup should return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReturnKeyType {
    /// Public key only.
    #[default]
    Public,
    /// Public and private key.
    Pair,
}

impl ReturnKeyType {
    /// Returns the wire name of this variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "public",
            Self::Pair => "pair",
        }
    }
}

impl FromStr for ReturnKeyType {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "pair" => Ok(Self::Pair),
            other => Err(StorageError::InvalidInput(format!(
                "invalid return_key_type '{other}', expected 'public' or 'pair'"
            ))),
        }
    }
}
