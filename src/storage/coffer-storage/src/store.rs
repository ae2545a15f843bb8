//! Storage backend trait definition.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::model::{KeyPairMaterial, Payload, Record, RecordKind, RecordMetadata, ReturnKeyType};

/// Append-only store of versioned key material.
///
/// For every `(kind, key_name)` at most one record is active. Creating a
/// record retires the previous active one; nothing is ever deleted.
#[async_trait]
pub trait MaterialStore: Send + Sync {
    /// Persists `record` as the active version of its `key_name`.
    ///
    /// The previous active record (if any) is deactivated atomically with
    /// the insert. Returns the stored record.
    async fn create<P: Payload>(&self, record: Record<P>) -> Result<Record<P>, StorageError>;

    /// Returns the active record for `key_name`, newest first if several
    /// are somehow active.
    async fn find_active<P: Payload>(
        &self,
        key_name: &str,
    ) -> Result<Option<Record<P>>, StorageError>;

    /// Returns the record with identifier `kid`, active or not.
    async fn find_by_kid<P: Payload>(&self, kid: &str) -> Result<Option<Record<P>>, StorageError>;

    /// Lists every version ever stored for `key_name`, newest first.
    async fn history(
        &self,
        kind: RecordKind,
        key_name: &str,
    ) -> Result<Vec<RecordMetadata>, StorageError>;

    /// Returns the active key pair for `key_name`.
    ///
    /// With [`ReturnKeyType::Public`] the private key is cleared before the
    /// record leaves the store.
    async fn find_active_key_pair(
        &self,
        key_name: &str,
        return_key_type: ReturnKeyType,
    ) -> Result<Option<Record<KeyPairMaterial>>, StorageError> {
        let record = self.find_active::<KeyPairMaterial>(key_name).await?;
        Ok(record.map(|r| r.restrict_to(return_key_type)))
    }
}
