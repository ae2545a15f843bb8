//! On-disk master key format.
//!
//! A master key file is a JSON object `{"version": <int>, "key": "<hex>"}`.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::error::CryptoError;
use crate::keys::MasterKey;

/// Serialized form of a [`MasterKey`].
#[derive(Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct MasterKeyFile {
    /// Master key version.
    pub version: u32,
    /// Hex-encoded key bytes.
    pub key: String,
}

impl MasterKeyFile {
    /// Builds the file representation of `master_key`.
    pub fn from_master_key(master_key: &MasterKey) -> Self {
        Self {
            version: master_key.version(),
            key: master_key.to_hex().to_string(),
        }
    }

    /// Decodes the key, validating its hex encoding and length.
    pub fn to_master_key(&self) -> Result<MasterKey, CryptoError> {
        MasterKey::from_hex(self.version, &self.key)
    }
}

/// Parses a master key from the contents of a key file.
pub fn parse_master_key(contents: &str) -> Result<MasterKey, CryptoError> {
    let file: MasterKeyFile = serde_json::from_str(contents)
        .map_err(|e| CryptoError::InvalidKey(format!("malformed master key file: {e}")))?;
    file.to_master_key()
}

/// Encodes `master_key` as key file contents.
pub fn encode_master_key(master_key: &MasterKey) -> Result<Zeroizing<String>, CryptoError> {
    let file = MasterKeyFile::from_master_key(master_key);
    serde_json::to_string_pretty(&file)
        .map(Zeroizing::new)
        .map_err(|e| CryptoError::InvalidInput(format!("master key encoding: {e}")))
}
