//! Conversions from domain records to wire messages.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use chrono::{DateTime, Utc};
use coffer_kms::KmsError;
use coffer_storage::{KeyPairMaterial, Record, SecretValue, SymmetricKeyMaterial};

use crate::proto;

fn timestamp(at: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: at.timestamp(),
        nanos: i32::try_from(at.timestamp_subsec_nanos()).unwrap_or(0),
    }
}

fn wire_version(mk_version: u32) -> i32 {
    i32::try_from(mk_version).unwrap_or(i32::MAX)
}

fn utf8(field: &str, bytes: Vec<u8>) -> Result<String, KmsError> {
    String::from_utf8(bytes).map_err(|e| KmsError::Encoding(format!("{field}: {e}")))
}

impl TryFrom<Record<SecretValue>> for proto::Secret {
    type Error = KmsError;

    fn try_from(record: Record<SecretValue>) -> Result<Self, Self::Error> {
        Ok(Self {
            value: utf8("value", record.payload.value)?,
            kid: record.kid,
            key_name: record.key_name,
            key_type: record.key_type,
            created_at: Some(timestamp(record.created_at)),
            mk_version: wire_version(record.mk_version),
            is_active: record.is_active,
        })
    }
}

impl TryFrom<Record<KeyPairMaterial>> for proto::AsymmetricKeyPair {
    type Error = KmsError;

    fn try_from(record: Record<KeyPairMaterial>) -> Result<Self, Self::Error> {
        let private_key = match record.payload.private_key {
            Some(pem) => utf8("private_key", pem)?,
            None => String::new(),
        };

        Ok(Self {
            public_key: utf8("public_key", record.payload.public_key)?,
            private_key,
            kid: record.kid,
            key_name: record.key_name,
            key_type: record.key_type,
            created_at: Some(timestamp(record.created_at)),
            mk_version: wire_version(record.mk_version),
            is_active: record.is_active,
        })
    }
}

impl From<Record<SymmetricKeyMaterial>> for proto::SymmetricKey {
    fn from(record: Record<SymmetricKeyMaterial>) -> Self {
        Self {
            key_value: STANDARD.encode(&record.payload.key_value),
            kid: record.kid,
            key_name: record.key_name,
            key_type: record.key_type,
            created_at: Some(timestamp(record.created_at)),
            mk_version: wire_version(record.mk_version),
            is_active: record.is_active,
        }
    }
}
