//! # Coffer Storage
//!
//! Storage abstraction layer for Coffer backends.
//!
//! Defines the versioned record model shared by every record kind and the
//! [`MaterialStore`] trait that backends implement.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod error;
pub mod model;
pub mod store;

pub use error::StorageError;
pub use model::{
    KeyPairMaterial, Payload, Record, RecordKind, RecordMetadata, ReturnKeyType, SecretValue,
    SymmetricKeyMaterial,
};
pub use store::MaterialStore;
