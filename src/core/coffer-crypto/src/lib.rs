//! # Coffer Crypto
//!
//! Cryptographic primitives for the Coffer key-management service.
//!
//! This crate provides:
//! - Envelope encryption of stored payloads under the master key (AES-CFB)
//! - RSA key pair generation with PKCS#8 / SubjectPublicKeyInfo PEM output
//! - Random symmetric key generation
//! - Time-ordered key identifiers
//! - A zeroizing, versioned master key type and its JSON file format

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod asymmetric;
pub mod envelope;
pub mod error;
pub mod keyfile;
pub mod keys;
pub mod kid;
pub mod random;
pub mod symmetric;

pub use asymmetric::{generate_asymmetric_key_pair, GeneratedKeyPair};
pub use envelope::{aes_decrypt, aes_encrypt};
pub use error::CryptoError;
pub use keyfile::{encode_master_key, parse_master_key, MasterKeyFile};
pub use keys::MasterKey;
pub use kid::generate_kid;
pub use symmetric::{generate_symmetric_key, GeneratedSymmetricKey};
