//! # Coffer API
//!
//! gRPC layer for Coffer.
//!
//! ## Services
//!
//! - `secrets_manager.v1.SecretsManagerService` - secrets, RSA key pairs and
//!   symmetric keys
//! - `grpc.health.v1.Health` - standard health checking
//!
//! Domain errors are translated to gRPC statuses here and nowhere else.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod convert;
pub mod error;
pub mod server;
pub mod service;
mod status;

/// Protobuf messages, client and server stubs for `secrets_manager.v1`.
#[allow(missing_docs, clippy::derive_partial_eq_without_eq)]
pub mod proto {
    include!("gen/secrets_manager.v1.rs");
}

pub use error::ApiError;
pub use proto::secrets_manager_service_client::SecretsManagerServiceClient;
pub use proto::secrets_manager_service_server::{
    SecretsManagerService, SecretsManagerServiceServer, SERVICE_NAME,
};
pub use server::{serve, DEFAULT_SHUTDOWN_GRACE};
pub use service::SecretsManagerGrpc;
