//! API error types.

use thiserror::Error;

/// Errors that can occur while running the gRPC server.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Listener could not be bound or inspected.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// gRPC transport failure.
    #[error("transport error: {0}")]
    Transport(#[from] tonic::transport::Error),
}
