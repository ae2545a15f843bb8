//! Translation of domain errors into gRPC statuses.

use coffer_kms::KmsError;
use tonic::Status;
use tracing::{error, warn};

/// Maps a service error onto the status returned to the caller.
///
/// Only not-found and argument errors echo their message. Everything that
/// could reveal stored material gets a fixed message, and unexpected
/// failures are logged in full here and reported as `INTERNAL`.
pub(crate) fn kms_status(operation: &'static str, err: KmsError) -> Status {
    match err {
        KmsError::NotFound(msg) => Status::not_found(msg),
        KmsError::InvalidArgument(msg) => Status::invalid_argument(msg),
        KmsError::Decryption(detail) => {
            warn!(operation, error = %detail, "Stored material failed to decrypt");
            Status::permission_denied("stored material cannot be decrypted with the current master key")
        },
        KmsError::Encoding(detail) => {
            warn!(operation, error = %detail, "Decrypted value is not valid UTF-8");
            Status::data_loss("decrypted value is not valid UTF-8")
        },
        other => {
            error!(operation, error = %other, "Request failed");
            Status::internal("internal error")
        },
    }
}
