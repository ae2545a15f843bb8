//! Key identifier generation.
//!
//! A KID is a UUIDv7: the leading 48 bits carry the creation instant in
//! milliseconds and the rest is random, so identifiers sort roughly by
//! creation time and stay unique within the same millisecond.

use chrono::{DateTime, Utc};
use uuid::{NoContext, Timestamp, Uuid};

/// Generates a key identifier for a record created at `created_at`.
///
/// Collisions are not checked here; a duplicate surfaces as a uniqueness
/// violation when the record is persisted.
pub fn generate_kid(created_at: DateTime<Utc>) -> String {
    let seconds = u64::try_from(created_at.timestamp()).unwrap_or(0);
    let ts = Timestamp::from_unix(NoContext, seconds, created_at.timestamp_subsec_nanos());
    Uuid::new_v7(ts).hyphenated().to_string()
}
