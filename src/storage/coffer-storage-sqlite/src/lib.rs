//! # Coffer Storage - SQLite Backend
//!
//! SQLite implementation of [`MaterialStore`]. Each record kind lives in its
//! own table. Rotating a key name deactivates the previous version and
//! inserts the new one in a single transaction, and a partial unique index
//! guarantees at most one active row per name.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;
use tracing::{debug, info};

use coffer_storage::{
    MaterialStore, Payload, Record, RecordKind, RecordMetadata, StorageError,
};

/// Columns shared by every record table, in select order.
const METADATA_COLUMNS: &str = "kid, key_name, key_type, created_at, mk_version, is_active";

/// How long a writer waits for a competing transaction before failing.
const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// SQLite storage backend.
///
/// The database lives at `{base_path}/{database}.db`.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl SqliteStore {
    /// Opens or creates the database and applies the schema.
    ///
    /// # Arguments
    ///
    /// * `base_path` - Directory where the database file is stored
    /// * `database` - Database name (must match `[a-z0-9_-]+`)
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Database name is invalid
    /// - Directory cannot be created
    /// - Database connection or migration fails
    pub async fn open(base_path: impl AsRef<Path>, database: &str) -> Result<Self, StorageError> {
        Self::validate_database_name(database)?;

        let base = base_path.as_ref();
        tokio::fs::create_dir_all(base).await.map_err(|e| {
            StorageError::ConnectionFailed(format!("failed to create directory: {e}"))
        })?;

        let db_path = base.join(format!("{database}.db"));

        debug!(database = %database, path = %db_path.display(), "Opening SQLite database");

        let options = SqliteConnectOptions::new()
            .filename(&db_path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .busy_timeout(BUSY_TIMEOUT);

        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await
            .map_err(|e| StorageError::ConnectionFailed(e.to_string()))?;

        let store = Self { pool, db_path };
        store.migrate().await?;

        info!(database = %database, "SQLite store ready");

        Ok(store)
    }

    /// Returns the path of the database file.
    pub fn path(&self) -> &Path {
        &self.db_path
    }

    /// Closes the connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }

    /// Validates that a database name is safe to use as a file name.
    ///
    /// Only allows: lowercase letters, digits, underscore, hyphen.
    fn validate_database_name(database: &str) -> Result<(), StorageError> {
        if database.is_empty() {
            return Err(StorageError::InvalidInput(
                "database name cannot be empty".into(),
            ));
        }

        if database.len() > 64 {
            return Err(StorageError::InvalidInput("database name too long".into()));
        }

        let valid = database
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');

        if !valid {
            return Err(StorageError::InvalidInput(
                "database name must match [a-z0-9_-]+".into(),
            ));
        }

        Ok(())
    }

    /// Creates the record tables and their indexes.
    async fn migrate(&self) -> Result<(), StorageError> {
        debug!("Running database migrations");

        let tables: [(RecordKind, &str); 3] = [
            (RecordKind::Secret, "value BLOB NOT NULL"),
            (
                RecordKind::AsymmetricKeyPair,
                "public_key BLOB NOT NULL, private_key BLOB NOT NULL",
            ),
            (RecordKind::SymmetricKey, "key_value BLOB NOT NULL"),
        ];

        for (kind, payload_columns) in tables {
            let table = table_name(kind);

            let statements = [
                format!(
                    r#"
                    CREATE TABLE IF NOT EXISTS {table} (
                        kid        TEXT PRIMARY KEY,
                        key_name   TEXT NOT NULL,
                        key_type   TEXT,
                        {payload_columns},
                        created_at INTEGER NOT NULL,
                        mk_version INTEGER NOT NULL,
                        is_active  INTEGER NOT NULL DEFAULT 1
                    )
                    "#
                ),
                format!("CREATE INDEX IF NOT EXISTS idx_{table}_key_name ON {table} (key_name)"),
                format!(
                    "CREATE UNIQUE INDEX IF NOT EXISTS ux_{table}_active ON {table} (key_name) WHERE is_active = 1"
                ),
            ];

            for statement in &statements {
                sqlx::query(statement)
                    .execute(&self.pool)
                    .await
                    .map_err(|e| StorageError::ConnectionFailed(format!("migration failed: {e}")))?;
            }
        }

        debug!("Migrations complete");

        Ok(())
    }
}

/// Returns the table backing a record kind.
fn table_name(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::Secret => "secrets",
        RecordKind::AsymmetricKeyPair => "asymmetric_key_pairs",
        RecordKind::SymmetricKey => "symmetric_keys",
    }
}

fn query_failed(e: sqlx::Error) -> StorageError {
    StorageError::QueryFailed(e.to_string())
}

fn decode_metadata(row: &SqliteRow) -> Result<RecordMetadata, StorageError> {
    let decode = |e: sqlx::Error| StorageError::Serialization(e.to_string());

    let created_at_micros: i64 = row.try_get("created_at").map_err(decode)?;
    let created_at = DateTime::<Utc>::from_timestamp_micros(created_at_micros).ok_or_else(|| {
        StorageError::Serialization(format!("created_at out of range: {created_at_micros}"))
    })?;

    let mk_version: i64 = row.try_get("mk_version").map_err(decode)?;
    let mk_version = u32::try_from(mk_version)
        .map_err(|_| StorageError::Serialization(format!("mk_version out of range: {mk_version}")))?;

    Ok(RecordMetadata {
        kid: row.try_get("kid").map_err(decode)?,
        key_name: row.try_get("key_name").map_err(decode)?,
        key_type: row.try_get("key_type").map_err(decode)?,
        created_at,
        mk_version,
        is_active: row.try_get("is_active").map_err(decode)?,
    })
}

fn decode_record<P: Payload>(row: &SqliteRow) -> Result<Record<P>, StorageError> {
    let meta = decode_metadata(row)?;

    let columns = P::COLUMNS
        .iter()
        .map(|column| {
            row.try_get::<Option<Vec<u8>>, _>(*column)
                .map_err(|e| StorageError::Serialization(e.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Record {
        kid: meta.kid,
        key_name: meta.key_name,
        key_type: meta.key_type,
        payload: P::from_columns(columns)?,
        created_at: meta.created_at,
        mk_version: meta.mk_version,
        is_active: meta.is_active,
    })
}

#[async_trait]
impl MaterialStore for SqliteStore {
    async fn create<P: Payload>(&self, record: Record<P>) -> Result<Record<P>, StorageError> {
        let table = table_name(P::KIND);
        let payload_columns = P::COLUMNS.join(", ");
        let placeholders = vec!["?"; P::COLUMNS.len()].join(", ");

        let mut tx = self.pool.begin().await.map_err(query_failed)?;

        let deactivated = sqlx::query(&format!(
            "UPDATE {table} SET is_active = 0 WHERE key_name = ? AND is_active = 1"
        ))
        .bind(&record.key_name)
        .execute(&mut *tx)
        .await
        .map_err(query_failed)?
        .rows_affected();

        let insert = format!(
            "INSERT INTO {table} (kid, key_name, key_type, {payload_columns}, created_at, mk_version, is_active) \
             VALUES (?, ?, ?, {placeholders}, ?, ?, 1)"
        );

        let mut query = sqlx::query(&insert)
            .bind(&record.kid)
            .bind(&record.key_name)
            .bind(record.key_type.as_deref());
        for column in record.payload.to_columns() {
            query = query.bind(column);
        }

        query
            .bind(record.created_at.timestamp_micros())
            .bind(i64::from(record.mk_version))
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                let duplicate = e
                    .as_database_error()
                    .is_some_and(|db| db.is_unique_violation());
                if duplicate {
                    StorageError::AlreadyExists(format!("{} {}", P::KIND, record.kid))
                } else {
                    query_failed(e)
                }
            })?;

        tx.commit().await.map_err(query_failed)?;

        debug!(
            kind = %P::KIND,
            key_name = %record.key_name,
            kid = %record.kid,
            deactivated,
            "Record stored"
        );

        Ok(Record {
            is_active: true,
            ..record
        })
    }

    async fn find_active<P: Payload>(
        &self,
        key_name: &str,
    ) -> Result<Option<Record<P>>, StorageError> {
        let table = table_name(P::KIND);
        let payload_columns = P::COLUMNS.join(", ");

        let row = sqlx::query(&format!(
            "SELECT {METADATA_COLUMNS}, {payload_columns} FROM {table} \
             WHERE key_name = ? AND is_active = 1 \
             ORDER BY created_at DESC, rowid DESC LIMIT 1"
        ))
        .bind(key_name)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(decode_record::<P>).transpose()
    }

    async fn find_by_kid<P: Payload>(&self, kid: &str) -> Result<Option<Record<P>>, StorageError> {
        let table = table_name(P::KIND);
        let payload_columns = P::COLUMNS.join(", ");

        let row = sqlx::query(&format!(
            "SELECT {METADATA_COLUMNS}, {payload_columns} FROM {table} WHERE kid = ?"
        ))
        .bind(kid)
        .fetch_optional(&self.pool)
        .await
        .map_err(query_failed)?;

        row.as_ref().map(decode_record::<P>).transpose()
    }

    async fn history(
        &self,
        kind: RecordKind,
        key_name: &str,
    ) -> Result<Vec<RecordMetadata>, StorageError> {
        let table = table_name(kind);

        let rows = sqlx::query(&format!(
            "SELECT {METADATA_COLUMNS} FROM {table} WHERE key_name = ? \
             ORDER BY created_at DESC, rowid DESC"
        ))
        .bind(key_name)
        .fetch_all(&self.pool)
        .await
        .map_err(query_failed)?;

        rows.iter().map(decode_metadata).collect()
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;
    use coffer_storage::{KeyPairMaterial, ReturnKeyType, SecretValue, SymmetricKeyMaterial};
    use tempfile::TempDir;

    async fn setup() -> (TempDir, SqliteStore) {
        let tmp = TempDir::new().unwrap();
        let store = SqliteStore::open(tmp.path(), "test-store").await.unwrap();
        (tmp, store)
    }

    fn secret(kid: &str, key_name: &str, value: &[u8]) -> Record<SecretValue> {
        Record {
            kid: kid.to_string(),
            key_name: key_name.to_string(),
            key_type: None,
            payload: SecretValue {
                value: value.to_vec(),
            },
            created_at: Utc::now(),
            mk_version: 1,
            is_active: true,
        }
    }

    fn key_pair(kid: &str, key_name: &str) -> Record<KeyPairMaterial> {
        Record {
            kid: kid.to_string(),
            key_name: key_name.to_string(),
            key_type: Some("rsa".into()),
            payload: KeyPairMaterial {
                public_key: b"public-blob".to_vec(),
                private_key: Some(b"private-blob".to_vec()),
            },
            created_at: Utc::now(),
            mk_version: 2,
            is_active: true,
        }
    }

    async fn active_count(store: &SqliteStore, kind: RecordKind, key_name: &str) -> usize {
        store
            .history(kind, key_name)
            .await
            .unwrap()
            .iter()
            .filter(|m| m.is_active)
            .count()
    }

    #[tokio::test]
    async fn test_open_creates_db() {
        let tmp = TempDir::new().unwrap();
        let store = SqliteStore::open(tmp.path(), "my-store").await.unwrap();

        let db_path = tmp.path().join("my-store.db");
        assert!(db_path.exists(), "database file should be created");
        assert_eq!(store.path(), db_path);
    }

    #[tokio::test]
    async fn test_database_name_validation() {
        let tmp = TempDir::new().unwrap();

        let invalid_names = ["", "Store", "my store", "store/sub", "../escape", "store.db"];

        for name in invalid_names {
            let result = SqliteStore::open(tmp.path(), name).await;
            assert!(
                matches!(result, Err(StorageError::InvalidInput(_))),
                "should reject database name: {name}"
            );
        }
    }

    #[tokio::test]
    async fn test_reopen_keeps_records() {
        let tmp = TempDir::new().unwrap();

        {
            let store = SqliteStore::open(tmp.path(), "persist").await.unwrap();
            store.create(secret("kid-1", "db_password", b"v1")).await.unwrap();
            store.close().await;
        }

        let store = SqliteStore::open(tmp.path(), "persist").await.unwrap();
        let found = store
            .find_active::<SecretValue>("db_password")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.kid, "kid-1");
    }

    #[tokio::test]
    async fn test_create_and_find_active() {
        let (_tmp, store) = setup().await;

        let stored = store
            .create(secret("kid-1", "db_password", b"ciphertext"))
            .await
            .unwrap();
        assert!(stored.is_active);

        let found = store
            .find_active::<SecretValue>("db_password")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(found.kid, "kid-1");
        assert_eq!(found.payload.value, b"ciphertext");
        assert_eq!(found.mk_version, 1);
        assert!(found.key_type.is_none());
        assert!(found.is_active);
        assert_eq!(
            found.created_at.timestamp_micros(),
            stored.created_at.timestamp_micros()
        );
    }

    #[tokio::test]
    async fn test_find_active_missing() {
        let (_tmp, store) = setup().await;

        let found = store.find_active::<SecretValue>("nope").await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_single_active_after_sequential_creates() {
        let (_tmp, store) = setup().await;

        for i in 0..5 {
            store
                .create(secret(&format!("kid-{i}"), "rotated", format!("v{i}").as_bytes()))
                .await
                .unwrap();
        }

        let history = store.history(RecordKind::Secret, "rotated").await.unwrap();
        assert_eq!(history.len(), 5);
        assert_eq!(history.iter().filter(|m| m.is_active).count(), 1);

        let found = store
            .find_active::<SecretValue>("rotated")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.kid, "kid-4");
        assert_eq!(found.payload.value, b"v4");
    }

    #[tokio::test]
    async fn test_history_newest_first() {
        let (_tmp, store) = setup().await;
        let base = Utc::now();

        for i in 0..3 {
            let mut record = secret(&format!("kid-{i}"), "ordered", b"x");
            record.created_at = base + ChronoDuration::seconds(i);
            store.create(record).await.unwrap();
        }

        let history = store.history(RecordKind::Secret, "ordered").await.unwrap();
        let kids: Vec<_> = history.iter().map(|m| m.kid.as_str()).collect();
        assert_eq!(kids, vec!["kid-2", "kid-1", "kid-0"]);
        assert!(history[0].is_active);
        assert!(!history[1].is_active);
        assert!(!history[2].is_active);
    }

    #[tokio::test]
    async fn test_concurrent_creates_leave_one_active() {
        let (_tmp, store) = setup().await;

        let mut handles = Vec::new();
        for i in 0..10 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                store
                    .create(secret(&format!("kid-{i}"), "contended", b"x"))
                    .await
            }));
        }

        for handle in handles {
            handle.await.unwrap().unwrap();
        }

        assert_eq!(active_count(&store, RecordKind::Secret, "contended").await, 1);
        assert_eq!(
            store
                .history(RecordKind::Secret, "contended")
                .await
                .unwrap()
                .len(),
            10
        );
    }

    #[tokio::test]
    async fn test_partial_index_rejects_second_active_row() {
        let (_tmp, store) = setup().await;

        store.create(secret("kid-1", "guarded", b"x")).await.unwrap();

        let result = sqlx::query(
            "INSERT INTO secrets (kid, key_name, value, created_at, mk_version, is_active) \
             VALUES ('kid-2', 'guarded', x'00', 0, 1, 1)",
        )
        .execute(&store.pool)
        .await;

        assert!(result.is_err(), "two active rows for one name must be rejected");
    }

    #[tokio::test]
    async fn test_duplicate_kid_rejected() {
        let (_tmp, store) = setup().await;

        store.create(secret("same-kid", "first", b"x")).await.unwrap();
        let result = store.create(secret("same-kid", "second", b"y")).await;

        assert!(matches!(result, Err(StorageError::AlreadyExists(_))));
        // The failed insert must not have deactivated anything.
        assert_eq!(active_count(&store, RecordKind::Secret, "first").await, 1);
    }

    #[tokio::test]
    async fn test_failed_insert_rolls_back_deactivation() {
        let (_tmp, store) = setup().await;

        store.create(secret("kid-1", "rollback", b"x")).await.unwrap();
        store.create(secret("kid-other", "other", b"x")).await.unwrap();

        let result = store.create(secret("kid-other", "rollback", b"y")).await;
        assert!(result.is_err());

        let found = store
            .find_active::<SecretValue>("rollback")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.kid, "kid-1");
    }

    #[tokio::test]
    async fn test_find_by_kid_returns_retired_versions() {
        let (_tmp, store) = setup().await;

        store.create(key_pair("kp-1", "signing")).await.unwrap();
        store.create(key_pair("kp-2", "signing")).await.unwrap();

        let retired = store
            .find_by_kid::<KeyPairMaterial>("kp-1")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(retired.key_name, "signing");
        assert!(!retired.is_active);
        assert_eq!(retired.payload.private_key.as_deref(), Some(&b"private-blob"[..]));

        let current = store
            .find_by_kid::<KeyPairMaterial>("kp-2")
            .await
            .unwrap()
            .unwrap();
        assert!(current.is_active);

        assert!(store
            .find_by_kid::<KeyPairMaterial>("kp-missing")
            .await
            .unwrap()
            .is_none());
        assert!(store
            .find_by_kid::<SecretValue>("kp-2")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_key_pair_return_types() {
        let (_tmp, store) = setup().await;

        store.create(key_pair("kp-1", "signing")).await.unwrap();

        let public = store
            .find_active_key_pair("signing", ReturnKeyType::Public)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(public.payload.public_key, b"public-blob");
        assert!(public.payload.private_key.is_none());

        let pair = store
            .find_active_key_pair("signing", ReturnKeyType::Pair)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(pair.payload.private_key.as_deref(), Some(&b"private-blob"[..]));
        assert_eq!(pair.key_type.as_deref(), Some("rsa"));
        assert_eq!(pair.mk_version, 2);
    }

    #[tokio::test]
    async fn test_key_pair_requires_private_key() {
        let (_tmp, store) = setup().await;

        let mut record = key_pair("kp-1", "signing");
        record.payload.private_key = None;

        assert!(store.create(record).await.is_err());
    }

    #[tokio::test]
    async fn test_kinds_are_isolated() {
        let (_tmp, store) = setup().await;

        store.create(secret("kid-s", "shared", b"secret")).await.unwrap();
        store
            .create(Record {
                kid: "kid-k".into(),
                key_name: "shared".into(),
                key_type: None,
                payload: SymmetricKeyMaterial {
                    key_value: b"key".to_vec(),
                },
                created_at: Utc::now(),
                mk_version: 1,
                is_active: true,
            })
            .await
            .unwrap();

        assert_eq!(active_count(&store, RecordKind::Secret, "shared").await, 1);
        assert_eq!(active_count(&store, RecordKind::SymmetricKey, "shared").await, 1);
        assert!(store
            .find_active::<KeyPairMaterial>("shared")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_binary_payload() {
        let (_tmp, store) = setup().await;

        let binary: Vec<u8> = (0..=255).collect();
        store.create(secret("kid-b", "binary", &binary)).await.unwrap();

        let found = store
            .find_active::<SecretValue>("binary")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.payload.value, binary);
    }
}
