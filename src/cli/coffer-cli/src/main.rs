//! Coffer CLI - Command line interface.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tonic::transport::{Channel, Endpoint};
use tonic_health::pb::health_check_response::ServingStatus;
use tonic_health::pb::health_client::HealthClient;
use tonic_health::pb::HealthCheckRequest;

use coffer_api::proto;
use coffer_api::SecretsManagerServiceClient;
use coffer_crypto::{encode_master_key, parse_master_key, MasterKey};

// ============================================================================
// CLI Structure
// ============================================================================

#[derive(Parser)]
#[command(name = "coffer")]
#[command(about = "Coffer CLI - Manage secrets, key pairs and symmetric keys")]
#[command(version)]
struct Cli {
    /// Coffer server address
    #[arg(long, default_value = "http://localhost:50051", env = "COFFER_ADDR")]
    addr: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a new master key file
    Mkgen {
        /// Where to write the key file
        #[arg(long, default_value = "master.key")]
        path: PathBuf,
        /// Replace the file if it already exists
        #[arg(long)]
        force: bool,
    },
    /// Secrets management
    Secrets {
        #[command(subcommand)]
        command: SecretsCommands,
    },
    /// RSA key pair management
    KeyPairs {
        #[command(subcommand)]
        command: KeyPairCommands,
    },
    /// Symmetric key management
    SymmetricKeys {
        #[command(subcommand)]
        command: SymmetricKeyCommands,
    },
    /// Check server health
    Health {
        /// Service name to check (empty for the whole server)
        #[arg(long, default_value = "")]
        service: String,
    },
}

#[derive(Subcommand)]
enum SecretsCommands {
    /// Get the active secret
    Get {
        /// Key name
        key_name: String,
        /// Output format (json, value)
        #[arg(long, default_value = "json")]
        format: String,
    },
    /// Store a new secret version
    Put {
        /// Key name
        key_name: String,
        /// Secret value
        value: String,
        /// Free-form type tag
        #[arg(long)]
        key_type: Option<String>,
        /// Master key version to record (defaults to the server's)
        #[arg(long)]
        mk_version: Option<i32>,
    },
}

#[derive(Subcommand)]
enum KeyPairCommands {
    /// Get the active key pair
    Get {
        /// Key name
        key_name: String,
        /// Also return the private key
        #[arg(long)]
        pair: bool,
    },
    /// Generate a new RSA key pair version
    Create {
        /// Key name
        key_name: String,
        /// Modulus size in bits
        #[arg(long, default_value = "2048")]
        key_size: i32,
        /// Free-form type tag
        #[arg(long)]
        key_type: Option<String>,
        /// Master key version to record (defaults to the server's)
        #[arg(long)]
        mk_version: Option<i32>,
    },
}

#[derive(Subcommand)]
enum SymmetricKeyCommands {
    /// Get the active symmetric key
    Get {
        /// Key name
        key_name: String,
    },
    /// Generate a new symmetric key version
    Create {
        /// Key name
        key_name: String,
        /// Key length in bytes
        #[arg(long, default_value = "32")]
        key_size: i32,
        /// Free-form type tag
        #[arg(long)]
        key_type: Option<String>,
        /// Master key version to record (defaults to the server's)
        #[arg(long)]
        mk_version: Option<i32>,
    },
}

// ============================================================================
// Output Types
// ============================================================================

#[derive(Debug, Serialize)]
struct SecretOutput {
    kid: String,
    key_name: String,
    key_type: Option<String>,
    value: String,
    created_at: Option<String>,
    mk_version: i32,
    is_active: bool,
}

#[derive(Debug, Serialize)]
struct KeyPairOutput {
    kid: String,
    key_name: String,
    key_type: Option<String>,
    public_key: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    private_key: String,
    created_at: Option<String>,
    mk_version: i32,
    is_active: bool,
}

#[derive(Debug, Serialize)]
struct SymmetricKeyOutput {
    kid: String,
    key_name: String,
    key_type: Option<String>,
    key_value: String,
    created_at: Option<String>,
    mk_version: i32,
    is_active: bool,
}

fn format_timestamp(ts: Option<prost_types::Timestamp>) -> Option<String> {
    let ts = ts?;
    let nanos = u32::try_from(ts.nanos).ok()?;
    DateTime::<Utc>::from_timestamp(ts.seconds, nanos).map(|dt| dt.to_rfc3339())
}

impl From<proto::Secret> for SecretOutput {
    fn from(s: proto::Secret) -> Self {
        Self {
            kid: s.kid,
            key_name: s.key_name,
            key_type: s.key_type,
            value: s.value,
            created_at: format_timestamp(s.created_at),
            mk_version: s.mk_version,
            is_active: s.is_active,
        }
    }
}

impl From<proto::AsymmetricKeyPair> for KeyPairOutput {
    fn from(k: proto::AsymmetricKeyPair) -> Self {
        Self {
            kid: k.kid,
            key_name: k.key_name,
            key_type: k.key_type,
            public_key: k.public_key,
            private_key: k.private_key,
            created_at: format_timestamp(k.created_at),
            mk_version: k.mk_version,
            is_active: k.is_active,
        }
    }
}

impl From<proto::SymmetricKey> for SymmetricKeyOutput {
    fn from(k: proto::SymmetricKey) -> Self {
        Self {
            kid: k.kid,
            key_name: k.key_name,
            key_type: k.key_type,
            key_value: k.key_value,
            created_at: format_timestamp(k.created_at),
            mk_version: k.mk_version,
            is_active: k.is_active,
        }
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

// ============================================================================
// gRPC Client
// ============================================================================

struct CofferClient {
    secrets: SecretsManagerServiceClient<Channel>,
    health: HealthClient<Channel>,
}

impl CofferClient {
    async fn connect(addr: &str) -> Result<Self> {
        let channel = Endpoint::from_shared(addr.to_string())
            .context("Invalid server address")?
            .connect_timeout(Duration::from_secs(5))
            .timeout(Duration::from_secs(30))
            .connect()
            .await
            .with_context(|| format!("Failed to connect to {addr}"))?;

        Ok(Self {
            secrets: SecretsManagerServiceClient::new(channel.clone()),
            health: HealthClient::new(channel),
        })
    }
}

fn rpc_failed(operation: &str, status: tonic::Status) -> anyhow::Error {
    anyhow::anyhow!("{operation} failed: {} ({:?})", status.message(), status.code())
}

// ============================================================================
// Master Key Generation
// ============================================================================

/// Returns one more than the highest version among the `*.key` files in
/// `dir`, or 1 when there are none.
///
/// Files that cannot be read or parsed are skipped.
async fn next_key_version(dir: &Path) -> Result<u32> {
    let mut entries = match tokio::fs::read_dir(dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(1),
        Err(e) => return Err(e).with_context(|| format!("Failed to read {}", dir.display())),
    };

    let mut highest = 0u32;
    while let Some(entry) = entries.next_entry().await? {
        let path = entry.path();
        if path.extension().and_then(|ext| ext.to_str()) != Some("key") {
            continue;
        }

        let Ok(contents) = tokio::fs::read_to_string(&path).await else {
            continue;
        };
        if let Ok(key) = parse_master_key(&contents) {
            highest = highest.max(key.version());
        }
    }

    highest
        .checked_add(1)
        .context("Master key version space exhausted")
}

async fn write_key_file(path: &Path, contents: &str) -> Result<()> {
    tokio::fs::write(path, contents)
        .await
        .with_context(|| format!("Failed to write {}", path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        tokio::fs::set_permissions(path, std::fs::Permissions::from_mode(0o600))
            .await
            .with_context(|| format!("Failed to restrict permissions on {}", path.display()))?;
    }

    Ok(())
}

// ============================================================================
// Command Handlers
// ============================================================================

async fn cmd_mkgen(path: &Path, force: bool) -> Result<()> {
    if !force && tokio::fs::try_exists(path).await.unwrap_or(false) {
        bail!(
            "{} already exists. Use --force to replace it",
            path.display()
        );
    }

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create {}", dir.display()))?;

    let version = next_key_version(&dir).await?;
    let key = MasterKey::generate(version);
    let contents = encode_master_key(&key)?;

    write_key_file(path, &contents).await?;

    println!(
        "Master key version {} generated and saved as {}",
        version,
        path.display()
    );

    Ok(())
}

async fn cmd_health(client: &mut CofferClient, service: &str) -> Result<()> {
    let response = client
        .health
        .check(HealthCheckRequest {
            service: service.to_string(),
        })
        .await
        .map_err(|s| rpc_failed("Health check", s))?
        .into_inner();

    let status = ServingStatus::try_from(response.status)
        .map(|s| s.as_str_name())
        .unwrap_or("UNKNOWN");

    let label = if service.is_empty() { "server" } else { service };
    println!("Coffer {label}: {status}");

    Ok(())
}

async fn cmd_secrets_get(client: &mut CofferClient, key_name: &str, format: &str) -> Result<()> {
    let secret = client
        .secrets
        .get_secret_by_name(proto::GetSecretByNameRequest {
            key_name: key_name.to_string(),
        })
        .await
        .map_err(|s| rpc_failed("Get secret", s))?
        .into_inner();

    match format {
        "json" => print_json(&SecretOutput::from(secret))?,
        "value" => println!("{}", secret.value),
        _ => bail!("Unknown format: {}. Use 'json' or 'value'", format),
    }

    Ok(())
}

async fn cmd_secrets_put(
    client: &mut CofferClient,
    key_name: &str,
    value: &str,
    key_type: Option<String>,
    mk_version: Option<i32>,
) -> Result<()> {
    let secret = client
        .secrets
        .create_secret(proto::CreateSecretRequest {
            key_name: key_name.to_string(),
            value: value.to_string(),
            key_type,
            mk_version,
        })
        .await
        .map_err(|s| rpc_failed("Put secret", s))?
        .into_inner();

    println!("Secret '{}' written (kid {})", secret.key_name, secret.kid);

    Ok(())
}

async fn cmd_key_pairs_get(client: &mut CofferClient, key_name: &str, pair: bool) -> Result<()> {
    let key_pair = client
        .secrets
        .get_asymmetric_key_pair_by_key_name(proto::GetAsymmetricKeyPairByKeyNameRequest {
            key_name: key_name.to_string(),
            return_key_type: if pair { "pair" } else { "public" }.to_string(),
        })
        .await
        .map_err(|s| rpc_failed("Get key pair", s))?
        .into_inner();

    print_json(&KeyPairOutput::from(key_pair))
}

async fn cmd_key_pairs_create(
    client: &mut CofferClient,
    key_name: &str,
    key_size: i32,
    key_type: Option<String>,
    mk_version: Option<i32>,
) -> Result<()> {
    let key_pair = client
        .secrets
        .create_asymmetric_key_pair(proto::CreateAsymmetricKeyPairRequest {
            key_name: key_name.to_string(),
            key_size,
            key_type,
            mk_version,
        })
        .await
        .map_err(|s| rpc_failed("Create key pair", s))?
        .into_inner();

    print_json(&KeyPairOutput::from(key_pair))
}

async fn cmd_symmetric_keys_get(client: &mut CofferClient, key_name: &str) -> Result<()> {
    let key = client
        .secrets
        .get_symmetric_key_by_key_name(proto::GetSymmetricKeyByKeyNameRequest {
            key_name: key_name.to_string(),
        })
        .await
        .map_err(|s| rpc_failed("Get symmetric key", s))?
        .into_inner();

    print_json(&SymmetricKeyOutput::from(key))
}

async fn cmd_symmetric_keys_create(
    client: &mut CofferClient,
    key_name: &str,
    key_size: i32,
    key_type: Option<String>,
    mk_version: Option<i32>,
) -> Result<()> {
    let key = client
        .secrets
        .create_symmetric_key(proto::CreateSymmetricKeyRequest {
            key_name: key_name.to_string(),
            key_size,
            key_type,
            mk_version,
        })
        .await
        .map_err(|s| rpc_failed("Create symmetric key", s))?
        .into_inner();

    print_json(&SymmetricKeyOutput::from(key))
}

// ============================================================================
// Main
// ============================================================================

#[tokio::main]
async fn main() -> Result<()> {
    run(Cli::parse()).await
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Mkgen { path, force } => cmd_mkgen(&path, force).await,
        Commands::Health { service } => {
            let mut client = CofferClient::connect(&cli.addr).await?;
            cmd_health(&mut client, &service).await
        },
        Commands::Secrets { command } => {
            let mut client = CofferClient::connect(&cli.addr).await?;
            match command {
                SecretsCommands::Get { key_name, format } => {
                    cmd_secrets_get(&mut client, &key_name, &format).await
                },
                SecretsCommands::Put {
                    key_name,
                    value,
                    key_type,
                    mk_version,
                } => cmd_secrets_put(&mut client, &key_name, &value, key_type, mk_version).await,
            }
        },
        Commands::KeyPairs { command } => {
            let mut client = CofferClient::connect(&cli.addr).await?;
            match command {
                KeyPairCommands::Get { key_name, pair } => {
                    cmd_key_pairs_get(&mut client, &key_name, pair).await
                },
                KeyPairCommands::Create {
                    key_name,
                    key_size,
                    key_type,
                    mk_version,
                } => {
                    cmd_key_pairs_create(&mut client, &key_name, key_size, key_type, mk_version)
                        .await
                },
            }
        },
        Commands::SymmetricKeys { command } => {
            let mut client = CofferClient::connect(&cli.addr).await?;
            match command {
                SymmetricKeyCommands::Get { key_name } => {
                    cmd_symmetric_keys_get(&mut client, &key_name).await
                },
                SymmetricKeyCommands::Create {
                    key_name,
                    key_size,
                    key_type,
                    mk_version,
                } => {
                    cmd_symmetric_keys_create(&mut client, &key_name, key_size, key_type, mk_version)
                        .await
                },
            }
        },
    }
}
