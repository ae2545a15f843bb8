//! `SecretsManagerService` implementation.

use std::sync::Arc;

use tonic::{Request, Response, Status};
use tracing::{debug, warn};

use coffer_crypto::MasterKey;
use coffer_kms::{KeyManagementService, KmsError};
use coffer_storage::{MaterialStore, ReturnKeyType};

use crate::proto::secrets_manager_service_server::SecretsManagerService;
use crate::proto::{
    AsymmetricKeyPair, CreateAsymmetricKeyPairRequest, CreateSecretRequest,
    CreateSymmetricKeyRequest, GetAsymmetricKeyPairByKeyNameRequest, GetSecretByNameRequest,
    GetSymmetricKeyByKeyNameRequest, Secret, SymmetricKey,
};
use crate::status::kms_status;

/// gRPC facade over the key management service.
///
/// Holds the resident master key. When none is loaded every call fails with
/// `FAILED_PRECONDITION` before storage is touched.
pub struct SecretsManagerGrpc<S> {
    kms: Arc<KeyManagementService<S>>,
    master_key: Option<Arc<MasterKey>>,
}

impl<S> SecretsManagerGrpc<S> {
    /// Creates the facade.
    pub fn new(kms: Arc<KeyManagementService<S>>, master_key: Option<Arc<MasterKey>>) -> Self {
        Self { kms, master_key }
    }

    fn master_key(&self) -> Result<&MasterKey, Status> {
        self.master_key.as_deref().ok_or_else(|| {
            warn!("Request rejected: master key not loaded");
            Status::failed_precondition("master key not loaded")
        })
    }
}

/// Resolves the master key version recorded on a new row.
///
/// Unset and `0` both mean the resident key's version.
fn resolve_mk_version(master_key: &MasterKey, requested: Option<i32>) -> Result<u32, KmsError> {
    match requested {
        None | Some(0) => Ok(master_key.version()),
        Some(v) => u32::try_from(v)
            .map_err(|_| KmsError::InvalidArgument(format!("mk_version must be positive, got {v}"))),
    }
}

fn key_size(requested: i32) -> Result<usize, KmsError> {
    usize::try_from(requested)
        .map_err(|_| KmsError::InvalidArgument(format!("key_size must be positive, got {requested}")))
}

fn parse_return_key_type(requested: &str) -> Result<ReturnKeyType, KmsError> {
    if requested.is_empty() {
        return Ok(ReturnKeyType::default());
    }
    Ok(requested.parse()?)
}

#[tonic::async_trait]
impl<S: MaterialStore + 'static> SecretsManagerService for SecretsManagerGrpc<S> {
    async fn create_secret(
        &self,
        request: Request<CreateSecretRequest>,
    ) -> Result<Response<Secret>, Status> {
        const OP: &str = "CreateSecret";
        let master_key = self.master_key()?;
        let req = request.into_inner();

        debug!(key_name = %req.key_name, "CreateSecret");

        let result = async {
            let mk_version = resolve_mk_version(master_key, req.mk_version)?;
            let record = self
                .kms
                .create_secrets_key(
                    &req.key_name,
                    &req.value,
                    master_key,
                    mk_version,
                    req.key_type.as_deref(),
                )
                .await?;
            Secret::try_from(record)
        }
        .await;

        result.map(Response::new).map_err(|e| kms_status(OP, e))
    }

    async fn get_secret_by_name(
        &self,
        request: Request<GetSecretByNameRequest>,
    ) -> Result<Response<Secret>, Status> {
        const OP: &str = "GetSecretByName";
        let master_key = self.master_key()?;
        let req = request.into_inner();

        debug!(key_name = %req.key_name, "GetSecretByName");

        let result = async {
            let record = self.kms.get_secret_by_name(&req.key_name, master_key).await?;
            Secret::try_from(record)
        }
        .await;

        result.map(Response::new).map_err(|e| kms_status(OP, e))
    }

    async fn create_asymmetric_key_pair(
        &self,
        request: Request<CreateAsymmetricKeyPairRequest>,
    ) -> Result<Response<AsymmetricKeyPair>, Status> {
        const OP: &str = "CreateAsymmetricKeyPair";
        let master_key = self.master_key()?;
        let req = request.into_inner();

        debug!(key_name = %req.key_name, key_size = req.key_size, "CreateAsymmetricKeyPair");

        let result = async {
            let mk_version = resolve_mk_version(master_key, req.mk_version)?;
            let record = self
                .kms
                .create_asymmetric_key_pair(
                    key_size(req.key_size)?,
                    &req.key_name,
                    master_key,
                    mk_version,
                    req.key_type.as_deref(),
                )
                .await?;
            AsymmetricKeyPair::try_from(record)
        }
        .await;

        result.map(Response::new).map_err(|e| kms_status(OP, e))
    }

    async fn get_asymmetric_key_pair_by_key_name(
        &self,
        request: Request<GetAsymmetricKeyPairByKeyNameRequest>,
    ) -> Result<Response<AsymmetricKeyPair>, Status> {
        const OP: &str = "GetAsymmetricKeyPairByKeyName";
        let master_key = self.master_key()?;
        let req = request.into_inner();

        debug!(
            key_name = %req.key_name,
            return_key_type = %req.return_key_type,
            "GetAsymmetricKeyPairByKeyName"
        );

        let result = async {
            let return_key_type = parse_return_key_type(&req.return_key_type)?;
            let record = self
                .kms
                .get_asymmetric_key_pair_by_key_name(&req.key_name, master_key, return_key_type)
                .await?;
            AsymmetricKeyPair::try_from(record)
        }
        .await;

        result.map(Response::new).map_err(|e| kms_status(OP, e))
    }

    async fn create_symmetric_key(
        &self,
        request: Request<CreateSymmetricKeyRequest>,
    ) -> Result<Response<SymmetricKey>, Status> {
        const OP: &str = "CreateSymmetricKey";
        let master_key = self.master_key()?;
        let req = request.into_inner();

        debug!(key_name = %req.key_name, key_size = req.key_size, "CreateSymmetricKey");

        let result = async {
            let mk_version = resolve_mk_version(master_key, req.mk_version)?;
            let record = self
                .kms
                .create_symmetric_key(
                    key_size(req.key_size)?,
                    &req.key_name,
                    master_key,
                    mk_version,
                    req.key_type.as_deref(),
                )
                .await?;
            Ok::<_, KmsError>(SymmetricKey::from(record))
        }
        .await;

        result.map(Response::new).map_err(|e| kms_status(OP, e))
    }

    async fn get_symmetric_key_by_key_name(
        &self,
        request: Request<GetSymmetricKeyByKeyNameRequest>,
    ) -> Result<Response<SymmetricKey>, Status> {
        const OP: &str = "GetSymmetricKeyByKeyName";
        let master_key = self.master_key()?;
        let req = request.into_inner();

        debug!(key_name = %req.key_name, "GetSymmetricKeyByKeyName");

        let result = async {
            let record = self
                .kms
                .get_symmetric_key_by_key_name(&req.key_name, master_key)
                .await?;
            Ok::<_, KmsError>(SymmetricKey::from(record))
        }
        .await;

        result.map(Response::new).map_err(|e| kms_status(OP, e))
    }
}
