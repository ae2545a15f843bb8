//! gRPC server assembly and lifecycle.

use std::future::Future;
use std::time::Duration;

use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::transport::Server;
use tonic_health::ServingStatus;
use tracing::{info, warn};

use coffer_storage::MaterialStore;

use crate::error::ApiError;
use crate::proto::secrets_manager_service_server::SecretsManagerServiceServer;
use crate::service::SecretsManagerGrpc;

/// How long in-flight calls may run after shutdown is signalled.
pub const DEFAULT_SHUTDOWN_GRACE: Duration = Duration::from_secs(5);

/// Serves the secrets manager and health services on `listener` until
/// `shutdown` resolves.
///
/// Both the overall (`""`) and the per-service health status report
/// SERVING while running. When `shutdown` resolves they are switched to
/// NOT_SERVING first, then the listener stops accepting connections and
/// in-flight calls get `grace` to finish before they are dropped.
pub async fn serve<S, F>(
    listener: TcpListener,
    service: SecretsManagerGrpc<S>,
    shutdown: F,
    grace: Duration,
) -> Result<(), ApiError>
where
    S: MaterialStore + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let local_addr = listener.local_addr()?;

    let (mut reporter, health_service) = tonic_health::server::health_reporter();
    reporter
        .set_serving::<SecretsManagerServiceServer<SecretsManagerGrpc<S>>>()
        .await;
    reporter.set_service_status("", ServingStatus::Serving).await;

    let (draining_tx, draining_rx) = oneshot::channel::<()>();

    let signal = async move {
        shutdown.await;
        info!("Shutdown signalled, reporting NOT_SERVING");
        reporter
            .set_not_serving::<SecretsManagerServiceServer<SecretsManagerGrpc<S>>>()
            .await;
        reporter.set_service_status("", ServingStatus::NotServing).await;
        let _ = draining_tx.send(());
    };

    info!(address = %local_addr, "gRPC server listening");

    let server = Server::builder()
        .add_service(health_service)
        .add_service(SecretsManagerServiceServer::new(service))
        .serve_with_incoming_shutdown(TcpListenerStream::new(listener), signal);

    let grace_elapsed = async move {
        // The sender only drops without sending once the server has exited.
        if draining_rx.await.is_err() {
            std::future::pending::<()>().await;
        }
        tokio::time::sleep(grace).await;
    };

    tokio::select! {
        result = server => result?,
        () = grace_elapsed => {
            warn!(grace_secs = grace.as_secs_f64(), "Shutdown grace elapsed, dropping in-flight calls");
        }
    }

    info!("gRPC server stopped");

    Ok(())
}
