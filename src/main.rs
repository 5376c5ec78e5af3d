//! Gateway entry point: one HTTP listener, one gRPC listener, shared
//! admission pipeline, coordinated shutdown.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use tonic::transport::server::TcpIncoming;
use tracing::info;

use bridge_gateway::auth::validator::StaticTokenValidator;
use bridge_gateway::auth::permission::PermissionEvaluator;
use bridge_gateway::auth::Authenticator;
use bridge_gateway::gateway::GatewayCore;
use bridge_gateway::grpc::BridgeServiceImpl;
use bridge_gateway::observability::init_telemetry;
use bridge_gateway::proto::bridge::v1::bridge_service_server::BridgeServiceServer;
use bridge_gateway::resource::memory::MemoryStore;
use bridge_gateway::rest::{router, RestGateway};
use bridge_gateway::shutdown::{wait_for_signal, ShutdownCoordinator};
use bridge_gateway::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env().context("invalid configuration")?;
    init_telemetry(&config)?;

    let core = Arc::new(GatewayCore::new(
        Authenticator::new(
            Arc::new(StaticTokenValidator::demo()),
            Duration::from_secs(config.auth_timeout_secs),
        ),
        PermissionEvaluator::with_defaults(),
        Arc::new(MemoryStore::demo()),
    ));

    let rest = Arc::new(RestGateway::new(Arc::clone(&core)).context("invalid route table")?);
    let app = router(rest);

    let http_addr: SocketAddr = format!("{}:{}", config.host, config.http_port)
        .parse()
        .context("invalid HTTP listen address")?;
    let grpc_addr: SocketAddr = format!("{}:{}", config.host, config.grpc_port)
        .parse()
        .context("invalid gRPC listen address")?;

    // Bind both sockets up front so a taken port fails startup instead of
    // surfacing later inside a server task.
    let http_listener = tokio::net::TcpListener::bind(http_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {http_addr}"))?;
    let grpc_incoming = TcpIncoming::new(grpc_addr, true, None)
        .map_err(|err| anyhow::anyhow!("failed to bind gRPC listener on {grpc_addr}: {err}"))?;

    let mut coordinator = ShutdownCoordinator::new();

    let http_signal = coordinator.subscribe();
    coordinator.spawn_server("http", async move {
        info!(addr = %http_addr, "HTTP server listening");
        axum::serve(http_listener, app)
            .with_graceful_shutdown(http_signal.recv())
            .await?;
        Ok(())
    });

    let grpc_signal = coordinator.subscribe();
    let grpc_service = BridgeServiceServer::new(BridgeServiceImpl::new(Arc::clone(&core)));
    coordinator.spawn_server("grpc", async move {
        info!(addr = %grpc_addr, "gRPC server listening");
        tonic::transport::Server::builder()
            .add_service(grpc_service)
            .serve_with_incoming_shutdown(grpc_incoming, grpc_signal.recv())
            .await?;
        Ok(())
    });

    wait_for_signal().await;
    coordinator
        .shutdown(Duration::from_secs(config.shutdown_timeout_secs))
        .await;
    Ok(())
}
