//! gRPC flows through the same admission pipeline, exercised by calling
//! the service trait directly, plus cross-protocol parity checks.

use std::sync::Arc;
use std::time::Duration;

use tonic::metadata::MetadataValue;
use tonic::{Code, Request};

use bridge_gateway::auth::permission::{CanonicalResource, PermissionEvaluator, Verb};
use bridge_gateway::auth::validator::StaticTokenValidator;
use bridge_gateway::auth::Authenticator;
use bridge_gateway::gateway::GatewayCore;
use bridge_gateway::grpc::{BridgeServiceImpl, RpcMethod};
use bridge_gateway::proto::bridge::v1 as pb;
use bridge_gateway::proto::bridge::v1::bridge_service_server::BridgeService;
use bridge_gateway::resource::memory::MemoryStore;

fn service() -> BridgeServiceImpl {
    let core = Arc::new(GatewayCore::new(
        Authenticator::new(
            Arc::new(StaticTokenValidator::demo()),
            Duration::from_secs(1),
        ),
        PermissionEvaluator::with_defaults(),
        Arc::new(MemoryStore::demo()),
    ));
    BridgeServiceImpl::new(core)
}

fn authed<T>(message: T, token: &str) -> Request<T> {
    let mut request = Request::new(message);
    let value: MetadataValue<_> = format!("Bearer {token}").parse().unwrap();
    request.metadata_mut().insert("authorization", value);
    request
}

#[tokio::test]
async fn admin_lists_applications() {
    let response = service()
        .list_applications(authed(pb::ListApplicationsRequest {}, "admin-token"))
        .await
        .unwrap();
    let apps = response.into_inner().applications;
    assert_eq!(apps.len(), 3);
    assert_eq!(apps[2].name, "frontend");
    assert_eq!(apps[1].sync_status, pb::SyncStatus::OutOfSync as i32);
    assert!(apps[0].created_at.is_some());
}

#[tokio::test]
async fn unauthenticated_get_never_reaches_the_store() {
    let status = service()
        .get_application(Request::new(pb::GetApplicationRequest {
            name: "frontend".to_string(),
        }))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "Unauthorized");
}

#[tokio::test]
async fn unknown_token_is_unauthenticated() {
    let status = service()
        .get_settings(authed(pb::GetSettingsRequest {}, "bogus"))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::Unauthenticated);
    assert_eq!(status.message(), "Unauthorized");
}

#[tokio::test]
async fn reader_cannot_delete() {
    let status = service()
        .delete_application(authed(
            pb::DeleteApplicationRequest {
                name: "frontend".to_string(),
            },
            "demo-token",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::PermissionDenied);
}

#[tokio::test]
async fn health_is_public() {
    let response = service()
        .health(Request::new(pb::HealthRequest {}))
        .await
        .unwrap();
    assert_eq!(response.into_inner().status, "ok");
}

#[tokio::test]
async fn version_is_public() {
    let response = service()
        .version(Request::new(pb::VersionRequest {}))
        .await
        .unwrap();
    assert_eq!(response.into_inner().version, env!("CARGO_PKG_VERSION"));
}

#[tokio::test]
async fn missing_application_is_not_found() {
    let status = service()
        .get_application(authed(
            pb::GetApplicationRequest {
                name: "ghost".to_string(),
            },
            "admin-token",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::NotFound);
}

#[tokio::test]
async fn duplicate_create_is_already_exists() {
    let status = service()
        .create_application(authed(
            pb::CreateApplicationRequest {
                application: Some(pb::Application {
                    name: "frontend".to_string(),
                    ..Default::default()
                }),
            },
            "admin-token",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::AlreadyExists);
}

#[tokio::test]
async fn create_without_payload_is_invalid() {
    let status = service()
        .create_application(authed(
            pb::CreateApplicationRequest { application: None },
            "admin-token",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn update_with_blank_name_is_invalid() {
    let status = service()
        .update_application(authed(
            pb::UpdateApplicationRequest {
                name: "frontend".to_string(),
                application: Some(pb::Application {
                    name: "  ".to_string(),
                    ..Default::default()
                }),
            },
            "admin-token",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

#[tokio::test]
async fn update_settings_round_trips() {
    let svc = service();
    let updated = svc
        .update_settings(authed(
            pb::UpdateSettingsRequest {
                settings: Some(pb::Settings {
                    version: "2.0.0".to_string(),
                    cluster_name: "prod".to_string(),
                    sync_interval: 120,
                }),
            },
            "admin-token",
        ))
        .await
        .unwrap();
    assert_eq!(updated.into_inner().settings.unwrap().cluster_name, "prod");

    let fetched = svc
        .get_settings(authed(pb::GetSettingsRequest {}, "demo-token"))
        .await
        .unwrap();
    assert_eq!(fetched.into_inner().settings.unwrap().sync_interval, 120);
}

#[tokio::test]
async fn zero_sync_interval_is_invalid() {
    let status = service()
        .update_settings(authed(
            pb::UpdateSettingsRequest {
                settings: Some(pb::Settings {
                    version: "2.0.0".to_string(),
                    cluster_name: "prod".to_string(),
                    sync_interval: 0,
                }),
            },
            "admin-token",
        ))
        .await
        .unwrap_err();
    assert_eq!(status.code(), Code::InvalidArgument);
}

/// Every RPC must reduce to the same pair its REST equivalent produces.
#[test]
fn rpc_and_rest_reduce_to_the_same_canonical_pairs() {
    use axum::http::Method;

    // (method, HTTP verb, REST path)
    let table: [(RpcMethod, Method, &str); 9] = [
        (RpcMethod::ListApplications, Method::GET, "/applications"),
        (RpcMethod::GetApplication, Method::GET, "/applications/frontend"),
        (RpcMethod::CreateApplication, Method::POST, "/applications"),
        (RpcMethod::UpdateApplication, Method::PUT, "/applications/frontend"),
        (RpcMethod::DeleteApplication, Method::DELETE, "/applications/frontend"),
        (RpcMethod::GetSettings, Method::GET, "/settings"),
        (RpcMethod::UpdateSettings, Method::PUT, "/settings"),
        (RpcMethod::Health, Method::GET, "/health"),
        (RpcMethod::Version, Method::GET, "/version"),
    ];

    for (rpc, http_method, path) in table {
        let name = path.strip_prefix("/applications/");
        let (rpc_verb, rpc_resource) = rpc.canonical(name);

        let rest_verb = Verb::from_http(&http_method).unwrap();
        let rest_resource = CanonicalResource::from_path(path);

        assert_eq!(rpc_verb, rest_verb, "verb mismatch for {rpc:?}");
        assert_eq!(rpc_resource, rest_resource, "resource mismatch for {rpc:?}");
    }
}
