//! gRPC front end.
//!
//! Each RPC reduces to the same (verb, canonical resource) pair its REST
//! counterpart produces, then runs through the shared admission pipeline.
//! The derivation table lives in [`RpcMethod::canonical`] so parity with
//! the HTTP mapping can be checked in one place.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use tonic::metadata::MetadataMap;
use tonic::{Request, Response, Status};

use crate::auth::permission::{CanonicalResource, ResourceKind, Verb};
use crate::gateway::GatewayCore;
use crate::proto::bridge::v1 as pb;
use crate::proto::bridge::v1::bridge_service_server::BridgeService;
use crate::resource::{Application, ApplicationStatus, Settings, SyncStatus};

/// The RPC surface, one variant per service method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[allow(missing_docs)]
pub enum RpcMethod {
    ListApplications,
    GetApplication,
    CreateApplication,
    UpdateApplication,
    DeleteApplication,
    GetSettings,
    UpdateSettings,
    Health,
    Version,
}

impl RpcMethod {
    /// All methods, for exhaustive parity checks.
    pub const ALL: [RpcMethod; 9] = [
        RpcMethod::ListApplications,
        RpcMethod::GetApplication,
        RpcMethod::CreateApplication,
        RpcMethod::UpdateApplication,
        RpcMethod::DeleteApplication,
        RpcMethod::GetSettings,
        RpcMethod::UpdateSettings,
        RpcMethod::Health,
        RpcMethod::Version,
    ];

    /// Maps the method to the verb and resource the evaluator sees. This
    /// must agree with what the HTTP method and path of the equivalent
    /// REST request reduce to.
    pub fn canonical(self, name: Option<&str>) -> (Verb, CanonicalResource) {
        let named = |kind: ResourceKind| match name {
            Some(name) => CanonicalResource::named(kind, name),
            None => CanonicalResource::collection(kind),
        };
        match self {
            RpcMethod::ListApplications => {
                (Verb::Get, CanonicalResource::collection(ResourceKind::Applications))
            }
            RpcMethod::GetApplication => (Verb::Get, named(ResourceKind::Applications)),
            RpcMethod::CreateApplication => {
                (Verb::Create, CanonicalResource::collection(ResourceKind::Applications))
            }
            RpcMethod::UpdateApplication => (Verb::Update, named(ResourceKind::Applications)),
            RpcMethod::DeleteApplication => (Verb::Delete, named(ResourceKind::Applications)),
            RpcMethod::GetSettings => {
                (Verb::Get, CanonicalResource::collection(ResourceKind::Settings))
            }
            RpcMethod::UpdateSettings => {
                (Verb::Update, CanonicalResource::collection(ResourceKind::Settings))
            }
            RpcMethod::Health => (Verb::Get, CanonicalResource::collection(ResourceKind::Health)),
            RpcMethod::Version => {
                (Verb::Get, CanonicalResource::collection(ResourceKind::Version))
            }
        }
    }
}

/// Service implementation wired to the shared admission pipeline.
pub struct BridgeServiceImpl {
    core: Arc<GatewayCore>,
}

impl BridgeServiceImpl {
    /// Wires the service to the shared pipeline.
    pub fn new(core: Arc<GatewayCore>) -> Self {
        Self { core }
    }

    async fn authorize(
        &self,
        meta: &MetadataMap,
        method: RpcMethod,
        name: Option<&str>,
    ) -> Result<(), Status> {
        let credential = meta.get("authorization").and_then(|v| v.to_str().ok());
        let (verb, resource) = method.canonical(name);
        self.core
            .authorize(credential, verb, &resource)
            .await
            .map(|_| ())
            .map_err(Status::from)
    }
}

#[tonic::async_trait]
impl BridgeService for BridgeServiceImpl {
    async fn list_applications(
        &self,
        request: Request<pb::ListApplicationsRequest>,
    ) -> Result<Response<pb::ListApplicationsResponse>, Status> {
        let (meta, _, _) = request.into_parts();
        self.authorize(&meta, RpcMethod::ListApplications, None).await?;

        let apps = self.core.resources().list_applications().await?;
        Ok(Response::new(pb::ListApplicationsResponse {
            applications: apps.into_iter().map(application_to_proto).collect(),
        }))
    }

    async fn get_application(
        &self,
        request: Request<pb::GetApplicationRequest>,
    ) -> Result<Response<pb::GetApplicationResponse>, Status> {
        let (meta, _, req) = request.into_parts();
        self.authorize(&meta, RpcMethod::GetApplication, Some(&req.name))
            .await?;

        let app = self.core.resources().get_application(&req.name).await?;
        Ok(Response::new(pb::GetApplicationResponse {
            application: Some(application_to_proto(app)),
        }))
    }

    async fn create_application(
        &self,
        request: Request<pb::CreateApplicationRequest>,
    ) -> Result<Response<pb::CreateApplicationResponse>, Status> {
        let (meta, _, req) = request.into_parts();
        self.authorize(&meta, RpcMethod::CreateApplication, None).await?;

        let app = application_from_proto(req.application)?;
        app.validate().map_err(Status::from)?;
        let created = self.core.resources().create_application(app).await?;
        Ok(Response::new(pb::CreateApplicationResponse {
            application: Some(application_to_proto(created)),
        }))
    }

    async fn update_application(
        &self,
        request: Request<pb::UpdateApplicationRequest>,
    ) -> Result<Response<pb::UpdateApplicationResponse>, Status> {
        let (meta, _, req) = request.into_parts();
        self.authorize(&meta, RpcMethod::UpdateApplication, Some(&req.name))
            .await?;

        let app = application_from_proto(req.application)?;
        app.validate().map_err(Status::from)?;
        let updated = self
            .core
            .resources()
            .update_application(&req.name, app)
            .await?;
        Ok(Response::new(pb::UpdateApplicationResponse {
            application: Some(application_to_proto(updated)),
        }))
    }

    async fn delete_application(
        &self,
        request: Request<pb::DeleteApplicationRequest>,
    ) -> Result<Response<pb::DeleteApplicationResponse>, Status> {
        let (meta, _, req) = request.into_parts();
        self.authorize(&meta, RpcMethod::DeleteApplication, Some(&req.name))
            .await?;

        self.core.resources().delete_application(&req.name).await?;
        Ok(Response::new(pb::DeleteApplicationResponse {}))
    }

    async fn get_settings(
        &self,
        request: Request<pb::GetSettingsRequest>,
    ) -> Result<Response<pb::GetSettingsResponse>, Status> {
        let (meta, _, _) = request.into_parts();
        self.authorize(&meta, RpcMethod::GetSettings, None).await?;

        let settings = self.core.resources().get_settings().await?;
        Ok(Response::new(pb::GetSettingsResponse {
            settings: Some(settings_to_proto(settings)),
        }))
    }

    async fn update_settings(
        &self,
        request: Request<pb::UpdateSettingsRequest>,
    ) -> Result<Response<pb::UpdateSettingsResponse>, Status> {
        let (meta, _, req) = request.into_parts();
        self.authorize(&meta, RpcMethod::UpdateSettings, None).await?;

        let settings = settings_from_proto(req.settings)?;
        settings.validate().map_err(Status::from)?;
        let updated = self.core.resources().update_settings(settings).await?;
        Ok(Response::new(pb::UpdateSettingsResponse {
            settings: Some(settings_to_proto(updated)),
        }))
    }

    async fn health(
        &self,
        request: Request<pb::HealthRequest>,
    ) -> Result<Response<pb::HealthResponse>, Status> {
        let (meta, _, _) = request.into_parts();
        self.authorize(&meta, RpcMethod::Health, None).await?;

        Ok(Response::new(pb::HealthResponse {
            status: "ok".to_string(),
        }))
    }

    async fn version(
        &self,
        request: Request<pb::VersionRequest>,
    ) -> Result<Response<pb::VersionResponse>, Status> {
        let (meta, _, _) = request.into_parts();
        self.authorize(&meta, RpcMethod::Version, None).await?;

        Ok(Response::new(pb::VersionResponse {
            version: env!("CARGO_PKG_VERSION").to_string(),
        }))
    }
}

fn application_to_proto(app: Application) -> pb::Application {
    pb::Application {
        id: app.id,
        name: app.name,
        namespace: app.namespace,
        status: status_to_proto(app.status) as i32,
        sync_status: sync_status_to_proto(app.sync_status) as i32,
        created_at: Some(timestamp_to_proto(app.created_at)),
    }
}

fn application_from_proto(app: Option<pb::Application>) -> Result<Application, Status> {
    let app = app.ok_or_else(|| Status::invalid_argument("application is required"))?;
    Ok(Application {
        id: app.id,
        name: app.name,
        namespace: if app.namespace.is_empty() {
            "default".to_string()
        } else {
            app.namespace
        },
        status: status_from_proto(app.status),
        sync_status: sync_status_from_proto(app.sync_status),
        created_at: app
            .created_at
            .and_then(timestamp_from_proto)
            .unwrap_or_else(Utc::now),
    })
}

fn settings_to_proto(settings: Settings) -> pb::Settings {
    pb::Settings {
        version: settings.version,
        cluster_name: settings.cluster_name,
        sync_interval: settings.sync_interval,
    }
}

fn settings_from_proto(settings: Option<pb::Settings>) -> Result<Settings, Status> {
    let settings = settings.ok_or_else(|| Status::invalid_argument("settings is required"))?;
    Ok(Settings {
        version: settings.version,
        cluster_name: settings.cluster_name,
        sync_interval: settings.sync_interval,
    })
}

fn status_to_proto(status: ApplicationStatus) -> pb::ApplicationStatus {
    match status {
        ApplicationStatus::Healthy => pb::ApplicationStatus::Healthy,
        ApplicationStatus::Degraded => pb::ApplicationStatus::Degraded,
        ApplicationStatus::Progressing => pb::ApplicationStatus::Progressing,
        ApplicationStatus::Suspended => pb::ApplicationStatus::Suspended,
        ApplicationStatus::Unknown => pb::ApplicationStatus::Unknown,
    }
}

fn status_from_proto(status: i32) -> ApplicationStatus {
    match pb::ApplicationStatus::try_from(status) {
        Ok(pb::ApplicationStatus::Healthy) => ApplicationStatus::Healthy,
        Ok(pb::ApplicationStatus::Degraded) => ApplicationStatus::Degraded,
        Ok(pb::ApplicationStatus::Progressing) => ApplicationStatus::Progressing,
        Ok(pb::ApplicationStatus::Suspended) => ApplicationStatus::Suspended,
        _ => ApplicationStatus::Unknown,
    }
}

fn sync_status_to_proto(status: SyncStatus) -> pb::SyncStatus {
    match status {
        SyncStatus::Synced => pb::SyncStatus::Synced,
        SyncStatus::OutOfSync => pb::SyncStatus::OutOfSync,
        SyncStatus::Unknown => pb::SyncStatus::Unknown,
    }
}

fn sync_status_from_proto(status: i32) -> SyncStatus {
    match pb::SyncStatus::try_from(status) {
        Ok(pb::SyncStatus::Synced) => SyncStatus::Synced,
        Ok(pb::SyncStatus::OutOfSync) => SyncStatus::OutOfSync,
        _ => SyncStatus::Unknown,
    }
}

fn timestamp_to_proto(at: DateTime<Utc>) -> prost_types::Timestamp {
    prost_types::Timestamp {
        seconds: at.timestamp(),
        nanos: at.timestamp_subsec_nanos() as i32,
    }
}

fn timestamp_from_proto(ts: prost_types::Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp(ts.seconds, ts.nanos.try_into().ok()?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_table_covers_every_method() {
        for method in RpcMethod::ALL {
            let (verb, resource) = method.canonical(Some("frontend"));
            if verb == Verb::Get {
                assert!(verb.is_read());
            }
            assert_ne!(resource.kind, ResourceKind::Unknown);
        }
    }

    #[test]
    fn named_methods_carry_the_name() {
        let (_, resource) = RpcMethod::DeleteApplication.canonical(Some("frontend"));
        assert_eq!(resource.name.as_deref(), Some("frontend"));

        let (_, resource) = RpcMethod::ListApplications.canonical(Some("ignored"));
        assert_eq!(resource.name, None);
    }

    #[test]
    fn timestamps_round_trip() {
        let now = Utc::now();
        let restored = timestamp_from_proto(timestamp_to_proto(now)).unwrap();
        assert_eq!(restored.timestamp(), now.timestamp());
        assert_eq!(
            restored.timestamp_subsec_nanos(),
            now.timestamp_subsec_nanos()
        );
    }

    #[test]
    fn unknown_enum_values_normalize() {
        assert_eq!(status_from_proto(99), ApplicationStatus::Unknown);
        assert_eq!(sync_status_from_proto(99), SyncStatus::Unknown);
    }
}
