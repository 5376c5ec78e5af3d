//! Resource domain model and the service boundary the gateways call into.

pub mod memory;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::GatewayError;

/// Health of a managed application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum ApplicationStatus {
    /// Running and passing checks.
    Healthy,
    /// Running with failing checks.
    Degraded,
    /// Rollout in progress.
    Progressing,
    /// Reconciliation paused.
    Suspended,
    /// State could not be determined.
    #[default]
    Unknown,
}

/// Whether the deployed state matches the declared state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "PascalCase")]
pub enum SyncStatus {
    /// Deployed state matches.
    Synced,
    /// Deployed state has drifted.
    OutOfSync,
    /// State could not be determined.
    #[default]
    Unknown,
}

/// A managed application record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Assigned on create when the caller leaves it empty.
    #[serde(default)]
    pub id: String,
    /// Unique name, the lookup key.
    pub name: String,
    /// Target namespace.
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Health of the deployed workload.
    #[serde(default)]
    pub status: ApplicationStatus,
    /// Drift between declared and deployed state.
    #[serde(default)]
    pub sync_status: SyncStatus,
    /// Creation time, assigned on create when the caller omits it.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

fn default_namespace() -> String {
    "default".to_string()
}

impl Application {
    /// Rejects records that cannot be stored.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.name.trim().is_empty() {
            return Err(GatewayError::BadRequest {
                reason: "application name must not be empty".to_string(),
            });
        }
        Ok(())
    }
}

/// Cluster-wide settings document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Settings {
    /// Version string reported by the gateway.
    pub version: String,
    /// Name of the managed cluster.
    pub cluster_name: String,
    /// Reconciliation interval in seconds.
    pub sync_interval: u32,
}

impl Settings {
    /// The document served before any update.
    pub fn defaults() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            cluster_name: "local".to_string(),
            sync_interval: 300,
        }
    }

    /// Rejects documents that cannot be stored.
    pub fn validate(&self) -> Result<(), GatewayError> {
        if self.cluster_name.trim().is_empty() {
            return Err(GatewayError::BadRequest {
                reason: "clusterName must not be empty".to_string(),
            });
        }
        if self.sync_interval == 0 {
            return Err(GatewayError::BadRequest {
                reason: "syncInterval must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

/// Failures from a resource backend.
#[derive(Error, Debug)]
pub enum ResourceError {
    /// No application with the given name.
    #[error("application {name} not found")]
    NotFound {
        /// Requested application name.
        name: String,
    },

    /// An application with the given name already exists.
    #[error("application {name} already exists")]
    AlreadyExists {
        /// Conflicting application name.
        name: String,
    },

    /// The backend itself failed.
    #[error("resource backend failure")]
    Backend(#[from] anyhow::Error),
}

impl From<ResourceError> for GatewayError {
    fn from(err: ResourceError) -> Self {
        match err {
            ResourceError::NotFound { name } => GatewayError::ResourceNotFound { name },
            ResourceError::AlreadyExists { name } => GatewayError::AlreadyExists { name },
            ResourceError::Backend(err) => GatewayError::Collaborator(err),
        }
    }
}

impl From<ResourceError> for tonic::Status {
    fn from(err: ResourceError) -> Self {
        GatewayError::from(err).to_status()
    }
}

/// The collaborator both gateways dispatch into. Implementations own
/// storage; the gateways own authentication, authorization, and routing.
#[async_trait]
pub trait ResourceService: Send + Sync {
    /// All applications.
    async fn list_applications(&self) -> Result<Vec<Application>, ResourceError>;

    /// One application by name.
    async fn get_application(&self, name: &str) -> Result<Application, ResourceError>;

    /// Stores a new application; the name must be free.
    async fn create_application(&self, app: Application) -> Result<Application, ResourceError>;

    /// Replaces the application named by the route; identity fields are
    /// preserved.
    async fn update_application(
        &self,
        name: &str,
        app: Application,
    ) -> Result<Application, ResourceError>;

    /// Removes an application by name.
    async fn delete_application(&self, name: &str) -> Result<(), ResourceError>;

    /// The current settings document.
    async fn get_settings(&self) -> Result<Settings, ResourceError>;

    /// Replaces the settings document.
    async fn update_settings(&self, settings: Settings) -> Result<Settings, ResourceError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn application_requires_name() {
        let app = Application {
            id: String::new(),
            name: "  ".to_string(),
            namespace: "default".to_string(),
            status: ApplicationStatus::Unknown,
            sync_status: SyncStatus::Unknown,
            created_at: Utc::now(),
        };
        assert!(matches!(
            app.validate(),
            Err(GatewayError::BadRequest { .. })
        ));
    }

    #[test]
    fn application_deserializes_with_defaults() {
        let app: Application = serde_json::from_str(r#"{"name":"frontend"}"#).unwrap();
        assert_eq!(app.namespace, "default");
        assert_eq!(app.status, ApplicationStatus::Unknown);
        assert!(app.id.is_empty());
    }

    #[test]
    fn application_serializes_camel_case() {
        let app: Application = serde_json::from_str(r#"{"name":"frontend"}"#).unwrap();
        let json = serde_json::to_value(&app).unwrap();
        assert!(json.get("syncStatus").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("sync_status").is_none());
    }

    #[test]
    fn settings_rejects_unknown_fields() {
        let err = serde_json::from_str::<Settings>(
            r#"{"version":"1","clusterName":"c","syncInterval":60,"extra":true}"#,
        );
        assert!(err.is_err());
    }

    #[test]
    fn backend_errors_translate_to_grpc_statuses() {
        let not_found: tonic::Status = ResourceError::NotFound {
            name: "ghost".to_string(),
        }
        .into();
        assert_eq!(not_found.code(), tonic::Code::NotFound);

        let exists: tonic::Status = ResourceError::AlreadyExists {
            name: "frontend".to_string(),
        }
        .into();
        assert_eq!(exists.code(), tonic::Code::AlreadyExists);

        let backend: tonic::Status =
            ResourceError::Backend(anyhow::anyhow!("connection refused")).into();
        assert_eq!(backend.code(), tonic::Code::Internal);
        assert_eq!(backend.message(), "Internal error");
    }

    #[test]
    fn settings_validation() {
        let mut settings = Settings::defaults();
        assert!(settings.validate().is_ok());

        settings.sync_interval = 0;
        assert!(settings.validate().is_err());

        settings = Settings::defaults();
        settings.cluster_name = String::new();
        assert!(settings.validate().is_err());
    }
}
