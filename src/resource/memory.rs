//! In-memory resource backend used for local runs and tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use uuid::Uuid;

use super::{Application, ApplicationStatus, ResourceError, ResourceService, Settings, SyncStatus};

/// Keyed by application name so listings come back in a stable order.
pub struct MemoryStore {
    apps: RwLock<BTreeMap<String, Application>>,
    settings: RwLock<Settings>,
}

impl MemoryStore {
    /// An empty store with default settings.
    pub fn new() -> Self {
        Self {
            apps: RwLock::new(BTreeMap::new()),
            settings: RwLock::new(Settings::defaults()),
        }
    }

    /// A store pre-seeded with a small fleet of applications.
    pub fn demo() -> Self {
        let store = Self::new();
        {
            let mut apps = store.apps.write();
            for app in [
                seed(
                    "app-1",
                    "frontend",
                    ApplicationStatus::Healthy,
                    SyncStatus::Synced,
                    24,
                ),
                seed(
                    "app-2",
                    "backend",
                    ApplicationStatus::Healthy,
                    SyncStatus::Synced,
                    48,
                ),
                seed(
                    "app-3",
                    "database",
                    ApplicationStatus::Degraded,
                    SyncStatus::OutOfSync,
                    72,
                ),
            ] {
                apps.insert(app.name.clone(), app);
            }
        }
        store
    }
}

fn seed(
    id: &str,
    name: &str,
    status: ApplicationStatus,
    sync_status: SyncStatus,
    age_hours: i64,
) -> Application {
    Application {
        id: id.to_string(),
        name: name.to_string(),
        namespace: "default".to_string(),
        status,
        sync_status,
        created_at: Utc::now() - Duration::hours(age_hours),
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ResourceService for MemoryStore {
    async fn list_applications(&self) -> Result<Vec<Application>, ResourceError> {
        Ok(self.apps.read().values().cloned().collect())
    }

    async fn get_application(&self, name: &str) -> Result<Application, ResourceError> {
        self.apps
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| ResourceError::NotFound {
                name: name.to_string(),
            })
    }

    async fn create_application(&self, mut app: Application) -> Result<Application, ResourceError> {
        let mut apps = self.apps.write();
        if apps.contains_key(&app.name) {
            return Err(ResourceError::AlreadyExists { name: app.name });
        }
        if app.id.is_empty() {
            app.id = format!("app-{}", Uuid::new_v4());
        }
        apps.insert(app.name.clone(), app.clone());
        Ok(app)
    }

    async fn update_application(
        &self,
        name: &str,
        mut app: Application,
    ) -> Result<Application, ResourceError> {
        let mut apps = self.apps.write();
        let existing = apps.get(name).ok_or_else(|| ResourceError::NotFound {
            name: name.to_string(),
        })?;
        // Identity and creation time are immutable; the path names the record.
        app.id = existing.id.clone();
        app.created_at = existing.created_at;
        app.name = name.to_string();
        apps.insert(name.to_string(), app.clone());
        Ok(app)
    }

    async fn delete_application(&self, name: &str) -> Result<(), ResourceError> {
        let mut apps = self.apps.write();
        if apps.remove(name).is_none() {
            return Err(ResourceError::NotFound {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    async fn get_settings(&self) -> Result<Settings, ResourceError> {
        Ok(self.settings.read().clone())
    }

    async fn update_settings(&self, settings: Settings) -> Result<Settings, ResourceError> {
        *self.settings.write() = settings.clone();
        Ok(settings)
    }
}
