//! Protocol-independent request admission.
//!
//! Both the REST and gRPC front ends reduce an incoming request to the
//! same three inputs (optional credential carrier, verb, canonical
//! resource) and hand them to [`GatewayCore::authorize`]. Keeping the
//! admission pipeline in one place is what makes the two protocols give
//! identical answers for equivalent requests.

use std::sync::Arc;

use crate::auth::permission::{CanonicalResource, PermissionEvaluator, Verb};
use crate::auth::{Authenticator, Principal};
use crate::error::GatewayError;
use crate::observability::audit::{self, Decision};
use crate::resource::ResourceService;

/// Who a request runs as after admission.
#[derive(Debug, Clone)]
pub enum RequestIdentity {
    /// An authenticated principal admitted by a permission rule.
    Principal(Principal),
    /// No valid credential; admitted by a public rule.
    Anonymous,
}

impl RequestIdentity {
    /// Identifier recorded on the audit trail.
    pub fn audit_id(&self) -> &str {
        match self {
            RequestIdentity::Principal(p) => &p.id,
            RequestIdentity::Anonymous => "anonymous",
        }
    }
}

/// Shared admission pipeline plus the resource collaborator.
pub struct GatewayCore {
    authenticator: Authenticator,
    evaluator: PermissionEvaluator,
    resources: Arc<dyn ResourceService>,
}

impl GatewayCore {
    /// Wires the pipeline to its collaborators.
    pub fn new(
        authenticator: Authenticator,
        evaluator: PermissionEvaluator,
        resources: Arc<dyn ResourceService>,
    ) -> Self {
        Self {
            authenticator,
            evaluator,
            resources,
        }
    }

    /// The collaborator handlers dispatch into once admitted.
    pub fn resources(&self) -> &Arc<dyn ResourceService> {
        &self.resources
    }

    /// Admits or refuses a request.
    ///
    /// A verified credential goes through the full rule chain. A missing or
    /// invalid credential can only be rescued by a public rule; the original
    /// credential failure is surfaced otherwise, so an anonymous caller
    /// cannot distinguish protected routes by probing.
    pub async fn authorize(
        &self,
        credential: Option<&str>,
        verb: Verb,
        resource: &CanonicalResource,
    ) -> Result<RequestIdentity, GatewayError> {
        match self.authenticator.authenticate(credential).await {
            Ok(principal) => {
                if self.evaluator.evaluate(&principal, verb, resource) {
                    audit::decision(&principal.id, verb, resource, Decision::Allow);
                    Ok(RequestIdentity::Principal(principal))
                } else {
                    audit::decision(&principal.id, verb, resource, Decision::Deny);
                    Err(GatewayError::Forbidden {
                        resource: resource.to_string(),
                    })
                }
            }
            Err(err) => {
                if self.evaluator.allows_public(verb, resource) {
                    audit::decision("anonymous", verb, resource, Decision::PublicAllow);
                    Ok(RequestIdentity::Anonymous)
                } else {
                    audit::decision(
                        "anonymous",
                        verb,
                        resource,
                        Decision::Unauthenticated(err.code()),
                    );
                    Err(err)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::auth::permission::ResourceKind;
    use crate::auth::validator::StaticTokenValidator;
    use crate::resource::memory::MemoryStore;

    fn core() -> GatewayCore {
        GatewayCore::new(
            Authenticator::new(
                Arc::new(StaticTokenValidator::demo()),
                Duration::from_secs(1),
            ),
            PermissionEvaluator::with_defaults(),
            Arc::new(MemoryStore::demo()),
        )
    }

    #[tokio::test]
    async fn admin_is_admitted_for_writes() {
        let identity = core()
            .authorize(
                Some("Bearer admin-token"),
                Verb::Delete,
                &CanonicalResource::named(ResourceKind::Applications, "frontend"),
            )
            .await
            .unwrap();
        assert_eq!(identity.audit_id(), "admin-1");
    }

    #[tokio::test]
    async fn reader_is_refused_for_writes() {
        let err = core()
            .authorize(
                Some("Bearer demo-token"),
                Verb::Delete,
                &CanonicalResource::named(ResourceKind::Applications, "frontend"),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn reader_is_admitted_for_reads() {
        let identity = core()
            .authorize(
                Some("Bearer demo-token"),
                Verb::Get,
                &CanonicalResource::collection(ResourceKind::Applications),
            )
            .await
            .unwrap();
        assert_eq!(identity.audit_id(), "user-1");
    }

    #[tokio::test]
    async fn anonymous_reaches_public_resources_only() {
        let c = core();

        let identity = c
            .authorize(None, Verb::Get, &CanonicalResource::collection(ResourceKind::Health))
            .await
            .unwrap();
        assert!(matches!(identity, RequestIdentity::Anonymous));

        let err = c
            .authorize(
                None,
                Verb::Get,
                &CanonicalResource::collection(ResourceKind::Applications),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::MissingCredential));
    }

    #[tokio::test]
    async fn bad_credential_is_not_rescued_by_reader_rules() {
        let err = core()
            .authorize(
                Some("Bearer bogus"),
                Verb::Get,
                &CanonicalResource::collection(ResourceKind::Settings),
            )
            .await
            .unwrap_err();
        assert!(matches!(err, GatewayError::InvalidCredential));
    }

    #[tokio::test]
    async fn bad_credential_still_reaches_public_resources() {
        let identity = core()
            .authorize(
                Some("Bearer bogus"),
                Verb::Get,
                &CanonicalResource::collection(ResourceKind::Version),
            )
            .await
            .unwrap();
        assert!(matches!(identity, RequestIdentity::Anonymous));
    }
}
