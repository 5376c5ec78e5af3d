//! Identity: credential extraction, principal derivation, pluggable
//! credential validation.
//!
//! The bearer carrier is parsed here; the token lookup itself lives behind
//! [`CredentialValidator`] so deployments can swap the demo table for an
//! identity-provider-backed implementation without touching the gateways.

pub mod permission;
pub mod validator;

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;

use crate::error::GatewayError;

/// Authenticated identity derived from a credential.
///
/// Request-scoped and immutable after construction. The opaque credential
/// reference is kept private and redacted from `Debug` output.
#[derive(Clone)]
pub struct Principal {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Email address.
    pub email: String,
    /// Group memberships.
    pub groups: Vec<String>,
    /// Admin bypass flag.
    pub is_admin: bool,
    credential: String,
}

impl Principal {
    /// Builds a principal carrying the credential it was derived from.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        groups: Vec<String>,
        is_admin: bool,
        credential: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            groups,
            is_admin,
            credential: credential.into(),
        }
    }

    /// Whether the principal belongs to the named group.
    pub fn in_group(&self, group: &str) -> bool {
        self.groups.iter().any(|g| g == group)
    }

    /// Opaque reference to the credential this principal was derived from.
    pub fn credential(&self) -> &str {
        &self.credential
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Principal")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("email", &self.email)
            .field("groups", &self.groups)
            .field("is_admin", &self.is_admin)
            .field("credential", &"<redacted>")
            .finish()
    }
}

/// Pluggable token resolution backend.
///
/// A production implementation may call out to an identity provider; the
/// caller bounds the lookup with a timeout.
#[async_trait]
pub trait CredentialValidator: Send + Sync {
    /// Resolves an opaque token to a principal, or
    /// [`GatewayError::InvalidCredential`] when the token is unknown.
    async fn lookup(&self, token: &str) -> Result<Principal, GatewayError>;
}

/// Front end of credential verification: carrier parsing plus a
/// timeout-bounded backend lookup.
pub struct Authenticator {
    validator: Arc<dyn CredentialValidator>,
    lookup_timeout: Duration,
}

impl Authenticator {
    /// Creates an authenticator over the given backend.
    pub fn new(validator: Arc<dyn CredentialValidator>, lookup_timeout: Duration) -> Self {
        Self {
            validator,
            lookup_timeout,
        }
    }

    /// Turns a protocol-native credential carrier into a principal.
    ///
    /// Classification:
    /// - no carrier at all: [`GatewayError::MissingCredential`]
    /// - carrier not of `Bearer <token>` shape, or empty token:
    ///   [`GatewayError::MalformedCredential`]
    /// - unknown token, lookup timeout, or backend failure:
    ///   [`GatewayError::InvalidCredential`]
    pub async fn authenticate(&self, carrier: Option<&str>) -> Result<Principal, GatewayError> {
        let carrier = carrier.ok_or(GatewayError::MissingCredential)?;
        let token = carrier
            .strip_prefix("Bearer ")
            .ok_or(GatewayError::MalformedCredential)?;
        if token.is_empty() {
            return Err(GatewayError::MalformedCredential);
        }

        // A slow identity provider must not hang the request; timeouts and
        // transport failures classify as invalid rather than bubbling up.
        match tokio::time::timeout(self.lookup_timeout, self.validator.lookup(token)).await {
            Ok(Ok(principal)) => Ok(principal),
            Ok(Err(_)) | Err(_) => Err(GatewayError::InvalidCredential),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::validator::StaticTokenValidator;
    use super::*;

    struct StalledValidator;

    #[async_trait]
    impl CredentialValidator for StalledValidator {
        async fn lookup(&self, _token: &str) -> Result<Principal, GatewayError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(GatewayError::InvalidCredential)
        }
    }

    fn demo_authenticator() -> Authenticator {
        Authenticator::new(
            Arc::new(StaticTokenValidator::demo()),
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn missing_carrier() {
        let auth = demo_authenticator();
        assert!(matches!(
            auth.authenticate(None).await,
            Err(GatewayError::MissingCredential)
        ));
    }

    #[tokio::test]
    async fn malformed_carrier() {
        let auth = demo_authenticator();
        for carrier in ["Basic abc", "bearer abc", "admin-token", "Bearer "] {
            assert!(
                matches!(
                    auth.authenticate(Some(carrier)).await,
                    Err(GatewayError::MalformedCredential)
                ),
                "carrier {carrier:?} should be malformed"
            );
        }
    }

    #[tokio::test]
    async fn unknown_token() {
        let auth = demo_authenticator();
        assert!(matches!(
            auth.authenticate(Some("Bearer bogus-token")).await,
            Err(GatewayError::InvalidCredential)
        ));
    }

    #[tokio::test]
    async fn demo_and_admin_tokens_resolve() {
        let auth = demo_authenticator();

        let user = auth.authenticate(Some("Bearer demo-token")).await.unwrap();
        assert_eq!(user.id, "user-1");
        assert!(!user.is_admin);
        assert!(user.in_group("users"));
        assert!(!user.in_group("admins"));

        let admin = auth.authenticate(Some("Bearer admin-token")).await.unwrap();
        assert_eq!(admin.id, "admin-1");
        assert!(admin.is_admin);
        assert!(admin.in_group("admins"));
    }

    #[tokio::test(start_paused = true)]
    async fn stalled_lookup_classifies_as_invalid() {
        let auth = Authenticator::new(Arc::new(StalledValidator), Duration::from_millis(50));
        assert!(matches!(
            auth.authenticate(Some("Bearer anything")).await,
            Err(GatewayError::InvalidCredential)
        ));
    }

    #[test]
    fn debug_redacts_credential() {
        let principal = Principal::new(
            "user-1",
            "Demo User",
            "demo@example.com",
            vec!["users".to_string()],
            false,
            "demo-token",
        );
        let rendered = format!("{principal:?}");
        assert!(!rendered.contains("demo-token"));
        assert!(rendered.contains("<redacted>"));
    }
}
