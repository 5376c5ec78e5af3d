//! Static token table for demo and test deployments.

use std::collections::HashMap;

use async_trait::async_trait;

use super::{CredentialValidator, Principal};
use crate::error::GatewayError;

/// Seed for a principal, attached to a token at lookup time.
#[derive(Debug, Clone)]
struct PrincipalSeed {
    id: String,
    name: String,
    email: String,
    groups: Vec<String>,
    is_admin: bool,
}

/// In-memory token-to-principal table.
///
/// One implementation of [`CredentialValidator`]; real deployments inject
/// an identity-provider-backed validator instead.
pub struct StaticTokenValidator {
    seeds: HashMap<String, PrincipalSeed>,
}

impl StaticTokenValidator {
    /// An empty table.
    pub fn new() -> Self {
        Self {
            seeds: HashMap::new(),
        }
    }

    /// The demo table: one regular user and one admin.
    pub fn demo() -> Self {
        Self::new()
            .with_entry(
                "demo-token",
                "user-1",
                "Demo User",
                "demo@example.com",
                &["users"],
                false,
            )
            .with_entry(
                "admin-token",
                "admin-1",
                "Admin User",
                "admin@example.com",
                &["users", "admins"],
                true,
            )
    }

    /// Adds a token entry.
    pub fn with_entry(
        mut self,
        token: &str,
        id: &str,
        name: &str,
        email: &str,
        groups: &[&str],
        is_admin: bool,
    ) -> Self {
        self.seeds.insert(
            token.to_string(),
            PrincipalSeed {
                id: id.to_string(),
                name: name.to_string(),
                email: email.to_string(),
                groups: groups.iter().map(|g| g.to_string()).collect(),
                is_admin,
            },
        );
        self
    }
}

impl Default for StaticTokenValidator {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialValidator for StaticTokenValidator {
    async fn lookup(&self, token: &str) -> Result<Principal, GatewayError> {
        let seed = self
            .seeds
            .get(token)
            .ok_or(GatewayError::InvalidCredential)?;
        Ok(Principal::new(
            seed.id.clone(),
            seed.name.clone(),
            seed.email.clone(),
            seed.groups.clone(),
            seed.is_admin,
            token,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unknown_token_is_invalid() {
        let table = StaticTokenValidator::demo();
        assert!(matches!(
            table.lookup("nope").await,
            Err(GatewayError::InvalidCredential)
        ));
    }

    #[tokio::test]
    async fn custom_entry_resolves() {
        let table = StaticTokenValidator::new().with_entry(
            "ci-token",
            "ci-1",
            "CI Bot",
            "ci@example.com",
            &["robots"],
            false,
        );
        let principal = table.lookup("ci-token").await.unwrap();
        assert_eq!(principal.id, "ci-1");
        assert_eq!(principal.credential(), "ci-token");
        assert!(principal.in_group("robots"));
    }
}
