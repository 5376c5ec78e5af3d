//! Authorization audit trail.
//!
//! Every access decision emits exactly one event on the `audit` target so
//! operators can filter the trail out of the general log stream. Events
//! carry the principal id, never the presented credential.

use crate::auth::permission::{CanonicalResource, Verb};
use crate::error::ErrorCode;

/// Target name audit events are emitted under.
pub const AUDIT_TARGET: &str = "audit";

/// Outcome of an access decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// A permission rule admitted the principal.
    Allow,
    /// An anonymous request was admitted by a public rule.
    PublicAllow,
    /// An authenticated principal was refused.
    Deny,
    /// Credential verification failed.
    Unauthenticated(ErrorCode),
}

impl Decision {
    /// Stable label for log consumers.
    pub fn as_str(&self) -> &'static str {
        match self {
            Decision::Allow => "allow",
            Decision::PublicAllow => "public_allow",
            Decision::Deny => "deny",
            Decision::Unauthenticated(_) => "unauthenticated",
        }
    }
}

/// Records one access decision.
pub fn decision(principal: &str, verb: Verb, resource: &CanonicalResource, outcome: Decision) {
    match outcome {
        Decision::Unauthenticated(code) => {
            tracing::info!(
                target: AUDIT_TARGET,
                principal,
                verb = verb.as_str(),
                resource = %resource,
                decision = outcome.as_str(),
                reason = code.as_str(),
                "access decision"
            );
        }
        _ => {
            tracing::info!(
                target: AUDIT_TARGET,
                principal,
                verb = verb.as_str(),
                resource = %resource,
                decision = outcome.as_str(),
                "access decision"
            );
        }
    }
}
