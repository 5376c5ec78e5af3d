//! Gateway error taxonomy.
//!
//! One classification shared by both protocol surfaces: every failure maps
//! to an [`ErrorCode`] with an HTTP status code and a gRPC status code that
//! mirror each other one-to-one. The three credential failures are
//! indistinguishable on the wire but keep distinct codes for the audit
//! trail. Outbound messages are sanitized so credential material never
//! leaves the process.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;
use tonic::{Code, Status};

/// Substrings that must never appear in an outbound error message.
const SENSITIVE_PATTERNS: &[&str] = &[
    "password",
    "secret",
    "token",
    "key",
    "credential",
    "bearer",
    "authorization",
];

/// Non-exhaustive error enum for forward compatibility.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum GatewayError {
    /// No credential carrier was present on the request.
    #[error("no authorization credential presented")]
    MissingCredential,

    /// A carrier was present but not in `Bearer <token>` shape, or the
    /// token part was empty.
    #[error("malformed authorization credential")]
    MalformedCredential,

    /// The token did not resolve to a known principal. Lookup timeouts and
    /// backend failures are classified here as well.
    #[error("credential did not resolve to a known principal")]
    InvalidCredential,

    /// A valid principal lacked the privilege for the operation.
    #[error("permission denied for {resource}")]
    Forbidden {
        /// Canonical resource the principal was denied on.
        resource: String,
    },

    /// No registered route pattern matched the request.
    #[error("no route for {method} {path}")]
    RouteNotFound {
        /// Protocol-native method token.
        method: String,
        /// Request path or RPC name.
        path: String,
    },

    /// A route matched but the collaborator found nothing under the name.
    #[error("{name} not found")]
    ResourceNotFound {
        /// Resource name that was requested.
        name: String,
    },

    /// Create collided with an existing resource.
    #[error("{name} already exists")]
    AlreadyExists {
        /// Resource name that collided.
        name: String,
    },

    /// The request payload was malformed or failed boundary validation.
    #[error("bad request: {reason}")]
    BadRequest {
        /// Description of the malformation.
        reason: String,
    },

    /// Resource backend failure. Not retried by the gateway; details are
    /// sanitized in responses.
    #[error(transparent)]
    Collaborator(#[from] anyhow::Error),
}

/// Error codes for audit logs and wire translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// No credential carrier present.
    CredentialMissing,
    /// Carrier present but malformed.
    CredentialMalformed,
    /// Token resolved to no principal.
    CredentialInvalid,
    /// Valid principal, insufficient privilege.
    Forbidden,
    /// No route pattern matched.
    RouteNotFound,
    /// Collaborator found no resource.
    ResourceNotFound,
    /// Create collision.
    AlreadyExists,
    /// Malformed payload.
    BadRequest,
    /// Collaborator failure.
    Internal,
}

impl ErrorCode {
    /// String representation used in audit log entries.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CredentialMissing => "AUTH_CREDENTIAL_MISSING",
            Self::CredentialMalformed => "AUTH_CREDENTIAL_MALFORMED",
            Self::CredentialInvalid => "AUTH_CREDENTIAL_INVALID",
            Self::Forbidden => "FORBIDDEN",
            Self::RouteNotFound => "ROUTE_NOT_FOUND",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::AlreadyExists => "ALREADY_EXISTS",
            Self::BadRequest => "BAD_REQUEST",
            Self::Internal => "INTERNAL_ERROR",
        }
    }

    /// HTTP status for this code. All credential failures collapse to 401.
    pub fn http_status(&self) -> StatusCode {
        match self {
            Self::CredentialMissing | Self::CredentialMalformed | Self::CredentialInvalid => {
                StatusCode::UNAUTHORIZED
            }
            Self::Forbidden => StatusCode::FORBIDDEN,
            Self::RouteNotFound | Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::AlreadyExists => StatusCode::CONFLICT,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// gRPC status for this code, mirroring [`Self::http_status`] one-to-one.
    pub fn grpc_code(&self) -> Code {
        match self {
            Self::CredentialMissing | Self::CredentialMalformed | Self::CredentialInvalid => {
                Code::Unauthenticated
            }
            Self::Forbidden => Code::PermissionDenied,
            Self::RouteNotFound | Self::ResourceNotFound => Code::NotFound,
            Self::AlreadyExists => Code::AlreadyExists,
            Self::BadRequest => Code::InvalidArgument,
            Self::Internal => Code::Internal,
        }
    }
}

/// Wire shape of an HTTP error body: `{"error": "<message>"}`.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Sanitized human-readable message.
    pub error: String,
}

impl GatewayError {
    /// The audit/translation code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::MissingCredential => ErrorCode::CredentialMissing,
            Self::MalformedCredential => ErrorCode::CredentialMalformed,
            Self::InvalidCredential => ErrorCode::CredentialInvalid,
            Self::Forbidden { .. } => ErrorCode::Forbidden,
            Self::RouteNotFound { .. } => ErrorCode::RouteNotFound,
            Self::ResourceNotFound { .. } => ErrorCode::ResourceNotFound,
            Self::AlreadyExists { .. } => ErrorCode::AlreadyExists,
            Self::BadRequest { .. } => ErrorCode::BadRequest,
            Self::Collaborator(_) => ErrorCode::Internal,
        }
    }

    /// Message safe to put on the wire. Credential failures collapse to a
    /// single message so the wire cannot distinguish them; internal details
    /// are never exposed.
    pub fn wire_message(&self) -> String {
        match self {
            Self::MissingCredential | Self::MalformedCredential | Self::InvalidCredential => {
                "Unauthorized".to_string()
            }
            Self::Forbidden { .. } => "Forbidden".to_string(),
            Self::RouteNotFound { .. } => "Not Found".to_string(),
            Self::ResourceNotFound { name } => format!("{name} not found"),
            Self::AlreadyExists { name } => format!("{name} already exists"),
            Self::BadRequest { reason } => sanitize_message(reason),
            Self::Collaborator(_) => "Internal error".to_string(),
        }
    }

    /// Translate to a gRPC [`Status`].
    pub fn to_status(&self) -> Status {
        Status::new(self.code().grpc_code(), self.wire_message())
    }
}

impl From<GatewayError> for Status {
    fn from(err: GatewayError) -> Self {
        err.to_status()
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            error: self.wire_message(),
        };
        (self.code().http_status(), Json(body)).into_response()
    }
}

/// Sanitize a message by dropping it entirely when it carries anything
/// credential-shaped.
fn sanitize_message(message: &str) -> String {
    let lower = message.to_lowercase();
    for pattern in SENSITIVE_PATTERNS {
        if lower.contains(pattern) {
            return "Invalid request".to_string();
        }
    }
    message.to_string()
}

/// Check whether a string contains credential-shaped content.
#[cfg(test)]
fn contains_sensitive_info(text: &str) -> bool {
    let lower = text.to_lowercase();
    SENSITIVE_PATTERNS.iter().any(|p| lower.contains(p))
}
