//! Authenticating gateway in front of a resource service.
//!
//! Requests arrive over HTTP or gRPC, are reduced to a protocol-independent
//! (verb, resource) pair, pass through credential verification and
//! permission evaluation, and only then reach the
//! [`resource::ResourceService`] collaborator. Both protocols share one
//! admission pipeline, so equivalent requests get equivalent answers.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod config;
pub mod error;
pub mod gateway;
pub mod grpc;
pub mod observability;
pub mod resource;
pub mod rest;
pub mod routing;
pub mod shutdown;

/// Generated protobuf types and service glue.
pub mod proto {
    /// `bridge` protobuf package.
    pub mod bridge {
        /// `bridge.v1` protobuf package.
        #[allow(missing_docs)]
        pub mod v1 {
            include!("proto/bridge.v1.rs");
        }
    }
}

pub use config::Config;
pub use error::{ErrorCode, GatewayError};
