//! REST front end.
//!
//! Axum provides the HTTP plumbing, but route matching runs through the
//! crate's own ordered [`Router`] via a single fallback dispatcher, so the
//! REST surface and the RPC surface share one admission pipeline and one
//! route table discipline.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, Method, StatusCode, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::de::DeserializeOwned;
use serde_json::json;
use tower_http::trace::TraceLayer;

use crate::auth::permission::{CanonicalResource, Verb};
use crate::error::GatewayError;
use crate::gateway::GatewayCore;
use crate::resource::{Application, Settings};
use crate::routing::{PathParams, RoutePattern, RoutePatternError, Router};

/// Operations exposed over HTTP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RestRoute {
    Health,
    Version,
    ListApplications,
    CreateApplication,
    GetApplication,
    UpdateApplication,
    DeleteApplication,
    GetSettings,
    UpdateSettings,
}

/// HTTP surface over the shared admission pipeline.
pub struct RestGateway {
    core: Arc<GatewayCore>,
    routes: Router<RestRoute>,
}

impl RestGateway {
    /// Builds the gateway with its route table. Literal routes are
    /// registered before parameterized ones so they take precedence.
    pub fn new(core: Arc<GatewayCore>) -> Result<Self, RoutePatternError> {
        let routes = Router::new()
            .route(Verb::Get, RoutePattern::parse("/health")?, RestRoute::Health)
            .route(Verb::Get, RoutePattern::parse("/version")?, RestRoute::Version)
            .route(
                Verb::Get,
                RoutePattern::parse("/applications")?,
                RestRoute::ListApplications,
            )
            .route(
                Verb::Create,
                RoutePattern::parse("/applications")?,
                RestRoute::CreateApplication,
            )
            .route(
                Verb::Get,
                RoutePattern::parse("/applications/{name}")?,
                RestRoute::GetApplication,
            )
            .route(
                Verb::Update,
                RoutePattern::parse("/applications/{name}")?,
                RestRoute::UpdateApplication,
            )
            .route(
                Verb::Delete,
                RoutePattern::parse("/applications/{name}")?,
                RestRoute::DeleteApplication,
            )
            .route(
                Verb::Get,
                RoutePattern::parse("/settings")?,
                RestRoute::GetSettings,
            )
            .route(
                Verb::Update,
                RoutePattern::parse("/settings")?,
                RestRoute::UpdateSettings,
            );
        Ok(Self { core, routes })
    }

    async fn handle(
        &self,
        method: &Method,
        path: &str,
        headers: &HeaderMap,
        body: Bytes,
    ) -> Result<Response, GatewayError> {
        let credential = headers
            .get(axum::http::header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok());

        let resource = CanonicalResource::from_path(path);

        // Methods outside the verb mapping never map to a route. Admission
        // still runs so an admin sees 404 while everyone else sees their
        // auth failure, the same shape as an unknown path.
        let Some(verb) = Verb::from_http(method) else {
            self.core.authorize(credential, Verb::Get, &resource).await?;
            return Err(GatewayError::RouteNotFound {
                method: method.to_string(),
                path: path.to_string(),
            });
        };

        self.core.authorize(credential, verb, &resource).await?;

        let Some((route, params)) = self.routes.match_route(verb, path) else {
            return Err(GatewayError::RouteNotFound {
                method: method.to_string(),
                path: path.to_string(),
            });
        };

        self.invoke(*route, params, body).await
    }

    async fn invoke(
        &self,
        route: RestRoute,
        params: PathParams,
        body: Bytes,
    ) -> Result<Response, GatewayError> {
        let resources = self.core.resources();
        match route {
            RestRoute::Health => Ok(Json(json!({ "status": "ok" })).into_response()),
            RestRoute::Version => {
                Ok(Json(json!({ "version": env!("CARGO_PKG_VERSION") })).into_response())
            }
            RestRoute::ListApplications => {
                let apps = resources.list_applications().await?;
                Ok(Json(apps).into_response())
            }
            RestRoute::CreateApplication => {
                let app: Application = parse_body(&body)?;
                app.validate()?;
                let created = resources.create_application(app).await?;
                Ok((StatusCode::CREATED, Json(created)).into_response())
            }
            RestRoute::GetApplication => {
                let name = params.require("name")?;
                let app = resources.get_application(name).await?;
                Ok(Json(app).into_response())
            }
            RestRoute::UpdateApplication => {
                let name = params.require("name")?;
                let app: Application = parse_body(&body)?;
                app.validate()?;
                let updated = resources.update_application(name, app).await?;
                Ok(Json(updated).into_response())
            }
            RestRoute::DeleteApplication => {
                let name = params.require("name")?;
                resources.delete_application(name).await?;
                Ok(StatusCode::NO_CONTENT.into_response())
            }
            RestRoute::GetSettings => {
                let settings = resources.get_settings().await?;
                Ok(Json(settings).into_response())
            }
            RestRoute::UpdateSettings => {
                let settings: Settings = parse_body(&body)?;
                settings.validate()?;
                let updated = resources.update_settings(settings).await?;
                Ok(Json(updated).into_response())
            }
        }
    }
}

fn parse_body<T: DeserializeOwned>(body: &Bytes) -> Result<T, GatewayError> {
    serde_json::from_slice(body).map_err(|err| GatewayError::BadRequest {
        reason: format!("invalid request body: {err}"),
    })
}

/// Builds the axum application around a gateway.
pub fn router(gateway: Arc<RestGateway>) -> axum::Router {
    axum::Router::new()
        .fallback(dispatch)
        .with_state(gateway)
        .layer(TraceLayer::new_for_http())
}

async fn dispatch(
    State(gateway): State<Arc<RestGateway>>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    match gateway.handle(&method, uri.path(), &headers, body).await {
        Ok(response) => response,
        Err(err) => err.into_response(),
    }
}
