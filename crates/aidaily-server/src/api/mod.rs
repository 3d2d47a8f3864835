mod dashboard;
mod records;

use std::sync::Arc;

use aidaily_extract::{Extractor, NerClient};
use aidaily_feed::{FeedCache, FeedClient, FeedError};
use axum::{
    extract::rejection::QueryRejection,
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::{request_id, RequestId};
use crate::pipeline::Snapshot;

#[derive(Clone)]
pub struct AppState {
    pub feed: Arc<FeedClient>,
    pub cache: Arc<Mutex<FeedCache>>,
    /// Extracted records for the cached feed; see [`crate::pipeline::load_snapshot`].
    pub(crate) snapshot: Arc<Mutex<Option<Snapshot>>>,
    pub extractor: Extractor,
    pub recognizer: Option<Arc<NerClient>>,
    pub top_deals: usize,
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "bad_request" => StatusCode::BAD_REQUEST,
            "feed_unavailable" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

pub(super) fn map_feed_error(request_id: String, error: &FeedError) -> ApiError {
    tracing::warn!(error = %error, "feed fetch failed");
    ApiError::new(request_id, "feed_unavailable", "news feed is unavailable")
}

pub(super) fn map_query_error(request_id: String, rejection: &QueryRejection) -> ApiError {
    ApiError::new(request_id, "bad_request", rejection.body_text())
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-request-id"),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(dashboard::dashboard))
        .route("/api/v1/health", get(health))
        .route("/api/v1/records", get(records::list_records))
        .route("/api/v1/summary", get(records::get_summary))
        .route("/api/v1/newsletter", get(records::get_newsletter))
        .route("/api/v1/refresh", post(records::refresh))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    Json(ApiResponse {
        data: HealthData { status: "ok" },
        meta: ResponseMeta::new(req_id.0),
    })
}
