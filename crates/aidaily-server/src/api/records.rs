use aidaily_core::{ExtractionResult, RecordFilter};
use aidaily_report::{Digest, Summary};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::header,
    response::IntoResponse,
    Extension, Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::middleware::RequestId;
use crate::pipeline::{invalidate, load_snapshot};

use super::{map_feed_error, map_query_error, ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Serialize)]
pub(super) struct RecordsData {
    pub fetched_at: DateTime<Utc>,
    /// Record count before filtering.
    pub total: usize,
    pub records: Vec<ExtractionResult>,
}

#[derive(Debug, Serialize)]
pub(super) struct SummaryData {
    pub fetched_at: DateTime<Utc>,
    pub summary: Summary,
    pub top_deals: Vec<ExtractionResult>,
}

#[derive(Debug, Serialize)]
pub(super) struct RefreshData {
    status: &'static str,
}

pub(super) async fn list_records(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<RecordFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<RecordsData>>, ApiError> {
    let Query(filter) = query.map_err(|e| map_query_error(req_id.0.clone(), &e))?;
    let snapshot = load_snapshot(&state)
        .await
        .map_err(|e| map_feed_error(req_id.0.clone(), &e))?;

    let records = filter
        .apply(&snapshot.records)
        .into_iter()
        .cloned()
        .collect();

    Ok(Json(ApiResponse {
        data: RecordsData {
            fetched_at: snapshot.fetched_at,
            total: snapshot.records.len(),
            records,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_summary(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<RecordFilter>, QueryRejection>,
) -> Result<Json<ApiResponse<SummaryData>>, ApiError> {
    let Query(filter) = query.map_err(|e| map_query_error(req_id.0.clone(), &e))?;
    let snapshot = load_snapshot(&state)
        .await
        .map_err(|e| map_feed_error(req_id.0.clone(), &e))?;

    let digest = Digest::build(&snapshot.records, &filter, state.top_deals);

    Ok(Json(ApiResponse {
        data: SummaryData {
            fetched_at: snapshot.fetched_at,
            summary: digest.summary,
            top_deals: digest.top_deals,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}

pub(super) async fn get_newsletter(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<RecordFilter>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(filter) = query.map_err(|e| map_query_error(req_id.0.clone(), &e))?;
    let snapshot = load_snapshot(&state)
        .await
        .map_err(|e| map_feed_error(req_id.0, &e))?;

    let digest = Digest::build(&snapshot.records, &filter, state.top_deals);
    Ok((
        [(header::CONTENT_TYPE, "text/markdown; charset=utf-8")],
        digest.newsletter,
    ))
}

pub(super) async fn refresh(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
) -> Json<ApiResponse<RefreshData>> {
    invalidate(&state).await;
    tracing::info!(request_id = %req_id.0, "feed cache invalidated");

    Json(ApiResponse {
        data: RefreshData {
            status: "invalidated",
        },
        meta: ResponseMeta::new(req_id.0),
    })
}
