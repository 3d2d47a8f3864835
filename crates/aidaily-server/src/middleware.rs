use axum::{
    extract::Request,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

const REQUEST_ID_HEADER: &str = "x-request-id";
const MAX_REQUEST_ID_LEN: usize = 128;

/// Correlation ID for one request, available to handlers as an extension.
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Client-supplied ID if it is short and made of token characters.
fn incoming_request_id(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(REQUEST_ID_HEADER)?.to_str().ok()?.trim();
    let valid = !raw.is_empty()
        && raw.len() <= MAX_REQUEST_ID_LEN
        && raw
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
    valid.then(|| raw.to_string())
}

/// Tags every request with a [`RequestId`] and echoes it in `x-request-id`.
///
/// A well-formed incoming header is reused; anything else gets a fresh `UUIDv4`.
pub async fn request_id(mut req: Request, next: Next) -> Response {
    let id = incoming_request_id(req.headers()).unwrap_or_else(|| Uuid::new_v4().to_string());
    tracing::debug!(request_id = %id, method = %req.method(), path = %req.uri().path(), "request");

    req.extensions_mut().insert(RequestId(id.clone()));
    let mut res = next.run(req).await;

    if let Ok(val) = HeaderValue::from_str(&id) {
        res.headers_mut().insert(REQUEST_ID_HEADER, val);
    }
    res
}
