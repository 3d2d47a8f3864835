use aidaily_core::RecordFilter;
use aidaily_report::Digest;
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Extension,
};

use crate::middleware::RequestId;
use crate::pipeline::load_snapshot;
use crate::render::{render_dashboard, DashboardView};

use super::AppState;

/// `GET /`: the HTML dashboard.
///
/// Never fails: a bad filter falls back to the defaults and a feed failure
/// renders the page with zero records, each with a notice.
pub(super) async fn dashboard(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    query: Result<Query<RecordFilter>, QueryRejection>,
) -> Html<String> {
    let mut notices = Vec::new();

    let filter = match query {
        Ok(Query(filter)) => filter,
        Err(rejection) => {
            tracing::debug!(request_id = %req_id.0, error = %rejection, "ignoring invalid filter");
            notices.push(format!(
                "Ignoring invalid filter: {}",
                rejection.body_text()
            ));
            RecordFilter::default()
        }
    };

    let (records, fetched_at) = match load_snapshot(&state).await {
        Ok(snapshot) => (snapshot.records, Some(snapshot.fetched_at)),
        Err(e) => {
            tracing::warn!(request_id = %req_id.0, error = %e, "dashboard feed fetch failed");
            notices.push(format!("Could not load the news feed: {e}"));
            (Vec::new(), None)
        }
    };

    let digest = Digest::build(&records, &filter, state.top_deals);
    Html(render_dashboard(&DashboardView {
        filter,
        digest: &digest,
        fetched_at,
        notices: &notices,
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::super::build_app;
    use super::super::test_support::{state_for, FEED};

    async fn get_html(feed_status: u16, feed_body: &str, uri: &str) -> (StatusCode, String) {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/feed"))
            .respond_with(ResponseTemplate::new(feed_status).set_body_string(feed_body))
            .mount(&server)
            .await;
        let app = build_app(state_for(&format!("{}/feed", server.uri())));

        let response = app
            .oneshot(Request::builder().uri(uri).body(Body::empty()).expect("request"))
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body bytes");
        (status, String::from_utf8(body.to_vec()).expect("utf-8"))
    }

    #[tokio::test]
    async fn dashboard_renders_records() {
        let (status, html) = get_html(200, FEED, "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Articles: <strong>3</strong>"));
        assert!(html.contains("<td>Acme AI</td>"));
        assert!(html.contains("<td>Orbit Labs</td>"));
        assert!(!html.contains("Last updated: never"));
    }

    #[tokio::test]
    async fn dashboard_applies_filters() {
        let (status, html) = get_html(200, FEED, "/?min_funding=100M&round=all").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("<td>Orbit Labs</td>"));
        assert!(!html.contains("<td>Acme AI</td>"));
        assert!(html.contains("Articles: <strong>3</strong>"));
        assert!(html.contains("Showing 1 of 3 articles"));
    }

    #[tokio::test]
    async fn feed_failure_shows_notice_with_ok_status() {
        let (status, html) = get_html(500, "", "/").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Could not load the news feed"));
        assert!(html.contains("Articles: <strong>0</strong>"));
        assert!(html.contains("Last updated: never"));
        assert!(html.contains("<table>"));
        assert!(!html.contains("<tr><td>"));
    }

    #[tokio::test]
    async fn invalid_filter_falls_back_to_defaults() {
        let (status, html) = get_html(200, FEED, "/?round=series-z").await;

        assert_eq!(status, StatusCode::OK);
        assert!(html.contains("Ignoring invalid filter"));
        assert!(html.contains("<td>Acme AI</td>"));
    }
}
