// ── HTTP surface ──
//
// Two routes: the dashboard at `/` and embedded static assets under
// `/static/`. Handlers only read the published snapshot; they never
// touch the network.

use std::sync::Arc;

use axum::{
    Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::get,
};
use serde::Deserialize;
use voxboard_core::SnapshotStore;

use crate::render::{self, PageFormat};

const STYLE_CSS: &str = include_str!("../static/style.css");

#[derive(Clone)]
pub struct AppState {
    store: Arc<SnapshotStore>,
}

/// Build the application router.
pub fn router(store: Arc<SnapshotStore>) -> Router {
    Router::new()
        .route("/", get(dashboard))
        .route("/static/*path", get(static_asset))
        .with_state(AppState { store })
}

#[derive(Debug, Deserialize)]
struct DashboardParams {
    format: Option<PageFormat>,
}

/// `GET /` — render whatever snapshot is currently published.
async fn dashboard(
    State(state): State<AppState>,
    Query(params): Query<DashboardParams>,
) -> Response {
    let snapshot = state.store.current();
    let format = params.format.unwrap_or(PageFormat::Html);
    let body = render::render(snapshot.as_deref(), format);

    match format {
        PageFormat::Html => Html(body).into_response(),
        PageFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            body,
        )
            .into_response(),
    }
}

/// `GET /static/<path>` — embedded assets, read-only.
async fn static_asset(Path(path): Path<String>) -> Response {
    match path.as_str() {
        "style.css" => ([(header::CONTENT_TYPE, "text/css")], STYLE_CSS).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn state() -> AppState {
        AppState {
            store: Arc::new(SnapshotStore::new()),
        }
    }

    #[tokio::test]
    async fn dashboard_serves_html_before_first_poll() {
        let response = dashboard(
            State(state()),
            Query(DashboardParams { format: None }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));
    }

    #[tokio::test]
    async fn dashboard_serves_plain_text_on_request() {
        let response = dashboard(
            State(state()),
            Query(DashboardParams {
                format: Some(PageFormat::Text),
            }),
        )
        .await;

        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/plain"));
    }

    #[tokio::test]
    async fn known_static_asset_is_served() {
        let response = static_asset(Path("style.css".to_owned())).await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn unknown_static_asset_is_404() {
        let response = static_asset(Path("nope.js".to_owned())).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
