//! mm-server: HTTP API for mentormatch.
//!
//! Read endpoints for clusters, keywords, mentors and availability, keyword
//! search backed by the shared matching engine, keyword creation, career
//! events, counselors, session booking, notifications and the newsletter.
//! All bodies are camelCase JSON; errors are `{"error": "..."}`.

use std::sync::Arc;

use anyhow::Context;
use axum::{
    routing::{delete, get, patch, post},
    Router,
};
use mm_core::config::ServerConfig;
use mm_store::CatalogStore;
use tokio::{
    net::TcpListener,
    signal::{
        self,
        unix::{signal, SignalKind},
    },
};
use tracing::info;

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::{AppState, Clock, SharedState};

/// Build the application router over `store`, reading the system clock.
pub fn router(store: Arc<dyn CatalogStore>) -> Router {
    app(AppState::new(store))
}

/// Build the application router over prepared state.
pub fn app(state: SharedState) -> Router {
    Router::new()
        .route("/healthz", get(routes::healthz))
        .route("/api/career-clusters", get(routes::list_clusters))
        .route("/api/career-clusters/search", get(routes::search_clusters))
        .route(
            "/api/career-clusters/category/{category}",
            get(routes::clusters_by_category),
        )
        .route("/api/career-clusters/{id}", get(routes::get_cluster))
        .route(
            "/api/career-keywords",
            get(routes::list_keywords).post(routes::create_keyword),
        )
        .route("/api/career-keywords/search", get(routes::search_keywords))
        .route(
            "/api/career-keywords/cluster/{cluster_id}",
            get(routes::keywords_by_cluster),
        )
        .route("/api/mentors", get(routes::list_mentors))
        .route("/api/mentors/search", get(routes::search_mentors))
        .route(
            "/api/mentors/cluster/{cluster_id}",
            get(routes::mentors_by_cluster),
        )
        .route("/api/mentors/{id}", get(routes::get_mentor))
        .route(
            "/api/mentor-availability/{mentor_id}",
            get(routes::mentor_availability),
        )
        .route(
            "/api/career-events",
            get(routes::list_events).post(routes::create_event),
        )
        .route("/api/career-events/upcoming", get(routes::upcoming_events))
        .route(
            "/api/career-events/cluster/{cluster_id}",
            get(routes::events_by_cluster),
        )
        .route("/api/career-events/{id}", get(routes::get_event))
        .route("/api/counselors", get(routes::list_counselors))
        .route("/api/counselors/{id}", get(routes::get_counselor))
        .route(
            "/api/counselors/{id}/availability",
            get(routes::counselor_availability),
        )
        .route(
            "/api/mentor-sessions",
            get(routes::list_mentor_sessions).post(routes::create_mentor_session),
        )
        .route(
            "/api/mentor-sessions/{id}/status",
            patch(routes::update_mentor_session_status),
        )
        .route(
            "/api/counselor-sessions",
            get(routes::list_counselor_sessions).post(routes::create_counselor_session),
        )
        .route(
            "/api/counselor-sessions/{id}/status",
            patch(routes::update_counselor_session_status),
        )
        .route("/api/notifications", get(routes::list_notifications))
        .route("/api/notifications/unread", get(routes::unread_notifications))
        .route(
            "/api/notifications/{id}/read",
            patch(routes::mark_notification_read),
        )
        .route("/api/notifications/{id}", delete(routes::delete_notification))
        .route("/api/newsletter/subscribe", post(routes::subscribe_newsletter))
        .with_state(state)
}

/// Bind to `config.bind_address()` and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, store: Arc<dyn CatalogStore>) -> anyhow::Result<()> {
    let address = config.bind_address();
    info!("Binding to {address}");

    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("failed to bind {address}"))?;
    info!("Server running on {address}");

    axum::serve(listener, router(store))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(%err, "failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    let terminate = async {
        match signal(SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(%err, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    tokio::select! {
        _ = ctrl_c => info!("Received Ctrl-C, shutting down"),
        _ = terminate => info!("Received SIGTERM, shutting down"),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use mm_store::MemoryStore;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tower::ServiceExt;

    fn app() -> Router {
        router(Arc::new(MemoryStore::seeded()))
    }

    async fn get_json(uri: &str) -> (StatusCode, Value) {
        let response = app()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn healthz_is_ok() {
        let response = app()
            .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        assert_eq!(&bytes[..], b"ok");
    }

    #[tokio::test]
    async fn missing_keyword_is_bad_request() {
        let (status, body) = get_json("/api/mentors/search").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Keyword parameter is required");
    }

    #[tokio::test]
    async fn non_numeric_id_is_bad_request() {
        let (status, body) = get_json("/api/career-clusters/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Invalid cluster ID");
    }

    #[tokio::test]
    async fn unknown_cluster_is_not_found() {
        let (status, body) = get_json("/api/career-clusters/404").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error"], "Career cluster not found");
    }

    #[tokio::test]
    async fn repeated_keyword_is_a_json_bad_request() {
        let response = app()
            .oneshot(
                Request::builder()
                    .uri("/api/career-clusters/search?keyword=navy&keyword=army")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers()["content-type"],
            "application/json"
        );
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let body: Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["error"], "Keyword parameter is required");
    }

    #[tokio::test]
    async fn upcoming_route_wins_over_event_id_route() {
        let (status, body) = get_json("/api/career-events/upcoming").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_array());
    }

    #[tokio::test]
    async fn search_route_wins_over_id_route() {
        let (status, body) = get_json("/api/career-clusters/search?keyword=water").await;
        assert_eq!(status, StatusCode::OK);
        let names: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .filter_map(|c| c["name"].as_str())
            .collect();
        assert!(names.contains(&"Navy"));
    }
}
