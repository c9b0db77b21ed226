use std::future::Future;
use std::path::Path;
use std::sync::Arc;

use axum::{Router, routing::get};
use common::log;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::move_handler::next_move_handler;
use crate::move_provider::MoveProvider;
use crate::server_config::ServerConfig;

#[derive(Clone)]
pub struct WebServerState {
    pub move_provider: Arc<dyn MoveProvider>,
}

pub fn build_router(state: WebServerState, static_files_path: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut app = Router::new().route(
        "/api/next-move",
        get(next_move_handler).post(next_move_handler),
    );

    if let Some(path) = static_files_path {
        log!("Serving UI from {}", path.display());
        app = app.nest_service("/ui", ServeDir::new(path));
    }

    app.layer(cors).with_state(state)
}

pub async fn run_web_server<F>(
    config: &ServerConfig,
    state: WebServerState,
    shutdown_signal: F,
) -> std::io::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let app = build_router(state, config.static_files_path.as_deref());

    let addr = config.address();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::move_provider::MinimaxMoveProvider;
    use axum::body::Body;
    use axum::http::{Method, Request, StatusCode, header};
    use serde_json::{Value, json};
    use tower::ServiceExt;

    fn router() -> Router {
        let state = WebServerState {
            move_provider: Arc::new(MinimaxMoveProvider),
        };
        build_router(state, None)
    }

    fn next_move_request(method: Method, board: Value) -> Request<Body> {
        Request::builder()
            .method(method)
            .uri("/api/next-move")
            .header(header::CONTENT_TYPE, "application/json")
            .header(header::ORIGIN, "http://localhost:5173")
            .body(Body::from(json!({ "board": board }).to_string()))
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_get_and_post_both_answer_with_index() {
        let board = json!(["X", "X", null, "O", "O", null, null, null, null]);

        for method in [Method::GET, Method::POST] {
            let response = router()
                .oneshot(next_move_request(method.clone(), board.clone()))
                .await
                .unwrap();

            assert_eq!(response.status(), StatusCode::OK, "{}", method);
            assert_eq!(
                response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
                "*"
            );
            assert_eq!(body_json(response).await, json!(2), "{}", method);
        }
    }

    #[tokio::test]
    async fn test_invalid_board_through_router_is_bad_request() {
        let response = router()
            .oneshot(next_move_request(Method::POST, json!(["X", "O"])))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert!(body_json(response).await["error"].is_string());
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let request = Request::builder()
            .method(Method::OPTIONS)
            .uri("/api/next-move")
            .header(header::ORIGIN, "http://localhost:5173")
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN).unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_unknown_route_is_not_found() {
        let request = Request::builder()
            .uri("/api/other")
            .body(Body::empty())
            .unwrap();

        let response = router().oneshot(request).await.unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
