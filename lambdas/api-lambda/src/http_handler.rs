use lambda_http::http::header::HeaderValue;
use lambda_http::{
    http::{Method, StatusCode},
    Body, Error, Request, Response,
};
use todo_atoms::todos::{self, KeyValueStore, TodoService};
use todo_shared::AppState;

use std::sync::Arc;

fn with_cors_headers(mut resp: Response<Body>) -> Response<Body> {
    let headers = resp.headers_mut();
    headers.insert("Access-Control-Allow-Origin", HeaderValue::from_static("*"));
    headers.insert(
        "Access-Control-Allow-Methods",
        HeaderValue::from_static("GET,POST,PUT,PATCH,DELETE,OPTIONS"),
    );
    headers.insert(
        "Access-Control-Allow-Headers",
        HeaderValue::from_static("Content-Type,User"),
    );
    resp
}

/// Last path segment is `todos`, so stage prefixes like `/prod/todos` still match
fn is_todos_path(path: &str) -> bool {
    path.trim_end_matches('/').rsplit('/').next() == Some("todos")
}

/// Main Lambda handler - routes todo requests by method
pub(crate) async fn function_handler(
    event: Request,
    state: Arc<AppState>,
) -> Result<Response<Body>, Error> {
    let method = event.method();
    let path = event.uri().path();
    tracing::info!("🚀 Todo API invoked - Method: {} Path: {}", method, path);

    // Handle CORS preflight
    if *method == Method::OPTIONS {
        let resp = Response::builder()
            .status(StatusCode::OK)
            .body(Body::Empty)
            .map_err(Box::new)?;
        return Ok(with_cors_headers(resp));
    }

    if !is_todos_path(path) {
        tracing::warn!("⚠️ No route matched - Method: {} Path: {}", method, path);
        return not_found();
    }

    // A missing table name fails the invocation itself
    let service = state.todo_service().map_err(|e| {
        tracing::error!("Cannot serve todo request: {}", e);
        e
    })?;

    dispatch(&service, &event).await.map(with_cors_headers)
}

pub(crate) async fn dispatch<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Response<Body>, Error> {
    match *event.method() {
        Method::GET => todos::list_todos(service, event).await,
        Method::POST => todos::create_todo(service, event).await,
        Method::PUT | Method::PATCH => todos::update_todo(service, event).await,
        Method::DELETE => todos::delete_todo(service, event).await,
        _ => method_not_allowed(),
    }
}

fn method_not_allowed() -> Result<Response<Body>, Error> {
    todos::json_response(
        StatusCode::METHOD_NOT_ALLOWED,
        &serde_json::json!({"error": "Method not allowed"}),
    )
}

fn not_found() -> Result<Response<Body>, Error> {
    todos::json_response(StatusCode::NOT_FOUND, &serde_json::json!({"error": "Not found"}))
}
