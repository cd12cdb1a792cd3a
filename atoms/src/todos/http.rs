use lambda_http::{http::StatusCode, Body, Error, Request, RequestExt, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::model::{CreateTodoPayload, DeleteTodoPayload, ListTodosQuery, UpdateTodoPayload};
use super::service::TodoService;
use super::store::KeyValueStore;
use crate::error::TodoError;

/// Header carrying the caller's user id. Trusted as given.
pub const USER_HEADER: &str = "user";

pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

/// Canonical request after normalization: who is asking, and a JSON object payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TodoRequest {
    pub user_id: String,
    pub payload: Map<String, Value>,
}

impl TodoRequest {
    /// Payload taken from the query string (list)
    pub fn from_query(event: &Request) -> Result<Self, TodoError> {
        let user_id = user_id(event)?;
        let mut payload = Map::new();
        for (key, value) in event.query_string_parameters().iter() {
            payload.insert(key.to_string(), Value::String(value.to_string()));
        }
        Ok(Self { user_id, payload })
    }

    /// Payload taken from the request body (create, update, delete)
    pub fn from_body(event: &Request) -> Result<Self, TodoError> {
        let user_id = user_id(event)?;
        let raw = event.body().as_ref();
        if raw.is_empty() {
            return Err(TodoError::MalformedInput("request body is empty".to_string()));
        }
        let payload = normalize_payload(serde_json::from_slice(raw)?)?;
        Ok(Self { user_id, payload })
    }

    pub fn payload<T: DeserializeOwned>(&self) -> Result<T, TodoError> {
        Ok(serde_json::from_value(Value::Object(self.payload.clone()))?)
    }
}

/// Accepts either a JSON object or a string holding an encoded JSON object
pub fn normalize_payload(raw: Value) -> Result<Map<String, Value>, TodoError> {
    match raw {
        Value::Object(map) => Ok(map),
        Value::String(encoded) => match serde_json::from_str(&encoded)? {
            Value::Object(map) => Ok(map),
            _ => Err(TodoError::MalformedInput(
                "encoded payload is not a JSON object".to_string(),
            )),
        },
        _ => Err(TodoError::MalformedInput("payload is not a JSON object".to_string())),
    }
}

fn user_id(event: &Request) -> Result<String, TodoError> {
    event
        .headers()
        .get(USER_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(|s| s.to_string())
        .ok_or_else(|| TodoError::MalformedInput(format!("missing '{}' header", USER_HEADER)))
}

/// GET: list the caller's todos with the `type` given in the query string
pub async fn list_todos<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Response<Body>, Error> {
    respond("list todos", list(service, event).await)
}

/// POST: create a todo from `title` and `body`
pub async fn create_todo<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Response<Body>, Error> {
    respond("create todo", create(service, event).await)
}

/// PUT/PATCH: set the `type` of the todo with `id`
pub async fn update_todo<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Response<Body>, Error> {
    respond("update todo", update(service, event).await)
}

/// DELETE: remove the todo with `id`
pub async fn delete_todo<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Response<Body>, Error> {
    respond("delete todo", delete(service, event).await)
}

async fn list<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Value, TodoError> {
    let request = TodoRequest::from_query(event)?;
    let query: ListTodosQuery = request.payload()?;
    let items = service.list(&request.user_id, &query.todo_type).await?;
    Ok(serde_json::json!({ "items": items }))
}

async fn create<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Value, TodoError> {
    let request = TodoRequest::from_body(event)?;
    let payload: CreateTodoPayload = request.payload()?;
    let item = service.create(&request.user_id, payload).await?;

    // The owner is implied by the request, so it is not echoed back
    Ok(serde_json::json!({
        "attributes": {
            "id": item.id,
            "body": item.body,
            "title": item.title,
            "type": item.todo_type,
        }
    }))
}

async fn update<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Value, TodoError> {
    let request = TodoRequest::from_body(event)?;
    let payload: UpdateTodoPayload = request.payload()?;
    let update = service
        .set_status(&request.user_id, &payload.id, &payload.todo_type)
        .await?;
    attributes(&update)
}

async fn delete<S: KeyValueStore>(
    service: &TodoService<S>,
    event: &Request,
) -> Result<Value, TodoError> {
    let request = TodoRequest::from_body(event)?;
    let payload: DeleteTodoPayload = request.payload()?;
    let deleted = service.delete(&request.user_id, &payload.id).await?;
    attributes(&deleted)
}

fn attributes<T: Serialize>(value: &T) -> Result<Value, TodoError> {
    Ok(serde_json::json!({ "attributes": serde_json::to_value(value)? }))
}

/// Every failure is logged and masked behind the same 500 body
fn respond(action: &str, result: Result<Value, TodoError>) -> Result<Response<Body>, Error> {
    match result {
        Ok(body) => json_response(StatusCode::OK, &body),
        Err(e) => {
            tracing::error!("Failed to {}: {}", action, e);
            unknown_error()
        }
    }
}

pub fn unknown_error() -> Result<Response<Body>, Error> {
    json_response(
        StatusCode::INTERNAL_SERVER_ERROR,
        &serde_json::json!({ "message": UNKNOWN_ERROR_MESSAGE }),
    )
}

pub fn json_response(status: StatusCode, body: &Value) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(body.to_string().into())
        .map_err(Box::new)?)
}
