//! Todo endpoints
//!
//! The five CRUD operations: list, create, get, full update (PUT),
//! partial update (PATCH), delete. Input is validated into domain
//! types before any repository call.

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::db::{Todo, TodoRepo};
use crate::http::error::ApiError;
use crate::http::extractors::{TodoId, ValidJson, ValidQuery};
use crate::http::server::AppState;
use crate::models::{NewTodo, PageParams, PageQuery, TaskText, TodoChanges, ValidationError};

/// Create / full-update request body
#[derive(Debug, Deserialize)]
pub struct TodoPayload {
    pub task: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
}

impl TryFrom<TodoPayload> for NewTodo {
    type Error = ValidationError;

    fn try_from(payload: TodoPayload) -> Result<Self, Self::Error> {
        let task = payload
            .task
            .ok_or(ValidationError::Missing { field: "task" })?;

        Ok(Self {
            task: TaskText::new(&task)?,
            due_date: payload.due_date,
        })
    }
}

/// Partial-update request body.
///
/// An absent field leaves the stored value untouched; `due_date: null`
/// explicitly clears it, which is why it deserializes through
/// `double_option`.
#[derive(Debug, Default, Deserialize)]
pub struct TodoPatch {
    pub task: Option<String>,
    #[serde(default, deserialize_with = "double_option")]
    pub due_date: Option<Option<DateTime<Utc>>>,
}

fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl TryFrom<TodoPatch> for TodoChanges {
    type Error = ValidationError;

    fn try_from(patch: TodoPatch) -> Result<Self, Self::Error> {
        Ok(Self {
            task: patch.task.as_deref().map(TaskText::new).transpose()?,
            due_date: patch.due_date,
        })
    }
}

/// Todo response, every column serialized with RFC 3339 timestamps
#[derive(Debug, Serialize)]
pub struct TodoResponse {
    pub id: i64,
    pub task: String,
    pub due_date: Option<String>,
    pub create_date: String,
    pub update_date: String,
}

impl From<Todo> for TodoResponse {
    fn from(todo: Todo) -> Self {
        Self {
            id: todo.id,
            task: todo.task,
            due_date: todo.due_date.map(|d| d.to_rfc3339()),
            create_date: todo.create_date.to_rfc3339(),
            update_date: todo.update_date.to_rfc3339(),
        }
    }
}

/// Delete confirmation response
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub detail: String,
}

/// GET /todo - list one page of todos
async fn list_todos(
    State(state): State<Arc<AppState>>,
    ValidQuery(query): ValidQuery<PageQuery>,
) -> Result<Json<Vec<TodoResponse>>, ApiError> {
    let page = PageParams::try_from(query)?;
    let todos = TodoRepo::new(state.pool()).list(page).await?;

    Ok(Json(todos.into_iter().map(TodoResponse::from).collect()))
}

/// POST /todo - create a new todo
async fn create_todo(
    State(state): State<Arc<AppState>>,
    ValidJson(payload): ValidJson<TodoPayload>,
) -> Result<Json<TodoResponse>, ApiError> {
    let input = NewTodo::try_from(payload)?;
    let todo = TodoRepo::new(state.pool()).create(input).await?;

    tracing::info!(id = todo.id, task = %todo.task, "created todo");
    Ok(Json(TodoResponse::from(todo)))
}

/// GET /todo/{id} - get a single todo
async fn get_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<TodoResponse>, ApiError> {
    let todo = TodoRepo::new(state.pool()).get(id).await?;
    Ok(Json(TodoResponse::from(todo)))
}

/// PUT /todo/{id} - replace every updatable field
async fn update_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    ValidJson(payload): ValidJson<TodoPayload>,
) -> Result<Json<TodoResponse>, ApiError> {
    let input = NewTodo::try_from(payload)?;
    let changes = TodoChanges::full(input);
    let todo = TodoRepo::new(state.pool()).update(id, changes).await?;

    tracing::info!(id = todo.id, "updated todo");
    Ok(Json(TodoResponse::from(todo)))
}

/// PATCH /todo/{id} - update only the supplied fields
async fn patch_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
    ValidJson(patch): ValidJson<TodoPatch>,
) -> Result<Json<TodoResponse>, ApiError> {
    let changes = TodoChanges::try_from(patch)?;
    let todo = TodoRepo::new(state.pool()).update(id, changes).await?;

    tracing::info!(id = todo.id, "patched todo");
    Ok(Json(TodoResponse::from(todo)))
}

/// DELETE /todo/{id} - delete a todo
async fn delete_todo(
    State(state): State<Arc<AppState>>,
    TodoId(id): TodoId,
) -> Result<Json<DeleteResponse>, ApiError> {
    TodoRepo::new(state.pool()).delete(id).await?;

    tracing::info!(id, "deleted todo");
    Ok(Json(DeleteResponse {
        detail: format!("Todo with id {} deleted successfully", id),
    }))
}

/// Todo routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/todo", get(list_todos).post(create_todo))
        .route(
            "/todo/{id}",
            get(get_todo)
                .put(update_todo)
                .patch(patch_todo)
                .delete(delete_todo),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn payload_with_all_fields() {
        let payload: TodoPayload = serde_json::from_value(json!({
            "task": "Buy groceries",
            "due_date": "2025-12-31T23:59:59Z"
        }))
        .unwrap();

        let input = NewTodo::try_from(payload).unwrap();
        assert_eq!(input.task.as_str(), "Buy groceries");
        assert!(input.due_date.is_some());
    }

    #[test]
    fn payload_missing_task_is_rejected() {
        let payload: TodoPayload = serde_json::from_value(json!({
            "due_date": "2025-12-31T23:59:59Z"
        }))
        .unwrap();

        let err = NewTodo::try_from(payload).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "task" }));
    }

    #[test]
    fn patch_absent_due_date_is_untouched() {
        let patch: TodoPatch = serde_json::from_value(json!({
            "task": "renamed"
        }))
        .unwrap();

        let changes = TodoChanges::try_from(patch).unwrap();
        assert!(changes.task.is_some());
        assert_eq!(changes.due_date, None);
    }

    #[test]
    fn patch_null_due_date_clears_it() {
        let patch: TodoPatch = serde_json::from_value(json!({
            "due_date": null
        }))
        .unwrap();

        let changes = TodoChanges::try_from(patch).unwrap();
        assert!(changes.task.is_none());
        assert_eq!(changes.due_date, Some(None));
    }

    #[test]
    fn patch_with_no_fields_is_empty() {
        let patch: TodoPatch = serde_json::from_value(json!({})).unwrap();
        let changes = TodoChanges::try_from(patch).unwrap();
        assert!(changes.is_empty());
    }

    #[test]
    fn response_serializes_every_column() {
        let now = Utc::now();
        let todo = Todo {
            id: 7,
            task: "write docs".into(),
            due_date: None,
            create_date: now,
            update_date: now,
        };

        let response = TodoResponse::from(todo);
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["id"], 7);
        assert_eq!(value["task"], "write docs");
        assert_eq!(value["due_date"], serde_json::Value::Null);
        assert_eq!(value["create_date"], now.to_rfc3339());
        assert_eq!(value["update_date"], now.to_rfc3339());
    }
}
