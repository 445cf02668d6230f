use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::get,
};
use db::{
    models::task::{CreateTask, Task, UpdateTask},
    validation::validate_title,
};
use serde::{Deserialize, Serialize};
use utils::response::MessageResponse;
use uuid::Uuid;

use crate::{AppState, error::ApiError};

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskCreatedResponse {
    pub message: String,
    pub task: Task,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskListResponse {
    pub tasks: Vec<Task>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TaskResponse {
    pub task: Task,
}

pub async fn create_task(
    State(state): State<AppState>,
    payload: Result<Json<CreateTask>, JsonRejection>,
) -> Result<(StatusCode, ResponseJson<TaskCreatedResponse>), ApiError> {
    let Json(mut payload) = payload.map_err(|_| ApiError::InvalidPayload)?;

    validate_title(&payload.title)?;

    // Tasks always start incomplete, whatever the caller sent.
    payload.completed = false;

    let task = Task::create(&state.db().pool, &payload).await?;

    tracing::debug!(task_id = %task.id, "created task '{}'", task.title);

    Ok((
        StatusCode::CREATED,
        ResponseJson(TaskCreatedResponse {
            message: "Task created".to_string(),
            task,
        }),
    ))
}

pub async fn get_tasks(
    State(state): State<AppState>,
) -> Result<ResponseJson<TaskListResponse>, ApiError> {
    let tasks = Task::find_all(&state.db().pool).await?;
    Ok(ResponseJson(TaskListResponse { tasks }))
}

pub async fn get_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<TaskResponse>, ApiError> {
    let id = Uuid::parse_str(&id)?;

    // A miss is a domain condition, not a store failure.
    let task = Task::find_by_id(&state.db().pool, id)
        .await?
        .ok_or(ApiError::TaskNotFound)?;

    Ok(ResponseJson(TaskResponse { task }))
}

pub async fn update_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateTask>, JsonRejection>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let id = Uuid::parse_str(&id)?;
    let Json(payload) = payload.map_err(|_| ApiError::InvalidPayload)?;

    // Same rule as creation; a missing title validates as empty.
    validate_title(payload.title.as_deref().unwrap_or_default())?;

    let matched = Task::update(&state.db().pool, id, &payload).await?;
    if matched == 0 {
        return Err(ApiError::TaskNotFound);
    }

    Ok(ResponseJson(MessageResponse::new("Task updated")))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<ResponseJson<MessageResponse>, ApiError> {
    let id = Uuid::parse_str(&id)?;

    let deleted = Task::delete(&state.db().pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::TaskNotFound);
    }

    Ok(ResponseJson(MessageResponse::new("Task deleted")))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(get_tasks).post(create_task))
        .route(
            "/tasks/{id}",
            get(get_task).put(update_task).delete(delete_task),
        )
}
