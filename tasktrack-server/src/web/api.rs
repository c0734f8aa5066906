use axum::{
    Router,
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
};
use serde::{Deserialize, Serialize};
use tasktrack::{Category, Task};

use crate::web::AppState;

/// API error payload returned alongside a non-2xx status.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable description of what was wrong with the request
    error: String,
}

impl ErrorResponse {
    pub fn new(error: String) -> Self {
        Self { error }
    }
}

/// Request body for creating a task.
#[derive(Debug, Deserialize)]
pub struct AddTaskRequest {
    /// Task description
    description: String,
    /// Name of the category the task belongs to
    category: String,
}

/// Response for a successfully created task.
#[derive(Debug, Serialize)]
pub struct AddTaskResponse {
    /// Id assigned to the new task
    id: u64,
}

/// Response for complete/delete operations, where a missing task is an
/// expected outcome rather than an error.
#[derive(Debug, Serialize)]
pub struct SuccessResponse {
    /// Whether the referenced task existed and the operation applied
    success: bool,
}

/// API response for listing all tasks.
#[derive(Debug, Serialize)]
pub struct TasksResponse {
    /// Tasks in insertion order
    tasks: Vec<Task>,
    /// Total number of tasks
    count: usize,
}

/// API response for listing categories.
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    /// List of categories
    categories: Vec<Category>,
    /// Total number of categories
    count: usize,
}

/// Handler for POST /api/v1/tasks - Creates a task and returns its id.
#[tracing::instrument(skip(state))]
pub async fn add_task_handler(
    State(state): State<AppState>,
    Json(request): Json<AddTaskRequest>,
) -> Result<(StatusCode, Json<AddTaskResponse>), (StatusCode, Json<ErrorResponse>)> {
    let mut store = state.store.lock().await;

    match store.add_task(&request.description, &request.category) {
        Ok(id) => Ok((StatusCode::CREATED, Json(AddTaskResponse { id }))),
        Err(err) => {
            tracing::warn!("Rejected task creation: {}", err);
            Err((
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorResponse::new(err.to_string())),
            ))
        }
    }
}

/// Handler for POST /api/v1/tasks/{id}/complete - Marks a task completed.
#[tracing::instrument(skip(state))]
pub async fn complete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<SuccessResponse> {
    let mut store = state.store.lock().await;
    let success = store.complete_task(id);
    Json(SuccessResponse { success })
}

/// Handler for DELETE /api/v1/tasks/{id} - Removes a task.
#[tracing::instrument(skip(state))]
pub async fn delete_task_handler(
    State(state): State<AppState>,
    Path(id): Path<u64>,
) -> Json<SuccessResponse> {
    let mut store = state.store.lock().await;
    let success = store.delete_task(id);
    Json(SuccessResponse { success })
}

/// Handler for GET /api/v1/tasks - Returns all tasks in insertion order.
#[tracing::instrument(skip(state))]
pub async fn get_tasks_handler(State(state): State<AppState>) -> Json<TasksResponse> {
    let store = state.store.lock().await;
    let tasks = store.tasks().to_vec();
    let count = tasks.len();
    Json(TasksResponse { tasks, count })
}

/// Handler for GET /api/v1/categories - Returns every known category.
#[tracing::instrument(skip(state))]
pub async fn get_categories_handler(State(state): State<AppState>) -> Json<CategoriesResponse> {
    let store = state.store.lock().await;
    let categories = store.categories().to_vec();
    let count = categories.len();
    Json(CategoriesResponse { categories, count })
}

/// Handler for GET /api/v1/categories/defaults - Returns the fixed seed set.
#[tracing::instrument(skip(state))]
pub async fn get_default_categories_handler(
    State(state): State<AppState>,
) -> Json<CategoriesResponse> {
    let store = state.store.lock().await;
    let categories = store.default_categories();
    let count = categories.len();
    Json(CategoriesResponse { categories, count })
}

/// Creates and returns the tasks API router.
pub fn create_api_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/api/v1/tasks",
            post(add_task_handler).get(get_tasks_handler),
        )
        .route("/api/v1/tasks/{id}/complete", post(complete_task_handler))
        .route("/api/v1/tasks/{id}", delete(delete_task_handler))
        .route("/api/v1/categories", get(get_categories_handler))
        .route(
            "/api/v1/categories/defaults",
            get(get_default_categories_handler),
        )
        .with_state(state)
}
