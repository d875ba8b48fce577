use std::{collections::BTreeMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{patch, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::info;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u64,
    pub message: String,
    pub status: String,
}

#[derive(Deserialize)]
pub struct UpdateTodo {
    pub message: Option<String>,
    pub status: Option<String>,
}

pub type Db = Arc<RwLock<BTreeMap<u64, Todo>>>;

/// The items the backend starts with, matching what the front-end shows
/// before its first call.
pub fn seed() -> Vec<Todo> {
    vec![
        Todo {
            id: 1,
            message: "Implement new feature".to_string(),
            status: "In-progress".to_string(),
        },
        Todo {
            id: 2,
            message: "Connect Database".to_string(),
            status: "In-progress".to_string(),
        },
    ]
}

pub fn app() -> Router {
    app_with(seed())
}

pub fn app_with(todos: Vec<Todo>) -> Router {
    let db: Db = Arc::new(RwLock::new(todos.into_iter().map(|t| (t.id, t)).collect()));
    Router::new()
        .route("/", post(create_todo))
        .route("/todo/{id}", patch(update_todo).delete(delete_todo))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

/// The client picks the id; a clash with an existing one is a conflict.
async fn create_todo(
    State(db): State<Db>,
    Json(input): Json<Todo>,
) -> Result<(StatusCode, Json<Todo>), StatusCode> {
    let mut todos = db.write().await;
    if todos.contains_key(&input.id) {
        return Err(StatusCode::CONFLICT);
    }
    info!(id = input.id, "todo created");
    todos.insert(input.id, input.clone());
    Ok((StatusCode::CREATED, Json(input)))
}

async fn update_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
    Json(input): Json<UpdateTodo>,
) -> Result<Json<Todo>, StatusCode> {
    let mut todos = db.write().await;
    let todo = todos.get_mut(&id).ok_or(StatusCode::NOT_FOUND)?;
    if let Some(message) = input.message {
        todo.message = message;
    }
    if let Some(status) = input.status {
        todo.status = status;
    }
    info!(id, "todo updated");
    Ok(Json(todo.clone()))
}

async fn delete_todo(
    State(db): State<Db>,
    Path(id): Path<u64>,
) -> Result<StatusCode, StatusCode> {
    let mut todos = db.write().await;
    todos.remove(&id).ok_or(StatusCode::NOT_FOUND)?;
    info!(id, "todo deleted");
    Ok(StatusCode::NO_CONTENT)
}
