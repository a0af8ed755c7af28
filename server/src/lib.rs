//! JSON facade over the list domain, keyed by session id.
//!
//! # Design
//! One route per domain operation, all scoped under `/sessions/{sid}` —
//! any session id is valid and its collection is created empty on first
//! touch. All rules live in `lists_core`; handlers only lock the store,
//! call one operation, and translate the result: domain errors become 422
//! (validation) or 404 (bad position) with the user-facing message in the
//! body, successes carry the matching flash message. The `RwLock` around
//! the store gives each request exclusive access to session data, which is
//! the whole concurrency model.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use lists_core::{messages, ops, sort_for_display, DomainError, SessionStore, TodoList};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub type Db = Arc<RwLock<SessionStore>>;

/// Flash-style message body, used for both successes and errors.
#[derive(Debug, Serialize, Deserialize)]
pub struct Flash {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NameInput {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleInput {
    pub done: bool,
}

/// One row of the lists overview. `index` is the stored position, valid
/// for addressing the list in later requests regardless of display order.
#[derive(Debug, Serialize, Deserialize)]
pub struct ListSummary {
    pub index: usize,
    pub name: String,
    pub remaining: usize,
    pub total: usize,
    pub complete: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct TodoView {
    pub index: usize,
    pub name: String,
    pub done: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ListView {
    pub name: String,
    pub complete: bool,
    pub todos: Vec<TodoView>,
}

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(SessionStore::new()));
    Router::new()
        .route("/sessions/{sid}/lists", get(index_lists).post(create_list))
        .route(
            "/sessions/{sid}/lists/{idx}",
            get(show_list).put(rename_list).delete(delete_list),
        )
        .route("/sessions/{sid}/lists/{idx}/todos", post(add_todo))
        .route(
            "/sessions/{sid}/lists/{idx}/todos/{tidx}",
            put(toggle_todo).delete(delete_todo),
        )
        .route("/sessions/{sid}/lists/{idx}/complete", post(complete_all))
        .route("/sessions/{sid}", delete(end_session))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    tracing::info!(addr = %listener.local_addr()?, "serving session lists");
    axum::serve(listener, app()).await
}

type ErrorResponse = (StatusCode, Json<Flash>);

fn reject(err: DomainError) -> ErrorResponse {
    tracing::debug!(%err, "domain operation rejected");
    let status = match err {
        DomainError::IndexOutOfRange { .. } => StatusCode::NOT_FOUND,
        _ => StatusCode::UNPROCESSABLE_ENTITY,
    };
    (status, flash(&err.to_string()))
}

fn flash(message: &str) -> Json<Flash> {
    Json(Flash {
        message: message.to_string(),
    })
}

async fn index_lists(State(db): State<Db>, Path(sid): Path<Uuid>) -> Json<Vec<ListSummary>> {
    let mut store = db.write().await;
    let lists = store.lists(sid);
    let summaries = sort_for_display(lists, TodoList::all_complete)
        .into_iter()
        .map(|(index, list)| ListSummary {
            index,
            name: list.name.clone(),
            remaining: list.remaining_count(),
            total: list.todo_count(),
            complete: list.all_complete(),
        })
        .collect();
    Json(summaries)
}

async fn create_list(
    State(db): State<Db>,
    Path(sid): Path<Uuid>,
    Json(input): Json<NameInput>,
) -> Result<(StatusCode, Json<Flash>), ErrorResponse> {
    let mut store = db.write().await;
    ops::create_list(store.lists(sid), &input.name).map_err(reject)?;
    Ok((StatusCode::CREATED, flash(messages::LIST_CREATED)))
}

async fn show_list(
    State(db): State<Db>,
    Path((sid, idx)): Path<(Uuid, usize)>,
) -> Result<Json<ListView>, ErrorResponse> {
    let mut store = db.write().await;
    let list = ops::get_list(store.lists(sid), idx).map_err(reject)?;
    let todos = sort_for_display(&list.todos, |t| t.done)
        .into_iter()
        .map(|(index, todo)| TodoView {
            index,
            name: todo.name.clone(),
            done: todo.done,
        })
        .collect();
    Ok(Json(ListView {
        name: list.name.clone(),
        complete: list.all_complete(),
        todos,
    }))
}

async fn rename_list(
    State(db): State<Db>,
    Path((sid, idx)): Path<(Uuid, usize)>,
    Json(input): Json<NameInput>,
) -> Result<Json<Flash>, ErrorResponse> {
    let mut store = db.write().await;
    ops::rename_list(store.lists(sid), idx, &input.name).map_err(reject)?;
    Ok(flash(messages::LIST_UPDATED))
}

async fn delete_list(
    State(db): State<Db>,
    Path((sid, idx)): Path<(Uuid, usize)>,
) -> Result<Json<Flash>, ErrorResponse> {
    let mut store = db.write().await;
    ops::delete_list(store.lists(sid), idx).map_err(reject)?;
    Ok(flash(messages::LIST_DELETED))
}

async fn add_todo(
    State(db): State<Db>,
    Path((sid, idx)): Path<(Uuid, usize)>,
    Json(input): Json<NameInput>,
) -> Result<(StatusCode, Json<Flash>), ErrorResponse> {
    let mut store = db.write().await;
    let list = ops::get_list_mut(store.lists(sid), idx).map_err(reject)?;
    list.add_todo(&input.name).map_err(reject)?;
    Ok((StatusCode::CREATED, flash(messages::TODO_CREATED)))
}

async fn toggle_todo(
    State(db): State<Db>,
    Path((sid, idx, tidx)): Path<(Uuid, usize, usize)>,
    Json(input): Json<ToggleInput>,
) -> Result<Json<Flash>, ErrorResponse> {
    let mut store = db.write().await;
    let list = ops::get_list_mut(store.lists(sid), idx).map_err(reject)?;
    list.toggle_todo(tidx, input.done).map_err(reject)?;
    Ok(flash(messages::TODO_UPDATED))
}

async fn delete_todo(
    State(db): State<Db>,
    Path((sid, idx, tidx)): Path<(Uuid, usize, usize)>,
) -> Result<Json<Flash>, ErrorResponse> {
    let mut store = db.write().await;
    let list = ops::get_list_mut(store.lists(sid), idx).map_err(reject)?;
    list.delete_todo(tidx).map_err(reject)?;
    Ok(flash(messages::TODO_DELETED))
}

/// Drop a session's state entirely. The session map grows until sessions
/// are ended, so hosts should call this when a session expires.
async fn end_session(State(db): State<Db>, Path(sid): Path<Uuid>) -> StatusCode {
    let mut store = db.write().await;
    if store.remove_session(sid).is_some() {
        tracing::debug!(%sid, live_sessions = store.session_count(), "session ended");
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

async fn complete_all(
    State(db): State<Db>,
    Path((sid, idx)): Path<(Uuid, usize)>,
) -> Result<Json<Flash>, ErrorResponse> {
    let mut store = db.write().await;
    let list = ops::get_list_mut(store.lists(sid), idx).map_err(reject)?;
    list.complete_all();
    Ok(flash(messages::ALL_COMPLETE))
}
