use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Extension, Json,
};

use super::types::*;
use super::AppState;
use crate::error::TodoError;
use crate::models::*;
use crate::ordering::sorted_lists;
use crate::store;
use crate::validation::normalize_name;

type ApiResult<T> = Result<T, (StatusCode, String)>;

// ============================================================
// Error Handling
// ============================================================

/// Log an internal error and return a sanitized response to the client.
fn internal_error(e: impl std::fmt::Display) -> (StatusCode, String) {
    tracing::error!("Internal error: {}", e);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "Internal server error".to_string(),
    )
}

/// Map a core error to a client-facing response. The message is the one the
/// user should see.
fn todo_error(e: TodoError) -> (StatusCode, String) {
    let status = if e.is_not_found() {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::UNPROCESSABLE_ENTITY
    };
    tracing::warn!("Rejected request: {}", e);
    (status, e.to_string())
}

/// Run one core operation against the caller's session.
fn with_session<T>(
    state: &AppState,
    session: SessionId,
    f: impl FnOnce(&mut SessionState) -> Result<T, TodoError>,
) -> ApiResult<T> {
    state
        .sessions
        .with_state(session, f)
        .map_err(internal_error)?
        .map_err(todo_error)
}

// ============================================================
// Health
// ============================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

pub async fn index() -> Redirect {
    Redirect::to("/lists")
}

// ============================================================
// Lists
// ============================================================

pub async fn list_lists(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> ApiResult<Json<Vec<ListSummary>>> {
    with_session(&state, session, |s| {
        Ok(sorted_lists(&s.lists)
            .into_iter()
            .map(|(list, index)| ListSummary::new(list, index))
            .collect())
    })
    .map(Json)
}

pub async fn get_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_index): Path<usize>,
) -> ApiResult<Json<ListDetail>> {
    with_session(&state, session, |s| {
        store::list(&s.lists, list_index).map(|list| ListDetail::new(list, list_index))
    })
    .map(Json)
}

pub async fn create_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Json(input): Json<ListNameInput>,
) -> ApiResult<(StatusCode, Json<Notice>)> {
    let name = normalize_name(&input.list_name);

    with_session(&state, session, |s| store::add_list(&mut s.lists, name))?;
    tracing::debug!(session = %session, "created list");

    Ok((
        StatusCode::CREATED,
        Json(Notice::success("The list has been created.")),
    ))
}

pub async fn rename_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_index): Path<usize>,
    Json(input): Json<ListNameInput>,
) -> ApiResult<Json<Notice>> {
    let new_name = normalize_name(&input.list_name);
    let scope = state.options.rename_scope;

    let original = with_session(&state, session, |s| {
        store::rename_list_with(&mut s.lists, list_index, new_name, scope)
    })?;
    tracing::debug!(session = %session, list = list_index, "renamed list");

    Ok(Json(Notice::success(format!(
        "The list '{}' has been successfully edited to '{}'.",
        original, new_name
    ))))
}

pub async fn delete_list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_index): Path<usize>,
) -> ApiResult<Json<Notice>> {
    let deleted = with_session(&state, session, |s| {
        store::delete_list(&mut s.lists, list_index)
    })?;
    tracing::debug!(session = %session, list = list_index, "deleted list");

    Ok(Json(Notice::success(format!(
        "List '{}' was successfully deleted.",
        deleted
    ))))
}

// ============================================================
// Tasks
// ============================================================

pub async fn create_task(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_index): Path<usize>,
    Json(input): Json<CreateTaskInput>,
) -> ApiResult<(StatusCode, Json<Notice>)> {
    let name = normalize_name(&input.todo);

    let list_name = with_session(&state, session, |s| {
        let list = store::list_mut(&mut s.lists, list_index)?;
        store::add_task(list, name)?;
        Ok(list.name.clone())
    })?;
    tracing::debug!(session = %session, list = list_index, "added task");

    Ok((
        StatusCode::CREATED,
        Json(Notice::success(format!("'{}' added to '{}'.", name, list_name))),
    ))
}

pub async fn toggle_task(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((list_index, task_index)): Path<(usize, usize)>,
    input: Option<Json<ToggleTaskInput>>,
) -> ApiResult<Json<Notice>> {
    let mode = state.options.toggle_mode;
    let input = input.map(|Json(input)| input).unwrap_or_default();

    let (name, completed) = with_session(&state, session, |s| {
        let list = store::list_mut(&mut s.lists, list_index)?;
        let completed = store::toggle_task_with(list, task_index, &input.completed, mode)?;
        Ok((store::task(list, task_index)?.name.clone(), completed))
    })?;
    tracing::debug!(
        session = %session,
        list = list_index,
        task = task_index,
        completed,
        "toggled task"
    );

    let notice = if completed {
        Notice::success(format!("{} has been marked as completed", name))
    } else {
        Notice::info(format!("{} has been unmarked", name))
    };
    Ok(Json(notice))
}

pub async fn delete_task(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path((list_index, task_index)): Path<(usize, usize)>,
) -> ApiResult<Json<Notice>> {
    let deleted = with_session(&state, session, |s| {
        let list = store::list_mut(&mut s.lists, list_index)?;
        store::delete_task(list, task_index)
    })?;
    tracing::debug!(session = %session, list = list_index, task = task_index, "deleted task");

    Ok(Json(Notice::success(format!(
        "To do '{}' was successfully deleted.",
        deleted
    ))))
}

pub async fn complete_all(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
    Path(list_index): Path<usize>,
) -> ApiResult<Json<Notice>> {
    with_session(&state, session, |s| {
        store::complete_all(store::list_mut(&mut s.lists, list_index)?)
    })?;
    tracing::debug!(session = %session, list = list_index, "completed all tasks");

    Ok(Json(Notice::success("All to do's are marked as finished.")))
}
