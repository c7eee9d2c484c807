//! Item handlers. Every one redirects back to the owning list; validation
//! errors travel as flash messages.

use axum::extract::{Form, Path, State};
use axum::response::Redirect;
use serde::Deserialize;

use listkeeper_types::error::ListError;

use crate::http::error::AppError;
use crate::http::session::VisitorSession;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddItemForm {
    #[serde(default)]
    pub list_item: String,
}

#[derive(Debug, Deserialize)]
pub struct CompletionForm {
    #[serde(default)]
    pub completed: String,
}

fn back_to_list(list_number: usize) -> Redirect {
    Redirect::to(&format!("/lists/{list_number}"))
}

/// POST /lists/{list_number}/list_item - Add an item.
pub async fn add_item(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path(list_number): Path<usize>,
    Form(form): Form<AddItemForm>,
) -> Result<Redirect, AppError> {
    match state
        .list_service
        .add_item(&session, list_number, &form.list_item)
    {
        Ok(_) | Err(ListError::Validation(_)) => Ok(back_to_list(list_number)),
        Err(e) => Err(e.into()),
    }
}

/// POST /lists/{list_number}/list_item/{item_number}/delete
pub async fn delete_item(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path((list_number, item_number)): Path<(usize, usize)>,
) -> Result<Redirect, AppError> {
    state
        .list_service
        .delete_item(&session, list_number, item_number)?;
    Ok(back_to_list(list_number))
}

/// POST /lists/{list_number}/list_item/{item_number}/complete - Set the
/// item's completion to `completed == "true"`.
pub async fn set_item_completion(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path((list_number, item_number)): Path<(usize, usize)>,
    Form(form): Form<CompletionForm>,
) -> Result<Redirect, AppError> {
    let completed = form.completed == "true";
    state
        .list_service
        .set_item_completion(&session, list_number, item_number, completed)?;
    Ok(back_to_list(list_number))
}

/// POST /lists/{list_number}/complete_all
pub async fn complete_all(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path(list_number): Path<usize>,
) -> Result<Redirect, AppError> {
    state.list_service.complete_all(&session, list_number)?;
    Ok(back_to_list(list_number))
}
