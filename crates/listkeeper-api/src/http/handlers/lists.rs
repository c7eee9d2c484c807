//! List handlers: overview, create, show, rename and delete.

use axum::extract::{Form, Path, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;

use listkeeper_core::service::list::FormOutcome;
use listkeeper_types::error::ListError;
use listkeeper_types::list::TodoList;
use listkeeper_types::session::Flash;

use crate::http::error::AppError;
use crate::http::session::VisitorSession;
use crate::http::views::{list as list_view, lists as lists_view};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct NewListForm {
    #[serde(default)]
    pub list_name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameListForm {
    #[serde(default)]
    pub new_name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteListForm {
    pub list_number: usize,
}

/// GET / - Send visitors to the overview.
pub async fn root() -> Redirect {
    Redirect::to("/lists")
}

/// GET /lists - Overview of every list.
pub async fn overview(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
) -> Result<Html<String>, AppError> {
    let html = state
        .list_service
        .present(&session, |lists, flashes| {
            Ok(lists_view::overview(lists, flashes))
        })?;
    Ok(Html(html))
}

/// GET /lists/new - Empty new-list form.
pub async fn new_list(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
) -> Result<Html<String>, AppError> {
    let html = state
        .list_service
        .present(&session, |_, flashes| {
            Ok(lists_view::new_list_form(flashes, ""))
        })?;
    Ok(Html(html))
}

/// POST /lists - Create a list, or re-render the form with the error.
pub async fn create_list(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Form(form): Form<NewListForm>,
) -> Result<Response, AppError> {
    let outcome = state
        .list_service
        .submit_new_list(&session, &form.list_name, |_, flashes| {
            Ok(lists_view::new_list_form(flashes, &form.list_name))
        })?;

    Ok(match outcome {
        FormOutcome::Saved(_) => Redirect::to("/lists").into_response(),
        FormOutcome::Rejected(html) => Html(html).into_response(),
    })
}

/// GET /lists/{list_number} - One list with its items.
pub async fn show_list(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path(list_number): Path<usize>,
) -> Result<Html<String>, AppError> {
    let html = state.list_service.present(&session, |lists, flashes| {
        lists
            .get(list_number)
            .map(|list| list_view::list_page(list_number, list, flashes))
            .ok_or(ListError::ListNotFound(list_number))
    })?;
    Ok(Html(html))
}

/// GET /edit_list/{list_number} - Rename form.
pub async fn edit_list(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path(list_number): Path<usize>,
) -> Result<Html<String>, AppError> {
    let html = state.list_service.present(&session, |lists, flashes| {
        edit_form(lists, flashes, list_number, None)
    })?;
    Ok(Html(html))
}

/// POST /edit_list/{list_number} - Rename, or re-render the form with the
/// error and the rejected name.
pub async fn update_list(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Path(list_number): Path<usize>,
    Form(form): Form<RenameListForm>,
) -> Result<Response, AppError> {
    let outcome = state.list_service.submit_rename(
        &session,
        list_number,
        &form.new_name,
        |lists, flashes| edit_form(lists, flashes, list_number, Some(&form.new_name)),
    )?;

    Ok(match outcome {
        FormOutcome::Saved(()) => {
            Redirect::to(&format!("/lists/{list_number}")).into_response()
        }
        FormOutcome::Rejected(html) => Html(html).into_response(),
    })
}

/// POST /lists/delete - Delete the list at `list_number`.
pub async fn delete_list(
    State(state): State<AppState>,
    VisitorSession(session): VisitorSession,
    Form(form): Form<DeleteListForm>,
) -> Result<Redirect, AppError> {
    state.list_service.delete_list(&session, form.list_number)?;
    Ok(Redirect::to("/lists"))
}

fn edit_form(
    lists: &[TodoList],
    flashes: &[Flash],
    list_number: usize,
    proposed: Option<&str>,
) -> Result<String, ListError> {
    lists
        .get(list_number)
        .map(|list| list_view::edit_list_form(list_number, list, flashes, proposed))
        .ok_or(ListError::ListNotFound(list_number))
}
