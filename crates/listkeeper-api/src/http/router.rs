//! Axum router configuration with middleware.
//!
//! List and item routes run behind the session middleware. `/health` and the
//! not-found fallback do not, so health checks never mint cookies.

use axum::http::Uri;
use axum::middleware;
use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::http::error::AppError;
use crate::http::handlers;
use crate::http::session::resolve_session;
use crate::state::AppState;

/// Build the complete router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let list_routes = Router::new()
        .route("/", get(handlers::lists::root))
        .route(
            "/lists",
            get(handlers::lists::overview).post(handlers::lists::create_list),
        )
        .route("/lists/new", get(handlers::lists::new_list))
        .route("/lists/delete", post(handlers::lists::delete_list))
        .route("/lists/{list_number}", get(handlers::lists::show_list))
        .route(
            "/edit_list/{list_number}",
            get(handlers::lists::edit_list).post(handlers::lists::update_list),
        )
        // Items
        .route(
            "/lists/{list_number}/list_item",
            post(handlers::items::add_item),
        )
        .route(
            "/lists/{list_number}/list_item/{item_number}/delete",
            post(handlers::items::delete_item),
        )
        .route(
            "/lists/{list_number}/list_item/{item_number}/complete",
            post(handlers::items::set_item_completion),
        )
        .route(
            "/lists/{list_number}/complete_all",
            post(handlers::items::complete_all),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            resolve_session,
        ));

    Router::new()
        .merge(list_routes)
        .route("/health", get(handlers::health::health))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("Nothing lives at {}", uri.path()))
}
