//! Route definitions for tools.

use axum::routing::get;
use axum::Router;

use crate::handlers::tools;
use crate::state::AppState;

/// Tool routes mounted at `/tools`.
///
/// ```text
/// GET    /        -> list_tools
/// POST   /        -> create_tool
/// GET    /{id}    -> get_tool
/// PUT    /{id}    -> update_tool
/// DELETE /{id}    -> delete_tool
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tools::list_tools).post(tools::create_tool))
        .route(
            "/{id}",
            get(tools::get_tool)
                .put(tools::update_tool)
                .delete(tools::delete_tool),
        )
}
