//! Route definitions for the page controllers.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Page routes mounted at `/pages`.
///
/// ```text
/// GET    /home                              -> home
/// POST   /home/categories/{id}/delete       -> home_delete_category
/// POST   /home/tools/{id}/delete            -> home_delete_tool
/// GET    /add-category                      -> add_category_form
/// POST   /add-category                      -> add_category_submit
/// GET    /add-tool                          -> add_tool_form
/// POST   /add-tool                          -> add_tool_submit
/// GET    /update-category?categoryId=       -> update_category_form
/// POST   /update-category?categoryId=       -> update_category_submit
/// GET    /update-tool?toolId=               -> update_tool_form
/// POST   /update-tool?toolId=               -> update_tool_submit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/home", get(pages::home))
        .route(
            "/home/categories/{id}/delete",
            post(pages::home_delete_category),
        )
        .route("/home/tools/{id}/delete", post(pages::home_delete_tool))
        .route(
            "/add-category",
            get(pages::add_category_form).post(pages::add_category_submit),
        )
        .route(
            "/add-tool",
            get(pages::add_tool_form).post(pages::add_tool_submit),
        )
        .route(
            "/update-category",
            get(pages::update_category_form).post(pages::update_category_submit),
        )
        .route(
            "/update-tool",
            get(pages::update_tool_form).post(pages::update_tool_submit),
        )
}
