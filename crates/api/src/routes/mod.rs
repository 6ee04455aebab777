pub mod categories;
pub mod health;
pub mod pages;
pub mod tools;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                                  list, create
/// /categories/{id}                             get, update, delete
///
/// /tools                                       list, create
/// /tools/{id}                                  get, update, delete
///
/// /pages/home                                  categories + tools listing (GET)
/// /pages/home/categories/{id}/delete           delete category, refresh (POST)
/// /pages/home/tools/{id}/delete                delete tool, refresh (POST)
/// /pages/add-category                          form view (GET), submit (POST)
/// /pages/add-tool                              form view (GET), submit (POST)
/// /pages/update-category?categoryId=           form view (GET), submit (POST)
/// /pages/update-tool?toolId=                   form view (GET), submit (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/categories", categories::router())
        .nest("/tools", tools::router())
        .nest("/pages", pages::router())
}
