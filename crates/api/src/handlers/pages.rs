//! Page handlers.
//!
//! Each request builds a fresh controller, applies the user's action and
//! answers with the resulting view. Outcomes, including failures, are part
//! of the view and return 200; only a missing id parameter is a 400.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::Json;
use toolshelf_db::models::category::{CreateCategory, UpdateCategory};
use toolshelf_db::models::tool::{CreateTool, UpdateTool};

use crate::controllers::{
    AddCategoryController, AddToolController, HomeController, UpdateCategoryController,
    UpdateToolController,
};
use crate::error::{AppError, AppResult};
use crate::query::{CategoryIdParam, ToolIdParam};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Home
// ---------------------------------------------------------------------------

fn home_controller(state: &AppState) -> HomeController {
    HomeController::new(
        state.categories.clone(),
        state.tools.clone(),
        state.config.list_limit,
    )
}

/// GET /api/v1/pages/home
pub async fn home(State(state): State<AppState>) -> impl IntoResponse {
    let mut controller = home_controller(&state);
    controller.load().await;
    Json(controller.view())
}

/// POST /api/v1/pages/home/categories/{id}/delete
pub async fn home_delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut controller = home_controller(&state);
    controller.delete_category(&id).await;
    controller.finish_loading().await;
    Json(controller.view())
}

/// POST /api/v1/pages/home/tools/{id}/delete
pub async fn home_delete_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let mut controller = home_controller(&state);
    controller.delete_tool(&id).await;
    controller.finish_loading().await;
    Json(controller.view())
}

// ---------------------------------------------------------------------------
// Add category / add tool
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/add-category
pub async fn add_category_form(State(state): State<AppState>) -> impl IntoResponse {
    Json(AddCategoryController::new(state.categories.clone()).view())
}

/// POST /api/v1/pages/add-category
pub async fn add_category_submit(
    State(state): State<AppState>,
    Json(form): Json<CreateCategory>,
) -> impl IntoResponse {
    let mut controller = AddCategoryController::new(state.categories.clone());
    controller.set_title(form.title);
    controller.submit().await;
    Json(controller.view())
}

fn add_tool_controller(state: &AppState) -> AddToolController {
    AddToolController::new(state.tools.clone(), state.categories.clone())
}

/// GET /api/v1/pages/add-tool
pub async fn add_tool_form(State(state): State<AppState>) -> impl IntoResponse {
    let mut controller = add_tool_controller(&state);
    controller
        .load_categories(state.config.category_options_limit)
        .await;
    Json(controller.view())
}

/// POST /api/v1/pages/add-tool
pub async fn add_tool_submit(
    State(state): State<AppState>,
    Json(form): Json<CreateTool>,
) -> impl IntoResponse {
    let mut controller = add_tool_controller(&state);
    controller.set_title(form.title);
    controller.set_description(form.description);
    controller.set_category_id(form.category_id);
    controller.submit().await;
    controller
        .load_categories(state.config.category_options_limit)
        .await;
    Json(controller.view())
}

// ---------------------------------------------------------------------------
// Update category / update tool
// ---------------------------------------------------------------------------

/// GET /api/v1/pages/update-category?categoryId=
pub async fn update_category_form(
    State(state): State<AppState>,
    Query(params): Query<CategoryIdParam>,
) -> AppResult<impl IntoResponse> {
    let id = require_param(params.category_id, "categoryId")?;
    let mut controller = UpdateCategoryController::new(state.categories.clone(), id);
    controller.load().await;
    Ok(Json(controller.view()))
}

/// POST /api/v1/pages/update-category?categoryId=
pub async fn update_category_submit(
    State(state): State<AppState>,
    Query(params): Query<CategoryIdParam>,
    Json(form): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    let id = require_param(params.category_id, "categoryId")?;
    let mut controller = UpdateCategoryController::new(state.categories.clone(), id);
    controller.set_title(form.title);
    controller.submit().await;
    Ok(Json(controller.view()))
}

/// GET /api/v1/pages/update-tool?toolId=
pub async fn update_tool_form(
    State(state): State<AppState>,
    Query(params): Query<ToolIdParam>,
) -> AppResult<impl IntoResponse> {
    let id = require_param(params.tool_id, "toolId")?;
    let mut controller = UpdateToolController::new(state.tools.clone(), id);
    controller.load().await;
    Ok(Json(controller.view()))
}

/// POST /api/v1/pages/update-tool?toolId=
///
/// Loads the tool first so the view still shows its category.
pub async fn update_tool_submit(
    State(state): State<AppState>,
    Query(params): Query<ToolIdParam>,
    Json(form): Json<UpdateTool>,
) -> AppResult<impl IntoResponse> {
    let id = require_param(params.tool_id, "toolId")?;
    let mut controller = UpdateToolController::new(state.tools.clone(), id);
    controller.load().await;
    controller.set_title(form.title);
    controller.set_description(form.description);
    controller.submit().await;
    Ok(Json(controller.view()))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject a missing or blank id query parameter.
fn require_param(value: Option<String>, name: &str) -> AppResult<String> {
    match value {
        Some(id) if !id.trim().is_empty() => Ok(id),
        _ => Err(AppError::BadRequest(format!(
            "{name} query parameter is required"
        ))),
    }
}
