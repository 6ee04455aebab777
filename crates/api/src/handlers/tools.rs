//! REST handlers for tools.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use toolshelf_core::limits::{clamp_limit, MAX_LIST_LIMIT};
use toolshelf_db::models::tool::{CreateTool, UpdateTool};

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tools
pub async fn list_tools(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, state.config.list_limit, MAX_LIST_LIMIT);
    let tools = state.tools.list(limit).await?;

    Ok(Json(DataResponse { data: tools }))
}

/// POST /api/v1/tools
///
/// `category_id` is stored as given; it is not checked against existing
/// categories.
pub async fn create_tool(
    State(state): State<AppState>,
    Json(input): Json<CreateTool>,
) -> AppResult<impl IntoResponse> {
    let id = state.tools.create(&input).await?;
    let tool = state.tools.get_by_id(&id).await?;

    tracing::info!(tool_id = %id, category_id = %tool.category_id, "Tool created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: tool })))
}

/// GET /api/v1/tools/{id}
pub async fn get_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let tool = state.tools.get_by_id(&id).await?;

    Ok(Json(DataResponse { data: tool }))
}

/// PUT /api/v1/tools/{id}
///
/// Update title and description. The category reference is preserved.
pub async fn update_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateTool>,
) -> AppResult<impl IntoResponse> {
    state.tools.update(&id, &input).await?;
    let tool = state.tools.get_by_id(&id).await?;

    tracing::info!(tool_id = %id, "Tool updated");

    Ok(Json(DataResponse { data: tool }))
}

/// DELETE /api/v1/tools/{id}
pub async fn delete_tool(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.tools.delete(&id).await?;

    tracing::info!(tool_id = %id, "Tool deleted");

    Ok(StatusCode::NO_CONTENT)
}
