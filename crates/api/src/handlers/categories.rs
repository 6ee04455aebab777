//! REST handlers for categories.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use toolshelf_core::limits::{clamp_limit, MAX_LIST_LIMIT};
use toolshelf_db::models::category::{Category, CreateCategory, UpdateCategory};

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/categories
///
/// List up to `limit` categories (default from `LIST_LIMIT`).
pub async fn list_categories(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<impl IntoResponse> {
    let limit = clamp_limit(params.limit, state.config.list_limit, MAX_LIST_LIMIT);
    let categories = state.categories.list(limit).await?;

    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/categories
pub async fn create_category(
    State(state): State<AppState>,
    Json(input): Json<CreateCategory>,
) -> AppResult<impl IntoResponse> {
    let id = state.categories.create(&input.title).await?;

    tracing::info!(category_id = %id, "Category created");

    let category = Category {
        id,
        title: input.title,
    };
    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// GET /api/v1/categories/{id}
pub async fn get_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    let category = state.categories.get_by_id(&id).await?;

    Ok(Json(DataResponse { data: category }))
}

/// PUT /api/v1/categories/{id}
///
/// Replace the title, returning the stored category.
pub async fn update_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateCategory>,
) -> AppResult<impl IntoResponse> {
    state.categories.update(&id, &input.title).await?;
    let category = state.categories.get_by_id(&id).await?;

    tracing::info!(category_id = %id, "Category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/categories/{id}
///
/// Idempotent: deleting a missing category also returns 204. Tools that
/// reference the category are not touched.
pub async fn delete_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<impl IntoResponse> {
    state.categories.delete(&id).await?;

    tracing::info!(category_id = %id, "Category deleted");

    Ok(StatusCode::NO_CONTENT)
}
