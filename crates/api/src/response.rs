//! Shared response envelope types for API handlers.
//!
//! REST responses use a `{ "data": ... }` envelope. Page endpoints return
//! their view structs directly.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
