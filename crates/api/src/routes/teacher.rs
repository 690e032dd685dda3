//! Route definitions for the `/api/teacher` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::teacher;
use crate::state::AppState;

/// Routes mounted at `/api/teacher`.
///
/// ```text
/// GET /ListTeachers               -> list
/// GET /ListTeachers/              -> list (empty key)
/// GET /ListTeachers/{search_key}  -> list_by_key
/// GET /FindTeacher/{id}           -> find
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ListTeachers", get(teacher::list))
        .route("/ListTeachers/", get(teacher::list))
        .route("/ListTeachers/{search_key}", get(teacher::list_by_key))
        .route("/FindTeacher/{id}", get(teacher::find))
}
