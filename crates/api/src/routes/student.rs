//! Route definitions for the `/api/student` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::student;
use crate::state::AppState;

/// Routes mounted at `/api/student`.
///
/// ```text
/// GET /ListStudents      -> list
/// GET /FindStudent/{id}  -> find
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ListStudents", get(student::list))
        .route("/FindStudent/{id}", get(student::find))
}
