//! Route definitions for the `/api/course` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::course;
use crate::state::AppState;

/// Routes mounted at `/api/course`.
///
/// ```text
/// GET /ListCourses                        -> list
/// GET /ListCoursesByTeacher/{teacher_id}  -> list_by_teacher
/// GET /FindCourse/{id}                    -> find
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/ListCourses", get(course::list))
        .route(
            "/ListCoursesByTeacher/{teacher_id}",
            get(course::list_by_teacher),
        )
        .route("/FindCourse/{id}", get(course::find))
}
