//! Route definitions for the HTML pages.

use axum::routing::get;
use axum::Router;

use crate::pages::{self, course, student, teacher};
use crate::state::AppState;

/// Page routes, mounted at the root.
///
/// ```text
/// GET /                       -> index
/// GET /StudentPage/List       -> student::list
/// GET /StudentPage/Show/{id}  -> student::show
/// GET /TeacherPage/List       -> teacher::list   (?SearchKey=&HireDate=)
/// GET /TeacherPage/Show/{id}  -> teacher::show
/// GET /CoursePage/List        -> course::list
/// GET /CoursePage/Show/{id}   -> course::show
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(pages::index))
        .route("/StudentPage/List", get(student::list))
        .route("/StudentPage/Show/{id}", get(student::show))
        .route("/TeacherPage/List", get(teacher::list))
        .route("/TeacherPage/Show/{id}", get(teacher::show))
        .route("/CoursePage/List", get(course::list))
        .route("/CoursePage/Show/{id}", get(course::show))
}
