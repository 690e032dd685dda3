//! Handlers for the `/api/course` resource.

use axum::extract::{Path, State};
use axum::Json;
use school_core::error::CoreError;
use school_core::types::DbId;
use school_db::models::course::Course;
use school_db::repositories::CourseRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/course/ListCourses
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(Json(courses))
}

/// GET /api/course/ListCoursesByTeacher/{teacher_id}
///
/// Always 200; a teacher with no courses gets `[]`.
pub async fn list_by_teacher(
    State(state): State<AppState>,
    Path(teacher_id): Path<DbId>,
) -> AppResult<Json<Vec<Course>>> {
    let courses = CourseRepo::list_by_teacher(&state.pool, teacher_id).await?;
    Ok(Json(courses))
}

/// GET /api/course/FindCourse/{id}
pub async fn find(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<Json<Course>> {
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Course",
            id,
        }))?;
    Ok(Json(course))
}
