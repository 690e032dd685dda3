//! Handlers for the `/api/student` resource.

use axum::extract::{Path, State};
use axum::Json;
use school_core::error::CoreError;
use school_core::types::DbId;
use school_db::models::student::Student;
use school_db::repositories::StudentRepo;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// GET /api/student/ListStudents
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Student>>> {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(Json(students))
}

/// GET /api/student/FindStudent/{id}
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Student>> {
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Student",
            id,
        }))?;
    Ok(Json(student))
}
