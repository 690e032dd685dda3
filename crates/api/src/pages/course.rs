//! Pages under `/CoursePage`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use school_core::types::DbId;
use school_db::repositories::CourseRepo;

use super::{not_found, page_id, PageResult};
use crate::state::AppState;
use crate::views;

/// GET /CoursePage/List
pub async fn list(State(state): State<AppState>) -> PageResult {
    let courses = CourseRepo::list(&state.pool).await?;
    Ok(views::course::list(&courses))
}

/// GET /CoursePage/Show/{id}
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> PageResult {
    let id = page_id(path)?;
    let course = CourseRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Course", id))?;
    Ok(views::course::show(&course))
}
