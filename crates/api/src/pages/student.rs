//! Pages under `/StudentPage`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use school_core::types::DbId;
use school_db::repositories::StudentRepo;

use super::{not_found, page_id, PageResult};
use crate::state::AppState;
use crate::views;

/// GET /StudentPage/List
pub async fn list(State(state): State<AppState>) -> PageResult {
    let students = StudentRepo::list(&state.pool).await?;
    Ok(views::student::list(&students))
}

/// GET /StudentPage/Show/{id}
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> PageResult {
    let id = page_id(path)?;
    let student = StudentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Student", id))?;
    Ok(views::student::show(&student))
}
