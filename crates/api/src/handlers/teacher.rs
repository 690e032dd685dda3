//! Handlers for the `/api/teacher` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use school_core::error::CoreError;
use school_core::search::validate_search_key;
use school_core::types::DbId;
use school_db::models::teacher::Teacher;
use school_db::repositories::TeacherRepo;

use crate::error::{AppError, AppResult};
use crate::query::SearchKeyParams;
use crate::state::AppState;

/// GET /api/teacher/ListTeachers?SearchKey=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<SearchKeyParams>,
) -> AppResult<Json<Vec<Teacher>>> {
    search(&state, params.search_key.as_deref()).await
}

/// GET /api/teacher/ListTeachers/{search_key}
pub async fn list_by_key(
    State(state): State<AppState>,
    Path(search_key): Path<String>,
) -> AppResult<Json<Vec<Teacher>>> {
    search(&state, Some(&search_key)).await
}

/// GET /api/teacher/FindTeacher/{id}
pub async fn find(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Teacher>> {
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Teacher",
            id,
        }))?;
    Ok(Json(teacher))
}

/// An empty search result is reported as 404 on this endpoint.
async fn search(state: &AppState, key: Option<&str>) -> AppResult<Json<Vec<Teacher>>> {
    validate_search_key(key)?;
    let teachers = TeacherRepo::search(&state.pool, key).await?;
    if teachers.is_empty() {
        return Err(AppError::Core(CoreError::NoMatches { entity: "Teacher" }));
    }
    Ok(Json(teachers))
}
