//! Pages under `/TeacherPage`.

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use school_core::error::CoreError;
use school_core::hire_date::{hired_on, parse_hire_date};
use school_core::search::validate_search_key;
use school_core::types::DbId;
use school_db::repositories::{CourseRepo, TeacherRepo};

use super::{not_found, page_id, PageResult};
use crate::query::TeacherListParams;
use crate::state::AppState;
use crate::views;
use crate::views::teacher::SearchForm;

/// GET /TeacherPage/List?SearchKey=&HireDate=
///
/// The search key is matched in SQL; the hire date then narrows the result
/// in memory by calendar day. A search with no matches renders an empty
/// table and a message rather than an error page.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TeacherListParams>,
) -> PageResult {
    let search_key = params.search_key.as_deref();
    validate_search_key(search_key)?;
    let hire_date = parse_hire_date(params.hire_date.as_deref())?;

    let form = SearchForm {
        search_key,
        hire_date: params.hire_date.as_deref(),
    };

    let mut teachers = TeacherRepo::search(&state.pool, search_key).await?;
    if teachers.is_empty() {
        let message = CoreError::NoMatches { entity: "Teacher" }.to_string();
        return Ok(views::teacher::list(&[], &form, Some(message.as_str())));
    }

    if let Some(date) = hire_date {
        teachers.retain(|t| hired_on(t.hire_date, date));
    }

    Ok(views::teacher::list(&teachers, &form, None))
}

/// GET /TeacherPage/Show/{id}
///
/// Loads the teacher, then that teacher's courses, and renders both.
pub async fn show(
    State(state): State<AppState>,
    path: Result<Path<DbId>, PathRejection>,
) -> PageResult {
    let id = page_id(path)?;
    let teacher = TeacherRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found("Teacher", id))?;
    let courses = CourseRepo::list_by_teacher(&state.pool, id).await?;
    Ok(views::teacher::show(&teacher.with_courses(courses)))
}
