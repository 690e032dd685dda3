//! HTML page handlers.
//!
//! Pages read through the same repositories as the JSON API and render the
//! results with [`crate::views`]. Failures render as HTML error pages.

pub mod course;
pub mod student;
pub mod teacher;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::response::{Html, IntoResponse, Response};
use school_core::error::CoreError;
use school_core::types::DbId;

use crate::error::AppError;
use crate::views;

/// Page handler error: same classification as [`AppError`], rendered as HTML.
#[derive(Debug)]
pub struct PageError(pub AppError);

pub type PageResult = Result<Html<String>, PageError>;

impl From<AppError> for PageError {
    fn from(err: AppError) -> Self {
        PageError(err)
    }
}

impl From<CoreError> for PageError {
    fn from(err: CoreError) -> Self {
        PageError(AppError::Core(err))
    }
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError(AppError::Database(err))
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let (status, _code, message) = self.0.classify();
        (status, views::error_page(status.as_u16(), &message)).into_response()
    }
}

/// GET /
pub async fn index() -> Html<String> {
    views::index()
}

/// Unwrap a page's `{id}` segment, turning a non-integer into an HTML 400.
pub(crate) fn page_id(path: Result<Path<DbId>, PathRejection>) -> Result<DbId, PageError> {
    match path {
        Ok(Path(id)) => Ok(id),
        Err(rejection) => Err(PageError(AppError::Core(CoreError::Validation(
            rejection.body_text(),
        )))),
    }
}

pub(crate) fn not_found(entity: &'static str, id: DbId) -> PageError {
    PageError(AppError::Core(CoreError::NotFound { entity, id }))
}
