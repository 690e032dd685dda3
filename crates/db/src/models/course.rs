//! Course entity model.

use chrono::NaiveDate;
use school_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `courses` table.
///
/// `teacher_id` refers to `teachers.teacherid` but is not checked here.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Course {
    pub id: DbId,
    pub code: Option<String>,
    pub teacher_id: DbId,
    pub start_date: NaiveDate,
    pub finish_date: NaiveDate,
    pub name: Option<String>,
}
