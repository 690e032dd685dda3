//! Student entity model.

use chrono::NaiveDateTime;
use school_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `students` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Student {
    pub id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub student_number: Option<String>,
    pub enrol_date: NaiveDateTime,
}
