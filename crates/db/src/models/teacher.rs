//! Teacher entity model.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use school_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::course::Course;

/// A row from the `teachers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Teacher {
    pub id: DbId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub employee_number: Option<String>,
    pub hire_date: NaiveDateTime,
    pub salary: Decimal,
    /// Courses taught, attached by the caller after the row is loaded.
    #[sqlx(skip)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub courses: Option<Vec<Course>>,
}

impl Teacher {
    /// `"first last"`, skipping whichever part is missing.
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Attach the teacher's courses for rendering.
    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = Some(courses);
        self
    }
}
