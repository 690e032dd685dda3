//! Repository for the `students` table.

use school_core::types::DbId;
use sqlx::PgPool;

use crate::models::student::Student;

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "studentid AS id, \
    studentfname AS first_name, \
    studentlname AS last_name, \
    studentnumber AS student_number, \
    enroldate AS enrol_date";

/// Provides read operations for students.
pub struct StudentRepo;

impl StudentRepo {
    /// List every student. An empty table yields an empty `Vec`.
    pub async fn list(pool: &PgPool) -> Result<Vec<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students ORDER BY studentid");
        let students = sqlx::query_as::<_, Student>(&query).fetch_all(pool).await?;
        tracing::debug!(count = students.len(), "Listed students");
        Ok(students)
    }

    /// Find a student by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Student>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM students WHERE studentid = $1");
        sqlx::query_as::<_, Student>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
