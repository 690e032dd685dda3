//! Repository for the `teachers` table.

use school_core::search::like_pattern;
use school_core::types::DbId;
use sqlx::PgPool;

use crate::models::teacher::Teacher;

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "teacherid AS id, \
    teacherfname AS first_name, \
    teacherlname AS last_name, \
    employeenumber AS employee_number, \
    hiredate AS hire_date, \
    salary";

/// Predicate for [`TeacherRepo::search`]. `$1` is the escaped `%key%` pattern.
///
/// The hire date is matched both as stored (`YYYY-MM-DD HH:MM:SS`) and as
/// `DD-MM-YYYY`.
const SEARCH_PREDICATE: &str = "teacherfname ILIKE $1 \
    OR teacherlname ILIKE $1 \
    OR (teacherfname || ' ' || teacherlname) ILIKE $1 \
    OR hiredate::text ILIKE $1 \
    OR to_char(hiredate, 'DD-MM-YYYY') ILIKE $1 \
    OR salary::text ILIKE $1";

/// Provides read operations for teachers.
pub struct TeacherRepo;

impl TeacherRepo {
    /// Case-insensitive substring search over names, hire date and salary.
    ///
    /// `None` (or a blank key) matches every teacher. Returns an empty `Vec`
    /// when nothing matches.
    pub async fn search(pool: &PgPool, key: Option<&str>) -> Result<Vec<Teacher>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM teachers WHERE {SEARCH_PREDICATE} ORDER BY teacherid");
        let teachers = sqlx::query_as::<_, Teacher>(&query)
            .bind(like_pattern(key))
            .fetch_all(pool)
            .await?;
        tracing::debug!(?key, count = teachers.len(), "Searched teachers");
        Ok(teachers)
    }

    /// Find a teacher by id. The returned record has no courses attached.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Teacher>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teachers WHERE teacherid = $1");
        sqlx::query_as::<_, Teacher>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
