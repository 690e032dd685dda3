//! Repository for the `courses` table.

use school_core::types::DbId;
use sqlx::PgPool;

use crate::models::course::Course;

/// Column list shared across queries, aliased to the model's field names.
const COLUMNS: &str = "courseid AS id, \
    coursecode AS code, \
    teacherid AS teacher_id, \
    startdate AS start_date, \
    finishdate AS finish_date, \
    coursename AS name";

/// Provides read operations for courses.
pub struct CourseRepo;

impl CourseRepo {
    /// List every course.
    pub async fn list(pool: &PgPool) -> Result<Vec<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses ORDER BY courseid");
        let courses = sqlx::query_as::<_, Course>(&query).fetch_all(pool).await?;
        tracing::debug!(count = courses.len(), "Listed courses");
        Ok(courses)
    }

    /// List the courses taught by one teacher.
    ///
    /// A teacher with no courses (or an unknown teacher id) yields an empty
    /// `Vec`, not an error.
    pub async fn list_by_teacher(
        pool: &PgPool,
        teacher_id: DbId,
    ) -> Result<Vec<Course>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM courses WHERE teacherid = $1 ORDER BY courseid");
        let courses = sqlx::query_as::<_, Course>(&query)
            .bind(teacher_id)
            .fetch_all(pool)
            .await?;
        tracing::debug!(teacher_id, count = courses.len(), "Listed courses by teacher");
        Ok(courses)
    }

    /// Find a course by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Course>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM courses WHERE courseid = $1");
        sqlx::query_as::<_, Course>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
