pub mod course;
pub mod health;
pub mod pages;
pub mod student;
pub mod teacher;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /student/ListStudents                    all students
/// /student/FindStudent/{id}                one student
///
/// /teacher/ListTeachers                    all teachers, or ?SearchKey= matches
/// /teacher/ListTeachers/{search_key}       teachers matching the key
/// /teacher/FindTeacher/{id}                one teacher
///
/// /course/ListCourses                      all courses
/// /course/ListCoursesByTeacher/{teacher_id}  courses taught by one teacher
/// /course/FindCourse/{id}                  one course
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/student", student::router())
        .nest("/teacher", teacher::router())
        .nest("/course", course::router())
}
