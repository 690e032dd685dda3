//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async read methods
//! that accept `&PgPool` as the first argument. Single-record lookups
//! return `Option`; collection queries return a possibly empty `Vec`.

pub mod course_repo;
pub mod student_repo;
pub mod teacher_repo;

pub use course_repo::CourseRepo;
pub use student_repo::StudentRepo;
pub use teacher_repo::TeacherRepo;
