//! JSON API handlers, one module per entity.

pub mod course;
pub mod student;
pub mod teacher;
