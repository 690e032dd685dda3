//! Row models for the three school tables.
//!
//! Each struct derives `FromRow` against the aliased column list its
//! repository selects, and `Serialize` for the JSON API. Records are built
//! fresh per request and never written back.

pub mod course;
pub mod student;
pub mod teacher;
