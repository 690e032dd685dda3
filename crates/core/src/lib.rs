//! Domain building blocks shared by the repository and HTTP layers.
//!
//! Nothing in this crate performs I/O.

pub mod error;
pub mod hire_date;
pub mod search;
pub mod types;
