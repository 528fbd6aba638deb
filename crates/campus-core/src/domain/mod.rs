//! # Campus Core - Domain Module
//! 
//! Flat record rows. Identity is assigned by the database.

pub mod student;
pub mod teacher;

pub use student::{NewStudent, Student};
pub use teacher::{NewTeacher, Teacher};

/// Auto-increment identity shared by both record tables.
pub type RecordId = i32;
