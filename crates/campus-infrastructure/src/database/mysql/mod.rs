//! MySQL repository implementations

pub mod student_repo_impl;
pub mod teacher_repo_impl;
pub mod health_repo_impl;

pub use student_repo_impl::MySqlStudentRepository;
pub use teacher_repo_impl::MySqlTeacherRepository;
pub use health_repo_impl::MySqlHealthRepository;
