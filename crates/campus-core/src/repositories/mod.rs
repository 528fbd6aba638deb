//! Repository traits (ports)

pub mod student_repository;
pub mod teacher_repository;
pub mod health_repository;

pub use student_repository::StudentRepository;
pub use teacher_repository::TeacherRepository;
pub use health_repository::HealthRepository;
