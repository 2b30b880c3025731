//! Student module: three-layer architecture (domain, repository, service).

pub mod domain;
pub mod repository;
pub mod service;
pub mod repo;

pub use domain::{PaginatedStudents, Student};
pub use repo::seaorm::SeaOrmStudentRepository;
pub use repository::StudentRepository;
pub use service::StudentService;
