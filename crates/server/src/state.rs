use std::sync::Arc;

use service::student::{StudentRepository, StudentService};

pub type DynStudentService = StudentService<dyn StudentRepository>;

/// Shared handler state. The repository is chosen by the caller, which is
/// how tests swap the database for the in-memory adapter.
#[derive(Clone)]
pub struct AppState {
    pub students: Arc<DynStudentService>,
}

impl AppState {
    pub fn new(repo: Arc<dyn StudentRepository>) -> Self {
        Self { students: Arc::new(StudentService::new(repo)) }
    }
}
