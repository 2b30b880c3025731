use std::sync::Arc;

use tracing::{debug, info, instrument};
use uuid::Uuid;

use super::domain::{PaginatedStudents, Student};
use super::repository::StudentRepository;
use crate::errors::ServiceError;
use crate::pagination::{Page, PageRequest};

/// Application service encapsulating student business rules.
/// Validation and pagination live here; storage is delegated to the repository.
pub struct StudentService<R: StudentRepository + ?Sized> {
    repo: Arc<R>,
}

impl<R: StudentRepository + ?Sized> StudentService<R> {
    pub fn new(repo: Arc<R>) -> Self { Self { repo } }

    #[instrument(skip(self))]
    pub async fn fetch_by_id(&self, id: Uuid) -> Result<Student, ServiceError> {
        self.repo.get(id).await
    }

    /// Validate, assign a fresh id, then insert. Returns the stored student.
    ///
    /// # Examples
    /// ```
    /// use service::student::{repository::mock::InMemoryStudentRepository, Student, StudentService};
    /// use std::sync::Arc;
    /// let svc = StudentService::new(Arc::new(InMemoryStudentRepository::default()));
    /// let created = tokio_test::block_on(svc.add(Student::new("John", "Doe"))).unwrap();
    /// assert!(uuid::Uuid::parse_str(&created.id).is_ok());
    /// let page = tokio_test::block_on(svc.list_page(1, 10)).unwrap();
    /// assert_eq!(page.students, vec![created]);
    /// ```
    #[instrument(skip(self, student), fields(name = %student.name, surname = %student.surname))]
    pub async fn add(&self, mut student: Student) -> Result<Student, ServiceError> {
        if student.name.is_empty() || student.surname.is_empty() {
            return Err(ServiceError::Validation("name and surname are required".into()));
        }
        student.id = Uuid::new_v4().to_string();
        self.repo.add(&student).await?;
        info!(student_id = %student.id, "student_created");
        Ok(student)
    }

    /// Deleting an id with no row is not an error.
    #[instrument(skip(self))]
    pub async fn remove(&self, id: Uuid) -> Result<(), ServiceError> {
        self.repo.delete(id).await?;
        info!(student_id = %id, "student_deleted");
        Ok(())
    }

    /// List one page. The rows and the total come from two separate
    /// repository calls and are not read under one transaction.
    #[instrument(skip(self))]
    pub async fn list_page(&self, page: i64, page_size: i64) -> Result<PaginatedStudents, ServiceError> {
        let req = PageRequest::new(page, page_size);
        let (offset, limit) = req.offset_limit()?;

        let students = self.repo.list_page(offset, limit).await?;
        let total = self.repo.count().await?;
        let descriptor = Page::new(req, total);
        debug!(returned = students.len(), total, total_pages = descriptor.total_pages, "students_listed");

        Ok(PaginatedStudents { students, page: descriptor })
    }
}
