use async_trait::async_trait;
use uuid::Uuid;

use models::student;

use super::domain::Student;
use crate::errors::ServiceError;

/// Persistence contract the student service depends on.
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Point read; `ServiceError::NotFound` when no row matches.
    async fn get(&self, id: Uuid) -> Result<Student, ServiceError>;
    async fn add(&self, student: &Student) -> Result<(), ServiceError>;
    /// Succeeds even when no row matched.
    async fn delete(&self, id: Uuid) -> Result<(), ServiceError>;
    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<Student>, ServiceError>;
    async fn count(&self) -> Result<u64, ServiceError>;
}

/// Stored row -> wire student.
pub fn from_row(row: student::Model) -> Student {
    Student { id: row.id.to_string(), name: row.name, surname: row.surname }
}

/// Wire student -> stored row. The string id must parse as a UUID.
pub fn to_row(s: &Student) -> Result<student::Model, ServiceError> {
    let id = Uuid::parse_str(&s.id)
        .map_err(|e| ServiceError::Validation(format!("invalid student id {:?}: {}", s.id, e)))?;
    Ok(student::Model { id, name: s.name.clone(), surname: s.surname.clone() })
}

/// In-memory repository for tests and doc examples.
/// Rows are kept ordered by id, the same order the SeaORM adapter lists in.
pub mod mock {
    use super::*;
    use std::collections::BTreeMap;
    use std::sync::Mutex;

    #[derive(Default)]
    pub struct InMemoryStudentRepository {
        rows: Mutex<BTreeMap<Uuid, student::Model>>,
        calls: Mutex<Vec<&'static str>>,
        failure: Mutex<Option<String>>,
    }

    impl InMemoryStudentRepository {
        /// Repository whose every operation fails with `ServiceError::Db(msg)`.
        pub fn failing(msg: &str) -> Self {
            let repo = Self::default();
            repo.fail_with(Some(msg));
            repo
        }

        pub fn fail_with(&self, msg: Option<&str>) {
            if let Ok(mut f) = self.failure.lock() {
                *f = msg.map(str::to_string);
            }
        }

        /// Names of the operations invoked so far, in call order.
        pub fn calls(&self) -> Vec<&'static str> {
            self.calls.lock().map(|c| c.clone()).unwrap_or_default()
        }

        pub fn len(&self) -> usize {
            self.rows.lock().map(|r| r.len()).unwrap_or_default()
        }

        pub fn is_empty(&self) -> bool { self.len() == 0 }

        fn enter(&self, op: &'static str) -> Result<(), ServiceError> {
            self.calls.lock().map_err(ServiceError::db)?.push(op);
            match self.failure.lock().map_err(ServiceError::db)?.as_ref() {
                Some(msg) => Err(ServiceError::Db(msg.clone())),
                None => Ok(()),
            }
        }
    }

    #[async_trait]
    impl StudentRepository for InMemoryStudentRepository {
        async fn get(&self, id: Uuid) -> Result<Student, ServiceError> {
            self.enter("get")?;
            let rows = self.rows.lock().map_err(ServiceError::db)?;
            rows.get(&id).cloned().map(from_row).ok_or_else(|| ServiceError::not_found("student"))
        }

        async fn add(&self, student: &Student) -> Result<(), ServiceError> {
            self.enter("add")?;
            let row = to_row(student)?;
            let mut rows = self.rows.lock().map_err(ServiceError::db)?;
            if rows.contains_key(&row.id) {
                return Err(ServiceError::Db(format!("duplicate key {}", row.id)));
            }
            rows.insert(row.id, row);
            Ok(())
        }

        async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
            self.enter("delete")?;
            self.rows.lock().map_err(ServiceError::db)?.remove(&id);
            Ok(())
        }

        async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<Student>, ServiceError> {
            self.enter("list_page")?;
            let rows = self.rows.lock().map_err(ServiceError::db)?;
            Ok(rows
                .values()
                .skip(offset as usize)
                .take(limit as usize)
                .cloned()
                .map(from_row)
                .collect())
        }

        async fn count(&self) -> Result<u64, ServiceError> {
            self.enter("count")?;
            Ok(self.rows.lock().map_err(ServiceError::db)?.len() as u64)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::mock::InMemoryStudentRepository;
    use super::*;

    fn student_with_id(id: Uuid, name: &str) -> Student {
        Student { id: id.to_string(), name: name.into(), surname: "Doe".into() }
    }

    #[test]
    fn row_translation_keeps_fields() {
        let id = Uuid::new_v4();
        let s = student_with_id(id, "John");
        let row = to_row(&s).unwrap();
        assert_eq!(row.id, id);
        assert_eq!(from_row(row), s);
    }

    #[test]
    fn to_row_rejects_malformed_id() {
        let s = Student { id: "not-a-uuid".into(), ..Student::new("John", "Doe") };
        assert!(matches!(to_row(&s), Err(ServiceError::Validation(_))));
    }

    #[tokio::test]
    async fn in_memory_pages_in_id_order() {
        let repo = InMemoryStudentRepository::default();
        let mut ids: Vec<Uuid> = (0..5).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            repo.add(&student_with_id(*id, "n")).await.unwrap();
        }
        ids.sort();
        let page = repo.list_page(2, 2).await.unwrap();
        let got: Vec<String> = page.into_iter().map(|s| s.id).collect();
        assert_eq!(got, vec![ids[2].to_string(), ids[3].to_string()]);
        assert_eq!(repo.count().await.unwrap(), 5);
    }

    #[tokio::test]
    async fn in_memory_failure_mode_records_call() {
        let repo = InMemoryStudentRepository::failing("boom");
        let err = repo.count().await.unwrap_err();
        assert_eq!(err, ServiceError::Db("boom".into()));
        assert_eq!(repo.calls(), vec!["count"]);
    }
}
