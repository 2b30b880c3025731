use sea_orm::{DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect};
use tracing::debug;
use uuid::Uuid;

use models::student;

use crate::errors::ServiceError;
use crate::student::domain::Student;
use crate::student::repository::{from_row, to_row, StudentRepository};

/// SeaORM-backed repository implementation.
pub struct SeaOrmStudentRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmStudentRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait::async_trait]
impl StudentRepository for SeaOrmStudentRepository {
    async fn get(&self, id: Uuid) -> Result<Student, ServiceError> {
        student::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(ServiceError::db)?
            .map(from_row)
            .ok_or_else(|| ServiceError::not_found("student"))
    }

    async fn add(&self, s: &Student) -> Result<(), ServiceError> {
        let am: student::ActiveModel = to_row(s)?.into();
        student::Entity::insert(am)
            .exec_without_returning(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), ServiceError> {
        let res = student::Entity::delete_by_id(id).exec(&self.db).await.map_err(ServiceError::db)?;
        debug!(%id, rows_affected = res.rows_affected, "student delete executed");
        Ok(())
    }

    async fn list_page(&self, offset: u64, limit: u64) -> Result<Vec<Student>, ServiceError> {
        let rows = student::Entity::find()
            .order_by_asc(student::Column::Id)
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(ServiceError::db)?;
        Ok(rows.into_iter().map(from_row).collect())
    }

    async fn count(&self) -> Result<u64, ServiceError> {
        student::Entity::find().count(&self.db).await.map_err(ServiceError::db)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    fn new_student(name: &str, surname: &str) -> Student {
        Student { id: Uuid::new_v4().to_string(), name: name.into(), surname: surname.into() }
    }

    #[tokio::test]
    async fn add_then_get_round_trips_row() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let s = new_student("kamil", "koc");
        repo.add(&s).await?;

        let got = repo.get(Uuid::parse_str(&s.id)?).await?;
        assert_eq!(got, s);
        assert_eq!(repo.count().await?, 1);
        Ok(())
    }

    #[tokio::test]
    async fn long_names_are_stored_unchanged() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let s = new_student(&"n".repeat(500), &"s".repeat(300));
        repo.add(&s).await?;

        let got = repo.get(Uuid::parse_str(&s.id)?).await?;
        assert_eq!(got.name.len(), 500);
        assert_eq!(got, s);
        Ok(())
    }

    #[tokio::test]
    async fn get_missing_row_is_not_found() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let err = repo.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound(_)));
        Ok(())
    }

    #[tokio::test]
    async fn delete_is_idempotent() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let s = new_student("hasan", "huseyin");
        repo.add(&s).await?;
        let id = Uuid::parse_str(&s.id)?;

        repo.delete(id).await?;
        assert!(matches!(repo.get(id).await, Err(ServiceError::NotFound(_))));
        // second delete matches zero rows and still succeeds
        repo.delete(id).await?;
        repo.delete(Uuid::new_v4()).await?;
        assert_eq!(repo.count().await?, 0);
        Ok(())
    }

    #[tokio::test]
    async fn list_page_applies_offset_and_limit() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let mut ids = Vec::new();
        for i in 0..5 {
            let s = new_student(&format!("name{i}"), "surname");
            ids.push(Uuid::parse_str(&s.id)?);
            repo.add(&s).await?;
        }
        ids.sort();

        let first = repo.list_page(0, 2).await?;
        let last = repo.list_page(4, 2).await?;
        let beyond = repo.list_page(10, 2).await?;

        assert_eq!(first.iter().map(|s| s.id.clone()).collect::<Vec<_>>(), vec![ids[0].to_string(), ids[1].to_string()]);
        assert_eq!(last.len(), 1);
        assert_eq!(last[0].id, ids[4].to_string());
        assert!(beyond.is_empty());
        assert_eq!(repo.count().await?, 5);
        Ok(())
    }

    #[tokio::test]
    async fn duplicate_id_surfaces_db_error() -> Result<(), anyhow::Error> {
        let repo = SeaOrmStudentRepository::new(get_db().await?);
        let s = new_student("ahmet", "talha");
        repo.add(&s).await?;
        let err = repo.add(&s).await.unwrap_err();
        assert!(matches!(err, ServiceError::Db(_)));
        Ok(())
    }
}
