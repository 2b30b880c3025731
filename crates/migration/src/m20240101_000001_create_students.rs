//! Create `students` table.
//!
//! Rows are keyed by a UUID assigned by the service layer, never by the database.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.create_table(students_table()).await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Students::Table).to_owned()).await
    }
}

/// Name columns are unbounded `text`.
fn students_table() -> TableCreateStatement {
    Table::create()
        .table(Students::Table)
        .if_not_exists()
        .col(uuid(Students::Id).primary_key())
        .col(text(Students::Name))
        .col(text(Students::Surname))
        .to_owned()
}

#[derive(DeriveIden)]
enum Students { Table, Id, Name, Surname }

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm_migration::sea_orm::sea_query::PostgresQueryBuilder;

    #[test]
    fn name_columns_are_unbounded_text_on_postgres() {
        let sql = students_table().to_string(PostgresQueryBuilder);
        assert!(sql.contains(r#""name" text"#), "{sql}");
        assert!(sql.contains(r#""surname" text"#), "{sql}");
        assert!(!sql.contains("varchar"), "{sql}");
    }
}
