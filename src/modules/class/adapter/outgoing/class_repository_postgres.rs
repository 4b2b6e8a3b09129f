use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::class::application::ports::outgoing::{
    ClassRecord, ClassRepository, ClassRepositoryError,
};

use super::sea_orm_entity::classes::{ActiveModel as ClassActiveModel, Entity as ClassEntity};

#[derive(Debug, Clone)]
pub struct ClassRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ClassRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClassRepository for ClassRepositoryPostgres {
    async fn create_class(&self, name: String) -> Result<ClassRecord, ClassRepositoryError> {
        let active = ClassActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| ClassRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn delete_class(&self, class_id: i32) -> Result<(), ClassRepositoryError> {
        let result = ClassEntity::delete_by_id(class_id)
            .exec(&*self.db)
            .await
            .map_err(|e| ClassRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(ClassRepositoryError::ClassNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::adapter::outgoing::sea_orm_entity::classes::Model as ClassModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult, RuntimeErr};

    #[tokio::test]
    async fn test_create_class_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![ClassModel {
                id: 4,
                name: "4".to_string(),
            }]])
            .into_connection();
        let repo = ClassRepositoryPostgres::new(Arc::new(db));

        let result = repo.create_class("4".to_string()).await;

        assert_eq!(
            result,
            Ok(ClassRecord {
                id: 4,
                name: "4".to_string()
            })
        );
    }

    #[tokio::test]
    async fn test_create_class_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal(
                "connection lost".to_string(),
            ))])
            .into_connection();
        let repo = ClassRepositoryPostgres::new(Arc::new(db));

        let result = repo.create_class("4".to_string()).await;

        assert!(matches!(result, Err(ClassRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_delete_class_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            }])
            .into_connection();
        let repo = ClassRepositoryPostgres::new(Arc::new(db));

        assert_eq!(repo.delete_class(4).await, Ok(()));
    }

    #[tokio::test]
    async fn test_delete_class_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repo = ClassRepositoryPostgres::new(Arc::new(db));

        assert_eq!(
            repo.delete_class(404).await,
            Err(ClassRepositoryError::ClassNotFound)
        );
    }
}
