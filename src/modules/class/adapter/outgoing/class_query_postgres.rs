use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::class::application::ports::outgoing::{ClassQuery, ClassQueryError, ClassRecord};

use super::sea_orm_entity::classes::{Column as ClassColumn, Entity as ClassEntity};

#[derive(Debug, Clone)]
pub struct ClassQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ClassQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ClassQuery for ClassQueryPostgres {
    async fn list_classes(&self) -> Result<Vec<ClassRecord>, ClassQueryError> {
        let models = ClassEntity::find()
            .order_by_asc(ClassColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| ClassQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::class::adapter::outgoing::sea_orm_entity::classes::Model as ClassModel;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr};

    #[tokio::test]
    async fn test_list_classes_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                ClassModel {
                    id: 1,
                    name: "1".to_string(),
                },
                ClassModel {
                    id: 2,
                    name: "2".to_string(),
                },
            ]])
            .into_connection();
        let query = ClassQueryPostgres::new(Arc::new(db));

        let classes = query.list_classes().await.unwrap();

        assert_eq!(classes.len(), 2);
        assert_eq!(classes[0].id, 1);
        assert_eq!(classes[1].name, "2");
    }

    #[tokio::test]
    async fn test_list_classes_empty() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<ClassModel>::new()])
            .into_connection();
        let query = ClassQueryPostgres::new(Arc::new(db));

        assert_eq!(query.list_classes().await, Ok(vec![]));
    }

    #[tokio::test]
    async fn test_list_classes_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".to_string()))])
            .into_connection();
        let query = ClassQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_classes().await,
            Err(ClassQueryError::DatabaseError(_))
        ));
    }
}
