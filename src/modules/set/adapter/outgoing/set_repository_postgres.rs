use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::set::application::ports::outgoing::{
    NewSetData, SetRecord, SetRepository, SetRepositoryError,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::sets::{ActiveModel as SetActiveModel, Entity as SetEntity};

#[derive(Debug, Clone)]
pub struct SetRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SetRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_insert_error(err: DbErr) -> SetRepositoryError {
    match classify(&err) {
        DbFailure::ForeignKeyViolation => SetRepositoryError::InvalidReference,
        _ => SetRepositoryError::DatabaseError(err.to_string()),
    }
}

#[async_trait]
impl SetRepository for SetRepositoryPostgres {
    async fn create_set(&self, data: NewSetData) -> Result<SetRecord, SetRepositoryError> {
        let active = SetActiveModel {
            name: Set(data.name),
            lesson_id: Set(data.lesson_id),
            class_id: Set(data.class_id),
            is_quiz: Set(data.is_quiz),
            ..Default::default()
        };

        let inserted = active.insert(&*self.db).await.map_err(map_insert_error)?;

        Ok(inserted.to_record())
    }

    async fn delete_set(&self, set_id: i32) -> Result<(), SetRepositoryError> {
        let result = SetEntity::delete_by_id(set_id)
            .exec(&*self.db)
            .await
            .map_err(|e| SetRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(SetRepositoryError::SetNotFound);
        }

        Ok(())
    }
}
