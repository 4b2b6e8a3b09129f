use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::lesson::application::ports::outgoing::{
    LessonRecord, LessonRepository, LessonRepositoryError,
};

use super::sea_orm_entity::lessons::{ActiveModel as LessonActiveModel, Entity as LessonEntity};

#[derive(Debug, Clone)]
pub struct LessonRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LessonRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LessonRepository for LessonRepositoryPostgres {
    async fn create_lesson(&self, name: String) -> Result<LessonRecord, LessonRepositoryError> {
        let active = LessonActiveModel {
            name: Set(name),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| LessonRepositoryError::DatabaseError(e.to_string()))?;

        Ok(inserted.to_record())
    }

    async fn delete_lesson(&self, lesson_id: i32) -> Result<(), LessonRepositoryError> {
        let result = LessonEntity::delete_by_id(lesson_id)
            .exec(&*self.db)
            .await
            .map_err(|e| LessonRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(LessonRepositoryError::LessonNotFound);
        }

        Ok(())
    }
}
