use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};
use std::sync::Arc;

use crate::lesson::application::ports::outgoing::{LessonQuery, LessonQueryError, LessonRecord};

use super::sea_orm_entity::lessons::{Column as LessonColumn, Entity as LessonEntity};

#[derive(Debug, Clone)]
pub struct LessonQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LessonQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LessonQuery for LessonQueryPostgres {
    async fn list_lessons(&self) -> Result<Vec<LessonRecord>, LessonQueryError> {
        let models = LessonEntity::find()
            .order_by_asc(LessonColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| LessonQueryError::DatabaseError(e.to_string()))?;

        Ok(models.iter().map(|m| m.to_record()).collect())
    }
}
