use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::question::application::ports::outgoing::{
    AnswerRecord, AnswerRepository, AnswerRepositoryError, NewAnswerData,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::answers::{ActiveModel as AnswerActiveModel, Entity as AnswerEntity};

#[derive(Debug, Clone)]
pub struct AnswerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AnswerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(err: DbErr) -> AnswerRepositoryError {
        if matches!(err, DbErr::RecordNotUpdated) {
            return AnswerRepositoryError::AnswerNotFound;
        }
        match classify(&err) {
            DbFailure::ForeignKeyViolation => AnswerRepositoryError::QuestionMissing,
            _ => AnswerRepositoryError::DatabaseError(err.to_string()),
        }
    }
}

#[async_trait]
impl AnswerRepository for AnswerRepositoryPostgres {
    async fn create_answer(&self, data: NewAnswerData) -> Result<AnswerRecord, AnswerRepositoryError> {
        let active = AnswerActiveModel {
            question_id: Set(data.question_id),
            code: Set(data.code.as_str().to_string()),
            content: Set(data.content),
            img_url: Set(data.img_url),
            is_answer: Set(data.is_answer),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_record())
    }

    async fn update_answer(
        &self,
        answer_id: i32,
        data: NewAnswerData,
    ) -> Result<AnswerRecord, AnswerRepositoryError> {
        let active = AnswerActiveModel {
            id: Set(answer_id),
            question_id: Set(data.question_id),
            code: Set(data.code.as_str().to_string()),
            content: Set(data.content),
            img_url: Set(data.img_url),
            is_answer: Set(data.is_answer),
        };

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_record())
    }

    async fn delete_answer(&self, answer_id: i32) -> Result<(), AnswerRepositoryError> {
        let result = AnswerEntity::delete_by_id(answer_id)
            .exec(&*self.db)
            .await
            .map_err(|e| AnswerRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(AnswerRepositoryError::AnswerNotFound);
        }

        Ok(())
    }
}
