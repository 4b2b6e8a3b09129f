use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::question::application::ports::outgoing::{
    NewQuestionData, QuestionRecord, QuestionRepository, QuestionRepositoryError,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::questions::{
    ActiveModel as QuestionActiveModel, Column as QuestionColumn, Entity as QuestionEntity,
};

#[derive(Debug, Clone)]
pub struct QuestionRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl QuestionRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(err: DbErr) -> QuestionRepositoryError {
        if matches!(err, DbErr::RecordNotUpdated) {
            return QuestionRepositoryError::QuestionNotFound;
        }
        match classify(&err) {
            DbFailure::UniqueViolation => QuestionRepositoryError::DuplicateNumber,
            DbFailure::ForeignKeyViolation => QuestionRepositoryError::SetMissing,
            DbFailure::Other(msg) => QuestionRepositoryError::DatabaseError(msg),
        }
    }
}

#[async_trait]
impl QuestionRepository for QuestionRepositoryPostgres {
    async fn number_taken(
        &self,
        set_id: i32,
        number: i32,
        exclude_id: Option<i32>,
    ) -> Result<bool, QuestionRepositoryError> {
        let mut query = QuestionEntity::find()
            .filter(QuestionColumn::SetId.eq(set_id))
            .filter(QuestionColumn::Number.eq(number));

        if let Some(id) = exclude_id {
            query = query.filter(QuestionColumn::Id.ne(id));
        }

        let existing = query
            .one(&*self.db)
            .await
            .map_err(|e| QuestionRepositoryError::DatabaseError(e.to_string()))?;

        Ok(existing.is_some())
    }

    async fn create_question(
        &self,
        data: NewQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError> {
        let active = QuestionActiveModel {
            number: Set(data.number),
            question_type: Set(data.question_type.as_str().to_string()),
            content: Set(data.content),
            is_quiz: Set(data.is_quiz),
            set_id: Set(data.set_id),
            ..Default::default()
        };

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_record())
    }

    async fn update_question(
        &self,
        question_id: i32,
        data: NewQuestionData,
    ) -> Result<QuestionRecord, QuestionRepositoryError> {
        let active = QuestionActiveModel {
            id: Set(question_id),
            number: Set(data.number),
            question_type: Set(data.question_type.as_str().to_string()),
            content: Set(data.content),
            is_quiz: Set(data.is_quiz),
            set_id: Set(data.set_id),
        };

        let updated = active
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_record())
    }

    async fn delete_question(&self, question_id: i32) -> Result<(), QuestionRepositoryError> {
        let result = QuestionEntity::delete_by_id(question_id)
            .exec(&*self.db)
            .await
            .map_err(|e| QuestionRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(QuestionRepositoryError::QuestionNotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::adapter::outgoing::sea_orm_entity::questions::Model as QuestionModel;
    use crate::question::application::domain::QuestionType;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, RuntimeErr};

    fn question_model(id: i32, number: i32, set_id: i32) -> QuestionModel {
        QuestionModel {
            id,
            number,
            question_type: "C1".to_string(),
            content: "Berapakah 7 x 8?".to_string(),
            is_quiz: true,
            set_id,
        }
    }

    fn new_question() -> NewQuestionData {
        NewQuestionData {
            number: 1,
            question_type: QuestionType::C1,
            content: "Berapakah 7 x 8?".to_string(),
            is_quiz: true,
            set_id: 1,
        }
    }

    fn repo(db: MockDatabase) -> QuestionRepositoryPostgres {
        QuestionRepositoryPostgres::new(Arc::new(db.into_connection()))
    }

    #[tokio::test]
    async fn test_number_taken_when_row_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![question_model(3, 1, 1)]]);

        assert_eq!(repo(db).number_taken(1, 1, None).await, Ok(true));
    }

    #[tokio::test]
    async fn test_number_free_when_no_row() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<QuestionModel>::new()]);

        assert_eq!(repo(db).number_taken(1, 1, Some(3)).await, Ok(false));
    }

    #[tokio::test]
    async fn test_create_question_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![question_model(21, 1, 1)]]);

        let record = repo(db).create_question(new_question()).await.unwrap();

        assert_eq!(record.id, 21);
        assert_eq!(record.question_type, "C1");
    }

    #[tokio::test]
    async fn test_create_question_unique_violation_is_duplicate_number() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Query(RuntimeErr::Internal(
                "duplicate key value violates unique constraint \"uq_questions_set_number\""
                    .to_string(),
            )),
        ]);

        assert_eq!(
            repo(db).create_question(new_question()).await,
            Err(QuestionRepositoryError::DuplicateNumber)
        );
    }

    #[tokio::test]
    async fn test_create_question_missing_set() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_query_errors(vec![
            DbErr::Query(RuntimeErr::Internal(
                "insert or update on table \"questions\" violates foreign key constraint \"fk_questions_set_id\""
                    .to_string(),
            )),
        ]);

        assert_eq!(
            repo(db).create_question(new_question()).await,
            Err(QuestionRepositoryError::SetMissing)
        );
    }

    #[tokio::test]
    async fn test_update_question_success() {
        let mut updated = question_model(8, 4, 1);
        updated.question_type = "C3".to_string();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![updated]]);

        let record = repo(db).update_question(8, new_question()).await.unwrap();

        assert_eq!(record.id, 8);
        assert_eq!(record.question_type, "C3");
    }

    #[tokio::test]
    async fn test_update_question_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<QuestionModel>::new()]);

        assert_eq!(
            repo(db).update_question(99, new_question()).await,
            Err(QuestionRepositoryError::QuestionNotFound)
        );
    }

    #[tokio::test]
    async fn test_delete_question() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).append_exec_results(vec![
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 1,
            },
            MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            },
        ]);
        let repo = repo(db);

        assert_eq!(repo.delete_question(8).await, Ok(()));
        assert_eq!(
            repo.delete_question(8).await,
            Err(QuestionRepositoryError::QuestionNotFound)
        );
    }
}
