use async_trait::async_trait;

use crate::question::application::ports::{
    incoming::use_cases::{AddAnswerError, AddAnswerUseCase, AnswerCommand},
    outgoing::{AnswerRecord, AnswerRepository, AnswerRepositoryError},
};

#[derive(Debug, Clone)]
pub struct AddAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    repository: R,
}

impl<R> AddAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> AddAnswerUseCase for AddAnswerService<R>
where
    R: AnswerRepository + Send + Sync,
{
    async fn execute(&self, command: AnswerCommand) -> Result<AnswerRecord, AddAnswerError> {
        self.repository
            .create_answer(command.into_data())
            .await
            .map_err(|e| match e {
                AnswerRepositoryError::QuestionMissing => AddAnswerError::QuestionMissing,
                other => AddAnswerError::RepositoryError(other.to_string()),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::application::domain::AnswerCode;
    use crate::question::application::ports::outgoing::NewAnswerData;
    use mockall::{mock, predicate::eq};

    mock! {
        AnswerRepo {}

        #[async_trait]
        impl AnswerRepository for AnswerRepo {
            async fn create_answer(&self, data: NewAnswerData) -> Result<AnswerRecord, AnswerRepositoryError>;
            async fn update_answer(&self, answer_id: i32, data: NewAnswerData) -> Result<AnswerRecord, AnswerRepositoryError>;
            async fn delete_answer(&self, answer_id: i32) -> Result<(), AnswerRepositoryError>;
        }
    }

    fn command() -> AnswerCommand {
        AnswerCommand::new(4, "c", "Jakarta".to_string(), None, true).unwrap()
    }

    #[tokio::test]
    async fn stores_answer() {
        let mut repo = MockAnswerRepo::new();
        repo.expect_create_answer()
            .with(eq(NewAnswerData {
                question_id: 4,
                code: AnswerCode::C,
                content: "Jakarta".to_string(),
                img_url: None,
                is_answer: true,
            }))
            .times(1)
            .returning(|data| {
                Ok(AnswerRecord {
                    id: 30,
                    question_id: data.question_id,
                    code: data.code.to_string(),
                    content: data.content,
                    img_url: data.img_url,
                    is_answer: data.is_answer,
                })
            });

        let answer = AddAnswerService::new(repo).execute(command()).await.unwrap();

        assert_eq!(answer.id, 30);
        assert_eq!(answer.code, "c");
    }

    #[tokio::test]
    async fn unknown_question_is_reported() {
        let mut repo = MockAnswerRepo::new();
        repo.expect_create_answer()
            .returning(|_| Err(AnswerRepositoryError::QuestionMissing));

        let result = AddAnswerService::new(repo).execute(command()).await;

        assert_eq!(result, Err(AddAnswerError::QuestionMissing));
    }
}
