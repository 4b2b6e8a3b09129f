use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;

use crate::class::adapter::outgoing::sea_orm_entity::classes;
use crate::lesson::adapter::outgoing::sea_orm_entity::lessons;
use crate::question::application::ports::outgoing::{
    AdminQuestionFilter, AdminQuestionView, QuestionDetail, QuestionListFilter, QuestionQuery,
    QuestionQueryError, QuizAnswer, QuizFilter, QuizQuestion,
};
use crate::set::adapter::outgoing::sea_orm_entity::sets;
use crate::shared::pagination::PageRequest;

use super::sea_orm_entity::answers;
use super::sea_orm_entity::questions::{
    Column as QuestionColumn, Entity as QuestionEntity, Relation as QuestionRelation,
};

//
// ──────────────────────────────────────────────────────────
// Joined rows
// ──────────────────────────────────────────────────────────
//

/// One question/answer pair from the LEFT JOIN; answer columns are NULL
/// for a question without answers.
#[derive(Debug, Clone, FromQueryResult)]
struct QuizRow {
    id: i32,
    number: i32,
    question_type: String,
    content: String,
    set_id: i32,
    answer_id: Option<i32>,
    answer_code: Option<String>,
    answer_content: Option<String>,
    answer_img_url: Option<String>,
}

#[derive(Debug, FromQueryResult)]
struct AdminRow {
    id: i32,
    number: i32,
    question_type: String,
    content: String,
    is_quiz: bool,
    set_id: i32,
    set_name: String,
    lesson_name: String,
    class_name: String,
}

impl From<AdminRow> for AdminQuestionView {
    fn from(row: AdminRow) -> Self {
        AdminQuestionView {
            id: row.id,
            number: row.number,
            question_type: row.question_type,
            content: row.content,
            is_quiz: row.is_quiz,
            set_id: row.set_id,
            set_name: row.set_name,
            lesson_name: row.lesson_name,
            class_name: row.class_name,
        }
    }
}

/// Folds flat join rows into questions in first-seen order, attaching
/// answers in row order.
fn group_quiz_rows(rows: Vec<QuizRow>) -> Vec<QuizQuestion> {
    let mut questions: Vec<QuizQuestion> = Vec::new();

    for row in rows {
        let answer = match (row.answer_id, row.answer_code, row.answer_content) {
            (Some(id), Some(code), Some(content)) => Some(QuizAnswer {
                id,
                code,
                content,
                img_url: row.answer_img_url.filter(|url| !url.is_empty()),
            }),
            _ => None,
        };

        // Rows for one question arrive together (ORDER BY number, id)
        let is_same = questions.last().map(|q| q.id == row.id).unwrap_or(false);
        if !is_same {
            questions.push(QuizQuestion {
                id: row.id,
                number: row.number,
                question_type: row.question_type,
                content: row.content,
                set_id: row.set_id,
                answers: Vec::new(),
            });
        }

        if let (Some(answer), Some(question)) = (answer, questions.last_mut()) {
            question.answers.push(answer);
        }
    }

    questions
}

#[derive(Debug, Clone)]
pub struct QuestionQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl QuestionQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl QuestionQuery for QuestionQueryPostgres {
    async fn find_question(
        &self,
        question_id: i32,
    ) -> Result<Option<QuestionDetail>, QuestionQueryError> {
        let question = QuestionEntity::find_by_id(question_id)
            .one(&*self.db)
            .await
            .map_err(|e| QuestionQueryError::DatabaseError(e.to_string()))?;

        Ok(question.map(|m| m.to_detail()))
    }

    async fn list_questions(
        &self,
        filter: &QuestionListFilter,
    ) -> Result<Vec<QuestionDetail>, QuestionQueryError> {
        let mut query = QuestionEntity::find();

        if let Some(set_id) = filter.set_id {
            query = query.filter(QuestionColumn::SetId.eq(set_id));
        }

        let questions = query
            .order_by_asc(QuestionColumn::Number)
            .order_by_asc(QuestionColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| QuestionQueryError::DatabaseError(e.to_string()))?;

        Ok(questions.iter().map(|m| m.to_detail()).collect())
    }

    async fn list_quiz_questions(
        &self,
        filter: &QuizFilter,
    ) -> Result<Vec<QuizQuestion>, QuestionQueryError> {
        let mut query = QuestionEntity::find()
            .select_only()
            .column(QuestionColumn::Id)
            .column(QuestionColumn::Number)
            .column_as(QuestionColumn::QuestionType, "question_type")
            .column(QuestionColumn::Content)
            .column(QuestionColumn::SetId)
            .column_as(answers::Column::Id, "answer_id")
            .column_as(answers::Column::Code, "answer_code")
            .column_as(answers::Column::Content, "answer_content")
            .column_as(answers::Column::ImgUrl, "answer_img_url")
            .join(JoinType::LeftJoin, QuestionRelation::Answers.def())
            .filter(QuestionColumn::IsQuiz.eq(true));

        if let Some(set_id) = filter.set_id {
            query = query.filter(QuestionColumn::SetId.eq(set_id));
        }
        if let Some(question_type) = filter.question_type {
            query = query.filter(QuestionColumn::QuestionType.eq(question_type.as_str()));
        }
        if let Some(number) = filter.number {
            query = query.filter(QuestionColumn::Number.eq(number));
        }

        let rows = query
            .order_by_asc(QuestionColumn::Number)
            .order_by_asc(QuestionColumn::Id)
            .order_by_asc(answers::Column::Code)
            .into_model::<QuizRow>()
            .all(&*self.db)
            .await
            .map_err(|e| QuestionQueryError::DatabaseError(e.to_string()))?;

        Ok(group_quiz_rows(rows))
    }

    async fn list_admin_questions(
        &self,
        filter: &AdminQuestionFilter,
        page: PageRequest,
    ) -> Result<Vec<AdminQuestionView>, QuestionQueryError> {
        let mut query = QuestionEntity::find()
            .select_only()
            .column(QuestionColumn::Id)
            .column(QuestionColumn::Number)
            .column_as(QuestionColumn::QuestionType, "question_type")
            .column(QuestionColumn::Content)
            .column(QuestionColumn::IsQuiz)
            .column(QuestionColumn::SetId)
            .column_as(sets::Column::Name, "set_name")
            .column_as(lessons::Column::Name, "lesson_name")
            .column_as(classes::Column::Name, "class_name")
            .join(JoinType::InnerJoin, QuestionRelation::Set.def())
            .join(JoinType::InnerJoin, sets::Relation::Lesson.def())
            .join(JoinType::InnerJoin, sets::Relation::Class.def());

        if let Some(is_quiz) = filter.is_quiz {
            query = query.filter(QuestionColumn::IsQuiz.eq(is_quiz));
        }
        if let Some(lesson) = &filter.lesson {
            query = query.filter(lessons::Column::Name.eq(lesson.as_str()));
        }
        if let Some(class) = &filter.class {
            query = query.filter(classes::Column::Name.eq(class.as_str()));
        }
        if let Some(set) = &filter.set {
            query = query.filter(sets::Column::Name.eq(set.as_str()));
        }

        let rows = query
            .order_by_asc(QuestionColumn::Number)
            .order_by_asc(QuestionColumn::Id)
            .offset(page.offset())
            .limit(page.limit)
            .into_model::<AdminRow>()
            .all(&*self.db)
            .await
            .map_err(|e| QuestionQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(AdminQuestionView::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::question::adapter::outgoing::sea_orm_entity::questions::Model as QuestionModel;
    use crate::question::application::domain::QuestionType;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, Value};
    use std::collections::BTreeMap;

    fn quiz_row(id: i32, number: i32, answer: Option<(i32, &str, &str)>) -> QuizRow {
        QuizRow {
            id,
            number,
            question_type: "C1".to_string(),
            content: format!("Soal {number}"),
            set_id: 1,
            answer_id: answer.map(|a| a.0),
            answer_code: answer.map(|a| a.1.to_string()),
            answer_content: answer.map(|a| a.2.to_string()),
            answer_img_url: None,
        }
    }

    fn quiz_map(
        id: i32,
        number: i32,
        answer: Option<(i32, &str, &str)>,
    ) -> BTreeMap<&'static str, Value> {
        btreemap! {
            "id" => Value::from(id),
            "number" => Value::from(number),
            "question_type" => Value::from("C1".to_string()),
            "content" => Value::from(format!("Soal {number}")),
            "set_id" => Value::from(1i32),
            "answer_id" => Value::Int(answer.map(|a| a.0)),
            "answer_code" => Value::String(answer.map(|a| Box::new(a.1.to_string()))),
            "answer_content" => Value::String(answer.map(|a| Box::new(a.2.to_string()))),
            "answer_img_url" => Value::String(None),
        }
    }

    #[test]
    fn group_quiz_rows_nests_answers_in_row_order() {
        let rows = vec![
            quiz_row(1, 1, Some((10, "a", "56"))),
            quiz_row(1, 1, Some((11, "b", "54"))),
            quiz_row(2, 2, None),
            quiz_row(3, 3, Some((12, "esay", "Karena menguap"))),
        ];

        let grouped = group_quiz_rows(rows);

        assert_eq!(grouped.len(), 3);
        assert_eq!(grouped[0].answers.len(), 2);
        assert_eq!(grouped[0].answers[1].code, "b");
        assert!(grouped[1].answers.is_empty());
        assert_eq!(grouped[2].answers[0].content, "Karena menguap");
    }

    #[test]
    fn group_quiz_rows_drops_empty_img_url() {
        let mut row = quiz_row(1, 1, Some((10, "a", "56")));
        row.answer_img_url = Some(String::new());

        let grouped = group_quiz_rows(vec![row]);

        assert_eq!(grouped[0].answers[0].img_url, None);
    }

    #[tokio::test]
    async fn test_find_question() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![
                vec![QuestionModel {
                    id: 4,
                    number: 2,
                    question_type: "C2".to_string(),
                    content: "Ibu kota Indonesia?".to_string(),
                    is_quiz: false,
                    set_id: 1,
                }],
                vec![],
            ])
            .into_connection();
        let query = QuestionQueryPostgres::new(Arc::new(db));

        let found = query.find_question(4).await.unwrap().unwrap();
        assert_eq!(found.question_type, "C2");

        assert_eq!(query.find_question(5).await, Ok(None));
    }

    #[tokio::test]
    async fn test_list_quiz_questions_groups_joined_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                quiz_map(1, 1, Some((10, "a", "56"))),
                quiz_map(1, 1, Some((11, "b", "54"))),
                quiz_map(2, 2, None),
            ]])
            .into_connection();
        let query = QuestionQueryPostgres::new(Arc::new(db));
        let filter = QuizFilter {
            set_id: Some(1),
            question_type: Some(QuestionType::C1),
            number: None,
        };

        let quiz = query.list_quiz_questions(&filter).await.unwrap();

        assert_eq!(quiz.len(), 2);
        assert_eq!(quiz[0].answers.len(), 2);
        assert_eq!(quiz[0].answers[0].id, 10);
        assert!(quiz[1].answers.is_empty());
    }

    #[tokio::test]
    async fn test_list_admin_questions_maps_rows() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "id" => Value::from(1i32),
                "number" => Value::from(1i32),
                "question_type" => Value::from("C1".to_string()),
                "content" => Value::from("Berapakah 7 x 8?".to_string()),
                "is_quiz" => Value::from(true),
                "set_id" => Value::from(2i32),
                "set_name" => Value::from("Latihan 1".to_string()),
                "lesson_name" => Value::from("Matematika".to_string()),
                "class_name" => Value::from("4".to_string()),
            }]])
            .into_connection();
        let query = QuestionQueryPostgres::new(Arc::new(db));
        let filter = AdminQuestionFilter {
            lesson: Some("Matematika".to_string()),
            ..Default::default()
        };

        let rows = query
            .list_admin_questions(&filter, PageRequest::default())
            .await
            .unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].set_name, "Latihan 1");
        assert_eq!(rows[0].class_name, "4");
    }

    #[tokio::test]
    async fn test_list_questions_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Query(RuntimeErr::Internal("boom".to_string()))])
            .into_connection();
        let query = QuestionQueryPostgres::new(Arc::new(db));

        assert!(matches!(
            query.list_questions(&QuestionListFilter::default()).await,
            Err(QuestionQueryError::DatabaseError(_))
        ));
    }
}
