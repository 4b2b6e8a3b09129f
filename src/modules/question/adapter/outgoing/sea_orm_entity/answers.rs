use sea_orm::entity::prelude::*;

use crate::question::application::ports::outgoing::AnswerRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "answers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub question_id: i32,
    pub code: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub img_url: Option<String>,
    pub is_answer: bool,
}

impl Model {
    pub fn to_record(&self) -> AnswerRecord {
        AnswerRecord {
            id: self.id,
            question_id: self.question_id,
            code: self.code.clone(),
            content: self.content.clone(),
            img_url: self.img_url.clone(),
            is_answer: self.is_answer,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::questions::Entity",
        from = "Column::QuestionId",
        to = "super::questions::Column::Id"
    )]
    Question,
}

impl Related<super::questions::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Question.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
