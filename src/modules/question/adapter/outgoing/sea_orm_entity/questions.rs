use sea_orm::entity::prelude::*;

use crate::question::application::ports::outgoing::{QuestionDetail, QuestionRecord};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "questions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub number: i32,
    #[sea_orm(column_name = "type")]
    pub question_type: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub is_quiz: bool,
    pub set_id: i32,
}

impl Model {
    pub fn to_record(&self) -> QuestionRecord {
        QuestionRecord {
            id: self.id,
            number: self.number,
            question_type: self.question_type.clone(),
            content: self.content.clone(),
            is_quiz: self.is_quiz,
            set_id: self.set_id,
        }
    }

    pub fn to_detail(&self) -> QuestionDetail {
        QuestionDetail {
            id: self.id,
            number: self.number,
            question_type: self.question_type.clone(),
            content: self.content.clone(),
            set_id: self.set_id,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::set::adapter::outgoing::sea_orm_entity::sets::Entity",
        from = "Column::SetId",
        to = "crate::set::adapter::outgoing::sea_orm_entity::sets::Column::Id"
    )]
    Set,

    #[sea_orm(has_many = "super::answers::Entity")]
    Answers,
}

impl Related<super::answers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Answers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
