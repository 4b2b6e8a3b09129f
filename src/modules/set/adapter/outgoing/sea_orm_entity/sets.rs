use sea_orm::entity::prelude::*;

use crate::set::application::ports::outgoing::SetRecord;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "sets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub lesson_id: i32,
    pub class_id: i32,
    pub is_quiz: bool,
}

impl Model {
    pub fn to_record(&self) -> SetRecord {
        SetRecord {
            id: self.id,
            name: self.name.clone(),
            lesson_id: self.lesson_id,
            class_id: self.class_id,
            is_quiz: self.is_quiz,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::lesson::adapter::outgoing::sea_orm_entity::lessons::Entity",
        from = "Column::LessonId",
        to = "crate::lesson::adapter::outgoing::sea_orm_entity::lessons::Column::Id"
    )]
    Lesson,

    #[sea_orm(
        belongs_to = "crate::class::adapter::outgoing::sea_orm_entity::classes::Entity",
        from = "Column::ClassId",
        to = "crate::class::adapter::outgoing::sea_orm_entity::classes::Column::Id"
    )]
    Class,
}

impl ActiveModelBehavior for ActiveModel {}
