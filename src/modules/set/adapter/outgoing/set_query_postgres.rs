use async_trait::async_trait;
use sea_orm::{
    ColumnTrait, DatabaseConnection, EntityTrait, FromQueryResult, JoinType, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use std::sync::Arc;

use crate::class::adapter::outgoing::sea_orm_entity::classes;
use crate::lesson::adapter::outgoing::sea_orm_entity::lessons;
use crate::set::application::ports::outgoing::{SetListFilter, SetQuery, SetQueryError, SetView};

use super::sea_orm_entity::sets::{Column as SetColumn, Entity as SetEntity, Relation};

#[derive(Debug, FromQueryResult)]
struct SetRow {
    id: i32,
    name: String,
    lesson: String,
    class: String,
    is_quiz: bool,
}

impl From<SetRow> for SetView {
    fn from(row: SetRow) -> Self {
        SetView {
            id: row.id,
            name: row.name,
            lesson: row.lesson,
            class: row.class,
            is_quiz: row.is_quiz,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SetQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl SetQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl SetQuery for SetQueryPostgres {
    async fn list_sets(&self, filter: &SetListFilter) -> Result<Vec<SetView>, SetQueryError> {
        let mut query = SetEntity::find()
            .select_only()
            .column(SetColumn::Id)
            .column(SetColumn::Name)
            .column_as(lessons::Column::Name, "lesson")
            .column_as(classes::Column::Name, "class")
            .column(SetColumn::IsQuiz)
            .join(JoinType::InnerJoin, Relation::Lesson.def())
            .join(JoinType::InnerJoin, Relation::Class.def());

        if let Some(lesson) = &filter.lesson {
            query = query.filter(lessons::Column::Name.eq(lesson.as_str()));
        }
        if let Some(class) = &filter.class {
            query = query.filter(classes::Column::Name.eq(class.as_str()));
        }
        if let Some(is_quiz) = filter.is_quiz {
            query = query.filter(SetColumn::IsQuiz.eq(is_quiz));
        }

        let rows = query
            .order_by_asc(SetColumn::Id)
            .into_model::<SetRow>()
            .all(&*self.db)
            .await
            .map_err(|e| SetQueryError::DatabaseError(e.to_string()))?;

        Ok(rows.into_iter().map(SetView::from).collect())
    }
}
