use async_trait::async_trait;
use sea_orm::sea_query::extension::postgres::PgExpr;
use sea_orm::{
    sea_query::Expr, ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder, QuerySelect,
};
use std::sync::Arc;

use super::sea_orm_entity::users::{Column as UserColumn, Entity as UserEntity};
use crate::auth::application::ports::outgoing::{
    UserCredentials, UserListFilter, UserProfile, UserQuery, UserQueryError, UserSummary,
};
use crate::shared::pagination::PageRequest;

#[derive(Clone, Debug)]
pub struct UserQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserQuery for UserQueryPostgres {
    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_credentials()))
    }

    async fn find_profile(&self, user_id: i32) -> Result<Option<UserProfile>, UserQueryError> {
        let user = UserEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.to_profile()))
    }

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i32>, UserQueryError> {
        let user = UserEntity::find()
            .filter(UserColumn::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(user.map(|m| m.id))
    }

    async fn list_users(
        &self,
        filter: &UserListFilter,
        page: PageRequest,
    ) -> Result<Vec<UserSummary>, UserQueryError> {
        let mut query = UserEntity::find();

        if let Some(search) = filter.search.as_deref().map(str::trim) {
            if !search.is_empty() {
                let search_pattern = format!("%{}%", search);
                query = query.filter(
                    Condition::any()
                        .add(Expr::col(UserColumn::Name).ilike(&search_pattern))
                        .add(Expr::col(UserColumn::Email).ilike(&search_pattern)),
                );
            }
        }

        let users = query
            .order_by_asc(UserColumn::Id)
            .offset(page.offset())
            .limit(page.limit)
            .all(&*self.db)
            .await
            .map_err(|e| UserQueryError::DatabaseError(e.to_string()))?;

        Ok(users.iter().map(|m| m.to_summary()).collect())
    }
}
