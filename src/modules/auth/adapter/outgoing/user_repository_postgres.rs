use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    NewUserData, UpdateUserData, UserProfile, UserRepository, UserRepositoryError, UserSummary,
};
use crate::shared::db_error::{classify, DbFailure};

use super::sea_orm_entity::users::{
    ActiveModel as UserActiveModel, Column as UserColumn, Entity as UserEntity,
};

#[derive(Clone, Debug)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_write_error(err: DbErr) -> UserRepositoryError {
        if matches!(err, DbErr::RecordNotUpdated) {
            return UserRepositoryError::UserNotFound;
        }
        match classify(&err) {
            DbFailure::UniqueViolation => UserRepositoryError::EmailAlreadyExists,
            _ => UserRepositoryError::DatabaseError(err.to_string()),
        }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: NewUserData) -> Result<UserProfile, UserRepositoryError> {
        let active_user = UserActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            password: Set(data.password_hash),
            img_url: Set(None),
            is_admin: Set(false),
            is_verified: Set(data.is_verified),
            ..Default::default()
        };

        let inserted = active_user
            .insert(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(inserted.to_profile())
    }

    async fn update_user(
        &self,
        user_id: i32,
        data: UpdateUserData,
    ) -> Result<UserSummary, UserRepositoryError> {
        let active_user = UserActiveModel {
            id: Set(user_id),
            name: Set(data.name),
            email: Set(data.email),
            img_url: Set(data.img_url),
            password: match data.password_hash {
                Some(hash) => Set(hash),
                None => NotSet,
            },
            ..Default::default()
        };

        let updated = active_user
            .update(&*self.db)
            .await
            .map_err(Self::map_write_error)?;

        Ok(updated.to_summary())
    }

    async fn delete_user(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let result = UserEntity::delete_many()
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }

    async fn mark_verified(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        let result = UserEntity::update_many()
            .col_expr(UserColumn::IsVerified, Expr::value(true))
            .filter(UserColumn::Id.eq(user_id))
            .exec(&*self.db)
            .await
            .map_err(|e| UserRepositoryError::DatabaseError(e.to_string()))?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::UserNotFound);
        }

        Ok(())
    }
}
