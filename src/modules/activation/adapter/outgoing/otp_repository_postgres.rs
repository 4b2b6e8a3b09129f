use async_trait::async_trait;
use sea_orm::{sea_query::OnConflict, DatabaseConnection, EntityTrait, Set};
use std::sync::Arc;

use crate::activation::application::ports::outgoing::{
    OtpRecord, OtpRepository, OtpRepositoryError,
};

use super::sea_orm_entity::user_otps::{
    ActiveModel as OtpActiveModel, Column as OtpColumn, Entity as OtpEntity,
};

#[derive(Debug, Clone)]
pub struct OtpRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl OtpRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl OtpRepository for OtpRepositoryPostgres {
    async fn upsert_otp(&self, record: OtpRecord) -> Result<(), OtpRepositoryError> {
        let active = OtpActiveModel {
            user_id: Set(record.user_id),
            otp_code: Set(record.otp_code),
            expires_at: Set(record.expires_at.fixed_offset()),
        };

        OtpEntity::insert(active)
            .on_conflict(
                OnConflict::column(OtpColumn::UserId)
                    .update_columns([OtpColumn::OtpCode, OtpColumn::ExpiresAt])
                    .to_owned(),
            )
            .exec_without_returning(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }

    async fn find_otp(&self, user_id: i32) -> Result<Option<OtpRecord>, OtpRepositoryError> {
        let model = OtpEntity::find_by_id(user_id)
            .one(&*self.db)
            .await
            .map_err(|e| OtpRepositoryError::DatabaseError(e.to_string()))?;

        Ok(model.map(|m| m.to_record()))
    }
}
