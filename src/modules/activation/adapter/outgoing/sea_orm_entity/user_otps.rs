use sea_orm::entity::prelude::*;

use crate::activation::application::ports::outgoing::OtpRecord;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_otps")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: i32,
    pub otp_code: String,
    pub expires_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_record(&self) -> OtpRecord {
        OtpRecord {
            user_id: self.user_id,
            otp_code: self.otp_code.clone(),
            expires_at: self.expires_at.to_utc(),
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
