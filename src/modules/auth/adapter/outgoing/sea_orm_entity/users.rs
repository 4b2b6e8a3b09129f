use sea_orm::entity::prelude::*;

use crate::auth::application::ports::outgoing::{UserCredentials, UserProfile, UserSummary};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password: String,
    pub img_url: Option<String>,
    pub is_admin: bool,
    pub is_verified: bool,
    pub created_at: DateTimeWithTimeZone,
    pub updated_at: DateTimeWithTimeZone,
}

impl Model {
    pub fn to_summary(&self) -> UserSummary {
        UserSummary {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            img_url: self.img_url.clone(),
        }
    }

    pub fn to_profile(&self) -> UserProfile {
        UserProfile {
            id: self.id,
            name: self.name.clone(),
            email: self.email.clone(),
            img_url: self.img_url.clone(),
            is_admin: self.is_admin,
            is_verified: self.is_verified,
        }
    }

    pub fn to_credentials(&self) -> UserCredentials {
        UserCredentials {
            id: self.id,
            email: self.email.clone(),
            password_hash: self.password.clone(),
            is_admin: self.is_admin,
            is_verified: self.is_verified,
        }
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

// updated_at is maintained by the database trigger
impl ActiveModelBehavior for ActiveModel {}
