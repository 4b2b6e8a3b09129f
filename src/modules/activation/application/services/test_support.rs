use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::activation::application::domain::OtpCode;
use crate::activation::application::ports::outgoing::{
    Clock, OtpGenerator, OtpRecord, OtpRepository, OtpRepositoryError,
};
use crate::auth::application::ports::outgoing::{
    NewUserData, UpdateUserData, UserCredentials, UserListFilter, UserProfile, UserQuery,
    UserQueryError, UserRepository, UserRepositoryError, UserSummary,
};
use crate::shared::pagination::PageRequest;

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 1, 1, 8, 0, 0).unwrap()
}

pub struct FixedClock(Mutex<DateTime<Utc>>);

impl FixedClock {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self(Mutex::new(now))
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.0.lock().unwrap() = now;
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        *self.0.lock().unwrap()
    }
}

pub struct FixedGenerator(pub &'static str);

impl OtpGenerator for FixedGenerator {
    fn generate(&self) -> OtpCode {
        OtpCode::parse(self.0).unwrap()
    }
}

#[derive(Clone, Default)]
pub struct InMemoryOtps(Arc<Mutex<HashMap<i32, OtpRecord>>>);

impl InMemoryOtps {
    pub fn insert(&self, record: OtpRecord) {
        self.0.lock().unwrap().insert(record.user_id, record);
    }

    pub fn get(&self, user_id: i32) -> Option<OtpRecord> {
        self.0.lock().unwrap().get(&user_id).cloned()
    }

    pub fn len(&self) -> usize {
        self.0.lock().unwrap().len()
    }
}

#[async_trait]
impl OtpRepository for InMemoryOtps {
    async fn upsert_otp(&self, record: OtpRecord) -> Result<(), OtpRepositoryError> {
        self.insert(record);
        Ok(())
    }

    async fn find_otp(&self, user_id: i32) -> Result<Option<OtpRecord>, OtpRepositoryError> {
        Ok(self.get(user_id))
    }
}

/// One-user store serving both the query and the repository port.
#[derive(Clone)]
pub struct FakeUsers {
    id: i32,
    email: String,
    verified: Arc<Mutex<bool>>,
}

impl FakeUsers {
    pub fn with_user(id: i32, email: &str) -> Self {
        Self {
            id,
            email: email.to_string(),
            verified: Arc::new(Mutex::new(false)),
        }
    }

    pub fn is_verified(&self, user_id: i32) -> bool {
        user_id == self.id && *self.verified.lock().unwrap()
    }
}

#[async_trait]
impl UserQuery for FakeUsers {
    async fn find_credentials_by_email(
        &self,
        _email: &str,
    ) -> Result<Option<UserCredentials>, UserQueryError> {
        unimplemented!()
    }

    async fn find_profile(&self, user_id: i32) -> Result<Option<UserProfile>, UserQueryError> {
        Ok((user_id == self.id).then(|| UserProfile {
            id: self.id,
            name: "Budi".to_string(),
            email: self.email.clone(),
            img_url: None,
            is_admin: true,
            is_verified: *self.verified.lock().unwrap(),
        }))
    }

    async fn find_id_by_email(&self, email: &str) -> Result<Option<i32>, UserQueryError> {
        Ok((email == self.email).then_some(self.id))
    }

    async fn list_users(
        &self,
        _filter: &UserListFilter,
        _page: PageRequest,
    ) -> Result<Vec<UserSummary>, UserQueryError> {
        unimplemented!()
    }
}

#[async_trait]
impl UserRepository for FakeUsers {
    async fn create_user(&self, _data: NewUserData) -> Result<UserProfile, UserRepositoryError> {
        unimplemented!()
    }

    async fn update_user(
        &self,
        _user_id: i32,
        _data: UpdateUserData,
    ) -> Result<UserSummary, UserRepositoryError> {
        unimplemented!()
    }

    async fn delete_user(&self, _user_id: i32) -> Result<(), UserRepositoryError> {
        unimplemented!()
    }

    async fn mark_verified(&self, user_id: i32) -> Result<(), UserRepositoryError> {
        if user_id != self.id {
            return Err(UserRepositoryError::UserNotFound);
        }
        *self.verified.lock().unwrap() = true;
        Ok(())
    }
}
