use async_trait::async_trait;

use crate::auth::application::ports::{
    incoming::use_cases::{GetProfileUseCase, GetUserError, GetUserUseCase},
    outgoing::{UserProfile, UserQuery, UserSummary},
};

#[derive(Debug, Clone)]
pub struct GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    query: Q,
}

impl<Q> GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }

    async fn load(&self, user_id: i32) -> Result<UserProfile, GetUserError> {
        self.query
            .find_profile(user_id)
            .await
            .map_err(|e| GetUserError::QueryError(e.to_string()))?
            .ok_or(GetUserError::UserNotFound)
    }
}

#[async_trait]
impl<Q> GetUserUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<UserSummary, GetUserError> {
        let profile = self.load(user_id).await?;

        Ok(UserSummary {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            img_url: profile.img_url,
        })
    }
}

#[async_trait]
impl<Q> GetProfileUseCase for GetUserService<Q>
where
    Q: UserQuery + Send + Sync,
{
    async fn execute(&self, user_id: i32) -> Result<UserProfile, GetUserError> {
        self.load(user_id).await
    }
}
