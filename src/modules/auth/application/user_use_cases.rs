use std::sync::Arc;

use crate::auth::application::ports::incoming::use_cases::{
    DeleteUserUseCase, GetProfileUseCase, GetUserUseCase, GetUsersUseCase, LoginUserUseCase,
    RegisterAdminUseCase, RegisterUserUseCase, UpdateUserUseCase,
};

#[derive(Clone)]
pub struct UserUseCases {
    pub register: Arc<dyn RegisterUserUseCase + Send + Sync>,
    pub register_admin: Arc<dyn RegisterAdminUseCase + Send + Sync>,
    pub login: Arc<dyn LoginUserUseCase + Send + Sync>,
    pub get_list: Arc<dyn GetUsersUseCase + Send + Sync>,
    pub get_single: Arc<dyn GetUserUseCase + Send + Sync>,
    pub get_profile: Arc<dyn GetProfileUseCase + Send + Sync>,
    pub update: Arc<dyn UpdateUserUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteUserUseCase + Send + Sync>,
}
