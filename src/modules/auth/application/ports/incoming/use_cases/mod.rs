mod delete_user;
mod get_user;
mod get_users;
mod login_user;
mod register_admin;
mod register_user;
mod update_user;

pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_user::{GetProfileUseCase, GetUserError, GetUserUseCase};
pub use get_users::{GetUsersError, GetUsersUseCase};
pub use login_user::{LoginResult, LoginUserCommand, LoginUserError, LoginUserUseCase};
pub use register_admin::{RegisterAdminCommand, RegisterAdminError, RegisterAdminUseCase};
pub use register_user::{
    RegisterCommandError, RegisterUserCommand, RegisterUserError, RegisterUserUseCase,
};
pub use update_user::{UpdateUserCommand, UpdateUserError, UpdateUserUseCase};
