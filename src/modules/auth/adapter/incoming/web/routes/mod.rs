mod delete_user;
mod fetch_me;
mod get_user;
mod get_users;
mod login_user;
mod register_admin;
mod register_user;
mod update_user;

pub use delete_user::*;
pub use fetch_me::*;
pub use get_user::*;
pub use get_users::*;
pub use login_user::*;
pub use register_admin::*;
pub use register_user::*;
pub use update_user::*;
