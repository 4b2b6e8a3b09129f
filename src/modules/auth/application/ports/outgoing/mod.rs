pub mod password_hasher;
pub mod token_provider;
pub mod user_query;
pub mod user_repository;

pub use password_hasher::{HashError, PasswordHasher};
pub use token_provider::{IssuedToken, SessionClaims, SessionIdentity, TokenError, TokenProvider};
pub use user_query::{
    UserCredentials, UserListFilter, UserProfile, UserQuery, UserQueryError, UserSummary,
};
pub use user_repository::{NewUserData, UpdateUserData, UserRepository, UserRepositoryError};
