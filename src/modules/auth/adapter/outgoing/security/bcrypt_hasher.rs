use async_trait::async_trait;
use bcrypt::{hash, verify, DEFAULT_COST};

use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

/// Default hasher; accounts created before the argon2 switch carry bcrypt hashes.
#[derive(Debug, Clone)]
pub struct BcryptHasher {
    cost: u32,
}

impl BcryptHasher {
    pub fn new() -> Self {
        Self { cost: DEFAULT_COST }
    }

    #[cfg(test)]
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PasswordHasher for BcryptHasher {
    async fn hash_password(&self, password: &str) -> Result<String, HashError> {
        let password = password.to_string();
        let cost = self.cost;

        tokio::task::spawn_blocking(move || {
            hash(password, cost).map_err(|_| HashError::HashFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }

    async fn verify_password(&self, password: &str, hashed: &str) -> Result<bool, HashError> {
        let password = password.to_string();
        let hashed = hashed.to_string();

        tokio::task::spawn_blocking(move || {
            verify(password, &hashed).map_err(|_| HashError::VerifyFailed)
        })
        .await
        .map_err(|_| HashError::TaskFailed)?
    }
}

#[cfg(test)]
mod tests {
    use super::BcryptHasher;
    use crate::auth::application::ports::outgoing::password_hasher::{HashError, PasswordHasher};

    // Minimum cost keeps the suite fast
    fn hasher() -> BcryptHasher {
        BcryptHasher::with_cost(4)
    }

    #[tokio::test]
    async fn test_bcrypt_hash_and_verify_password() {
        let hasher = hasher();
        let password = "SecurePassword123";

        let hashed_password = hasher.hash_password(password).await.unwrap();
        assert!(hashed_password.starts_with("$2"));

        let verify_correct = hasher.verify_password(password, &hashed_password).await;
        assert_eq!(verify_correct, Ok(true));

        let verify_wrong = hasher
            .verify_password("WrongPassword", &hashed_password)
            .await;
        assert_eq!(verify_wrong, Ok(false));
    }

    #[tokio::test]
    async fn test_bcrypt_invalid_hash_is_an_error() {
        let result = hasher().verify_password("secret", "invalid-hash").await;

        assert!(matches!(result, Err(HashError::VerifyFailed)));
    }

    #[tokio::test]
    async fn test_bcrypt_invalid_cost_fails_hashing() {
        let result = BcryptHasher::with_cost(2).hash_password("secret").await;

        assert!(matches!(result, Err(HashError::HashFailed)));
    }
}
