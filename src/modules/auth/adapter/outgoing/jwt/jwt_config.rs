use crate::config::ConfigError;

const DEFAULT_ISSUER: &str = "misterblast-core";
const DEFAULT_SESSION_EXPIRY: i64 = 604_800; // 7 days
const MIN_SECRET_LEN: usize = 32;

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    pub issuer: String,
    pub session_expiry: i64, // Expiration in seconds
}

impl JwtConfig {
    /// Reads `JWT_SECRET`, `JWT_ISSUER` and `JWT_SESSION_EXPIRY` through `lookup`.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_key = lookup("JWT_SECRET").ok_or(ConfigError::Missing("JWT_SECRET"))?;

        // HS256 wants at least 256 bits of key material
        if secret_key.len() < MIN_SECRET_LEN {
            return Err(ConfigError::Invalid {
                key: "JWT_SECRET",
                reason: format!("must be at least {MIN_SECRET_LEN} characters long"),
            });
        }

        let session_expiry = match lookup("JWT_SESSION_EXPIRY") {
            Some(raw) => raw.parse::<i64>().map_err(|_| ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: format!("'{raw}' is not a number of seconds"),
            })?,
            None => DEFAULT_SESSION_EXPIRY,
        };

        if session_expiry <= 0 {
            return Err(ConfigError::Invalid {
                key: "JWT_SESSION_EXPIRY",
                reason: "must be positive".to_string(),
            });
        }

        let issuer = lookup("JWT_ISSUER").unwrap_or_else(|| DEFAULT_ISSUER.to_string());

        Ok(Self {
            secret_key,
            issuer,
            session_expiry,
        })
    }
}
