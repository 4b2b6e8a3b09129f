// src/config.rs
use crate::auth::adapter::outgoing::jwt::JwtConfig;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{key} is invalid: {reason}")]
    Invalid { key: &'static str, reason: String },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone)]
pub enum SmtpTransport {
    /// Authenticated STARTTLS relay.
    Relay {
        server: String,
        username: String,
        password: String,
    },
    /// Plain local catcher such as MailHog.
    Local { host: String, port: u16 },
}

#[derive(Debug, Clone)]
pub struct SmtpConfig {
    pub from_email: String,
    pub transport: SmtpTransport,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HasherKind {
    Bcrypt,
    Argon2,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub jwt: JwtConfig,
    pub smtp: SmtpConfig,
    pub admin_default_password: String,
    pub password_hasher: HasherKind,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or("PORT", &lookup, 8080)?,
        };

        let database = DatabaseConfig {
            url: required("DATABASE_URL", &lookup)?,
            max_connections: parse_or("DB_MAX_CONNECTIONS", &lookup, 50)?,
            min_connections: parse_or("DB_MIN_CONNECTIONS", &lookup, 10)?,
            run_migrations: parse_or("RUN_MIGRATIONS", &lookup, false)?,
        };

        let jwt = JwtConfig::from_lookup(&lookup)?;

        let transport = if matches!(environment.as_str(), "development" | "test") {
            SmtpTransport::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", &lookup, 1025)?,
            }
        } else {
            SmtpTransport::Relay {
                server: required("SMTP_SERVER", &lookup)?,
                username: required("SMTP_USERNAME", &lookup)?,
                password: required("SMTP_PASSWORD", &lookup)?,
            }
        };

        let smtp = SmtpConfig {
            from_email: required("EMAIL_FROM", &lookup)?,
            transport,
        };

        let password_hasher = match lookup("PASSWORD_HASHER").as_deref() {
            None | Some("bcrypt") => HasherKind::Bcrypt,
            Some("argon2") => HasherKind::Argon2,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "PASSWORD_HASHER",
                    reason: format!("unknown hasher '{other}', expected bcrypt or argon2"),
                })
            }
        };

        Ok(Self {
            environment,
            server,
            database,
            jwt,
            smtp,
            admin_default_password: required("ADMIN_DEFAULT_PASSWORD", &lookup)?,
            password_hasher,
        })
    }
}

fn required<F>(key: &'static str, lookup: &F) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|value| !value.trim().is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_or<T, F>(key: &'static str, lookup: &F, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid {
            key,
            reason: format!("could not parse '{raw}'"),
        }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn base_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("DATABASE_URL", "postgres://localhost/quiz"),
            ("JWT_SECRET", "0123456789abcdef0123456789abcdef"),
            ("EMAIL_FROM", "noreply@example.com"),
            ("ADMIN_DEFAULT_PASSWORD", "admin-secret"),
        ])
    }

    fn load(env: &HashMap<&'static str, &'static str>) -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|key| env.get(key).map(|v| v.to_string()))
    }

    #[test]
    fn development_defaults() {
        let config = load(&base_env()).unwrap();

        assert_eq!(config.environment, "development");
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.database.max_connections, 50);
        assert_eq!(config.database.min_connections, 10);
        assert!(!config.database.run_migrations);
        assert_eq!(config.password_hasher, HasherKind::Bcrypt);
        assert!(matches!(
            config.smtp.transport,
            SmtpTransport::Local { ref host, port: 1025 } if host == "localhost"
        ));
    }

    #[test]
    fn production_requires_relay_credentials() {
        let mut env = base_env();
        env.insert("RUST_ENV", "production");

        let err = load(&env).unwrap_err();
        assert!(matches!(err, ConfigError::Missing("SMTP_SERVER")));

        env.insert("SMTP_SERVER", "smtp.example.com");
        env.insert("SMTP_USERNAME", "mailer");
        env.insert("SMTP_PASSWORD", "secret");

        let config = load(&env).unwrap();
        assert!(matches!(config.smtp.transport, SmtpTransport::Relay { .. }));
    }

    #[test]
    fn missing_database_url_is_reported() {
        let mut env = base_env();
        env.remove("DATABASE_URL");

        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Missing("DATABASE_URL")
        ));
    }

    #[test]
    fn invalid_port_and_hasher_are_rejected() {
        let mut env = base_env();
        env.insert("PORT", "eighty");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Invalid { key: "PORT", .. }
        ));

        let mut env = base_env();
        env.insert("PASSWORD_HASHER", "md5");
        assert!(matches!(
            load(&env).unwrap_err(),
            ConfigError::Invalid {
                key: "PASSWORD_HASHER",
                ..
            }
        ));
    }

    #[test]
    fn argon2_and_migrations_can_be_enabled() {
        let mut env = base_env();
        env.insert("PASSWORD_HASHER", "argon2");
        env.insert("RUN_MIGRATIONS", "true");

        let config = load(&env).unwrap();
        assert_eq!(config.password_hasher, HasherKind::Argon2);
        assert!(config.database.run_migrations);
    }
}
