/// Configuration management for Blog Service
///
/// Everything is read from environment variables; the binary loads a `.env`
/// file first when one is present.
use serde::{Deserialize, Serialize};

const DEV_JWT_SECRET: &str = "blog-service-development-secret-do-not-use";
const MIN_PRODUCTION_SECRET_LEN: usize = 32;

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Application settings
    pub app: AppConfig,
    /// CORS configuration
    pub cors: CorsConfig,
    /// Entity store backend
    pub store: StoreBackend,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Token validation settings
    pub auth: AuthConfig,
}

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application environment (development, staging, production)
    pub env: String,
    pub host: String,
    pub port: u16,
}

impl AppConfig {
    pub fn is_production(&self) -> bool {
        self.env.eq_ignore_ascii_case("production")
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Comma-separated list of allowed origins
    pub allowed_origins: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    Postgres,
    Memory,
}

impl std::str::FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StoreBackend::Postgres),
            "memory" => Ok(StoreBackend::Memory),
            other => Err(format!("Unknown BLOG_STORE '{}': expected postgres or memory", other)),
        }
    }
}

/// Database configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub acquire_timeout_secs: u64,
}

impl std::fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &"[REDACTED]")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("acquire_timeout_secs", &self.acquire_timeout_secs)
            .finish()
    }
}

#[derive(Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    pub jwt_secret: String,
    /// Allowed clock skew when checking `exp`
    pub leeway_secs: u64,
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"[REDACTED]")
            .field("leeway_secs", &self.leeway_secs)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, String> {
        let app_env = std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string());
        let production = app_env.eq_ignore_ascii_case("production");

        Ok(Config {
            app: AppConfig {
                env: app_env.clone(),
                host: std::env::var("BLOG_SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                port: parse_env_or_default("BLOG_SERVICE_PORT", 8085)?,
            },
            cors: {
                let allowed_origins = match std::env::var("CORS_ALLOWED_ORIGINS") {
                    Ok(value) => value,
                    Err(_) if production => {
                        return Err("CORS_ALLOWED_ORIGINS must be set in production".to_string())
                    }
                    Err(_) => "http://localhost:3000".to_string(),
                };

                if production && allowed_origins.trim() == "*" {
                    return Err("CORS_ALLOWED_ORIGINS cannot be '*' in production".to_string());
                }

                CorsConfig { allowed_origins }
            },
            store: match std::env::var("BLOG_STORE") {
                Ok(value) => value.parse()?,
                Err(_) => StoreBackend::Postgres,
            },
            database: DatabaseConfig {
                url: std::env::var("DATABASE_URL")
                    .unwrap_or_else(|_| "postgres://localhost/blog".to_string()),
                max_connections: parse_env_or_default("DATABASE_MAX_CONNECTIONS", 10)?,
                min_connections: parse_env_or_default("DATABASE_MIN_CONNECTIONS", 2)?,
                acquire_timeout_secs: parse_env_or_default("DATABASE_ACQUIRE_TIMEOUT_SECS", 10)?,
            },
            auth: {
                let jwt_secret = match std::env::var("JWT_SECRET") {
                    Ok(secret) => secret,
                    Err(_) if production => {
                        return Err("JWT_SECRET must be set in production".to_string())
                    }
                    Err(_) => DEV_JWT_SECRET.to_string(),
                };

                if production && jwt_secret.len() < MIN_PRODUCTION_SECRET_LEN {
                    return Err(format!(
                        "JWT_SECRET must be at least {} bytes in production",
                        MIN_PRODUCTION_SECRET_LEN
                    ));
                }

                AuthConfig {
                    jwt_secret,
                    leeway_secs: parse_env_or_default("JWT_LEEWAY_SECS", 30)?,
                }
            },
        })
    }
}

fn parse_env_or_default<T>(key: &str, default: T) -> Result<T, String>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse()
            .map_err(|e| format!("Failed to parse {}='{}': {}", key, val, e)),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "APP_ENV",
        "BLOG_SERVICE_HOST",
        "BLOG_SERVICE_PORT",
        "CORS_ALLOWED_ORIGINS",
        "BLOG_STORE",
        "DATABASE_URL",
        "DATABASE_MAX_CONNECTIONS",
        "JWT_SECRET",
        "JWT_LEEWAY_SECS",
    ];

    fn clear_env() {
        for var in VARS {
            std::env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_default_values() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.app.env, "development");
        assert_eq!(config.app.host, "0.0.0.0");
        assert_eq!(config.app.port, 8085);
        assert_eq!(config.store, StoreBackend::Postgres);
        assert_eq!(config.database.max_connections, 10);
        assert_eq!(config.auth.jwt_secret, DEV_JWT_SECRET);
        assert_eq!(config.auth.leeway_secs, 30);
    }

    #[test]
    #[serial]
    fn test_memory_store_selection() {
        clear_env();
        std::env::set_var("BLOG_STORE", "Memory");

        let config = Config::from_env().unwrap();
        assert_eq!(config.store, StoreBackend::Memory);

        std::env::set_var("BLOG_STORE", "sqlite");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_production_requires_secrets() {
        clear_env();
        std::env::set_var("APP_ENV", "production");
        std::env::set_var("CORS_ALLOWED_ORIGINS", "https://blog.example.com");

        assert!(Config::from_env().is_err());

        std::env::set_var("JWT_SECRET", "short");
        assert!(Config::from_env().is_err());

        std::env::set_var("JWT_SECRET", "x".repeat(MIN_PRODUCTION_SECRET_LEN));
        assert!(Config::from_env().is_ok());

        std::env::set_var("CORS_ALLOWED_ORIGINS", "*");
        assert!(Config::from_env().is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_an_error() {
        clear_env();
        std::env::set_var("BLOG_SERVICE_PORT", "not-a-port");

        let err = Config::from_env().unwrap_err();
        assert!(err.contains("BLOG_SERVICE_PORT"));
        clear_env();
    }
}
