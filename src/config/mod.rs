pub mod jwt_conf;
pub mod database_conf;
pub mod admin_user_conf;
pub mod app_conf;


pub use jwt_conf::JwtConfig;
pub use database_conf::DatabaseConfig;
pub use admin_user_conf::AdminUserConfig;
pub use app_conf::AppConfig;

/// Common configuration error type
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Environment variable not found: {0}")]
    EnvVarNotFound(String),
    
    #[error("Invalid configuration value: {0}")]
    InvalidValue(String),
    
    #[error("Validation error: {0}")]
    ValidationError(String),
}
