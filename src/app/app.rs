use axum::Router;
use std::sync::Arc;
use tracing::{info, warn, error};
use crate::config::{AdminUserConfig, AppConfig, ConfigError, DatabaseConfig, JwtConfig};
use crate::middlewares::auth_middleware::AuthState;
use crate::model::user::User;
use crate::repository::database::Database;
use crate::repository::repository_error::RepositoryError;
use crate::repository::user_repo::{UserRepository, UserRepositoryImpl};
use crate::router::home_router::home_router;
use crate::router::user_router::user_router;
use crate::service::user_service::UserServiceImpl;
use crate::util::jwt::JwtTokenUtilsImpl;

/// Errors that abort startup.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

pub struct App {
    config: AppConfig,
    router: Router,
    pub database: Database,
    pub user_service: Arc<UserServiceImpl>,
}

impl App {
    /// Wire the application from environment configuration and make sure the schema exists.
    pub async fn new() -> Result<Self, AppError> {
        let config = AppConfig::from_env();
        let jwt_config = JwtConfig::from_env()?;
        let database_config = DatabaseConfig::from_env()?;

        let database = Database::connect(&database_config).await?;
        database.create_all().await?;

        let app = Self::from_parts(config, database, jwt_config);
        app.create_first_admin_user().await;
        Ok(app)
    }

    /// Build the application around an already connected database.
    pub fn from_parts(config: AppConfig, database: Database, jwt_config: JwtConfig) -> Self {
        let user_repo = Arc::new(UserRepositoryImpl::new(&database));
        let jwt_utils = Arc::new(JwtTokenUtilsImpl::new(jwt_config));
        let user_service = Arc::new(UserServiceImpl::new(user_repo, jwt_utils.clone()));
        let auth_state = Arc::new(AuthState { jwt_utils });

        let router = create_router(user_service.clone(), auth_state);
        App { config, router, database, user_service }
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub async fn start(self) -> Result<(), AppError> {
        let addr = self.config.socket_addr()?;
        info!("🚀 Server running at http://{}", addr);
        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;
        Ok(())
    }

    /// Seed an admin from `ADMIN_*` variables when that email is not registered yet.
    pub async fn create_first_admin_user(&self) {
        let admin_conf = match AdminUserConfig::from_env() {
            Ok(c) => c,
            Err(e) => {
                warn!("Admin user config not loaded: {e}");
                return;
            }
        };

        let user_repo = self.user_service.user_repo.clone();
        match user_repo.find_by_email(&admin_conf.email).await {
            Ok(Some(_)) => {
                info!("Admin user already exists, skipping creation.");
                return;
            }
            Ok(None) => {}
            Err(e) => {
                error!("Failed to check for existing admin user: {e}");
                return;
            }
        }

        let user = User {
            id: None,
            first_name: admin_conf.first_name,
            last_name: admin_conf.last_name,
            email: admin_conf.email,
            password: admin_conf.password,
            role: "admin".to_string(),
        };
        match user_repo.insert(user).await {
            Ok(_) => info!("First admin user created."),
            Err(e) => error!("Failed to create admin user: {e}"),
        }
    }
}

pub fn create_router(user_service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    Router::new()
        .merge(home_router())
        .merge(user_router(user_service, auth_state))
}
