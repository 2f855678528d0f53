use tracing::{info, error, warn, instrument};
use crate::repository::user_repo::{UserRepository, UserRepositoryImpl};
use crate::repository::repository_error::RepositoryError;
use crate::util::jwt::{JwtTokenUtils, JwtTokenUtilsImpl};
use std::sync::Arc;

use crate::model::user::User;
use crate::util::error::ServiceError;
use async_trait::async_trait;

#[async_trait]
pub trait UserService: Send + Sync {
    /// Token for `email` if a stored user has exactly this email and password.
    async fn login(&self, email: String, password: String) -> Result<String, ServiceError>;
    async fn list_users(&self) -> Result<Vec<User>, ServiceError>;
    async fn get_user(&self, id: i64) -> Result<User, ServiceError>;
    async fn create_user(&self, user: User) -> Result<User, ServiceError>;
    /// Overwrites every field of the user with `id`.
    async fn update_user(&self, id: i64, user: User) -> Result<User, ServiceError>;
    async fn delete_user(&self, id: i64) -> Result<(), ServiceError>;
}


pub struct UserServiceImpl {
    pub user_repo: Arc<UserRepositoryImpl>,
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

impl UserServiceImpl {
    pub fn new(
        user_repo: Arc<UserRepositoryImpl>,
        jwt_utils: Arc<JwtTokenUtilsImpl>,
    ) -> Self {
        Self { user_repo, jwt_utils }
    }
}

#[async_trait]
impl UserService for UserServiceImpl {
    #[instrument(skip(self, password), fields(email = %email))]
    async fn login(&self, email: String, password: String) -> Result<String, ServiceError> {
        info!("User login attempt");
        let user = self.user_repo.find_by_credentials(&email, &password).await;
        match &user {
            Ok(Some(_)) => info!("Credentials matched"),
            Ok(None) => warn!("Credentials did not match any user"),
            Err(e) => error!("Failed to look up credentials: {e}"),
        }
        if user?.is_none() {
            return Err(ServiceError::Unauthorized("Bad email or password".to_string()));
        }
        let token = self.jwt_utils.generate_access_token(&email)
            .map_err(|e| ServiceError::InternalError(format!("JWT error: {}", e)))?;
        info!("User logged in successfully");
        Ok(token)
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Result<Vec<User>, ServiceError> {
        let users = self.user_repo.find_all().await?;
        info!("Listed {} users", users.len());
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: i64) -> Result<User, ServiceError> {
        self.user_repo.find_by_id(id).await?
            .ok_or_else(|| ServiceError::NotFound(format!("User {} not found", id)))
    }

    #[instrument(skip(self, user), fields(email = %user.email))]
    async fn create_user(&self, user: User) -> Result<User, ServiceError> {
        info!("Creating user");
        if self.user_repo.find_by_email(&user.email).await?.is_some() {
            warn!("Email already registered");
            return Err(ServiceError::Conflict(format!("Email {} already registered", user.email)));
        }
        // A concurrent create can slip past the check above; the unique index
        // turns that into AlreadyExists, which maps to Conflict as well.
        let inserted = self.user_repo.insert(user).await;
        match &inserted {
            Ok(u) => info!("User inserted with id {:?}", u.id),
            Err(e) => error!("Failed to insert user: {e}"),
        }
        Ok(inserted?)
    }

    #[instrument(skip(self, user))]
    async fn update_user(&self, id: i64, user: User) -> Result<User, ServiceError> {
        info!("Updating user");
        if self.user_repo.find_by_id(id).await?.is_none() {
            warn!("User to update does not exist");
            return Err(ServiceError::NotFound(format!("User {} not found", id)));
        }
        match self.user_repo.update(id, user).await {
            Ok(updated) => {
                info!("User updated");
                Ok(updated)
            }
            Err(RepositoryError::AlreadyExists(msg)) => {
                warn!("Update collides with another user's email");
                Err(ServiceError::Conflict(msg))
            }
            Err(e) => {
                error!("Failed to update user: {e}");
                Err(e.into())
            }
        }
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, id: i64) -> Result<(), ServiceError> {
        if !self.user_repo.delete(id).await? {
            warn!("User to delete does not exist");
            return Err(ServiceError::NotFound(format!("User {} not found", id)));
        }
        info!("User deleted");
        Ok(())
    }
}
