use crate::model::user::User;
use crate::repository::database::Database;
use crate::repository::repository_error::{RepositoryResult, RepositoryError};
use async_trait::async_trait;
use sqlx::SqlitePool;

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_all(&self) -> RepositoryResult<Vec<User>>;
    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>>;
    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>>;
    async fn find_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>>;
    async fn insert(&self, user: User) -> RepositoryResult<User>;
    async fn update(&self, id: i64, user: User) -> RepositoryResult<User>;
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}

pub struct UserRepositoryImpl {
    pool: SqlitePool,
}

impl UserRepositoryImpl {
    pub fn new(database: &Database) -> Self {
        UserRepositoryImpl { pool: database.pool().clone() }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    async fn find_all(&self) -> RepositoryResult<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, role FROM users ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to list users: {}", e)))?;
        Ok(users)
    }

    async fn find_by_id(&self, id: i64) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, role FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to find user by id: {}", e)))?;
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> RepositoryResult<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, role FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to find user by email: {}", e)))?;
        Ok(user)
    }

    async fn find_by_credentials(&self, email: &str, password: &str) -> RepositoryResult<Option<User>> {
        // SQLite's `=` on TEXT is binary, so both comparisons are case-sensitive.
        let user = sqlx::query_as::<_, User>(
            "SELECT id, first_name, last_name, email, password, role FROM users WHERE email = ? AND password = ?",
        )
        .bind(email)
        .bind(password)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| RepositoryError::database(format!("Failed to find user by credentials: {}", e)))?;
        Ok(user)
    }

    async fn insert(&self, mut user: User) -> RepositoryResult<User> {
        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, email, password, role) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.role)
        .execute(&self.pool)
        .await?;
        user.id = Some(result.last_insert_rowid());
        Ok(user)
    }

    async fn update(&self, id: i64, mut user: User) -> RepositoryResult<User> {
        let result = sqlx::query(
            "UPDATE users SET first_name = ?, last_name = ?, email = ?, password = ?, role = ? WHERE id = ?",
        )
        .bind(&user.first_name)
        .bind(&user.last_name)
        .bind(&user.email)
        .bind(&user.password)
        .bind(&user.role)
        .bind(id)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(RepositoryError::not_found(format!("No user found to update for ID: {}", id)));
        }
        user.id = Some(id);
        Ok(user)
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::database(format!("Failed to delete user: {}", e)))?;
        Ok(result.rows_affected() > 0)
    }
}
