pub mod repository_error;
pub mod database;
pub mod user_repo;
pub mod customer_repo;
