use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Row of the `users` table.
///
/// `password` is kept as the plaintext the client submitted; login compares
/// it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String, // free text, e.g. "admin"
}
