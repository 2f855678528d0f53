use serde::{Deserialize, Serialize};

use crate::model::user::User;

// --- Request bodies ---

/// Login credentials, accepted as JSON or as a urlencoded form.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Form body of `POST /create_user`.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUserForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Form body of `PUT /update_user`. Every field is required; nothing is
/// carried over from the stored record.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateUserForm {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl From<CreateUserForm> for User {
    fn from(form: CreateUserForm) -> Self {
        User {
            id: None,
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
            role: form.role,
        }
    }
}

impl From<UpdateUserForm> for User {
    fn from(form: UpdateUserForm) -> Self {
        User {
            id: Some(form.id),
            first_name: form.first_name,
            last_name: form.last_name,
            email: form.email,
            password: form.password,
            role: form.role,
        }
    }
}

// --- Response bodies ---

/// Wire shape of a user: `id, first_name, last_name, email, password, role`,
/// in that order. The password is part of the public shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponseDto {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl From<User> for UserResponseDto {
    fn from(user: User) -> Self {
        UserResponseDto {
            id: user.id.unwrap_or_default(),
            first_name: user.first_name,
            last_name: user.last_name,
            email: user.email,
            password: user.password,
            role: user.role,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        MessageResponse { message: message.into() }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreatedResponse {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub message: String,
    pub access_token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: Some(7),
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "engine".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_user_response_field_order() {
        let json = serde_json::to_string(&UserResponseDto::from(sample_user())).unwrap();
        assert_eq!(
            json,
            r#"{"id":7,"first_name":"Ada","last_name":"Lovelace","email":"ada@example.com","password":"engine","role":"admin"}"#
        );
    }

    #[test]
    fn test_update_form_into_user_keeps_id() {
        let form = UpdateUserForm {
            id: 3,
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            email: "a@b.com".to_string(),
            password: "p".to_string(),
            role: "user".to_string(),
        };
        let user = User::from(form);
        assert_eq!(user.id, Some(3));
        assert_eq!(user.role, "user");
    }
}
