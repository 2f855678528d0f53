use axum::{extract::State, response::IntoResponse, Json, http::StatusCode};
use crate::service::user_service::{UserServiceImpl, UserService};
use crate::dto::user_dto::{
    CreateUserForm, LoginRequest, LoginResponse, MessageResponse, UpdateUserForm,
    UserCreatedResponse, UserResponseDto,
};
use crate::handler::extract::{FormBody, JsonOrForm, PathParam};
use crate::model::user::User;
use std::sync::Arc;
use crate::util::error::{HandlerError, HandlerErrorKind, ServiceError};
use tracing::error;

const BAD_CREDENTIALS: &str = "Bad email or password!";
const USER_NOT_FOUND: &str = "That user doesn't exist!";
const USER_ALREADY_EXISTS: &str = "That user already exist!";
const TARGET_USER_NOT_FOUND: &str = "The user doesn't exist!";

/// Anything the endpoint does not map explicitly is logged and becomes a 500.
fn unexpected(e: ServiceError) -> HandlerError {
    error!("Unexpected service error: {e}");
    HandlerError::internal()
}


// Login
pub async fn login_handler(
    State(service): State<Arc<UserServiceImpl>>,
    JsonOrForm(payload): JsonOrForm<LoginRequest>,
) -> Result<impl IntoResponse, HandlerError> {
    let access_token = service.login(payload.email, payload.password).await.map_err(|e| match e {
        ServiceError::Unauthorized(_) => HandlerError::unauthorized(BAD_CREDENTIALS),
        other => unexpected(other),
    })?;
    Ok(Json(LoginResponse {
        message: "You logged in successfully!".to_string(),
        access_token,
    }))
}


// List
pub async fn list_users_handler(
    State(service): State<Arc<UserServiceImpl>>,
) -> Result<impl IntoResponse, HandlerError> {
    let users = service.list_users().await.map_err(unexpected)?;
    let body: Vec<UserResponseDto> = users.into_iter().map(UserResponseDto::from).collect();
    Ok(Json(body))
}


// Get by id
pub async fn get_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, HandlerError> {
    let user = service.get_user(id).await.map_err(|e| match e {
        ServiceError::NotFound(_) => HandlerError::new(HandlerErrorKind::NotFound, USER_NOT_FOUND),
        other => unexpected(other),
    })?;
    Ok(Json(UserResponseDto::from(user)))
}


// Create
pub async fn create_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    FormBody(form): FormBody<CreateUserForm>,
) -> Result<impl IntoResponse, HandlerError> {
    let created = service.create_user(User::from(form)).await.map_err(|e| match e {
        ServiceError::Conflict(_) => HandlerError::new(HandlerErrorKind::Conflict, USER_ALREADY_EXISTS),
        other => unexpected(other),
    })?;
    Ok((
        StatusCode::CREATED,
        Json(UserCreatedResponse {
            message: "User created successfully!".to_string(),
            id: created.id.unwrap_or_default(),
        }),
    ))
}


// Update
pub async fn update_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    FormBody(form): FormBody<UpdateUserForm>,
) -> Result<impl IntoResponse, HandlerError> {
    let id = form.id;
    service.update_user(id, User::from(form)).await.map_err(|e| match e {
        // Clients rely on 401 here even though the condition is "not found".
        ServiceError::NotFound(_) => HandlerError::new(HandlerErrorKind::Unauthorized, TARGET_USER_NOT_FOUND),
        ServiceError::Conflict(_) => HandlerError::new(HandlerErrorKind::Conflict, USER_ALREADY_EXISTS),
        other => unexpected(other),
    })?;
    Ok((StatusCode::ACCEPTED, Json(MessageResponse::new("The user updated successfully!"))))
}


// Delete
pub async fn delete_user_handler(
    State(service): State<Arc<UserServiceImpl>>,
    PathParam(id): PathParam<i64>,
) -> Result<impl IntoResponse, HandlerError> {
    service.delete_user(id).await.map_err(|e| match e {
        ServiceError::NotFound(_) => HandlerError::new(HandlerErrorKind::NotFound, TARGET_USER_NOT_FOUND),
        other => unexpected(other),
    })?;
    Ok((StatusCode::ACCEPTED, Json(MessageResponse::new("The user has been deleted!"))))
}
