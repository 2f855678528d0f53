use axum::{Router, routing::{delete, get, post, put}, middleware};
use crate::handler::user_handler::{
    login_handler,
    list_users_handler,
    get_user_handler,
    create_user_handler,
    update_user_handler,
    delete_user_handler,
};
use std::sync::Arc;
use crate::service::user_service::UserServiceImpl;
use crate::middlewares::auth_middleware::{jwt_required, AuthState};

pub fn user_router(service: Arc<UserServiceImpl>, auth_state: Arc<AuthState>) -> Router {
    // Public routes
    let public = Router::new()
        .route("/find_users", get(list_users_handler))
        .route("/findUserById/{id}", get(get_user_handler))
        .route("/login", post(login_handler));

    // Token-protected routes; the guard runs before any body is read
    let protected = Router::new()
        .route("/create_user", post(create_user_handler))
        .route("/update_user", put(update_user_handler))
        .route("/delete_user/{id}", delete(delete_user_handler))
        .route_layer(middleware::from_fn_with_state(auth_state, jwt_required));

    public
        .merge(protected)
        .with_state(service)
}
