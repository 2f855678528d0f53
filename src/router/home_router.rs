use axum::{Router, routing::get};
use crate::handler::home_handler::{home_handler, welcome_handler};

pub fn home_router() -> Router {
    Router::new()
        .route("/", get(welcome_handler))
        .route("/home", get(home_handler))
}
