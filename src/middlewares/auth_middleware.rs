use axum::{http::{header, Request}, middleware::Next, response::Response, extract::State, body::Body};
use std::sync::Arc;
use tracing::{debug, warn};
use crate::util::error::HandlerError;
use crate::util::jwt::{JwtError, JwtTokenUtilsImpl, JwtTokenUtils};

pub struct AuthState {
    pub jwt_utils: Arc<JwtTokenUtilsImpl>,
}

/// Rejects the request with 401 unless it carries a valid bearer token.
///
/// Any valid token passes: the identity inside it is attached to the request
/// extensions but is not checked against the target resource or the store.
pub async fn jwt_required(
    State(state): State<Arc<AuthState>>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, HandlerError> {
    let auth_header = req.headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            warn!("Request without Authorization header");
            HandlerError::unauthorized("Missing Authorization Header")
        })?;

    let token = state.jwt_utils.extract_token_from_header(auth_header)
        .map_err(|_| HandlerError::unauthorized("Missing Authorization Header"))?;

    let claims = state.jwt_utils.validate_access_token(&token).map_err(|e| match e {
        JwtError::TokenExpired => HandlerError::unauthorized("Token has expired"),
        other => {
            warn!("Rejected bearer token: {other}");
            HandlerError::unauthorized("Invalid token")
        }
    })?;

    debug!("Authorized request for {}", claims.sub);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
