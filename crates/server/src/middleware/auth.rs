//! # Authentication Middleware
//!
//! Two request guards, one per principal kind. Both verify the Bearer token
//! and insert a typed principal into the request extensions; handlers then
//! read the principal without touching the token again.
//!
//! Every verification failure produces the same 401 body, so a caller cannot
//! distinguish a missing header from a bad signature or an expired token.

use auth::{extract_bearer_token, verify_token};
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
};
use error::AppError;

use crate::AppState;

/// Admin principal extracted from a verified admin token
#[derive(Debug, Clone)]
pub struct AdminPrincipal {
    /// Admin document id
    pub id:       String,
    /// Admin username
    pub username: String,
    /// Admin role
    pub role:     String,
}

/// User principal extracted from a verified user token
#[derive(Debug, Clone)]
pub struct UserPrincipal {
    /// User document id
    pub id:        String,
    /// User email at issuance time
    pub email:     String,
    /// Declared intent at issuance time
    pub user_type: String,
    /// Account status at issuance time
    pub status:    String,
}

fn bearer_from(request: &Request) -> Option<String> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(extract_bearer_token)
}

fn unauthorized() -> Response { AppError::unauthorized("Invalid or expired token").into_response() }

/// Guard for admin-only routes.
///
/// Rejects missing, malformed, expired and user-shaped tokens alike with a
/// single 401 body.
pub async fn admin_auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let Some(token) = bearer_from(&request) else {
        return unauthorized();
    };

    let claims = match verify_token(&state.jwt_config, &token) {
        Ok(claims) => claims,
        Err(_) => return unauthorized(),
    };

    if !claims.is_admin_shaped() {
        return unauthorized();
    }

    // is_admin_shaped guarantees both fields.
    let (Some(username), Some(role)) = (claims.username, claims.role) else {
        return unauthorized();
    };

    request.extensions_mut().insert(AdminPrincipal {
        id: claims.sub,
        username,
        role,
    });

    next.run(request).await
}

/// Guard for user routes.
///
/// An admin token is not accepted here; the failure is still a 401 but names
/// the expected principal kind so admin clients notice the mix-up.
pub async fn user_auth_middleware(State(state): State<AppState>, mut request: Request, next: Next) -> Response {
    let Some(token) = bearer_from(&request) else {
        return unauthorized();
    };

    let claims = match verify_token(&state.jwt_config, &token) {
        Ok(claims) => claims,
        Err(_) => return unauthorized(),
    };

    if claims.is_admin_shaped() && !claims.is_user_shaped() {
        return AppError::unauthorized("User token required").into_response();
    }

    let Some(user_id) = claims.user_id else {
        return unauthorized();
    };

    request.extensions_mut().insert(UserPrincipal {
        id:        user_id,
        email:     claims.email.unwrap_or_default(),
        user_type: claims.user_type.unwrap_or_default(),
        status:    claims.status.unwrap_or_default(),
    });

    next.run(request).await
}
