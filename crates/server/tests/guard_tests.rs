//! Request-guard tests over the real router.

mod common;

use auth::{create_admin_token, create_user_token, Claims};
use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
};
use common::{seed_user, test_state};
use entity::users::{UserStatus, UserType};
use tower::ServiceExt;

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn missing_and_garbage_tokens_get_the_same_401() {
    let state = test_state().await;
    let app = server::create_router(state);

    let missing = app.clone().oneshot(get("/api/users", None)).await.unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    let missing_body = body_json(missing).await;

    let garbage = app
        .oneshot(get("/api/users", Some("not-a-jwt")))
        .await
        .unwrap();
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    let garbage_body = body_json(garbage).await;

    // A caller cannot tell the failure modes apart.
    assert_eq!(missing_body, garbage_body);
    assert_eq!(missing_body["success"], false);
    assert_eq!(missing_body["message"], "Invalid or expired token");
}

#[tokio::test]
async fn user_token_is_rejected_on_admin_routes() {
    let state = test_state().await;
    let token = create_user_token(&state.jwt_config, "usr_1", "u@example.com", "browser", "active").unwrap();
    let app = server::create_router(state);

    let response = app.oneshot(get("/api/users", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_token_is_rejected_on_user_routes_with_a_distinct_message() {
    let state = test_state().await;
    let token = create_admin_token(&state.jwt_config, "adm_1", "oussama", "superadmin").unwrap();
    let app = server::create_router(state);

    let response = app.oneshot(get("/api/users/me", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["message"], "User token required");
}

#[tokio::test]
async fn valid_admin_token_passes_the_guard() {
    let state = test_state().await;
    let token = create_admin_token(&state.jwt_config, "adm_1", "oussama", "superadmin").unwrap();
    let app = server::create_router(state);

    let response = app.oneshot(get("/api/auth/verify", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["admin"]["username"], "oussama");
    assert_eq!(body["admin"]["role"], "superadmin");
}

#[tokio::test]
async fn valid_user_token_reaches_the_profile() {
    let state = test_state().await;
    let user = seed_user(&state, "me@example.com", UserType::Browser, UserStatus::Active).await;
    let token = create_user_token(
        &state.jwt_config,
        &user.id,
        &user.email,
        user.user_type.as_str(),
        user.status.as_str(),
    )
    .unwrap();
    let app = server::create_router(state);

    let response = app.oneshot(get("/api/users/me", Some(&token))).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["user"]["email"], "me@example.com");
    assert!(body["user"].get("passwordHash").is_none());
}

#[tokio::test]
async fn well_signed_token_with_neither_principal_shape_is_rejected_by_both_guards() {
    let state = test_state().await;

    // Valid signature and expiry, but no admin fields and no user id.
    let now = std::time::SystemTime::now()
        .duration_since(std::time::SystemTime::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        sub: "ghost_1".to_string(),
        iat: now,
        exp: now + 3600,
        username: None,
        role: None,
        user_id: None,
        email: None,
        user_type: None,
        status: None,
    };
    let token = jsonwebtoken::encode(
        &jsonwebtoken::Header::default(),
        &claims,
        &jsonwebtoken::EncodingKey::from_secret(state.jwt_config.secret.as_bytes()),
    )
    .unwrap();
    let app = server::create_router(state);

    let admin_route = app.clone().oneshot(get("/api/users", Some(&token))).await.unwrap();
    assert_eq!(admin_route.status(), StatusCode::UNAUTHORIZED);

    let user_route = app.oneshot(get("/api/users/me", Some(&token))).await.unwrap();
    assert_eq!(user_route.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn health_is_public() {
    let state = test_state().await;
    let app = server::create_router(state);

    let response = app.oneshot(get("/api/health", None)).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["success"], true);
    assert_eq!(body["database"], "connected");
}
