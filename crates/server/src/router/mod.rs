//! # API Router Configuration
//!
//! Three route groups under `/api`: public endpoints, user endpoints behind
//! the user guard, and admin endpoints behind the admin guard.

use axum::{
    extract::{Extension, Path, Query, State as AxumState},
    middleware,
    routing::{delete, get, post, put},
    Json,
    Router,
};
use error::Result;
use serde::Serialize;

use crate::{
    dto,
    middleware::auth::{AdminPrincipal, UserPrincipal},
    AppState,
};

/// Creates the API router with all routes
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/api/health", get(health_handler))
        .route("/api/auth/setup", post(admin_setup_handler))
        .route("/api/auth/login", post(admin_login_handler))
        .route("/api/users/register", post(register_handler))
        .route("/api/users/login", post(user_login_handler))
        .route("/api/users/auth/google", post(google_auth_handler))
        .route("/api/entities", get(list_entities_handler))
        .route("/api/entities/:id", get(get_entity_handler))
        .route("/api/stats", get(stats_handler))
        .route("/api/announcements", get(list_announcements_handler))
        .route("/api/announcements/:id", get(get_announcement_handler));

    let user_routes = Router::new()
        .route("/api/users/me", get(me_handler).put(update_me_handler))
        .route("/api/entity-claims", post(submit_claim_handler))
        .route("/api/entity-claims/my-claims", get(my_claims_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::user_auth_middleware,
        ));

    let admin_routes = Router::new()
        .route("/api/auth/verify", get(admin_verify_handler))
        .route("/api/users", get(list_users_handler))
        .route("/api/users/:id/review", post(review_user_handler))
        .route("/api/entity-claims", get(list_claims_handler))
        .route("/api/entity-claims/:id/review", post(review_claim_handler))
        .route("/api/entities", post(create_entity_handler))
        .route("/api/entities/admin/stats", get(admin_stats_handler))
        .route(
            "/api/entities/:id",
            put(update_entity_handler).delete(delete_entity_handler),
        )
        .route("/api/announcements", post(create_announcement_handler))
        .route("/api/announcements/admin/stats", get(announcement_stats_handler))
        .route(
            "/api/announcements/:id",
            put(update_announcement_handler).delete(delete_announcement_handler),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            crate::middleware::auth::admin_auth_middleware,
        ));

    public_routes
        .merge(user_routes)
        .merge(admin_routes)
        .with_state(state)
}

/// Response body for the health endpoint
#[derive(Debug, Serialize)]
struct HealthResponse {
    success:        bool,
    message:        String,
    timestamp:      chrono::DateTime<chrono::Utc>,
    database:       String,
    uptime_seconds: u64,
}

/// Health check; reports database reachability without failing the request.
async fn health_handler(AxumState(state): AxumState<AppState>) -> Json<HealthResponse> {
    let database = match state.db.ping().await {
        Ok(()) => "connected".to_string(),
        Err(_) => "unreachable".to_string(),
    };

    Json(HealthResponse {
        success: true,
        message: "UP-NEXUS API is running".to_string(),
        timestamp: chrono::Utc::now(),
        database,
        uptime_seconds: state.start_time.elapsed().as_secs(),
    })
}

async fn admin_setup_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::auth::AdminSetupRequest>,
) -> Result<Json<dto::auth::AdminAuthResponse>> {
    crate::auth::handlers::setup_handler_inner(&state, req).await
}

async fn admin_login_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::auth::AdminLoginRequest>,
) -> Result<Json<dto::auth::AdminAuthResponse>> {
    crate::auth::handlers::login_handler_inner(&state, req).await
}

async fn admin_verify_handler(
    Extension(principal): Extension<AdminPrincipal>,
) -> Json<dto::auth::VerifyResponse> {
    crate::auth::handlers::verify_handler_inner(principal)
}

async fn register_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::users::RegisterRequest>,
) -> Result<Json<dto::users::UserAuthResponse>> {
    crate::users::handlers::register_handler_inner(&state, req).await
}

async fn user_login_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::users::UserLoginRequest>,
) -> Result<Json<dto::users::UserAuthResponse>> {
    crate::users::handlers::login_handler_inner(&state, req).await
}

async fn google_auth_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::users::GoogleAuthRequest>,
) -> Result<Json<dto::users::UserAuthResponse>> {
    crate::users::handlers::google_auth_handler_inner(&state, req).await
}

async fn me_handler(
    AxumState(state): AxumState<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Result<Json<dto::users::MeResponse>> {
    crate::users::handlers::me_handler_inner(&state, principal).await
}

async fn update_me_handler(
    AxumState(state): AxumState<AppState>,
    Extension(principal): Extension<UserPrincipal>,
    Json(req): Json<dto::users::UpdateProfileRequest>,
) -> Result<Json<dto::users::UserResponse>> {
    crate::users::handlers::update_me_handler_inner(&state, principal, req).await
}

async fn list_users_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<dto::users::UserListQuery>,
) -> Result<Json<dto::users::UserListResponse>> {
    crate::users::handlers::list_users_handler_inner(&state, query).await
}

async fn review_user_handler(
    AxumState(state): AxumState<AppState>,
    Extension(principal): Extension<AdminPrincipal>,
    Path(user_id): Path<String>,
    Json(req): Json<dto::users::ReviewUserRequest>,
) -> Result<Json<dto::users::UserResponse>> {
    crate::users::handlers::review_user_handler_inner(&state, principal, user_id, req).await
}

async fn submit_claim_handler(
    AxumState(state): AxumState<AppState>,
    Extension(principal): Extension<UserPrincipal>,
    Json(req): Json<dto::claims::SubmitClaimRequest>,
) -> Result<Json<dto::claims::ClaimSubmitResponse>> {
    crate::claims::handlers::submit_claim_handler_inner(&state, principal, req).await
}

async fn my_claims_handler(
    AxumState(state): AxumState<AppState>,
    Extension(principal): Extension<UserPrincipal>,
) -> Result<Json<dto::claims::ClaimListResponse>> {
    crate::claims::handlers::my_claims_handler_inner(&state, principal).await
}

async fn list_claims_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<dto::claims::ClaimListQuery>,
) -> Result<Json<dto::claims::ClaimListResponse>> {
    crate::claims::handlers::list_claims_handler_inner(&state, query).await
}

async fn review_claim_handler(
    AxumState(state): AxumState<AppState>,
    Extension(principal): Extension<AdminPrincipal>,
    Path(claim_id): Path<String>,
    Json(req): Json<dto::claims::ReviewClaimRequest>,
) -> Result<Json<dto::claims::ClaimSubmitResponse>> {
    crate::claims::handlers::review_claim_handler_inner(&state, principal, claim_id, req).await
}

async fn list_entities_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<dto::entities::EntityListQuery>,
) -> Result<Json<dto::entities::EntityListResponse>> {
    crate::entities::list_entities_handler_inner(&state, query).await
}

async fn get_entity_handler(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<dto::entities::EntityResponse>> {
    crate::entities::get_entity_handler_inner(&state, id).await
}

async fn create_entity_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::entities::EntityUpsertRequest>,
) -> Result<Json<dto::entities::EntityResponse>> {
    crate::entities::create_entity_handler_inner(&state, req).await
}

async fn update_entity_handler(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<dto::entities::EntityUpsertRequest>,
) -> Result<Json<dto::entities::EntityResponse>> {
    crate::entities::update_entity_handler_inner(&state, id, req).await
}

async fn delete_entity_handler(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<dto::SuccessResponse>> {
    crate::entities::delete_entity_handler_inner(&state, id).await
}

async fn stats_handler(AxumState(state): AxumState<AppState>) -> Result<Json<dto::entities::StatsResponse>> {
    crate::entities::stats_handler_inner(&state).await
}

async fn admin_stats_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<dto::entities::AdminStatsResponse>> {
    crate::entities::admin_stats_handler_inner(&state).await
}

async fn list_announcements_handler(
    AxumState(state): AxumState<AppState>,
    Query(query): Query<dto::announcements::AnnouncementListQuery>,
) -> Result<Json<dto::announcements::AnnouncementListResponse>> {
    crate::announcements::list_announcements_handler_inner(&state, query).await
}

async fn get_announcement_handler(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<dto::announcements::AnnouncementResponse>> {
    crate::announcements::get_announcement_handler_inner(&state, id).await
}

async fn create_announcement_handler(
    AxumState(state): AxumState<AppState>,
    Json(req): Json<dto::announcements::AnnouncementUpsertRequest>,
) -> Result<Json<dto::announcements::AnnouncementResponse>> {
    crate::announcements::create_announcement_handler_inner(&state, req).await
}

async fn update_announcement_handler(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
    Json(req): Json<dto::announcements::AnnouncementUpsertRequest>,
) -> Result<Json<dto::announcements::AnnouncementResponse>> {
    crate::announcements::update_announcement_handler_inner(&state, id, req).await
}

async fn delete_announcement_handler(
    AxumState(state): AxumState<AppState>,
    Path(id): Path<String>,
) -> Result<Json<dto::SuccessResponse>> {
    crate::announcements::delete_announcement_handler_inner(&state, id).await
}

async fn announcement_stats_handler(
    AxumState(state): AxumState<AppState>,
) -> Result<Json<dto::announcements::AnnouncementStatsResponse>> {
    crate::announcements::announcement_stats_handler_inner(&state).await
}
