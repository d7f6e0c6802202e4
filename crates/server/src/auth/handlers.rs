//! # Admin Authentication Handlers

use auth::{create_admin_token, hash_password, secrecy::SecretString, verify_password};
use axum::Json;
use chrono::Utc;
use entity::admins::{self, AdminRole, Entity as Admins};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::info;
use validator::Validate;

use crate::{
    dto::auth::{AdminAuthResponse, AdminInfo, AdminLoginRequest, AdminSetupRequest, VerifyResponse},
    middleware::auth::AdminPrincipal,
    AppState,
};

/// Inner handler for admin login.
///
/// The same 401 is returned for an unknown username and a wrong password.
pub async fn login_handler_inner(state: &AppState, req: AdminLoginRequest) -> Result<Json<AdminAuthResponse>> {
    req.validate()?;

    let admin = Admins::find()
        .filter(admins::Column::Username.eq(req.username.as_str()))
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    let password = SecretString::from(req.password);
    verify_password(&password, &admin.password_hash)
        .map_err(|_| AppError::unauthorized("Invalid credentials"))?;

    let token = create_admin_token(&state.jwt_config, &admin.id, &admin.username, admin.role.as_str())
        .map_err(|e| AppError::internal(format!("Token issuance failed: {e}")))?;

    let mut active: admins::ActiveModel = admin.clone().into();
    active.last_login_at = Set(Some(Utc::now()));
    active.update(state.db.conn()).await?;

    info!(admin_id = %admin.id, username = %admin.username, "Admin logged in");

    Ok(Json(AdminAuthResponse {
        success: true,
        token,
        admin: AdminInfo {
            id:       admin.id,
            username: admin.username,
            role:     admin.role.to_string(),
        },
    }))
}

/// Inner handler for one-time admin setup.
///
/// Fails with 400 once any admin exists; the bootstrap admin is a superadmin.
pub async fn setup_handler_inner(state: &AppState, req: AdminSetupRequest) -> Result<Json<AdminAuthResponse>> {
    req.validate()?;

    let existing = Admins::find().count(state.db.conn()).await?;
    if existing > 0 {
        return Err(AppError::conflict("Admin account already exists. Use /login instead."));
    }

    let password = SecretString::from(req.password);
    let password_hash = hash_password(&password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let admin = admins::ActiveModel {
        id:            Set(cuid2::cuid()),
        username:      Set(req.username),
        email:         Set(req.email.to_lowercase()),
        password_hash: Set(password_hash),
        role:          Set(AdminRole::Superadmin),
        last_login_at: Set(None),
        created_at:    Set(Utc::now()),
    }
    .insert(state.db.conn())
    .await?;

    let token = create_admin_token(&state.jwt_config, &admin.id, &admin.username, admin.role.as_str())
        .map_err(|e| AppError::internal(format!("Token issuance failed: {e}")))?;

    info!(admin_id = %admin.id, "Bootstrap admin created");

    Ok(Json(AdminAuthResponse {
        success: true,
        token,
        admin: AdminInfo {
            id:       admin.id,
            username: admin.username,
            role:     admin.role.to_string(),
        },
    }))
}

/// Inner handler for token verification; echoes the guard's principal.
pub fn verify_handler_inner(principal: AdminPrincipal) -> Json<VerifyResponse> {
    Json(VerifyResponse {
        success: true,
        admin:   AdminInfo {
            id:       principal.id,
            username: principal.username,
            role:     principal.role,
        },
    })
}
