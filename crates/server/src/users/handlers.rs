//! # User Account Handlers

use auth::{create_user_token, hash_password, secrecy::SecretString, verify_password};
use axum::Json;
use chrono::Utc;
use entity::users::{self, AuthProvider, PublicRole, UserStatus, UserType};
use entity::{entity_claims, EntityClaims, Users};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait};
use tracing::info;
use validator::Validate;

use crate::{
    claims::handlers::create_claim_for_user,
    dto::users::{
        GoogleAuthRequest,
        MeResponse,
        RegisterRequest,
        ReviewUserRequest,
        UpdateProfileRequest,
        UserAuthResponse,
        UserListQuery,
        UserListResponse,
        UserLoginRequest,
        UserResponse,
    },
    middleware::auth::{AdminPrincipal, UserPrincipal},
    users::lifecycle::{apply_review_action, ReviewAction},
    AppState,
};

fn issue_token(state: &AppState, user: &users::Model) -> Result<String> {
    create_user_token(
        &state.jwt_config,
        &user.id,
        &user.email,
        user.user_type.as_str(),
        user.status.as_str(),
    )
    .map_err(|e| AppError::internal(format!("Token issuance failed: {e}")))
}

/// Inner handler for user registration.
///
/// A browser account is active immediately; entity representatives and public
/// individuals start in pending_review. An inline entity claim may ride along
/// with the registration and is created in the same transaction.
pub async fn register_handler_inner(state: &AppState, req: RegisterRequest) -> Result<Json<UserAuthResponse>> {
    req.validate()?;

    let user_type = UserType::parse(&req.user_type)
        .ok_or_else(|| AppError::validation(format!("Unknown user type '{}'", req.user_type)))?;

    let public_role = match req.public_role.as_deref() {
        Some(value) => PublicRole::parse(value)
            .ok_or_else(|| AppError::validation(format!("Unknown public role '{value}'")))?,
        None => PublicRole::None,
    };

    let email = req.email.to_lowercase();
    let existing = Users::find()
        .filter(users::Column::Email.eq(email.as_str()))
        .one(state.db.conn())
        .await?;
    if existing.is_some() {
        return Err(AppError::conflict("An account with this email already exists"));
    }

    let password = SecretString::from(req.password);
    let password_hash = hash_password(&password)
        .map_err(|e| AppError::internal(format!("Password hashing failed: {e}")))?;

    let now = Utc::now();
    let txn = state.db.conn().begin().await?;

    let user = users::ActiveModel {
        id:                            Set(cuid2::cuid()),
        email:                         Set(email),
        password_hash:                 Set(Some(password_hash)),
        first_name:                    Set(Some(req.first_name)),
        last_name:                     Set(Some(req.last_name)),
        phone:                         Set(req.phone),
        profile_picture:               Set(None),
        auth_provider:                 Set(AuthProvider::Email),
        google_id:                     Set(None),
        linkedin_id:                   Set(None),
        user_type:                     Set(user_type),
        public_role:                   Set(public_role),
        status:                        Set(UserStatus::initial_for(user_type)),
        status_reason:                 Set(None),
        email_verification_token:      Set(None),
        email_verification_expires_at: Set(None),
        password_reset_token:          Set(None),
        password_reset_expires_at:     Set(None),
        approved_at:                   Set(None),
        approved_by:                   Set(None),
        last_login_at:                 Set(Some(now)),
        created_at:                    Set(now),
        updated_at:                    Set(now),
    }
    .insert(&txn)
    .await?;

    let user = match req.entity_claim {
        Some(claim_req) => {
            let (_claim, user) = create_claim_for_user(&txn, &user, claim_req).await?;
            user
        },
        None => user,
    };

    txn.commit().await?;

    info!(user_id = %user.id, user_type = %user.user_type, status = %user.status, "User registered");

    let token = issue_token(state, &user)?;
    Ok(Json(UserAuthResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// Inner handler for user login with email and password.
///
/// OAuth-registered accounts have no password; they get a distinct 400 that
/// names the provider to use instead of a generic credential failure.
pub async fn login_handler_inner(state: &AppState, req: UserLoginRequest) -> Result<Json<UserAuthResponse>> {
    req.validate()?;

    let user = Users::find()
        .filter(users::Column::Email.eq(req.email.to_lowercase()))
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    if user.auth_provider != AuthProvider::Email {
        return Err(AppError::invalid_action(format!(
            "This account signs in with {}",
            user.auth_provider
        )));
    }

    let hash = user
        .password_hash
        .as_deref()
        .ok_or_else(|| AppError::unauthorized("Invalid credentials"))?;

    let password = SecretString::from(req.password);
    verify_password(&password, hash).map_err(|_| AppError::unauthorized("Invalid credentials"))?;

    let token = issue_token(state, &user)?;

    let mut active: users::ActiveModel = user.clone().into();
    active.last_login_at = Set(Some(Utc::now()));
    let user = active.update(state.db.conn()).await?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(UserAuthResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// Inner handler for Google sign-in.
///
/// Looks the account up by Google id or email so a previously email-registered
/// address is linked rather than duplicated; first-time sign-ins create a new
/// account with the declared (or default browser) intent.
pub async fn google_auth_handler_inner(state: &AppState, req: GoogleAuthRequest) -> Result<Json<UserAuthResponse>> {
    req.validate()?;

    let profile = state.google.verify(&req.credential).await?;
    let email = profile.email.to_lowercase();

    let existing = Users::find()
        .filter(
            users::Column::GoogleId
                .eq(profile.sub.as_str())
                .or(users::Column::Email.eq(email.as_str())),
        )
        .one(state.db.conn())
        .await?;

    let user = match existing {
        Some(user) => {
            let needs_link = user.google_id.is_none();
            let mut active: users::ActiveModel = user.into();
            if needs_link {
                active.google_id = Set(Some(profile.sub.clone()));
            }
            // Google is authoritative for the profile it verified.
            if profile.given_name.is_some() {
                active.first_name = Set(profile.given_name);
            }
            if profile.family_name.is_some() {
                active.last_name = Set(profile.family_name);
            }
            if profile.picture.is_some() {
                active.profile_picture = Set(profile.picture);
            }
            active.last_login_at = Set(Some(Utc::now()));
            active.update(state.db.conn()).await?
        },
        None => {
            let user_type = match req.user_type.as_deref() {
                Some(value) => UserType::parse(value)
                    .ok_or_else(|| AppError::validation(format!("Unknown user type '{value}'")))?,
                None => UserType::Browser,
            };
            let public_role = match req.public_role.as_deref() {
                Some(value) => PublicRole::parse(value)
                    .ok_or_else(|| AppError::validation(format!("Unknown public role '{value}'")))?,
                None => PublicRole::None,
            };

            let now = Utc::now();
            users::ActiveModel {
                id:                            Set(cuid2::cuid()),
                email:                         Set(email),
                password_hash:                 Set(None),
                first_name:                    Set(profile.given_name),
                last_name:                     Set(profile.family_name),
                phone:                         Set(None),
                profile_picture:               Set(profile.picture),
                auth_provider:                 Set(AuthProvider::Google),
                google_id:                     Set(Some(profile.sub)),
                linkedin_id:                   Set(None),
                user_type:                     Set(user_type),
                public_role:                   Set(public_role),
                status:                        Set(UserStatus::initial_for(user_type)),
                status_reason:                 Set(None),
                email_verification_token:      Set(None),
                email_verification_expires_at: Set(None),
                password_reset_token:          Set(None),
                password_reset_expires_at:     Set(None),
                approved_at:                   Set(None),
                approved_by:                   Set(None),
                last_login_at:                 Set(Some(now)),
                created_at:                    Set(now),
                updated_at:                    Set(now),
            }
            .insert(state.db.conn())
            .await?
        },
    };

    let user = match req.entity_claim {
        Some(claim_req) => {
            let txn = state.db.conn().begin().await?;
            let (_claim, user) = create_claim_for_user(&txn, &user, claim_req).await?;
            txn.commit().await?;
            user
        },
        None => user,
    };

    info!(user_id = %user.id, "Google sign-in");

    let token = issue_token(state, &user)?;
    Ok(Json(UserAuthResponse {
        success: true,
        token,
        user: user.into(),
    }))
}

/// Inner handler for the authenticated user's own profile, returned together
/// with the claims they have submitted.
pub async fn me_handler_inner(state: &AppState, principal: UserPrincipal) -> Result<Json<MeResponse>> {
    let user = Users::find_by_id(&principal.id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let claims = EntityClaims::find()
        .filter(entity_claims::Column::UserId.eq(user.id.as_str()))
        .order_by_desc(entity_claims::Column::CreatedAt)
        .all(state.db.conn())
        .await?;

    Ok(Json(MeResponse {
        success: true,
        user:    user.into(),
        claims:  claims.into_iter().map(Into::into).collect(),
    }))
}

/// Inner handler for profile updates.
///
/// Only the allow-listed profile fields are writable; email, status, type and
/// credential material never change through this endpoint.
pub async fn update_me_handler_inner(
    state: &AppState,
    principal: UserPrincipal,
    req: UpdateProfileRequest,
) -> Result<Json<UserResponse>> {
    req.validate()?;

    let user = Users::find_by_id(&principal.id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let mut active: users::ActiveModel = user.into();

    if let Some(first_name) = req.first_name {
        active.first_name = Set(Some(first_name));
    }
    if let Some(last_name) = req.last_name {
        active.last_name = Set(Some(last_name));
    }
    if let Some(phone) = req.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(picture) = req.profile_picture {
        active.profile_picture = Set(Some(picture));
    }
    if let Some(role) = req.public_role {
        let parsed = PublicRole::parse(&role)
            .ok_or_else(|| AppError::validation(format!("Unknown public role '{role}'")))?;
        active.public_role = Set(parsed);
    }

    active.updated_at = Set(Utc::now());
    let user = active.update(state.db.conn()).await?;

    Ok(Json(user.into()))
}

/// Inner handler for the admin user listing with optional status and type
/// filters.
pub async fn list_users_handler_inner(state: &AppState, query: UserListQuery) -> Result<Json<UserListResponse>> {
    let mut find = Users::find().order_by_desc(users::Column::CreatedAt);

    if let Some(status) = query.status.as_deref() {
        let parsed = UserStatus::parse(status)
            .ok_or_else(|| AppError::validation(format!("Unknown status filter '{status}'")))?;
        find = find.filter(users::Column::Status.eq(parsed));
    }

    if let Some(user_type) = query.user_type.as_deref() {
        let parsed = UserType::parse(user_type)
            .ok_or_else(|| AppError::validation(format!("Unknown user type filter '{user_type}'")))?;
        find = find.filter(users::Column::UserType.eq(parsed));
    }

    let users = find.all(state.db.conn()).await?;
    let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(UserListResponse {
        success: true,
        count: users.len(),
        users,
    }))
}

/// Inner handler for the admin account-review action.
pub async fn review_user_handler_inner(
    state: &AppState,
    principal: AdminPrincipal,
    user_id: String,
    req: ReviewUserRequest,
) -> Result<Json<UserResponse>> {
    let action = ReviewAction::parse(&req.action)?;

    let user = Users::find_by_id(&user_id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let updated = apply_review_action(state.db.conn(), user, action, req.reason, &principal.id).await?;

    Ok(Json(updated.into()))
}
