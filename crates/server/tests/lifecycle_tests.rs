//! Integration tests for registration and the account lifecycle.

mod common;

use common::{reload_user, seed_admin, seed_pending_claim, seed_user, test_state};
use entity::users::{UserStatus, UserType};
use error::AppError;
use server::{
    dto::users::{RegisterRequest, ReviewUserRequest, UserListQuery},
    middleware::auth::AdminPrincipal,
    users::handlers::{list_users_handler_inner, register_handler_inner, review_user_handler_inner},
    users::lifecycle::reconcile_pending_claims,
};

fn register_request(email: &str, user_type: &str) -> RegisterRequest {
    RegisterRequest {
        email:        email.to_string(),
        password:     "correct-horse-battery".to_string(),
        first_name:   "Lina".to_string(),
        last_name:    "Meziane".to_string(),
        phone:        None,
        user_type:    user_type.to_string(),
        public_role:  None,
        entity_claim: None,
    }
}

fn admin_principal(id: &str) -> AdminPrincipal {
    AdminPrincipal {
        id:       id.to_string(),
        username: "moderator".to_string(),
        role:     "superadmin".to_string(),
    }
}

#[tokio::test]
async fn browser_registration_is_active_immediately() {
    let state = test_state().await;

    let response = register_handler_inner(&state, register_request("lina@example.com", "browser"))
        .await
        .unwrap();

    assert_eq!(response.0.user.status, "active");
    assert!(!response.0.token.is_empty());
}

#[tokio::test]
async fn representative_registration_starts_pending() {
    let state = test_state().await;

    let response = register_handler_inner(
        &state,
        register_request("rep@example.com", "entity_representative"),
    )
    .await
    .unwrap();

    assert_eq!(response.0.user.status, "pending_review");
}

#[tokio::test]
async fn duplicate_email_is_a_conflict() {
    let state = test_state().await;

    register_handler_inner(&state, register_request("dup@example.com", "browser"))
        .await
        .unwrap();

    let err = register_handler_inner(&state, register_request("DUP@example.com", "browser"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Conflict { .. }));
}

#[tokio::test]
async fn unknown_user_type_is_rejected() {
    let state = test_state().await;

    let err = register_handler_inner(&state, register_request("x@example.com", "admin"))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn approve_activates_and_records_reviewer() {
    let state = test_state().await;
    let admin = seed_admin(&state, "moderator", "a-long-admin-password").await;
    let user = seed_user(
        &state,
        "pending@example.com",
        UserType::IndividualPublic,
        UserStatus::PendingReview,
    )
    .await;

    let response = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        user.id.clone(),
        ReviewUserRequest {
            action: "approve".to_string(),
            reason: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(response.0.status, "active");

    let stored = reload_user(&state, &user.id).await;
    assert_eq!(stored.approved_by.as_deref(), Some(admin.id.as_str()));
    assert!(stored.approved_at.is_some());
}

#[tokio::test]
async fn reject_stores_the_reason() {
    let state = test_state().await;
    let admin = seed_admin(&state, "moderator", "a-long-admin-password").await;
    let user = seed_user(
        &state,
        "pending@example.com",
        UserType::IndividualPublic,
        UserStatus::PendingReview,
    )
    .await;

    let response = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        user.id,
        ReviewUserRequest {
            action: "reject".to_string(),
            reason: Some("Profile could not be verified".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(response.0.status, "rejected");
    assert_eq!(
        response.0.status_reason.as_deref(),
        Some("Profile could not be verified")
    );
}

#[tokio::test]
async fn suspend_requires_an_active_account() {
    let state = test_state().await;
    let admin = seed_admin(&state, "moderator", "a-long-admin-password").await;
    let pending = seed_user(
        &state,
        "pending@example.com",
        UserType::Browser,
        UserStatus::PendingReview,
    )
    .await;

    let err = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        pending.id,
        ReviewUserRequest {
            action: "suspend".to_string(),
            reason: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::InvalidAction { .. }));

    let active = seed_user(&state, "active@example.com", UserType::Browser, UserStatus::Active).await;
    let response = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        active.id,
        ReviewUserRequest {
            action: "suspend".to_string(),
            reason: Some("Spam".to_string()),
        },
    )
    .await
    .unwrap();

    assert_eq!(response.0.status, "suspended");
}

#[tokio::test]
async fn reactivate_restores_a_suspended_account() {
    let state = test_state().await;
    let admin = seed_admin(&state, "moderator", "a-long-admin-password").await;
    let user = seed_user(
        &state,
        "suspended@example.com",
        UserType::Browser,
        UserStatus::Suspended,
    )
    .await;

    let response = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        user.id,
        ReviewUserRequest {
            action: "reactivate".to_string(),
            reason: None,
        },
    )
    .await
    .unwrap();

    assert_eq!(response.0.status, "active");
    assert!(response.0.status_reason.is_none());
    // Reactivation is an approval: it records who restored the account.
    assert!(response.0.approved_at.is_some());

    let stored = reload_user(&state, &response.0.id).await;
    assert_eq!(stored.approved_by.as_deref(), Some(admin.id.as_str()));
}

#[tokio::test]
async fn unknown_review_action_is_rejected() {
    let state = test_state().await;
    let admin = seed_admin(&state, "moderator", "a-long-admin-password").await;
    let user = seed_user(&state, "u@example.com", UserType::Browser, UserStatus::Active).await;

    let err = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        user.id,
        ReviewUserRequest {
            action: "ban".to_string(),
            reason: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Validation { .. }));
}

#[tokio::test]
async fn reviewing_a_missing_user_is_not_found() {
    let state = test_state().await;
    let admin = seed_admin(&state, "moderator", "a-long-admin-password").await;

    let err = review_user_handler_inner(
        &state,
        admin_principal(&admin.id),
        "no-such-user".to_string(),
        ReviewUserRequest {
            action: "approve".to_string(),
            reason: None,
        },
    )
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn reconcile_leaves_users_with_pending_claims_alone() {
    let state = test_state().await;
    let user = seed_user(
        &state,
        "claimant@example.com",
        UserType::EntityRepresentative,
        UserStatus::PendingReview,
    )
    .await;
    seed_pending_claim(&state, &user.id, None).await;

    reconcile_pending_claims(state.db.conn(), &user.id).await.unwrap();

    assert_eq!(reload_user(&state, &user.id).await.status, UserStatus::PendingReview);
}

#[tokio::test]
async fn user_listing_filters_by_status_and_type() {
    let state = test_state().await;
    seed_user(&state, "a@example.com", UserType::Browser, UserStatus::Active).await;
    seed_user(
        &state,
        "b@example.com",
        UserType::EntityRepresentative,
        UserStatus::PendingReview,
    )
    .await;
    seed_user(
        &state,
        "c@example.com",
        UserType::IndividualPublic,
        UserStatus::PendingReview,
    )
    .await;

    let all = list_users_handler_inner(&state, UserListQuery::default()).await.unwrap();
    assert_eq!(all.0.count, 3);

    let pending = list_users_handler_inner(
        &state,
        UserListQuery {
            status:    Some("pending_review".to_string()),
            user_type: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(pending.0.count, 2);

    let reps = list_users_handler_inner(
        &state,
        UserListQuery {
            status:    None,
            user_type: Some("entity_representative".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(reps.0.count, 1);
    assert_eq!(reps.0.users[0].email, "b@example.com");

    let err = list_users_handler_inner(
        &state,
        UserListQuery {
            status:    Some("deleted".to_string()),
            user_type: None,
        },
    )
    .await
    .unwrap_err();
    assert!(matches!(err, AppError::Validation { .. }));
}
