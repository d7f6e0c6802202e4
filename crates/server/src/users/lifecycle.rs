//! # Account Lifecycle
//!
//! The user status machine and the claim-resolution cascade.
//!
//! Statuses: active, pending_review, rejected, suspended. Only suspend guards
//! its source state (an account must be active to be suspended); approve,
//! reject and reactivate apply from any state, which lets an admin correct an
//! earlier decision without a dedicated undo path.

use chrono::Utc;
use entity::{
    entity_claims::{self, ClaimStatus},
    users::{self, UserStatus},
    EntityClaims, Users,
};
use error::{AppError, Result};
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter, Set};
use tracing::info;

/// Admin review actions over a user account.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewAction {
    Approve,
    Reject,
    Suspend,
    Reactivate,
}

impl ReviewAction {
    /// Parses the request's action string.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an unknown action.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "approve" => Ok(ReviewAction::Approve),
            "reject" => Ok(ReviewAction::Reject),
            "suspend" => Ok(ReviewAction::Suspend),
            "reactivate" => Ok(ReviewAction::Reactivate),
            other => Err(AppError::validation(format!(
                "Unknown review action '{other}'. Expected approve, reject, suspend or reactivate."
            ))),
        }
    }
}

/// Applies an admin review action to a user account.
///
/// # Errors
///
/// Returns an invalid-action error when suspending an account that is not
/// active, and a database error on persistence failure.
pub async fn apply_review_action<C: ConnectionTrait>(
    conn: &C,
    user: users::Model,
    action: ReviewAction,
    reason: Option<String>,
    admin_id: &str,
) -> Result<users::Model> {
    let mut active: users::ActiveModel = user.clone().into();

    match action {
        ReviewAction::Approve => {
            active.status = Set(UserStatus::Active);
            active.status_reason = Set(None);
            active.approved_at = Set(Some(Utc::now()));
            active.approved_by = Set(Some(admin_id.to_string()));
        },
        ReviewAction::Reject => {
            active.status = Set(UserStatus::Rejected);
            active.status_reason = Set(reason);
        },
        ReviewAction::Suspend => {
            if user.status != UserStatus::Active {
                return Err(AppError::invalid_action("Only active accounts can be suspended"));
            }
            active.status = Set(UserStatus::Suspended);
            active.status_reason = Set(reason);
        },
        ReviewAction::Reactivate => {
            active.status = Set(UserStatus::Active);
            active.status_reason = Set(None);
            active.approved_at = Set(Some(Utc::now()));
            active.approved_by = Set(Some(admin_id.to_string()));
        },
    }

    active.updated_at = Set(Utc::now());
    let updated = active.update(conn).await?;

    info!(user_id = %updated.id, admin_id, status = %updated.status, "User account reviewed");
    Ok(updated)
}

/// Activates a user whose last pending claim was just resolved.
///
/// Runs after every claim review. When the user has no pending claims left,
/// the account becomes active whether the final claim was approved or
/// rejected: a rejection settles the review queue, it does not condemn the
/// account.
///
/// # Errors
///
/// Returns a database error on persistence failure.
pub async fn reconcile_pending_claims<C: ConnectionTrait>(conn: &C, user_id: &str) -> Result<()> {
    let pending = EntityClaims::find()
        .filter(entity_claims::Column::UserId.eq(user_id))
        .filter(entity_claims::Column::Status.eq(ClaimStatus::Pending))
        .count(conn)
        .await?;

    if pending > 0 {
        return Ok(());
    }

    let Some(user) = Users::find_by_id(user_id).one(conn).await? else {
        return Ok(());
    };

    if user.status == UserStatus::Active {
        return Ok(());
    }

    let mut active: users::ActiveModel = user.into();
    active.status = Set(UserStatus::Active);
    active.updated_at = Set(Utc::now());
    active.update(conn).await?;

    info!(user_id, "Last pending claim resolved; account activated");
    Ok(())
}
