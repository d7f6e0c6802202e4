//! # Entity Claim Handlers
//!
//! A claim is pending until an admin approves or rejects it; both outcomes
//! are terminal. Approval of a new-entity claim creates the directory record
//! and back-links it onto the claim inside one transaction, so a crash can
//! never leave an approved claim without its entity.

use axum::Json;
use chrono::Utc;
use entity::{
    entities,
    entity_claims::{self, ClaimRole, ClaimStatus, DocumentList, NewEntityDraft},
    users::{self, UserStatus, UserType},
    Entities, EntityClaims,
};
use error::{AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    ConnectionTrait,
    EntityTrait,
    QueryFilter,
    QueryOrder,
    Set,
    TransactionTrait,
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::claims::{
        ClaimListQuery,
        ClaimListResponse,
        ClaimResponse,
        ClaimSubmitResponse,
        ReviewClaimRequest,
        SubmitClaimRequest,
    },
    middleware::auth::{AdminPrincipal, UserPrincipal},
    users::lifecycle::reconcile_pending_claims,
    AppState,
};

/// Default directory category for entities created from claims.
const DEFAULT_ENTITY_TYPE: &str = "Startup";

/// Creates a claim for a user and moves the account into moderation.
///
/// Shared by the claim endpoint and the inline claim on registration; the
/// caller supplies the connection so both can run inside a transaction.
///
/// Submitting a claim makes the user an entity representative pending review
/// regardless of how the account started out.
///
/// # Errors
///
/// Returns a validation error unless exactly one of `entityId` and
/// `newEntityData` is present, 404 for an unknown entity, and a conflict when
/// the user already has a live claim for the same entity.
pub async fn create_claim_for_user<C: ConnectionTrait>(
    conn: &C,
    user: &users::Model,
    req: SubmitClaimRequest,
) -> Result<(entity_claims::Model, users::Model)> {
    req.validate()?;

    let (entity_id, draft): (Option<String>, Option<NewEntityDraft>) = match (req.entity_id, req.new_entity_data) {
        (Some(id), None) => (Some(id), None),
        (None, Some(draft)) => (None, Some(draft.into())),
        _ => {
            return Err(AppError::validation(
                "Provide exactly one of entityId and newEntityData",
            ));
        },
    };

    if let Some(id) = entity_id.as_deref() {
        Entities::find_by_id(id)
            .one(conn)
            .await?
            .ok_or_else(|| AppError::not_found("Entity not found"))?;

        let duplicate = EntityClaims::find()
            .filter(entity_claims::Column::UserId.eq(user.id.as_str()))
            .filter(entity_claims::Column::EntityId.eq(id))
            .filter(
                entity_claims::Column::Status
                    .eq(ClaimStatus::Pending)
                    .or(entity_claims::Column::Status.eq(ClaimStatus::Approved)),
            )
            .one(conn)
            .await?;

        if duplicate.is_some() {
            return Err(AppError::conflict("You already have a claim for this entity"));
        }
    }

    let claim_role = match req.claim_role.as_deref() {
        Some(value) => ClaimRole::parse(value)
            .ok_or_else(|| AppError::validation(format!("Unknown claim role '{value}'")))?,
        None => ClaimRole::default(),
    };

    let now = Utc::now();
    let claim = entity_claims::ActiveModel {
        id:                     Set(cuid2::cuid()),
        user_id:                Set(user.id.clone()),
        entity_id:              Set(entity_id.clone()),
        is_new_entity:          Set(entity_id.is_none()),
        new_entity_data:        Set(draft),
        claim_role:             Set(claim_role),
        work_email:             Set(req.work_email),
        linkedin_profile:       Set(req.linkedin_profile),
        verification_documents: Set(DocumentList(req.verification_documents)),
        additional_notes:       Set(req.additional_notes),
        status:                 Set(ClaimStatus::Pending),
        rejection_reason:       Set(None),
        reviewed_at:            Set(None),
        reviewed_by:            Set(None),
        created_at:             Set(now),
        updated_at:             Set(now),
    }
    .insert(conn)
    .await?;

    let mut active: users::ActiveModel = user.clone().into();
    active.user_type = Set(UserType::EntityRepresentative);
    active.status = Set(UserStatus::PendingReview);
    active.updated_at = Set(now);
    let user = active.update(conn).await?;

    info!(claim_id = %claim.id, user_id = %user.id, is_new_entity = claim.is_new_entity, "Claim submitted");

    Ok((claim, user))
}

/// Inner handler for claim submission.
pub async fn submit_claim_handler_inner(
    state: &AppState,
    principal: UserPrincipal,
    req: SubmitClaimRequest,
) -> Result<Json<ClaimSubmitResponse>> {
    let user = entity::Users::find_by_id(&principal.id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let txn = state.db.conn().begin().await?;
    let (claim, _user) = create_claim_for_user(&txn, &user, req).await?;
    txn.commit().await?;

    Ok(Json(ClaimSubmitResponse {
        success: true,
        claim:   claim.into(),
    }))
}

/// Inner handler for the authenticated user's own claims, newest first.
pub async fn my_claims_handler_inner(state: &AppState, principal: UserPrincipal) -> Result<Json<ClaimListResponse>> {
    let claims = EntityClaims::find()
        .filter(entity_claims::Column::UserId.eq(principal.id.as_str()))
        .order_by_desc(entity_claims::Column::CreatedAt)
        .all(state.db.conn())
        .await?;

    let claims: Vec<ClaimResponse> = claims.into_iter().map(ClaimResponse::from).collect();

    Ok(Json(ClaimListResponse {
        success: true,
        count: claims.len(),
        claims,
    }))
}

/// Inner handler for the admin claim listing with an optional status filter.
pub async fn list_claims_handler_inner(state: &AppState, query: ClaimListQuery) -> Result<Json<ClaimListResponse>> {
    let mut find = EntityClaims::find().order_by_desc(entity_claims::Column::CreatedAt);

    if let Some(status) = query.status.as_deref() {
        let parsed = ClaimStatus::parse(status)
            .ok_or_else(|| AppError::validation(format!("Unknown status filter '{status}'")))?;
        find = find.filter(entity_claims::Column::Status.eq(parsed));
    }

    let claims = find.all(state.db.conn()).await?;
    let claims: Vec<ClaimResponse> = claims.into_iter().map(ClaimResponse::from).collect();

    Ok(Json(ClaimListResponse {
        success: true,
        count: claims.len(),
        claims,
    }))
}

async fn synthesize_entity<C: ConnectionTrait>(conn: &C, draft: NewEntityDraft) -> Result<entities::Model> {
    let now = Utc::now();
    let entity = entities::ActiveModel {
        id:                Set(cuid2::cuid()),
        name:              Set(draft.name),
        entity_type:       Set(draft
            .entity_type
            .unwrap_or_else(|| DEFAULT_ENTITY_TYPE.to_string())),
        icon:              Set(None),
        logo:              Set(draft.logo),
        color:             Set(None),
        description:       Set(draft.description),
        short_description: Set(None),
        website:           Set(draft.website),
        location:          Set(draft.city.clone()),
        address:           Set(None),
        wilaya:            Set(draft.city),
        email:             Set(None),
        phone:             Set(None),
        linkedin:          Set(draft.linkedin),
        twitter:           Set(None),
        facebook:          Set(None),
        instagram:         Set(None),
        founded_year:      Set(draft.founded_year),
        team_size:         Set(None),
        sector:            Set(None),
        stage:             Set(None),
        tags:              Set(entities::TagList::default()),
        is_active:         Set(true),
        is_featured:       Set(false),
        // Created through an approved claim, so verified from birth.
        is_verified:       Set(true),
        created_at:        Set(now),
        updated_at:        Set(now),
    }
    .insert(conn)
    .await?;

    Ok(entity)
}

/// Inner handler for the admin claim-review action.
///
/// Approve and reject both resolve the claim and then reconcile the owner's
/// account: once the user's last pending claim is resolved the account goes
/// active, whatever the verdict on this particular claim was.
pub async fn review_claim_handler_inner(
    state: &AppState,
    principal: AdminPrincipal,
    claim_id: String,
    req: ReviewClaimRequest,
) -> Result<Json<ClaimSubmitResponse>> {
    let claim = EntityClaims::find_by_id(&claim_id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Claim not found"))?;

    if claim.status != ClaimStatus::Pending {
        return Err(AppError::invalid_action("Claim has already been resolved"));
    }

    let txn = state.db.conn().begin().await?;
    let now = Utc::now();
    let user_id = claim.user_id.clone();

    let claim = match req.action.as_str() {
        "approve" => {
            let entity_id = match (claim.is_new_entity, claim.entity_id.clone(), claim.new_entity_data.clone()) {
                (true, _, Some(draft)) => Some(synthesize_entity(&txn, draft).await?.id),
                (false, Some(id), _) => Some(id),
                _ => {
                    return Err(AppError::invalid_action(
                        "Claim has no entity to approve against",
                    ));
                },
            };

            let mut active: entity_claims::ActiveModel = claim.into();
            active.status = Set(ClaimStatus::Approved);
            active.entity_id = Set(entity_id);
            active.reviewed_at = Set(Some(now));
            active.reviewed_by = Set(Some(principal.id.clone()));
            active.updated_at = Set(now);
            active.update(&txn).await?
        },
        "reject" => {
            let mut active: entity_claims::ActiveModel = claim.into();
            active.status = Set(ClaimStatus::Rejected);
            active.rejection_reason = Set(req.reason);
            active.reviewed_at = Set(Some(now));
            active.reviewed_by = Set(Some(principal.id.clone()));
            active.updated_at = Set(now);
            active.update(&txn).await?
        },
        other => {
            return Err(AppError::validation(format!(
                "Unknown review action '{other}'. Expected approve or reject."
            )));
        },
    };

    reconcile_pending_claims(&txn, &user_id).await?;
    txn.commit().await?;

    info!(claim_id = %claim.id, admin_id = %principal.id, status = %claim.status, "Claim reviewed");

    Ok(Json(ClaimSubmitResponse {
        success: true,
        claim:   claim.into(),
    }))
}
