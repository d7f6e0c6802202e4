//! # Entity Claim Data Transfer Objects

use entity::entity_claims::{self, NewEntityDraft};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request body for claim submission.
///
/// Claims either reference an existing directory entity (`entityId`) or carry
/// a draft of a new one (`newEntityData`); exactly one of the two must be
/// present.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SubmitClaimRequest {
    /// Existing entity being claimed
    pub entity_id: Option<String>,

    /// Draft of the entity to create on approval
    pub new_entity_data: Option<NewEntityDraftRequest>,

    /// Asserted relationship; defaults to team_member
    pub claim_role: Option<String>,

    #[validate(email(message = "Invalid work email format"))]
    pub work_email: Option<String>,

    pub linkedin_profile: Option<String>,

    /// Uploaded evidence URLs
    #[serde(default)]
    pub verification_documents: Vec<String>,

    pub additional_notes: Option<String>,
}

/// Draft entity payload accepted on submission
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct NewEntityDraftRequest {
    #[validate(length(min = 1, max = 255, message = "Entity name is required"))]
    pub name: String,

    /// Directory category; defaults to "Startup"
    #[serde(rename = "type")]
    pub entity_type: Option<String>,

    pub description:  Option<String>,
    pub website:      Option<String>,
    pub linkedin:     Option<String>,
    pub city:         Option<String>,
    pub founded_year: Option<i32>,
    pub logo:         Option<String>,
}

impl From<NewEntityDraftRequest> for NewEntityDraft {
    fn from(req: NewEntityDraftRequest) -> Self {
        Self {
            name:         req.name,
            entity_type:  req.entity_type,
            description:  req.description,
            website:      req.website,
            linkedin:     req.linkedin,
            city:         req.city,
            founded_year: req.founded_year,
            logo:         req.logo,
        }
    }
}

/// Request body for the admin claim-review action
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReviewClaimRequest {
    /// One of: approve, reject
    pub action: String,

    /// Free-text reason, stored on reject
    pub reason: Option<String>,
}

/// Query parameters for the admin claim listing
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClaimListQuery {
    pub status: Option<String>,
}

/// Claim representation returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id:                     String,
    pub user_id:                String,
    pub entity_id:              Option<String>,
    pub is_new_entity:          bool,
    pub new_entity_data:        Option<NewEntityDraft>,
    pub claim_role:             String,
    pub work_email:             Option<String>,
    pub linkedin_profile:       Option<String>,
    pub verification_documents: Vec<String>,
    pub additional_notes:       Option<String>,
    pub status:                 String,
    pub rejection_reason:       Option<String>,
    pub reviewed_at:            Option<chrono::DateTime<chrono::Utc>>,
    pub created_at:             chrono::DateTime<chrono::Utc>,
}

impl From<entity_claims::Model> for ClaimResponse {
    fn from(claim: entity_claims::Model) -> Self {
        Self {
            id:                     claim.id,
            user_id:                claim.user_id,
            entity_id:              claim.entity_id,
            is_new_entity:          claim.is_new_entity,
            new_entity_data:        claim.new_entity_data,
            claim_role:             claim.claim_role.to_string(),
            work_email:             claim.work_email,
            linkedin_profile:       claim.linkedin_profile,
            verification_documents: claim.verification_documents.0,
            additional_notes:       claim.additional_notes,
            status:                 claim.status.to_string(),
            rejection_reason:       claim.rejection_reason,
            reviewed_at:            claim.reviewed_at,
            created_at:             claim.created_at,
        }
    }
}

/// Response for claim listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimListResponse {
    pub success: bool,
    pub count:   usize,
    pub claims:  Vec<ClaimResponse>,
}

/// Response for a single claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClaimSubmitResponse {
    pub success: bool,
    pub claim:   ClaimResponse,
}
