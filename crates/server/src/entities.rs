//! # Directory Entity Handlers
//!
//! Public listings plus admin management and the aggregate endpoints.

use axum::Json;
use chrono::Utc;
use entity::{
    entities::{self, TagList},
    entity_claims::{self, ClaimStatus},
    users::{self, UserStatus},
    Announcements,
    Entities,
    EntityClaims,
    Users,
};
use error::{AppError, Result};
use sea_orm::{
    ActiveModelTrait,
    ColumnTrait,
    EntityTrait,
    ModelTrait,
    PaginatorTrait,
    QueryFilter,
    QueryOrder,
    QuerySelect,
    Set,
};
use tracing::info;
use validator::Validate;

use crate::{
    dto::entities::{
        AdminStatsResponse,
        EntityListQuery,
        EntityListResponse,
        EntityResponse,
        EntityUpsertRequest,
        StatsResponse,
        TypeCount,
    },
    dto::SuccessResponse,
    AppState,
};

/// Inner handler for the public entity listing, newest first.
///
/// Hides inactive records unless explicitly asked for them; a type filter of
/// "all" means no filter, matching what the public site sends.
pub async fn list_entities_handler_inner(state: &AppState, query: EntityListQuery) -> Result<Json<EntityListResponse>> {
    let mut find = Entities::find().order_by_desc(entities::Column::CreatedAt);

    match query.entity_type.as_deref() {
        None | Some("all") => {},
        Some(entity_type) => {
            find = find.filter(entities::Column::EntityType.eq(entity_type));
        },
    }

    if query.include_inactive.as_deref() != Some("true") {
        find = find.filter(entities::Column::IsActive.eq(true));
    }

    let entities = find.all(state.db.conn()).await?;

    Ok(Json(EntityListResponse {
        success: true,
        count: entities.len(),
        entities,
    }))
}

/// Inner handler for a single entity by id.
pub async fn get_entity_handler_inner(state: &AppState, id: String) -> Result<Json<EntityResponse>> {
    let entity = Entities::find_by_id(&id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Entity not found"))?;

    Ok(Json(EntityResponse {
        success: true,
        entity,
    }))
}

/// Inner handler for admin entity creation.
pub async fn create_entity_handler_inner(state: &AppState, req: EntityUpsertRequest) -> Result<Json<EntityResponse>> {
    req.validate()?;

    let name = req
        .name
        .clone()
        .ok_or_else(|| AppError::validation("Entity name is required"))?;

    let now = Utc::now();
    let entity = entities::ActiveModel {
        id:                Set(cuid2::cuid()),
        name:              Set(name),
        entity_type:       Set(req.entity_type.unwrap_or_else(|| "Startup".to_string())),
        icon:              Set(req.icon),
        logo:              Set(req.logo),
        color:             Set(req.color),
        description:       Set(req.description),
        short_description: Set(req.short_description),
        website:           Set(req.website),
        location:          Set(req.location),
        address:           Set(req.address),
        wilaya:            Set(req.wilaya),
        email:             Set(req.email),
        phone:             Set(req.phone),
        linkedin:          Set(req.linkedin),
        twitter:           Set(req.twitter),
        facebook:          Set(req.facebook),
        instagram:         Set(req.instagram),
        founded_year:      Set(req.founded_year),
        team_size:         Set(req.team_size),
        sector:            Set(req.sector),
        stage:             Set(req.stage),
        tags:              Set(TagList(req.tags.unwrap_or_default())),
        is_active:         Set(req.is_active.unwrap_or(true)),
        is_featured:       Set(req.is_featured.unwrap_or(false)),
        is_verified:       Set(false),
        created_at:        Set(now),
        updated_at:        Set(now),
    }
    .insert(state.db.conn())
    .await?;

    info!(entity_id = %entity.id, name = %entity.name, "Entity created");

    Ok(Json(EntityResponse {
        success: true,
        entity,
    }))
}

/// Inner handler for admin entity update; only provided fields change.
pub async fn update_entity_handler_inner(
    state: &AppState,
    id: String,
    req: EntityUpsertRequest,
) -> Result<Json<EntityResponse>> {
    req.validate()?;

    let entity = Entities::find_by_id(&id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Entity not found"))?;

    let mut active: entities::ActiveModel = entity.into();

    if let Some(name) = req.name {
        active.name = Set(name);
    }
    if let Some(entity_type) = req.entity_type {
        active.entity_type = Set(entity_type);
    }
    if let Some(icon) = req.icon {
        active.icon = Set(Some(icon));
    }
    if let Some(logo) = req.logo {
        active.logo = Set(Some(logo));
    }
    if let Some(color) = req.color {
        active.color = Set(Some(color));
    }
    if let Some(description) = req.description {
        active.description = Set(Some(description));
    }
    if let Some(short_description) = req.short_description {
        active.short_description = Set(Some(short_description));
    }
    if let Some(website) = req.website {
        active.website = Set(Some(website));
    }
    if let Some(location) = req.location {
        active.location = Set(Some(location));
    }
    if let Some(address) = req.address {
        active.address = Set(Some(address));
    }
    if let Some(wilaya) = req.wilaya {
        active.wilaya = Set(Some(wilaya));
    }
    if let Some(email) = req.email {
        active.email = Set(Some(email));
    }
    if let Some(phone) = req.phone {
        active.phone = Set(Some(phone));
    }
    if let Some(linkedin) = req.linkedin {
        active.linkedin = Set(Some(linkedin));
    }
    if let Some(twitter) = req.twitter {
        active.twitter = Set(Some(twitter));
    }
    if let Some(facebook) = req.facebook {
        active.facebook = Set(Some(facebook));
    }
    if let Some(instagram) = req.instagram {
        active.instagram = Set(Some(instagram));
    }
    if let Some(founded_year) = req.founded_year {
        active.founded_year = Set(Some(founded_year));
    }
    if let Some(team_size) = req.team_size {
        active.team_size = Set(Some(team_size));
    }
    if let Some(sector) = req.sector {
        active.sector = Set(Some(sector));
    }
    if let Some(stage) = req.stage {
        active.stage = Set(Some(stage));
    }
    if let Some(tags) = req.tags {
        active.tags = Set(TagList(tags));
    }
    if let Some(is_active) = req.is_active {
        active.is_active = Set(is_active);
    }
    if let Some(is_featured) = req.is_featured {
        active.is_featured = Set(is_featured);
    }

    active.updated_at = Set(Utc::now());
    let entity = active.update(state.db.conn()).await?;

    Ok(Json(EntityResponse {
        success: true,
        entity,
    }))
}

/// Inner handler for admin entity deletion.
pub async fn delete_entity_handler_inner(state: &AppState, id: String) -> Result<Json<SuccessResponse>> {
    let entity = Entities::find_by_id(&id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Entity not found"))?;

    entity.delete(state.db.conn()).await?;

    info!(entity_id = %id, "Entity deleted");

    Ok(Json(SuccessResponse::new("Entity deleted")))
}

/// Inner handler for the public statistics endpoint: active entities grouped
/// by type.
pub async fn stats_handler_inner(state: &AppState) -> Result<Json<StatsResponse>> {
    let total = Entities::find()
        .filter(entities::Column::IsActive.eq(true))
        .count(state.db.conn())
        .await?;

    let rows: Vec<(String, i64)> = Entities::find()
        .select_only()
        .column(entities::Column::EntityType)
        .column_as(entities::Column::Id.count(), "count")
        .filter(entities::Column::IsActive.eq(true))
        .group_by(entities::Column::EntityType)
        .into_tuple()
        .all(state.db.conn())
        .await?;

    let by_type = rows
        .into_iter()
        .map(|(entity_type, count)| TypeCount { entity_type, count })
        .collect();

    Ok(Json(StatsResponse {
        success: true,
        total_entities: total,
        by_type,
    }))
}

/// Inner handler for the admin dashboard statistics.
pub async fn admin_stats_handler_inner(state: &AppState) -> Result<Json<AdminStatsResponse>> {
    let conn = state.db.conn();

    let total_entities = Entities::find().count(conn).await?;
    let active_entities = Entities::find()
        .filter(entities::Column::IsActive.eq(true))
        .count(conn)
        .await?;
    let total_users = Users::find().count(conn).await?;
    let pending_users = Users::find()
        .filter(users::Column::Status.eq(UserStatus::PendingReview))
        .count(conn)
        .await?;
    let pending_claims = EntityClaims::find()
        .filter(entity_claims::Column::Status.eq(ClaimStatus::Pending))
        .count(conn)
        .await?;
    let total_announcements = Announcements::find().count(conn).await?;

    Ok(Json(AdminStatsResponse {
        success: true,
        total_entities,
        active_entities,
        total_users,
        pending_users,
        pending_claims,
        total_announcements,
    }))
}
