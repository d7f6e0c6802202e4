//! # Announcement Handlers
//!
//! Editorial content endpoints. Public detail reads bump the view counter;
//! listings put pinned items first, then the most recently published.

use axum::Json;
use chrono::Utc;
use entity::{
    announcements::{self, derive_excerpt},
    entities::TagList,
    Announcements,
};
use error::{AppError, Result};
use sea_orm::{
    sea_query::{Alias, Expr},
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
    dto::announcements::{
        AnnouncementListQuery,
        AnnouncementListResponse,
        AnnouncementResponse,
        AnnouncementStatsResponse,
        AnnouncementUpsertRequest,
        CategoryCount,
    },
    dto::SuccessResponse,
    AppState,
};

/// Inner handler for the public announcement listing.
pub async fn list_announcements_handler_inner(
    state: &AppState,
    query: AnnouncementListQuery,
) -> Result<Json<AnnouncementListResponse>> {
    let mut find = Announcements::find()
        .filter(announcements::Column::IsPublished.eq(true))
        .order_by_desc(announcements::Column::IsPinned)
        .order_by_desc(announcements::Column::PublishedAt);

    match query.category.as_deref() {
        None | Some("all") => {},
        Some(category) => {
            find = find.filter(announcements::Column::Category.eq(category));
        },
    }

    if let Some(limit) = query.limit {
        find = find.limit(limit);
    }

    let announcements = find.all(state.db.conn()).await?;

    Ok(Json(AnnouncementListResponse {
        success: true,
        count: announcements.len(),
        announcements,
    }))
}

/// Inner handler for a single announcement; increments the view counter.
pub async fn get_announcement_handler_inner(state: &AppState, id: String) -> Result<Json<AnnouncementResponse>> {
    let announcement = Announcements::find_by_id(&id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Announcement not found"))?;

    let views = announcement.views + 1;
    let mut active: announcements::ActiveModel = announcement.into();
    active.views = Set(views);
    let announcement = active.update(state.db.conn()).await?;

    Ok(Json(AnnouncementResponse {
        success: true,
        announcement,
    }))
}

/// Inner handler for admin announcement creation.
///
/// The excerpt is derived from the content when the request omits it.
pub async fn create_announcement_handler_inner(
    state: &AppState,
    req: AnnouncementUpsertRequest,
) -> Result<Json<AnnouncementResponse>> {
    req.validate()?;

    let title = req
        .title
        .clone()
        .ok_or_else(|| AppError::validation("Title is required"))?;
    let content = req
        .content
        .clone()
        .ok_or_else(|| AppError::validation("Content is required"))?;

    let excerpt = req.excerpt.unwrap_or_else(|| derive_excerpt(&content));

    let now = Utc::now();
    let announcement = announcements::ActiveModel {
        id:             Set(cuid2::cuid()),
        title:          Set(title),
        content:        Set(content),
        excerpt:        Set(excerpt),
        category:       Set(req.category.unwrap_or_else(|| "news".to_string())),
        author:         Set(req.author.unwrap_or_else(|| "UP-NEXUS Team".to_string())),
        author_avatar:  Set(req.author_avatar),
        image:          Set(req.image),
        tags:           Set(TagList(req.tags.unwrap_or_default())),
        event_date:     Set(req.event_date),
        event_location: Set(req.event_location),
        company:        Set(req.company),
        job_type:       Set(req.job_type),
        deadline:       Set(req.deadline),
        funding_amount: Set(req.funding_amount),
        external_link:  Set(req.external_link),
        apply_link:     Set(req.apply_link),
        is_published:   Set(req.is_published.unwrap_or(true)),
        is_pinned:      Set(req.is_pinned.unwrap_or(false)),
        views:          Set(0),
        published_at:   Set(now),
        created_at:     Set(now),
        updated_at:     Set(now),
    }
    .insert(state.db.conn())
    .await?;

    info!(announcement_id = %announcement.id, title = %announcement.title, "Announcement created");

    Ok(Json(AnnouncementResponse {
        success: true,
        announcement,
    }))
}

/// Inner handler for admin announcement update; only provided fields change.
///
/// Changing the content re-derives the excerpt unless the request pins one.
pub async fn update_announcement_handler_inner(
    state: &AppState,
    id: String,
    req: AnnouncementUpsertRequest,
) -> Result<Json<AnnouncementResponse>> {
    req.validate()?;

    let announcement = Announcements::find_by_id(&id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Announcement not found"))?;

    let mut active: announcements::ActiveModel = announcement.into();

    if let Some(title) = req.title {
        active.title = Set(title);
    }
    if let Some(content) = req.content {
        match req.excerpt {
            Some(excerpt) => active.excerpt = Set(excerpt),
            None => active.excerpt = Set(derive_excerpt(&content)),
        }
        active.content = Set(content);
    } else if let Some(excerpt) = req.excerpt {
        active.excerpt = Set(excerpt);
    }
    if let Some(category) = req.category {
        active.category = Set(category);
    }
    if let Some(author) = req.author {
        active.author = Set(author);
    }
    if let Some(author_avatar) = req.author_avatar {
        active.author_avatar = Set(Some(author_avatar));
    }
    if let Some(image) = req.image {
        active.image = Set(Some(image));
    }
    if let Some(tags) = req.tags {
        active.tags = Set(TagList(tags));
    }
    if let Some(event_date) = req.event_date {
        active.event_date = Set(Some(event_date));
    }
    if let Some(event_location) = req.event_location {
        active.event_location = Set(Some(event_location));
    }
    if let Some(company) = req.company {
        active.company = Set(Some(company));
    }
    if let Some(job_type) = req.job_type {
        active.job_type = Set(Some(job_type));
    }
    if let Some(deadline) = req.deadline {
        active.deadline = Set(Some(deadline));
    }
    if let Some(funding_amount) = req.funding_amount {
        active.funding_amount = Set(Some(funding_amount));
    }
    if let Some(external_link) = req.external_link {
        active.external_link = Set(Some(external_link));
    }
    if let Some(apply_link) = req.apply_link {
        active.apply_link = Set(Some(apply_link));
    }
    if let Some(is_published) = req.is_published {
        active.is_published = Set(is_published);
    }
    if let Some(is_pinned) = req.is_pinned {
        active.is_pinned = Set(is_pinned);
    }

    active.updated_at = Set(Utc::now());
    let announcement = active.update(state.db.conn()).await?;

    Ok(Json(AnnouncementResponse {
        success: true,
        announcement,
    }))
}

/// Inner handler for admin announcement deletion.
pub async fn delete_announcement_handler_inner(state: &AppState, id: String) -> Result<Json<SuccessResponse>> {
    let announcement = Announcements::find_by_id(&id)
        .one(state.db.conn())
        .await?
        .ok_or_else(|| AppError::not_found("Announcement not found"))?;

    announcement.delete(state.db.conn()).await?;

    info!(announcement_id = %id, "Announcement deleted");

    Ok(Json(SuccessResponse::new("Announcement deleted")))
}

/// Inner handler for announcement statistics.
pub async fn announcement_stats_handler_inner(state: &AppState) -> Result<Json<AnnouncementStatsResponse>> {
    let conn = state.db.conn();

    let total = Announcements::find().count(conn).await?;
    let published = Announcements::find()
        .filter(announcements::Column::IsPublished.eq(true))
        .count(conn)
        .await?;

    // SUM over bigint widens to numeric on Postgres; cast it back down.
    let views = Announcements::find()
        .select_only()
        .column_as(
            Expr::col(announcements::Column::Views).sum().cast_as(Alias::new("bigint")),
            "total_views",
        )
        .into_tuple::<Option<i64>>()
        .one(conn)
        .await?
        .flatten();

    let rows: Vec<(String, i64)> = Announcements::find()
        .select_only()
        .column(announcements::Column::Category)
        .column_as(announcements::Column::Id.count(), "count")
        .group_by(announcements::Column::Category)
        .into_tuple()
        .all(conn)
        .await?;

    let by_category = rows
        .into_iter()
        .map(|(category, count)| CategoryCount { category, count })
        .collect();

    Ok(Json(AnnouncementStatsResponse {
        success: true,
        total,
        published,
        total_views: views.unwrap_or(0),
        by_category,
    }))
}
