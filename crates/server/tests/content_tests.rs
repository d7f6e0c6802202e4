//! Integration tests for directory entities and announcements.

mod common;

use common::{seed_entity, test_state};
use error::AppError;
use sea_orm::{ActiveModelTrait, Set};
use server::{
    announcements::{
        create_announcement_handler_inner,
        get_announcement_handler_inner,
        list_announcements_handler_inner,
        update_announcement_handler_inner,
    },
    dto::announcements::{AnnouncementListQuery, AnnouncementUpsertRequest},
    dto::entities::{EntityListQuery, EntityUpsertRequest},
    entities::{
        admin_stats_handler_inner,
        create_entity_handler_inner,
        delete_entity_handler_inner,
        get_entity_handler_inner,
        list_entities_handler_inner,
        stats_handler_inner,
        update_entity_handler_inner,
    },
};

fn announcement(title: &str, content: &str) -> AnnouncementUpsertRequest {
    AnnouncementUpsertRequest {
        title: Some(title.to_string()),
        content: Some(content.to_string()),
        ..Default::default()
    }
}

#[tokio::test]
async fn public_listing_hides_inactive_entities() {
    let state = test_state().await;
    seed_entity(&state, "Visible").await;
    let hidden = seed_entity(&state, "Hidden").await;

    let mut active: entity::entities::ActiveModel = hidden.into();
    active.is_active = Set(false);
    active.update(state.db.conn()).await.unwrap();

    let public = list_entities_handler_inner(&state, EntityListQuery::default()).await.unwrap();
    assert_eq!(public.0.count, 1);
    assert_eq!(public.0.entities[0].name, "Visible");

    let admin_view = list_entities_handler_inner(
        &state,
        EntityListQuery {
            entity_type:      None,
            include_inactive: Some("true".to_string()),
        },
    )
    .await
    .unwrap();
    assert_eq!(admin_view.0.count, 2);
}

#[tokio::test]
async fn type_filter_treats_all_as_no_filter() {
    let state = test_state().await;
    seed_entity(&state, "Startup One").await;

    let incubator = create_entity_handler_inner(
        &state,
        EntityUpsertRequest {
            name: Some("Incubator One".to_string()),
            entity_type: Some("Incubator".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert_eq!(incubator.0.entity.entity_type, "Incubator");

    let all = list_entities_handler_inner(
        &state,
        EntityListQuery {
            entity_type:      Some("all".to_string()),
            include_inactive: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(all.0.count, 2);

    let incubators = list_entities_handler_inner(
        &state,
        EntityListQuery {
            entity_type:      Some("Incubator".to_string()),
            include_inactive: None,
        },
    )
    .await
    .unwrap();
    assert_eq!(incubators.0.count, 1);
}

#[tokio::test]
async fn entity_update_touches_only_provided_fields() {
    let state = test_state().await;
    let entity = seed_entity(&state, "Original").await;

    let updated = update_entity_handler_inner(
        &state,
        entity.id.clone(),
        EntityUpsertRequest {
            wilaya: Some("Alger".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    assert_eq!(updated.0.entity.name, "Original");
    assert_eq!(updated.0.entity.wilaya.as_deref(), Some("Alger"));
}

#[tokio::test]
async fn deleted_entities_are_gone() {
    let state = test_state().await;
    let entity = seed_entity(&state, "Doomed").await;

    delete_entity_handler_inner(&state, entity.id.clone()).await.unwrap();

    let err = get_entity_handler_inner(&state, entity.id).await.unwrap_err();
    assert!(matches!(err, AppError::NotFound { .. }));
}

#[tokio::test]
async fn stats_group_active_entities_by_type() {
    let state = test_state().await;
    seed_entity(&state, "S1").await;
    seed_entity(&state, "S2").await;
    create_entity_handler_inner(
        &state,
        EntityUpsertRequest {
            name: Some("I1".to_string()),
            entity_type: Some("Incubator".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let stats = stats_handler_inner(&state).await.unwrap();
    assert_eq!(stats.0.total_entities, 3);

    let startups = stats
        .0
        .by_type
        .iter()
        .find(|row| row.entity_type == "Startup")
        .expect("Startup bucket");
    assert_eq!(startups.count, 2);
}

#[tokio::test]
async fn admin_stats_cover_all_collections() {
    let state = test_state().await;
    seed_entity(&state, "S1").await;
    create_announcement_handler_inner(&state, announcement("Hello", "World")).await.unwrap();

    let stats = admin_stats_handler_inner(&state).await.unwrap();
    assert_eq!(stats.0.total_entities, 1);
    assert_eq!(stats.0.total_announcements, 1);
    assert_eq!(stats.0.pending_claims, 0);
}

#[tokio::test]
async fn excerpt_is_derived_when_absent() {
    let state = test_state().await;

    let long_content = "x".repeat(300);
    let created = create_announcement_handler_inner(&state, announcement("Long", &long_content))
        .await
        .unwrap();

    assert_eq!(created.0.announcement.excerpt.len(), 283);
    assert!(created.0.announcement.excerpt.ends_with("..."));

    let short = create_announcement_handler_inner(&state, announcement("Short", "Brief news"))
        .await
        .unwrap();
    assert_eq!(short.0.announcement.excerpt, "Brief news");
}

#[tokio::test]
async fn views_increment_on_each_read() {
    let state = test_state().await;
    let created = create_announcement_handler_inner(&state, announcement("Popular", "Content"))
        .await
        .unwrap();
    let id = created.0.announcement.id;

    get_announcement_handler_inner(&state, id.clone()).await.unwrap();
    let second = get_announcement_handler_inner(&state, id).await.unwrap();

    assert_eq!(second.0.announcement.views, 2);
}

#[tokio::test]
async fn listing_puts_pinned_first_and_respects_limit() {
    let state = test_state().await;

    create_announcement_handler_inner(&state, announcement("Older", "a")).await.unwrap();
    create_announcement_handler_inner(&state, announcement("Newer", "b")).await.unwrap();
    let pinned = create_announcement_handler_inner(
        &state,
        AnnouncementUpsertRequest {
            title: Some("Pinned".to_string()),
            content: Some("c".to_string()),
            is_pinned: Some(true),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = list_announcements_handler_inner(&state, AnnouncementListQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.0.count, 3);
    assert_eq!(listed.0.announcements[0].id, pinned.0.announcement.id);

    let limited = list_announcements_handler_inner(
        &state,
        AnnouncementListQuery {
            category: None,
            limit:    Some(1),
        },
    )
    .await
    .unwrap();
    assert_eq!(limited.0.count, 1);
}

#[tokio::test]
async fn unpublished_announcements_are_hidden_from_the_listing() {
    let state = test_state().await;
    let created = create_announcement_handler_inner(&state, announcement("Draftable", "text"))
        .await
        .unwrap();

    update_announcement_handler_inner(
        &state,
        created.0.announcement.id,
        AnnouncementUpsertRequest {
            is_published: Some(false),
            ..Default::default()
        },
    )
    .await
    .unwrap();

    let listed = list_announcements_handler_inner(&state, AnnouncementListQuery::default())
        .await
        .unwrap();
    assert_eq!(listed.0.count, 0);
}
