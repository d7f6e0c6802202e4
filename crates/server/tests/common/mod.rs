//! # Common Test Utilities
//!
//! In-memory SQLite database with the schema derived from the entity
//! definitions, plus a stub Google verifier so no test talks to the network.

#![allow(dead_code)]

use std::sync::{Arc, Once};

use async_trait::async_trait;
use auth::{hash_password, secrecy::SecretString, JwtConfig};
use chrono::Utc;
use entity::{
    admins::{self, AdminRole},
    entities::{self, TagList},
    entity_claims::{self, ClaimRole, ClaimStatus, DocumentList},
    users::{self, AuthProvider, PublicRole, UserStatus, UserType},
};
use error::{AppError, Result};
use migration::SeaDb;
use sea_orm::{ActiveModelTrait, ConnectionTrait, Database, EntityTrait, Schema, Set};
use server::{
    users::oauth::{GoogleProfile, GoogleTokenVerifier},
    AppState,
};

static INIT: Once = Once::new();

/// Initialize test logging once per test binary.
pub fn init_test_env() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// The ID token the stub verifier accepts.
pub const GOOD_GOOGLE_TOKEN: &str = "stub-google-token";

/// Stub verifier: one known-good token, everything else rejected.
pub struct StubGoogleVerifier {
    pub profile: GoogleProfile,
}

impl Default for StubGoogleVerifier {
    fn default() -> Self {
        Self {
            profile: GoogleProfile {
                sub:         "google-sub-1".to_string(),
                email:       "google.user@example.com".to_string(),
                given_name:  Some("Nadia".to_string()),
                family_name: Some("Benali".to_string()),
                picture:     None,
            },
        }
    }
}

#[async_trait]
impl GoogleTokenVerifier for StubGoogleVerifier {
    async fn verify(&self, id_token: &str) -> Result<GoogleProfile> {
        if id_token == GOOD_GOOGLE_TOKEN {
            Ok(self.profile.clone())
        } else {
            Err(AppError::unauthorized("Invalid Google token"))
        }
    }
}

async fn create_schema(db: &SeaDb) {
    let backend = db.conn().get_database_backend();
    let schema = Schema::new(backend);

    let statements = vec![
        schema.create_table_from_entity(entity::Admins),
        schema.create_table_from_entity(entity::Users),
        schema.create_table_from_entity(entity::Entities),
        schema.create_table_from_entity(entity::EntityClaims),
        schema.create_table_from_entity(entity::Announcements),
    ];

    for stmt in statements {
        db.conn()
            .execute(backend.build(&stmt))
            .await
            .expect("failed to create test schema");
    }
}

/// Builds an application state over a fresh in-memory database.
pub async fn test_state() -> AppState {
    init_test_env();

    let conn = Database::connect("sqlite::memory:")
        .await
        .expect("failed to open in-memory database");
    let db = SeaDb::from_connection(conn);
    create_schema(&db).await;

    AppState {
        db,
        jwt_config: JwtConfig::new("test-secret-key-that-is-at-least-32-bytes-long"),
        google: Arc::new(StubGoogleVerifier::default()),
        start_time: std::time::Instant::now(),
    }
}

/// Inserts an admin with the given password and returns the model.
pub async fn seed_admin(state: &AppState, username: &str, password: &str) -> admins::Model {
    let secret = SecretString::from(password.to_string());
    let password_hash = hash_password(&secret).expect("failed to hash password");

    admins::ActiveModel {
        id:            Set(cuid2::cuid()),
        username:      Set(username.to_string()),
        email:         Set(format!("{username}@up-nexus.com")),
        password_hash: Set(password_hash),
        role:          Set(AdminRole::Superadmin),
        last_login_at: Set(None),
        created_at:    Set(Utc::now()),
    }
    .insert(state.db.conn())
    .await
    .expect("failed to seed admin")
}

/// Inserts a user with a known password hash and returns the model.
pub async fn seed_user(state: &AppState, email: &str, user_type: UserType, status: UserStatus) -> users::Model {
    let secret = SecretString::from("correct-horse-battery".to_string());
    let password_hash = hash_password(&secret).expect("failed to hash password");
    let now = Utc::now();

    users::ActiveModel {
        id:                            Set(cuid2::cuid()),
        email:                         Set(email.to_lowercase()),
        password_hash:                 Set(Some(password_hash)),
        first_name:                    Set(Some("Test".to_string())),
        last_name:                     Set(Some("User".to_string())),
        phone:                         Set(None),
        profile_picture:               Set(None),
        auth_provider:                 Set(AuthProvider::Email),
        google_id:                     Set(None),
        linkedin_id:                   Set(None),
        user_type:                     Set(user_type),
        public_role:                   Set(PublicRole::None),
        status:                        Set(status),
        status_reason:                 Set(None),
        email_verification_token:      Set(None),
        email_verification_expires_at: Set(None),
        password_reset_token:          Set(None),
        password_reset_expires_at:     Set(None),
        approved_at:                   Set(None),
        approved_by:                   Set(None),
        last_login_at:                 Set(None),
        created_at:                    Set(now),
        updated_at:                    Set(now),
    }
    .insert(state.db.conn())
    .await
    .expect("failed to seed user")
}

/// Inserts a directory entity and returns the model.
pub async fn seed_entity(state: &AppState, name: &str) -> entities::Model {
    let now = Utc::now();
    entities::ActiveModel {
        id:                Set(cuid2::cuid()),
        name:              Set(name.to_string()),
        entity_type:       Set("Startup".to_string()),
        icon:              Set(None),
        logo:              Set(None),
        color:             Set(None),
        description:       Set(None),
        short_description: Set(None),
        website:           Set(None),
        location:          Set(None),
        address:           Set(None),
        wilaya:            Set(None),
        email:             Set(None),
        phone:             Set(None),
        linkedin:          Set(None),
        twitter:           Set(None),
        facebook:          Set(None),
        instagram:         Set(None),
        founded_year:      Set(None),
        team_size:         Set(None),
        sector:            Set(None),
        stage:             Set(None),
        tags:              Set(TagList::default()),
        is_active:         Set(true),
        is_featured:       Set(false),
        is_verified:       Set(false),
        created_at:        Set(now),
        updated_at:        Set(now),
    }
    .insert(state.db.conn())
    .await
    .expect("failed to seed entity")
}

/// Inserts a pending claim for an existing entity and returns the model.
pub async fn seed_pending_claim(state: &AppState, user_id: &str, entity_id: Option<&str>) -> entity_claims::Model {
    let now = Utc::now();
    entity_claims::ActiveModel {
        id:                     Set(cuid2::cuid()),
        user_id:                Set(user_id.to_string()),
        entity_id:              Set(entity_id.map(str::to_string)),
        is_new_entity:          Set(entity_id.is_none()),
        new_entity_data:        Set(None),
        claim_role:             Set(ClaimRole::TeamMember),
        work_email:             Set(None),
        linkedin_profile:       Set(None),
        verification_documents: Set(DocumentList::default()),
        additional_notes:       Set(None),
        status:                 Set(ClaimStatus::Pending),
        rejection_reason:       Set(None),
        reviewed_at:            Set(None),
        reviewed_by:            Set(None),
        created_at:             Set(now),
        updated_at:             Set(now),
    }
    .insert(state.db.conn())
    .await
    .expect("failed to seed claim")
}

/// Reloads a user by id.
pub async fn reload_user(state: &AppState, id: &str) -> users::Model {
    entity::Users::find_by_id(id)
        .one(state.db.conn())
        .await
        .expect("query failed")
        .expect("user not found")
}
