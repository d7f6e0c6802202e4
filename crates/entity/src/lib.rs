//! Entity definitions for the UP-NEXUS platform
//!
//! This crate contains Sea-ORM entity definitions for the database models:
//! administrative principals, end users, directory entities, entity-ownership
//! claims and announcements.

pub mod admins;
pub use admins::Entity as Admins;
pub mod users;
pub use users::Entity as Users;
pub mod entities;
pub use entities::Entity as Entities;
pub mod entity_claims;
pub use entity_claims::Entity as EntityClaims;
pub mod announcements;
pub use announcements::Entity as Announcements;
