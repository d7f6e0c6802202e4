//! # End-User Accounts
//!
//! Registration, login, Google sign-in, profile management and the admin
//! moderation lifecycle.

pub mod handlers;
pub mod lifecycle;
pub mod oauth;
