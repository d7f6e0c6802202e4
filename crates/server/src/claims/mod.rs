//! # Entity Claims
//!
//! Submission and admin review of entity-ownership claims.

pub mod handlers;
