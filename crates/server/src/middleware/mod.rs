//! # HTTP Middleware
//!
//! Request guards protecting the admin and user route groups.

pub mod auth;
