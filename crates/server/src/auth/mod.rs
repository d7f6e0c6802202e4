//! # Admin Authentication
//!
//! Login, one-time setup and token verification for administrative principals.

pub mod handlers;
