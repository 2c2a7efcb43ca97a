//! REST API client module for the platform backend.
//!
//! This module provides the `ApiClient` for talking to the job-search /
//! CV-analysis backend: token validation, job listings, and resume
//! data/upload/delete.
//!
//! All data endpoints use bearer token authentication; the token comes from
//! the OAuth session captured by the `auth` module.

pub mod client;
pub mod error;

pub use client::ApiClient;
pub use error::ApiError;
