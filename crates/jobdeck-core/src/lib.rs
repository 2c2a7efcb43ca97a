//! Core library for jobdeck, a client for a job-search / CV-analysis
//! platform.
//!
//! Everything that is not presentation lives here: the OAuth session
//! lifecycle, the REST API client, the wire models, durable session storage,
//! and configuration. Storage and navigation are injected capabilities so the
//! session logic runs unchanged against files, the OS keychain, or in-memory
//! stubs in tests.

pub mod api;
pub mod auth;
pub mod config;
pub mod models;
pub mod navigator;
pub mod store;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use auth::{AuthError, CallbackParams, SessionManager};
pub use config::Config;
pub use models::{Job, ResumeData, UserProfile};
pub use navigator::{ConsoleNavigator, Navigator, RecordingNavigator};
pub use store::{FileStore, KeyringStore, MemoryStore, SessionStore};
