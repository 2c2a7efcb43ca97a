//! Data models for the platform's wire formats.
//!
//! This module contains the structures exchanged with the backend:
//!
//! - `UserProfile`: the authenticated user, as delivered at login
//! - `Job`: one posting from the job listings endpoint
//! - `ResumeData` and friends: the analyzed CV
//!
//! All schemas are backend-defined; the models tolerate supersets of the
//! fields they name.

pub mod job;
pub mod resume;
pub mod user;

pub use job::Job;
pub use resume::{PersonalInfo, ResumeData, Skills, UploadReceipt};
pub use user::UserProfile;
