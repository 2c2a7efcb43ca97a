//! API client for the platform REST backend.
//!
//! This module provides the `ApiClient` struct for making authenticated
//! requests: token validation, job listings, and resume operations.

use anyhow::{Context, Result};
use reqwest::{header, multipart, Client};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use tracing::{debug, warn};

use crate::models::{Job, ResumeData, UploadReceipt, UserProfile};

use super::ApiError;

// ============================================================================
// Constants
// ============================================================================

/// HTTP request timeout in seconds.
/// Resume analysis can take a while server-side; 30s covers it while still
/// failing fast on a dead backend.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Internal response type for `POST /auth/validate`.
#[derive(Debug, Deserialize)]
struct ValidateResponse {
    #[serde(default)]
    valid: bool,
    #[serde(default)]
    user: Option<UserProfile>,
}

/// API client for the platform backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    /// Create a new API client against the given base URL.
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn set_token(&mut self, token: String) {
        self.token = Some(token);
    }

    /// Create a new ApiClient with the given token, sharing the connection pool.
    pub fn with_token(&self, token: String) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            token: Some(token),
        }
    }

    /// The backend endpoint that begins the Google OAuth handshake.
    /// Navigating here replaces the current page; the backend owns the
    /// provider exchange and redirects back with the result.
    pub fn oauth_url(&self) -> String {
        format!("{}/auth/oauth/google", self.base_url)
    }

    fn auth_headers(&self) -> Result<header::HeaderMap> {
        let mut headers = header::HeaderMap::new();
        if let Some(ref token) = self.token {
            headers.insert(
                header::AUTHORIZATION,
                header::HeaderValue::from_str(&format!("Bearer {}", token))?,
            );
        }
        Ok(headers)
    }

    /// Check if response is successful, returning an error with body if not.
    async fn check_response(response: reqwest::Response) -> Result<reqwest::Response> {
        if response.status().is_success() {
            Ok(response)
        } else {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            Err(ApiError::from_status(status, &body).into())
        }
    }

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .with_context(|| format!("Failed to send GET request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    async fn post<T: DeserializeOwned, B: Serialize>(&self, url: &str, body: &B) -> Result<T> {
        let response = self
            .client
            .post(url)
            .headers(self.auth_headers()?)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to send POST request to {}", url))?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .with_context(|| format!("Failed to parse JSON response from {}", url))
    }

    // ===== Auth =====

    /// Ask the backend whether a token is still good.
    ///
    /// Returns the server-confirmed profile for a valid token, `None`
    /// otherwise. A rejected token and an unreachable backend are deliberately
    /// indistinguishable here; the failure is logged but not surfaced.
    pub async fn validate_token(&self, token: &str) -> Option<UserProfile> {
        let url = format!("{}/auth/validate", self.base_url);
        let body = serde_json::json!({ "token": token });

        match self.post::<ValidateResponse, _>(&url, &body).await {
            Ok(response) if response.valid => response.user,
            Ok(_) => {
                debug!("Backend reported token invalid");
                None
            }
            Err(e) => {
                warn!(error = %e, "Token validation request failed");
                None
            }
        }
    }

    // ===== Jobs =====

    /// Fetch the job listings for the authenticated user.
    pub async fn fetch_jobs(&self) -> Result<Vec<Job>> {
        let url = format!("{}/jobs/", self.base_url);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .context("Failed to fetch job listings")?;

        let response = Self::check_response(response).await?;
        let text = response.text().await.context("Failed to read job listings body")?;
        debug!("Job listings response received");

        // Try to parse as array directly first, then as wrapped object
        if let Ok(jobs) = serde_json::from_str::<Vec<Job>>(&text) {
            return Ok(jobs);
        }

        #[derive(Deserialize)]
        struct JobsWrapper {
            #[serde(default)]
            jobs: Vec<Job>,
            #[serde(default)]
            data: Vec<Job>,
        }

        if let Ok(wrapper) = serde_json::from_str::<JobsWrapper>(&text) {
            if !wrapper.jobs.is_empty() {
                return Ok(wrapper.jobs);
            }
            if !wrapper.data.is_empty() {
                return Ok(wrapper.data);
            }
        }

        warn!("Unrecognized job listings shape, treating as empty");
        Ok(vec![])
    }

    // ===== Resume =====

    /// Fetch the analyzed CV for the authenticated user.
    /// No CV on file (404) is not an error.
    pub async fn fetch_resume(&self) -> Result<Option<ResumeData>> {
        let url = format!("{}/resume/data", self.base_url);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers()?)
            .send()
            .await
            .context("Failed to fetch resume data")?;

        if response.status().as_u16() == 404 {
            return Ok(None);
        }

        let response = Self::check_response(response).await?;
        let resume = response
            .json()
            .await
            .context("Failed to parse resume data")?;
        Ok(Some(resume))
    }

    /// Upload a CV for analysis. The backend expects a multipart form with
    /// the file under the `resume` field.
    pub async fn upload_resume(&self, file_name: &str, bytes: Vec<u8>) -> Result<UploadReceipt> {
        let url = format!("{}/resume/upload", self.base_url);

        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("application/pdf")
            .context("Failed to build resume upload part")?;
        let form = multipart::Form::new().part("resume", part);

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .multipart(form)
            .send()
            .await
            .context("Failed to send resume upload")?;

        let response = Self::check_response(response).await?;
        response
            .json()
            .await
            .context("Failed to parse upload response")
    }

    /// Delete the stored CV and its analysis.
    pub async fn delete_resume(&self) -> Result<()> {
        let url = format!("{}/resume/delete", self.base_url);

        let response = self
            .client
            .post(&url)
            .headers(self.auth_headers()?)
            .json(&serde_json::json!({}))
            .send()
            .await
            .context("Failed to send resume deletion")?;

        Self::check_response(response).await?;
        Ok(())
    }
}
