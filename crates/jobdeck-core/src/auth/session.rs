//! Client-side session lifecycle: OAuth redirect capture, token persistence,
//! active-session queries, and logout.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{debug, info};

use crate::models::UserProfile;
use crate::navigator::Navigator;
use crate::store::{SessionStore, TOKEN_KEY, USER_KEY};

use super::{AuthError, CallbackParams};

/// Route the navigator is sent to after logout.
const HOME_ROUTE: &str = "/";

/// Owns the (token, profile) session over an injected store and navigator.
///
/// A session is "active" iff both storage entries are present and non-empty.
/// The two entries are not transactionally linked: partial presence reads as
/// inactive and is never repaired here; logout is the only reconciliation.
pub struct SessionManager {
    store: Arc<dyn SessionStore>,
    navigator: Arc<dyn Navigator>,
    api_base_url: String,
}

impl SessionManager {
    pub fn new(
        store: Arc<dyn SessionStore>,
        navigator: Arc<dyn Navigator>,
        api_base_url: impl Into<String>,
    ) -> Self {
        Self {
            store,
            navigator,
            api_base_url: api_base_url.into(),
        }
    }

    /// Reserved startup hook. Nothing needs doing before the first session
    /// query today.
    pub fn initialize(&self) -> Result<()> {
        Ok(())
    }

    /// Hand the user to the backend's Google OAuth endpoint. The backend owns
    /// the provider exchange and redirects back with the result.
    pub fn authenticate_with_google(&self) {
        let url = format!("{}/auth/oauth/google", self.api_base_url);
        info!(url = %url, "Starting Google OAuth handshake");
        self.navigator.redirect(&url);
    }

    /// Alias of [`authenticate_with_google`](Self::authenticate_with_google):
    /// the backend create-or-fetches the user atomically, so login and signup
    /// are the same handshake.
    pub fn login_with_google(&self) {
        self.authenticate_with_google();
    }

    /// Alias of [`authenticate_with_google`](Self::authenticate_with_google).
    pub fn signup_with_google(&self) {
        self.authenticate_with_google();
    }

    /// Capture the OAuth redirect result and persist the session.
    ///
    /// Three terminal outcomes:
    /// - `error` present: fails with [`AuthError::OAuth`]; the `error` branch
    ///   wins even when `token`/`user` are also present
    /// - `token` and `user` both present: decodes the profile and persists
    ///   both entries, or fails with [`AuthError::InvalidUserPayload`]
    ///   leaving storage untouched
    /// - anything else: fails with [`AuthError::MissingCredentials`]
    ///
    /// Retrying with identical valid parameters overwrites the session with
    /// identical values.
    pub fn handle_callback(&self, params: &CallbackParams) -> Result<UserProfile> {
        if let Some(error) = non_empty(params.error.as_deref()) {
            return Err(AuthError::OAuth(error.to_string()).into());
        }

        let (token, user) = match (
            non_empty(params.token.as_deref()),
            non_empty(params.user.as_deref()),
        ) {
            (Some(token), Some(user)) => (token, user),
            _ => return Err(AuthError::MissingCredentials.into()),
        };

        // The backend double-encodes the user JSON and query parsing decoded
        // only once, so one more pass yields the raw JSON.
        let decoded = urlencoding::decode(user)
            .map_err(|e| AuthError::InvalidUserPayload(e.to_string()))?;
        let profile: UserProfile = serde_json::from_str(&decoded)
            .map_err(|e| AuthError::InvalidUserPayload(e.to_string()))?;

        self.store
            .set(TOKEN_KEY, token)
            .context("Failed to persist auth token")?;
        let serialized =
            serde_json::to_string(&profile).context("Failed to serialize user profile")?;
        self.store
            .set(USER_KEY, &serialized)
            .context("Failed to persist user profile")?;

        info!(user = %profile.display_name(), "Session established");
        Ok(profile)
    }

    /// True iff both session entries are present and non-empty.
    /// Pure storage query: no network call, no expiry check.
    pub fn is_authenticated(&self) -> bool {
        let present = |key| matches!(self.store.get(key), Ok(Some(ref v)) if !v.is_empty());
        present(TOKEN_KEY) && present(USER_KEY)
    }

    /// Best-effort read of the persisted profile. A missing or unparsable
    /// entry reads as no session.
    pub fn current_user(&self) -> Option<UserProfile> {
        let raw = match self.store.get(USER_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                debug!(error = %e, "User profile read failed");
                return None;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(profile) => Some(profile),
            Err(e) => {
                debug!(error = %e, "Persisted user profile is not valid JSON");
                None
            }
        }
    }

    /// The persisted bearer token, if any. Sources the `Authorization`
    /// header for the data endpoints.
    pub fn token(&self) -> Option<String> {
        self.store
            .get(TOKEN_KEY)
            .ok()
            .flatten()
            .filter(|t| !t.is_empty())
    }

    /// Purge both session entries and send the navigator back to the
    /// application root. Succeeds when the session was already inactive.
    /// The token is not invalidated server-side.
    pub fn logout(&self) -> Result<()> {
        self.store
            .remove(TOKEN_KEY)
            .context("Failed to remove auth token")?;
        self.store
            .remove(USER_KEY)
            .context("Failed to remove user profile")?;
        info!("Session cleared");
        self.navigator.redirect(HOME_ROUTE);
        Ok(())
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
