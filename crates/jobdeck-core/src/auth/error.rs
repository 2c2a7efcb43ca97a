use thiserror::Error;

/// Failures surfaced while capturing an OAuth callback.
///
/// Reads of already-persisted session data are deliberately not represented
/// here: a malformed stored profile reads as "no session", not as an error.
#[derive(Error, Debug)]
pub enum AuthError {
    /// The backend aborted the OAuth handshake and said why.
    #[error("authentication failed: {0}")]
    OAuth(String),

    /// The callback's `user` parameter is not URL-encoded JSON.
    #[error("invalid user payload: {0}")]
    InvalidUserPayload(String),

    /// The callback landed without the expected `token` and `user` parameters.
    #[error("callback is missing token or user data")]
    MissingCredentials,
}
