//! OAuth callback parameter capture.
//!
//! After the backend finishes the Google handshake it redirects the browser
//! back to the client with the result in the query string: `token` and `user`
//! (URL-encoded JSON) on success, `error` on failure. This module extracts
//! those three parameters from a pasted redirect URL or a raw query string.

/// Query parameters delivered by the OAuth redirect.
#[derive(Debug, Clone, Default)]
pub struct CallbackParams {
    pub token: Option<String>,
    pub user: Option<String>,
    pub error: Option<String>,
}

impl CallbackParams {
    /// Extract callback parameters from a full redirect URL.
    pub fn from_url(url: &str) -> Self {
        let after = url.split_once('?').map(|(_, q)| q).unwrap_or("");
        let query = after.split('#').next().unwrap_or("");
        Self::from_query(query)
    }

    /// Parse a raw query string, percent-decoding each value once - the same
    /// single pass the browser's `URLSearchParams` applied for the web client.
    pub fn from_query(query: &str) -> Self {
        let mut params = Self::default();
        for pair in query.split('&') {
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let raw = parts.next().unwrap_or("");
            let value = urlencoding::decode(raw)
                .map(|v| v.into_owned())
                .unwrap_or_else(|_| raw.to_string());
            match key {
                "token" => params.token = Some(value),
                "user" => params.user = Some(value),
                "error" => params.error = Some(value),
                _ => {}
            }
        }
        params
    }
}
