//! Navigation as an injected capability.
//!
//! The web client navigates by assigning `window.location.href`; here the
//! same seam is a trait so the OAuth-trigger and logout paths stay testable
//! without a browser.

use std::sync::Mutex;

/// Something that can send the user to a URL or route.
pub trait Navigator: Send + Sync {
    fn redirect(&self, url: &str);
}

/// Terminal analogue of a page navigation: announce the destination and let
/// the user open it in their browser.
pub struct ConsoleNavigator;

impl Navigator for ConsoleNavigator {
    fn redirect(&self, url: &str) {
        eprintln!("Open in your browser: {}", url);
    }
}

/// Test stub that records every redirect target instead of acting on it.
#[derive(Default)]
pub struct RecordingNavigator {
    targets: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// All targets redirected to so far, in order.
    pub fn targets(&self) -> Vec<String> {
        self.targets.lock().unwrap().clone()
    }

    /// The most recent redirect target, if any.
    pub fn last_target(&self) -> Option<String> {
        self.targets.lock().unwrap().last().cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn redirect(&self, url: &str) {
        self.targets.lock().unwrap().push(url.to_string());
    }
}
