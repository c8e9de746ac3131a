//! Platform actions injected into screens that leave the app.
//!
//! Screens never look up an ambient window or activity; whatever can open a
//! browser or a share sheet is handed to them explicitly.

use crate::share::SharePayload;

/// Outbound actions handled by the host platform.
pub trait PlatformActions: Send + Sync {
    /// Open `uri` in an external viewer (browser).
    fn launch_external_view(&self, uri: &str);

    /// Present the share sheet with `payload`.
    fn launch_share(&self, payload: &SharePayload);
}

/// Platform that only logs what it was asked to do. Used by the CLI.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingPlatform;

impl PlatformActions for LoggingPlatform {
    fn launch_external_view(&self, uri: &str) {
        tracing::info!(uri, "launch external view");
    }

    fn launch_share(&self, payload: &SharePayload) {
        tracing::info!(text = %payload.text, mime_type = %payload.mime_type, "launch share");
    }
}
