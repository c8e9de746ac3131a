//! Outbound share payloads.
//!
//! The payload is plain text built by substituting a display name into a
//! template. The substituted value is not escaped: a name that itself
//! contains [`NAME_PLACEHOLDER`] ends up verbatim in the text.

use serde::Serialize;

/// Placeholder replaced by the shared name.
pub const NAME_PLACEHOLDER: &str = "{name}";

/// MIME type of every share payload.
pub const TEXT_PLAIN: &str = "text/plain";

/// What the platform share sheet receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SharePayload {
    pub text: String,
    pub mime_type: String,
}

/// Substitute `name` for every `{name}` in `template`.
pub fn build_share_payload(template: &str, name: &str) -> SharePayload {
    SharePayload {
        text: template.replace(NAME_PLACEHOLDER, name),
        mime_type: TEXT_PLAIN.to_string(),
    }
}
