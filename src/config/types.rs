use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pager: PagerConfig,
    #[serde(default)]
    pub share: ShareConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Home pager timing and index policy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Duration of an animated tab switch in milliseconds (default: 300).
    #[serde(default = "default_animation_ms")]
    pub animation_ms: u64,
    /// Interval between animation frames in milliseconds (default: 16).
    #[serde(default = "default_frame_ms")]
    pub frame_ms: u64,
    /// What to do with a tab/page index outside the page range.
    #[serde(default)]
    pub selection_policy: SelectionPolicy,
}

/// Handling of out-of-range tab/page indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// Refuse with `NavError::OutOfRangeSelection`.
    Reject,
    /// Clamp to the last page and log a warning.
    Clamp,
}

impl Default for SelectionPolicy {
    /// `Reject` in debug builds, `Clamp` in release builds.
    fn default() -> Self {
        if cfg!(debug_assertions) {
            SelectionPolicy::Reject
        } else {
            SelectionPolicy::Clamp
        }
    }
}

/// Outbound share text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareConfig {
    /// Template with a `{name}` placeholder.
    #[serde(default = "default_share_template")]
    pub template: String,
}

/// Plant list behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Grow zone applied when the filter action is toggled on (default: 9).
    #[serde(default = "default_filter_grow_zone")]
    pub filter_grow_zone: u32,
}

fn default_animation_ms() -> u64 {
    300
}

fn default_frame_ms() -> u64 {
    16
}

fn default_share_template() -> String {
    "Check out the {name} plant in the Android Sunflower app".to_string()
}

fn default_filter_grow_zone() -> u32 {
    9
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            animation_ms: default_animation_ms(),
            frame_ms: default_frame_ms(),
            selection_policy: SelectionPolicy::default(),
        }
    }
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            template: default_share_template(),
        }
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            filter_grow_zone: default_filter_grow_zone(),
        }
    }
}
