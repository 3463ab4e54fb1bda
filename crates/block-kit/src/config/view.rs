//! View-level inputs.

use serde::Deserialize;
use serde_json::Value;

/// Top-level fields of a view. Blocks are supplied separately.
///
/// `title`, `submit` and `close` apply to modals only.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ViewConfig {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub submit: Option<String>,
    #[serde(default)]
    pub close: Option<String>,
    #[serde(default)]
    pub callback_id: Option<String>,
    /// A string, or any JSON object or array, which is serialized.
    #[serde(default)]
    pub metadata: Option<Value>,
    #[serde(default)]
    pub clear_on_close: Option<bool>,
    #[serde(default)]
    pub notify_on_close: Option<bool>,
    #[serde(default)]
    pub external_id: Option<String>,
}
