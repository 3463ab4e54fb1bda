//! Section accessory and standalone element inputs.

use serde::Deserialize;
use serde_json::Value;

use crate::config::{ConfirmDialog, OneOrMany, default_image_alt, default_true};
use crate::model::{ButtonStyle, ConversationType};
use crate::options::{InitialSelection, OptionInput, Options};

/// A button value: a string, or any JSON value serialized to a string.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ButtonValue {
    Text(String),
    Json(Value),
}

impl ButtonValue {
    /// Returns the value as it is sent to the platform.
    pub fn to_payload(&self) -> Result<String, serde_json::Error> {
        match self {
            ButtonValue::Text(text) => Ok(text.clone()),
            ButtonValue::Json(value) => serde_json::to_string(value),
        }
    }
}

impl From<&str> for ButtonValue {
    fn from(value: &str) -> Self {
        ButtonValue::Text(value.to_string())
    }
}

impl From<Value> for ButtonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::String(text) => ButtonValue::Text(text),
            other => ButtonValue::Json(other),
        }
    }
}

/// A button, used both as a section accessory and in actions blocks.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ButtonConfig {
    pub text: String,
    #[serde(default)]
    pub value: Option<ButtonValue>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub style: Option<ButtonStyle>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub confirm: Option<ConfirmDialog>,
}

impl ButtonConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn value(mut self, value: impl Into<ButtonValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    pub fn action_id(mut self, action_id: impl Into<String>) -> Self {
        self.action_id = Some(action_id.into());
        self
    }

    pub fn style(mut self, style: ButtonStyle) -> Self {
        self.style = Some(style);
        self
    }

    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    pub fn confirm(mut self, confirm: ConfirmDialog) -> Self {
        self.confirm = Some(confirm);
        self
    }
}

fn default_accessory_placeholder() -> String {
    "Pick an option".to_string()
}

/// Static select placed as a section accessory.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticSelectAccessoryConfig {
    pub options: Options,
    #[serde(default)]
    pub initial_option: InitialSelection,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default = "default_accessory_placeholder")]
    pub placeholder: String,
}

impl StaticSelectAccessoryConfig {
    pub fn new(action_id: impl Into<String>, options: impl Into<Options>) -> Self {
        Self {
            options: options.into(),
            initial_option: InitialSelection::None,
            action_id: Some(action_id.into()),
            placeholder: default_accessory_placeholder(),
        }
    }
}

/// Overflow menu: up to five options, each optionally a link.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OverflowConfig {
    pub options: Vec<OptionInput>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub confirm: Option<ConfirmDialog>,
}

/// Image element.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageElementConfig {
    pub url: String,
    #[serde(default = "default_image_alt")]
    pub alt: String,
}

impl ImageElementConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: default_image_alt(),
        }
    }
}

pub(crate) fn default_conversation_filter() -> Vec<ConversationType> {
    vec![ConversationType::Public, ConversationType::Private]
}

pub(crate) fn default_conversation_placeholder() -> String {
    "Select channel".to_string()
}

/// Conversation select placed as a section accessory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationSelectConfig {
    #[serde(default)]
    pub initial_conversation: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default = "default_conversation_filter")]
    pub filter: Vec<ConversationType>,
    #[serde(default = "default_conversation_placeholder")]
    pub placeholder: String,
    #[serde(default = "default_true")]
    pub exclude_bot_users: bool,
    #[serde(default = "default_true")]
    pub exclude_external_shared_channels: bool,
    #[serde(default)]
    pub multi: bool,
}

impl Default for ConversationSelectConfig {
    fn default() -> Self {
        Self {
            initial_conversation: None,
            action_id: None,
            filter: default_conversation_filter(),
            placeholder: default_conversation_placeholder(),
            exclude_bot_users: true,
            exclude_external_shared_channels: true,
            multi: false,
        }
    }
}

fn default_date_placeholder() -> String {
    "Select a date".to_string()
}

/// Date picker placed as a section accessory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatepickerConfig {
    #[serde(default)]
    pub action_id: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub initial_date: Option<String>,
    #[serde(default = "default_date_placeholder")]
    pub placeholder: String,
}

impl Default for DatepickerConfig {
    fn default() -> Self {
        Self {
            action_id: None,
            initial_date: None,
            placeholder: default_date_placeholder(),
        }
    }
}

fn default_users_placeholder() -> String {
    "Select users".to_string()
}

/// Users select placed as a section accessory.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UsersSelectAccessoryConfig {
    #[serde(default)]
    pub initial_users: Option<OneOrMany<String>>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default = "default_users_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub max_selected_items: Option<u32>,
}

impl Default for UsersSelectAccessoryConfig {
    fn default() -> Self {
        Self {
            initial_users: None,
            action_id: None,
            placeholder: default_users_placeholder(),
            multi: false,
            max_selected_items: None,
        }
    }
}
