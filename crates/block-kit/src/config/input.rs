//! Input block inputs.
//!
//! Every input config carries the wrapper fields shared by all input
//! blocks (`label`, `block_id`, `optional`, `dispatch_action`, `hint`)
//! next to the fields of its element.

use serde::Deserialize;

use crate::config::accessory::{default_conversation_filter, default_conversation_placeholder};
use crate::config::{OneOrMany, default_true};
use crate::model::{ConversationType, OptionValue};
use crate::options::{InitialSelection, OptionInput, Options};

/// Plain text input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TextInputConfig {
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub min_length: Option<u64>,
    #[serde(default)]
    pub max_length: Option<u64>,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub initial_value: Option<String>,
    #[serde(default)]
    pub multiline: bool,
    /// Dispatches a block action when enter is pressed.
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub focus_on_load: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

impl TextInputConfig {
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            action_id: Some(action_id.into()),
            ..Default::default()
        }
    }
}

/// Conversation select input.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConversationSelectInputConfig {
    pub label: String,
    #[serde(default = "default_conversation_placeholder")]
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub initial_conversations: Option<OneOrMany<String>>,
    #[serde(default = "default_conversation_filter")]
    pub filter: Vec<ConversationType>,
    #[serde(default)]
    pub multi: bool,
    #[serde(default = "default_true")]
    pub exclude_bot_users: bool,
    #[serde(default = "default_true")]
    pub exclude_external_shared_channels: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

impl ConversationSelectInputConfig {
    pub fn new(label: impl Into<String>, action_id: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            placeholder: default_conversation_placeholder(),
            block_id: None,
            action_id: Some(action_id.into()),
            optional: false,
            initial_conversations: None,
            filter: default_conversation_filter(),
            multi: false,
            exclude_bot_users: true,
            exclude_external_shared_channels: true,
            dispatch_action: false,
            hint: None,
        }
    }
}

/// Static select input, flat or grouped, single or multi.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StaticSelectInputConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    pub options: Options,
    #[serde(default)]
    pub initial_options: InitialSelection,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub max_selected_items: Option<u32>,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

impl StaticSelectInputConfig {
    pub fn new(
        label: impl Into<String>,
        placeholder: impl Into<String>,
        action_id: impl Into<String>,
        options: impl Into<Options>,
    ) -> Self {
        Self {
            label: label.into(),
            placeholder: placeholder.into(),
            action_id: Some(action_id.into()),
            options: options.into(),
            ..Default::default()
        }
    }
}

/// Radio buttons input: 1 to 10 options.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RadioSelectConfig {
    pub label: String,
    pub options: Vec<OptionInput>,
    #[serde(default)]
    pub initial_option: Option<OptionValue>,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Checkboxes: 1 to 10 options with markdown text and description.
///
/// `label` is only used when the checkboxes are wrapped in an input block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CheckboxesConfig {
    pub options: Vec<OptionInput>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub initial_options: Vec<OptionValue>,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Date picker input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DatepickerInputConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(default)]
    pub initial_date: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Time picker input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimepickerConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    /// `hh:mm a`, e.g. `"02:30 pm"`.
    #[serde(default)]
    pub initial_time: Option<String>,
    /// Zone used to compute the default time when `initial_time` is absent.
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Time zone picker: a grouped static select over the built-in zone table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TimezonePickerConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub initial_timezone: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// External data source select input.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExternalSelectConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub min_query_length: Option<u32>,
    #[serde(default)]
    pub max_selected_items: Option<u32>,
    /// Full options, since the menu's options are loaded remotely.
    #[serde(default)]
    pub initial_options: Option<OneOrMany<OptionInput>>,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Users select input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserSelectInputConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub multi: bool,
    #[serde(default)]
    pub initial_users: Option<OneOrMany<String>>,
    #[serde(default)]
    pub focus_on_load: bool,
    /// Multi select only.
    #[serde(default)]
    pub max_selected_items: Option<u32>,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Email input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EmailInputConfig {
    pub label: String,
    #[serde(default)]
    pub placeholder: Option<String>,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub initial_value: Option<String>,
    #[serde(default)]
    pub focus_on_load: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

/// Country select: a grouped static select over the built-in country table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CountrySelectConfig {
    pub label: String,
    pub placeholder: String,
    #[serde(default)]
    pub block_id: Option<String>,
    #[serde(default)]
    pub action_id: Option<String>,
    /// Country id, e.g. `"FR"`.
    #[serde(default)]
    pub initial_country: Option<String>,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub dispatch_action: bool,
    #[serde(default)]
    pub hint: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::from_json;
    use serde_json::json;

    #[test]
    fn test_static_select_input_from_json() {
        let config: StaticSelectInputConfig = from_json(json!({
            "label": "Pick",
            "placeholder": "Choose",
            "action_id": "pick",
            "options": [{"label": "G", "options": [{"text": "A", "value": "a"}]}],
            "initial_options": ["a"],
            "multi": true
        }))
        .unwrap();
        assert!(config.options.is_grouped());
        assert_eq!(config.initial_options, InitialSelection::from(vec!["a"]));
    }

    #[test]
    fn test_input_config_requires_label() {
        assert!(from_json::<EmailInputConfig>(json!({"action_id": "e"})).is_err());
    }

    #[test]
    fn test_external_initial_options() {
        let config: ExternalSelectConfig = from_json(json!({
            "label": "L",
            "placeholder": "P",
            "initial_options": {"text": "A", "value": "a"}
        }))
        .unwrap();
        assert!(matches!(config.initial_options, Some(OneOrMany::One(_))));
    }
}
