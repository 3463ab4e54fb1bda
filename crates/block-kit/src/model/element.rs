//! Interactive elements: buttons, menus, pickers and inputs.
//!
//! Elements are placed in actions blocks, as section accessories, or inside
//! input blocks.

use serde::{Deserialize, Serialize};

use crate::model::{OptionList, OptionObject, TextObject};

/// A confirmation dialog shown before an interactive element fires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmObject {
    pub title: TextObject,
    pub text: TextObject,
    pub confirm: TextObject,
    pub deny: TextObject,
}

/// Visual style of a button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonStyle {
    Primary,
    Danger,
}

/// Conversation types a conversation menu may list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConversationType {
    Im,
    Mpim,
    Private,
    Public,
}

/// Interaction that dispatches a block action from a text input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    OnEnterPressed,
    OnCharacterEntered,
}

/// An interactive element, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Element {
    Button(ButtonElement),
    StaticSelect(StaticSelectElement),
    MultiStaticSelect(StaticSelectElement),
    ExternalSelect(ExternalSelectElement),
    MultiExternalSelect(ExternalSelectElement),
    UsersSelect(UsersSelectElement),
    MultiUsersSelect(UsersSelectElement),
    ConversationsSelect(ConversationsSelectElement),
    MultiConversationsSelect(ConversationsSelectElement),
    Overflow(OverflowElement),
    Checkboxes(CheckboxesElement),
    RadioButtons(RadioButtonsElement),
    Datepicker(DatepickerElement),
    Timepicker(TimepickerElement),
    PlainTextInput(PlainTextInputElement),
    EmailTextInput(EmailTextInputElement),
    Image(ImageElement),
}

impl Element {
    /// Returns the element's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Element::Button(_) => "button",
            Element::StaticSelect(_) => "static_select",
            Element::MultiStaticSelect(_) => "multi_static_select",
            Element::ExternalSelect(_) => "external_select",
            Element::MultiExternalSelect(_) => "multi_external_select",
            Element::UsersSelect(_) => "users_select",
            Element::MultiUsersSelect(_) => "multi_users_select",
            Element::ConversationsSelect(_) => "conversations_select",
            Element::MultiConversationsSelect(_) => "multi_conversations_select",
            Element::Overflow(_) => "overflow",
            Element::Checkboxes(_) => "checkboxes",
            Element::RadioButtons(_) => "radio_buttons",
            Element::Datepicker(_) => "datepicker",
            Element::Timepicker(_) => "timepicker",
            Element::PlainTextInput(_) => "plain_text_input",
            Element::EmailTextInput(_) => "email_text_input",
            Element::Image(_) => "image",
        }
    }

    /// Returns the element's `action_id`, if it has one.
    pub fn action_id(&self) -> Option<&str> {
        let id = match self {
            Element::Button(e) => &e.action_id,
            Element::StaticSelect(e) | Element::MultiStaticSelect(e) => &e.action_id,
            Element::ExternalSelect(e) | Element::MultiExternalSelect(e) => &e.action_id,
            Element::UsersSelect(e) | Element::MultiUsersSelect(e) => &e.action_id,
            Element::ConversationsSelect(e) | Element::MultiConversationsSelect(e) => &e.action_id,
            Element::Overflow(e) => &e.action_id,
            Element::Checkboxes(e) => &e.action_id,
            Element::RadioButtons(e) => &e.action_id,
            Element::Datepicker(e) => &e.action_id,
            Element::Timepicker(e) => &e.action_id,
            Element::PlainTextInput(e) => &e.action_id,
            Element::EmailTextInput(e) => &e.action_id,
            Element::Image(_) => return None,
        };
        id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ButtonElement {
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<ButtonStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmObject>,
}

/// Static menu, single (`initial_option`) or multi (`initial_options`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticSelectElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(flatten)]
    pub options: OptionList,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExternalSelectElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_query_length: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UsersSelectElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_user: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_users: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_selected_items: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmObject>,
}

/// Which conversations a conversation menu lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConversationFilter {
    pub include: Vec<ConversationType>,
    pub exclude_bot_users: bool,
    pub exclude_external_shared_channels: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationsSelectElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    pub filter: ConversationFilter,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_conversations: Option<Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverflowElement {
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confirm: Option<ConfirmObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckboxesElement {
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_options: Option<Vec<OptionObject>>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadioButtonsElement {
    pub options: Vec<OptionObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_option: Option<OptionObject>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DatepickerElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_date: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimepickerElement {
    pub placeholder: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    /// `HH:mm`, 24-hour clock.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_time: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DispatchActionConfig {
    pub trigger_actions_on: Vec<TriggerAction>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlainTextInputElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    pub multiline: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dispatch_action_config: Option<DispatchActionConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmailTextInputElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initial_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub focus_on_load: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageElement {
    pub image_url: String,
    pub alt_text: String,
}
