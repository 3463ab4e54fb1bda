//! Section accessories.
//!
//! Each builder returns the accessory [`Element`]; attach it to a section
//! with [`SectionTextConfig::accessory`](crate::config::SectionTextConfig::accessory).

use crate::builder::select::{StaticParts, UsersParts, static_element, users_element};
use crate::builder::{confirm_object, elements, present};
use crate::config::{
    ButtonConfig, ConversationSelectConfig, DatepickerConfig, ImageElementConfig, OverflowConfig,
    StaticSelectAccessoryConfig, UsersSelectAccessoryConfig,
};
use crate::error::BlockError;
use crate::model::{
    ConversationFilter, ConversationType, ConversationsSelectElement, DatepickerElement, Element, ImageElement,
    OptionList, OverflowElement, TextObject,
};
use crate::options::{OptionFormat, Options, normalize, render_options};
use crate::validate::nodes::{
    validate_conversation_select, validate_datepicker, validate_image_parts, validate_overflow,
    validate_static_select, validate_users_select,
};

pub fn button(config: ButtonConfig) -> Result<Element, BlockError> {
    elements::button(config)
}

/// Static select accessory. Flat options render as plain text without emoji.
pub fn static_select(config: StaticSelectAccessoryConfig) -> Result<Element, BlockError> {
    validate_static_select(Some(config.placeholder.as_str()), config.action_id.as_deref(), &config.options)?;
    let options = match &config.options {
        Options::Flat(list) => OptionList::Flat(render_options(list, OptionFormat::Plain)),
        grouped @ Options::Grouped(_) => normalize(grouped),
    };
    Ok(static_element(StaticParts {
        placeholder: TextObject::plain_emoji(config.placeholder),
        action_id: present(config.action_id),
        options,
        initial: &config.initial_option,
        multi: false,
        max_selected_items: None,
        focus_on_load: false,
        confirm: None,
    }))
}

/// Overflow menu: 1 to 5 options, each optionally a link.
pub fn overflow(config: OverflowConfig) -> Result<Element, BlockError> {
    validate_overflow(&config)?;
    let confirm = confirm_object(config.confirm.as_ref())?;
    Ok(Element::Overflow(OverflowElement {
        options: render_options(&config.options, OptionFormat::Link),
        action_id: present(config.action_id),
        confirm,
    }))
}

pub fn image(config: ImageElementConfig) -> Result<Element, BlockError> {
    validate_image_parts(&config.url, &config.alt)?;
    Ok(Element::Image(ImageElement {
        image_url: config.url,
        alt_text: config.alt,
    }))
}

/// Conversation select accessory.
///
/// The initial conversation becomes `initial_conversations` for multi select.
pub fn conversation_select(config: ConversationSelectConfig) -> Result<Element, BlockError> {
    validate_conversation_select(Some(config.placeholder.as_str()), config.action_id.as_deref(), &config.filter)?;
    let initial: Vec<String> = present(config.initial_conversation).into_iter().collect();
    Ok(conversations_element(ConversationParts {
        placeholder: TextObject::plain_emoji(config.placeholder),
        action_id: present(config.action_id),
        filter: config.filter,
        exclude_bot_users: config.exclude_bot_users,
        exclude_external_shared_channels: config.exclude_external_shared_channels,
        initial,
        multi: config.multi,
    }))
}

/// Date picker accessory.
pub fn datepicker(config: DatepickerConfig) -> Result<Element, BlockError> {
    validate_datepicker(Some(config.placeholder.as_str()), config.action_id.as_deref(), config.initial_date.as_deref())?;
    Ok(Element::Datepicker(DatepickerElement {
        placeholder: TextObject::plain_emoji(config.placeholder),
        action_id: present(config.action_id),
        initial_date: present(config.initial_date),
    }))
}

/// Users select accessory, single (`users_select`) or multi (`multi_users_select`).
pub fn users_select(config: UsersSelectAccessoryConfig) -> Result<Element, BlockError> {
    validate_users_select(Some(config.placeholder.as_str()), config.action_id.as_deref())?;
    Ok(users_element(UsersParts {
        placeholder: TextObject::plain_emoji(config.placeholder),
        action_id: present(config.action_id),
        initial_users: config.initial_users,
        multi: config.multi,
        max_selected_items: config.max_selected_items,
        focus_on_load: false,
        confirm: None,
    }))
}

pub(crate) struct ConversationParts {
    pub placeholder: TextObject,
    pub action_id: Option<String>,
    pub filter: Vec<ConversationType>,
    pub exclude_bot_users: bool,
    pub exclude_external_shared_channels: bool,
    pub initial: Vec<String>,
    pub multi: bool,
}

/// Builds a `conversations_select` or `multi_conversations_select` element.
pub(crate) fn conversations_element(parts: ConversationParts) -> Element {
    let mut element = ConversationsSelectElement {
        placeholder: parts.placeholder,
        action_id: parts.action_id,
        filter: ConversationFilter {
            include: parts.filter,
            exclude_bot_users: parts.exclude_bot_users,
            exclude_external_shared_channels: parts.exclude_external_shared_channels,
        },
        initial_conversation: None,
        initial_conversations: None,
    };
    if parts.multi {
        element.initial_conversations = (!parts.initial.is_empty()).then_some(parts.initial);
        Element::MultiConversationsSelect(element)
    } else {
        element.initial_conversation = parts.initial.into_iter().next();
        Element::ConversationsSelect(element)
    }
}
