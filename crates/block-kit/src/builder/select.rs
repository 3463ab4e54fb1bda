//! Select menus for actions blocks, and the element assembly shared with
//! accessories and input blocks.

use crate::builder::{confirm_object, flag, present};
use crate::config::{OneOrMany, StaticSelectConfig, UserSelectConfig};
use crate::error::BlockError;
use crate::model::{ConfirmObject, Element, OptionList, StaticSelectElement, TextObject, UsersSelectElement};
use crate::options::{InitialSelection, SelectionState, normalize, resolve_initial};
use crate::validate::nodes::{validate_static_select, validate_users_select};

/// Users select element.
///
/// Single select takes the first of `initial_users`; multi select takes
/// all of them. `max_selected_items` only applies to multi select.
pub fn user_select(config: UserSelectConfig) -> Result<Element, BlockError> {
    validate_users_select(Some(config.placeholder.as_str()), config.action_id.as_deref())?;
    let confirm = confirm_object(config.confirm.as_ref())?;
    Ok(users_element(UsersParts {
        placeholder: TextObject::plain(config.placeholder),
        action_id: present(config.action_id),
        initial_users: config.initial_users,
        multi: config.multi,
        max_selected_items: config.max_selected_items,
        focus_on_load: config.focus_on_load,
        confirm,
    }))
}

/// Static select element (single select), flat or grouped.
pub fn static_select(config: StaticSelectConfig) -> Result<Element, BlockError> {
    validate_static_select(Some(config.placeholder.as_str()), config.action_id.as_deref(), &config.options)?;
    let confirm = confirm_object(config.confirm.as_ref())?;
    Ok(static_element(StaticParts {
        placeholder: TextObject::plain(config.placeholder),
        action_id: present(config.action_id),
        options: normalize(&config.options),
        initial: &config.initial_option,
        multi: false,
        max_selected_items: None,
        focus_on_load: config.focus_on_load,
        confirm,
    }))
}

// =========================================================================
// Shared assembly
// =========================================================================

pub(crate) struct UsersParts {
    pub placeholder: TextObject,
    pub action_id: Option<String>,
    pub initial_users: Option<OneOrMany<String>>,
    pub multi: bool,
    pub max_selected_items: Option<u32>,
    pub focus_on_load: bool,
    pub confirm: Option<ConfirmObject>,
}

/// Builds a `users_select` or `multi_users_select` element.
pub(crate) fn users_element(parts: UsersParts) -> Element {
    let initial = parts.initial_users.map(OneOrMany::into_vec).unwrap_or_default();
    let initial: Vec<String> = initial.into_iter().filter(|u| !u.is_empty()).collect();

    let mut element = UsersSelectElement {
        placeholder: parts.placeholder,
        action_id: parts.action_id,
        initial_user: None,
        initial_users: None,
        max_selected_items: None,
        focus_on_load: flag(parts.focus_on_load),
        confirm: parts.confirm,
    };
    if parts.multi {
        element.initial_users = (!initial.is_empty()).then_some(initial);
        element.max_selected_items = parts.max_selected_items.filter(|&n| n > 0);
        Element::MultiUsersSelect(element)
    } else {
        element.initial_user = initial.into_iter().next();
        Element::UsersSelect(element)
    }
}

pub(crate) struct StaticParts<'a> {
    pub placeholder: TextObject,
    pub action_id: Option<String>,
    pub options: OptionList,
    pub initial: &'a InitialSelection,
    pub multi: bool,
    pub max_selected_items: Option<u32>,
    pub focus_on_load: bool,
    pub confirm: Option<ConfirmObject>,
}

/// Builds a `static_select` or `multi_static_select` element, resolving
/// the initial selection against the rendered options.
pub(crate) fn static_element(parts: StaticParts<'_>) -> Element {
    let selection = resolve_initial(&parts.options, parts.initial, parts.multi);
    let mut element = StaticSelectElement {
        placeholder: parts.placeholder,
        action_id: parts.action_id,
        options: parts.options,
        initial_option: None,
        initial_options: None,
        max_selected_items: parts.max_selected_items.filter(|&n| n > 0),
        focus_on_load: flag(parts.focus_on_load),
        confirm: parts.confirm,
    };
    match selection {
        SelectionState::Single(option) => element.initial_option = Some(option),
        SelectionState::Multi(options) => element.initial_options = Some(options),
        SelectionState::Empty => {}
    }
    if parts.multi {
        Element::MultiStaticSelect(element)
    } else {
        Element::StaticSelect(element)
    }
}
