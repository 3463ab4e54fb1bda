//! Input blocks.
//!
//! Each builder validates the input wrapper (label, hint, block id) and its
//! element, then wraps the element in
//! `{type: "input", element, label, optional, dispatch_action, hint?, block_id?}`.
//! Labels and hints are plain text with `emoji: true`.

use tracing::debug;

use crate::builder::accessory::{ConversationParts, conversations_element};
use crate::builder::present;
use crate::builder::select::{StaticParts, UsersParts, static_element, users_element};
use crate::config::{
    CheckboxesConfig, ConversationSelectInputConfig, CountrySelectConfig, DatepickerInputConfig, EmailInputConfig,
    ExternalSelectConfig, RadioSelectConfig, StaticSelectInputConfig, TextInputConfig, TimepickerConfig,
    TimezonePickerConfig, UserSelectInputConfig,
};
use crate::error::BlockError;
use crate::model::{
    Block, CheckboxesElement, DatepickerElement, DispatchActionConfig, Element, EmailTextInputElement,
    ExternalSelectElement, InputBlock, OptionValue, PlainTextInputElement, RadioButtonsElement, TextObject,
    TimepickerElement, TriggerAction,
};
use crate::options::{
    InitialSelection, OptionFormat, OptionInput, Options, normalize, render_options, resolve_initial_in,
};
use crate::reference;
use crate::util::datetime::{Clock, format_hh_mm, parse_clock_time, round_up_to_five};
use crate::validate::nodes::{
    validate_choice, validate_conversation_select, validate_datepicker, validate_input, validate_plain_text_input,
    validate_static_select, validate_timepicker, validate_users_select,
};

/// The input block fields around an element.
struct Wrapper {
    label: String,
    block_id: Option<String>,
    optional: bool,
    dispatch_action: bool,
    hint: Option<String>,
}

impl Wrapper {
    fn validate(&self) -> Result<(), BlockError> {
        validate_input(&self.label, self.hint.as_deref(), self.block_id.as_deref())
    }

    fn wrap(self, element: Element) -> Block {
        Block::Input(InputBlock {
            element,
            label: TextObject::plain_emoji(self.label),
            optional: self.optional,
            dispatch_action: self.dispatch_action,
            hint: present(self.hint).map(TextObject::plain_emoji),
            block_id: present(self.block_id),
        })
    }
}

macro_rules! wrapper {
    ($config:expr) => {
        Wrapper {
            label: $config.label,
            block_id: $config.block_id,
            optional: $config.optional,
            dispatch_action: $config.dispatch_action,
            hint: $config.hint,
        }
    };
}

/// Plain text input.
///
/// `dispatch_action` also sets the element to dispatch on enter.
/// `min_length` and `max_length` of zero are omitted.
pub fn text(config: TextInputConfig) -> Result<Block, BlockError> {
    let placeholder = present(config.placeholder);
    validate_plain_text_input(placeholder.as_deref(), config.action_id.as_deref(), config.min_length)?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let element = Element::PlainTextInput(PlainTextInputElement {
        placeholder: placeholder.map(TextObject::plain),
        action_id: present(config.action_id),
        initial_value: present(config.initial_value),
        multiline: config.multiline,
        min_length: config.min_length.filter(|&n| n > 0),
        max_length: config.max_length.filter(|&n| n > 0),
        dispatch_action_config: config.dispatch_action.then(|| DispatchActionConfig {
            trigger_actions_on: vec![TriggerAction::OnEnterPressed],
        }),
        focus_on_load: config.focus_on_load.then_some(true),
    });
    Ok(wrapper.wrap(element))
}

/// Conversation select input, single or multi.
pub fn conversation_select(config: ConversationSelectInputConfig) -> Result<Block, BlockError> {
    validate_conversation_select(Some(config.placeholder.as_str()), config.action_id.as_deref(), &config.filter)?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let initial = config
        .initial_conversations
        .map(|c| c.into_vec())
        .unwrap_or_default()
        .into_iter()
        .filter(|c| !c.is_empty())
        .collect();
    let element = conversations_element(ConversationParts {
        placeholder: TextObject::plain(config.placeholder),
        action_id: present(config.action_id),
        filter: config.filter,
        exclude_bot_users: config.exclude_bot_users,
        exclude_external_shared_channels: config.exclude_external_shared_channels,
        initial,
        multi: config.multi,
    });
    Ok(wrapper.wrap(element))
}

/// Static select input, flat or grouped, single or multi.
///
/// `max_selected_items` only applies to multi select.
pub fn static_select(config: StaticSelectInputConfig) -> Result<Block, BlockError> {
    validate_static_select(Some(config.placeholder.as_str()), config.action_id.as_deref(), &config.options)?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let element = static_element(StaticParts {
        placeholder: TextObject::plain(config.placeholder),
        action_id: present(config.action_id),
        options: normalize(&config.options),
        initial: &config.initial_options,
        multi: config.multi,
        max_selected_items: config.max_selected_items.filter(|_| config.multi),
        focus_on_load: false,
        confirm: None,
    });
    Ok(wrapper.wrap(element))
}

/// Radio buttons input: 1 to 10 options.
///
/// The initial option matches by string form, like every other select.
pub fn radio_select(config: RadioSelectConfig) -> Result<Block, BlockError> {
    validate_choice(config.action_id.as_deref(), &config.options)?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let options = render_options(&config.options, OptionFormat::Plain);
    let initial = config.initial_option.map_or(InitialSelection::None, InitialSelection::Single);
    let initial_option = resolve_initial_in(&options, &initial, false).into_single();
    let element = Element::RadioButtons(RadioButtonsElement {
        options,
        action_id: present(config.action_id),
        initial_option,
    });
    Ok(wrapper.wrap(element))
}

/// Checkboxes wrapped in an input block.
pub fn checkboxes(config: CheckboxesConfig) -> Result<Block, BlockError> {
    validate_choice(config.action_id.as_deref(), &config.options)?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;
    let element = checkbox_group(config.options, config.action_id, config.initial_options);
    Ok(wrapper.wrap(element))
}

/// Bare checkboxes element, for actions blocks and section accessories.
///
/// The wrapper fields of the config are ignored.
pub fn checkboxes_element(config: CheckboxesConfig) -> Result<Element, BlockError> {
    validate_choice(config.action_id.as_deref(), &config.options)?;
    Ok(checkbox_group(config.options, config.action_id, config.initial_options))
}

fn checkbox_group(options: Vec<OptionInput>, action_id: Option<String>, initial: Vec<OptionValue>) -> Element {
    let options = render_options(&options, OptionFormat::Markdown);
    let initial_options = resolve_initial_in(&options, &InitialSelection::Multi(initial), true).into_multi();
    Element::Checkboxes(CheckboxesElement {
        options,
        action_id: present(action_id),
        initial_options,
    })
}

/// Date picker input.
pub fn datepicker(config: DatepickerInputConfig) -> Result<Block, BlockError> {
    validate_datepicker(
        Some(config.placeholder.as_str()),
        config.action_id.as_deref(),
        config.initial_date.as_deref(),
    )?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let element = Element::Datepicker(DatepickerElement {
        placeholder: TextObject::plain_emoji(config.placeholder),
        action_id: present(config.action_id),
        initial_date: present(config.initial_date),
    });
    Ok(wrapper.wrap(element))
}

/// Time picker input.
///
/// Without an initial time, the picker starts at `clock`'s current time in
/// `timezone` (local time when unset), moved up to the next 5-minute
/// boundary. The initial time is always emitted as 24-hour `HH:mm`.
pub fn timepicker(config: TimepickerConfig, clock: &dyn Clock) -> Result<Block, BlockError> {
    let initial_time = present(config.initial_time);
    validate_timepicker(&config.placeholder, config.action_id.as_deref(), initial_time.as_deref())?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let time = match initial_time {
        Some(time) => parse_clock_time(&time).map_err(|_| BlockError::InvalidTime {
            field: "initial_time",
            value: time.clone(),
        })?,
        None => {
            let zone = present(config.timezone);
            let now = clock.now(zone.as_deref())?;
            debug!(?zone, %now, "timepicker defaulting to current time");
            round_up_to_five(now)
        }
    };
    let element = Element::Timepicker(TimepickerElement {
        placeholder: TextObject::plain_emoji(config.placeholder),
        action_id: present(config.action_id),
        initial_time: Some(format_hh_mm(time)),
    });
    Ok(wrapper.wrap(element))
}

/// Time zone picker: a static select over the built-in zones, grouped by
/// region prefix.
pub fn timezone_picker(config: TimezonePickerConfig) -> Result<Block, BlockError> {
    static_select(StaticSelectInputConfig {
        label: config.label,
        placeholder: config.placeholder,
        block_id: config.block_id,
        action_id: config.action_id,
        optional: config.optional,
        options: Options::Grouped(reference::grouped_time_zones().to_vec()),
        initial_options: InitialSelection::from(config.initial_timezone),
        multi: false,
        max_selected_items: None,
        dispatch_action: config.dispatch_action,
        hint: config.hint,
    })
}

/// External data source select, single or multi.
///
/// Initial options are given in full since the menu's options load remotely.
pub fn external_select(config: ExternalSelectConfig) -> Result<Block, BlockError> {
    validate_users_select(Some(config.placeholder.as_str()), config.action_id.as_deref())?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let initial = config
        .initial_options
        .map(|o| render_options(&o.into_vec(), OptionFormat::Plain))
        .unwrap_or_default();
    let mut element = ExternalSelectElement {
        placeholder: TextObject::plain(config.placeholder),
        action_id: present(config.action_id),
        min_query_length: config.min_query_length,
        initial_option: None,
        initial_options: None,
        max_selected_items: None,
    };
    let element = if config.multi {
        element.initial_options = (!initial.is_empty()).then_some(initial);
        element.max_selected_items = config.max_selected_items.filter(|&n| n > 0);
        Element::MultiExternalSelect(element)
    } else {
        element.initial_option = initial.into_iter().next();
        Element::ExternalSelect(element)
    };
    Ok(wrapper.wrap(element))
}

/// Users select input, single or multi.
pub fn user_select(config: UserSelectInputConfig) -> Result<Block, BlockError> {
    validate_users_select(Some(config.placeholder.as_str()), config.action_id.as_deref())?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let element = users_element(UsersParts {
        placeholder: TextObject::plain(config.placeholder),
        action_id: present(config.action_id),
        initial_users: config.initial_users,
        multi: config.multi,
        max_selected_items: config.max_selected_items,
        focus_on_load: config.focus_on_load,
        confirm: None,
    });
    Ok(wrapper.wrap(element))
}

/// Email input.
pub fn email(config: EmailInputConfig) -> Result<Block, BlockError> {
    let placeholder = present(config.placeholder);
    validate_users_select(placeholder.as_deref(), config.action_id.as_deref())?;
    let wrapper = wrapper!(config);
    wrapper.validate()?;

    let element = Element::EmailTextInput(EmailTextInputElement {
        placeholder: placeholder.map(TextObject::plain_emoji),
        action_id: present(config.action_id),
        initial_value: present(config.initial_value),
        focus_on_load: config.focus_on_load.then_some(true),
    });
    Ok(wrapper.wrap(element))
}

/// Country select: a static select over the built-in countries, grouped by
/// first letter. Option values are country ids.
pub fn country_select(config: CountrySelectConfig) -> Result<Block, BlockError> {
    static_select(StaticSelectInputConfig {
        label: config.label,
        placeholder: config.placeholder,
        block_id: config.block_id,
        action_id: config.action_id,
        optional: config.optional,
        options: Options::Grouped(reference::grouped_countries().to_vec()),
        initial_options: InitialSelection::from(config.initial_country),
        multi: false,
        max_selected_items: None,
        dispatch_action: config.dispatch_action,
        hint: config.hint,
    })
}
