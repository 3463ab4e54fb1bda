//! Per-node-kind validators.
//!
//! Each validator is a pure composition of the constraint primitives with
//! node-specific limits. Builders run them to completion before assembling
//! any output, so an invalid node is never observable.

use crate::config::{
    ButtonConfig, ConfirmDialog, ContextConfig, ContextContent, FieldsConfig, HeaderConfig,
    ImageConfig, OverflowConfig,
};
use crate::error::BlockError;
use crate::limits::*;
use crate::model::{ConversationType, Element};
use crate::options::{OptionInput, Options};
use crate::util::datetime::{parse_calendar_date, parse_clock_time};
use crate::validate::constraints::{
    require_bounded_array, require_identifier, require_non_empty_text, require_option_list,
    require_optional_text, require_options, require_text, require_text_at,
};

// =========================================================================
// Blocks
// =========================================================================

/// Checks an optional `block_id`.
pub fn validate_block_id(block_id: Option<&str>) -> Result<(), BlockError> {
    require_identifier(block_id, "block_id", true)
}

/// Actions block: 1 to 25 elements.
pub fn validate_actions(elements: &[Element], block_id: Option<&str>) -> Result<(), BlockError> {
    require_bounded_array(elements, "elements", 1, MAX_ACTION_ELEMENTS)?;
    validate_block_id(block_id)
}

/// Context block: up to 10 elements, each text at most 3000 characters.
pub fn validate_context(config: &ContextConfig) -> Result<(), BlockError> {
    match &config.text {
        ContextContent::Text(text) => require_text(text, "text", MAX_TEXT_LEN)?,
        ContextContent::Texts(texts) => {
            require_bounded_array(texts, "elements", 1, MAX_CONTEXT_ELEMENTS)?;
            for (i, text) in texts.iter().enumerate() {
                require_text_at(text, "text", MAX_TEXT_LEN, Some(i))?;
            }
        }
        ContextContent::Items(items) => {
            let count = items
                .iter()
                .map(|item| usize::from(item.text.is_some()) + usize::from(item.image.is_some()))
                .sum::<usize>();
            if count == 0 || count > MAX_CONTEXT_ELEMENTS {
                return Err(BlockError::CountOutOfRange {
                    field: "elements",
                    min: 1,
                    max: MAX_CONTEXT_ELEMENTS,
                    len: count,
                });
            }
            for (i, item) in items.iter().enumerate() {
                if let Some(text) = &item.text {
                    require_text_at(text, "text", MAX_TEXT_LEN, Some(i))?;
                }
                if let Some(image) = &item.image {
                    require_text_at(&image.url, "image.url", MAX_URL_LEN, Some(i))?;
                    if let Some(alt) = &image.alt {
                        require_text_at(alt, "image.alt", MAX_IMAGE_TEXT_LEN, Some(i))?;
                    }
                }
            }
        }
    }
    validate_block_id(config.block_id.as_deref())
}

/// Header block: at most 150 characters.
pub fn validate_header(config: &HeaderConfig) -> Result<(), BlockError> {
    require_text(&config.text, "text", MAX_HEADER_LEN)?;
    validate_block_id(config.block_id.as_deref())
}

/// Image block: url at most 3000, alt text and title at most 2000.
pub fn validate_image(config: &ImageConfig) -> Result<(), BlockError> {
    validate_image_parts(&config.url, &config.alt)?;
    require_optional_text(config.title.as_deref(), "title", MAX_IMAGE_TEXT_LEN)?;
    validate_block_id(config.block_id.as_deref())
}

/// Image element (accessory or context).
pub fn validate_image_parts(url: &str, alt: &str) -> Result<(), BlockError> {
    require_text(url, "url", MAX_URL_LEN)?;
    require_text(alt, "alt", MAX_IMAGE_TEXT_LEN)
}

/// Markdown or plain text section: at most 3000 characters.
pub fn validate_section_text(text: &str, block_id: Option<&str>) -> Result<(), BlockError> {
    require_text(text, "text", MAX_TEXT_LEN)?;
    validate_block_id(block_id)
}

/// Fields section: 1 to 10 fields, each at most 2000 characters.
pub fn validate_fields(config: &FieldsConfig) -> Result<(), BlockError> {
    require_bounded_array(&config.fields, "fields", 1, MAX_FIELDS)?;
    for (i, field) in config.fields.iter().enumerate() {
        require_text_at(field, "field", MAX_FIELD_LEN, Some(i))?;
    }
    validate_block_id(config.block_id.as_deref())
}

/// Input block wrapper: label and hint at most 2000 characters.
pub fn validate_input(label: &str, hint: Option<&str>, block_id: Option<&str>) -> Result<(), BlockError> {
    validate_block_id(block_id)?;
    require_optional_text(hint, "hint", MAX_LABEL_LEN)?;
    require_text(label, "label", MAX_LABEL_LEN)
}

// =========================================================================
// Composition objects
// =========================================================================

/// Confirmation dialog: all four fields present, or none.
///
/// Title at most 100 characters, description 300, button labels 30.
pub fn validate_confirm_dialog(dialog: &ConfirmDialog) -> Result<(), BlockError> {
    if dialog.is_empty() {
        return Ok(());
    }
    require_non_empty_text(dialog.title.as_deref(), "confirm.title", MAX_CONFIRM_TITLE_LEN, false)?;
    require_non_empty_text(dialog.description.as_deref(), "confirm.description", MAX_CONFIRM_TEXT_LEN, false)?;
    require_non_empty_text(dialog.confirm_text.as_deref(), "confirm.confirm_text", MAX_CONFIRM_BUTTON_LEN, false)?;
    require_non_empty_text(dialog.cancel_text.as_deref(), "confirm.cancel_text", MAX_CONFIRM_BUTTON_LEN, false)
}

// =========================================================================
// Elements
// =========================================================================

/// Checks a required `action_id`.
pub fn validate_action_id(action_id: Option<&str>) -> Result<(), BlockError> {
    require_non_empty_text(action_id, "action_id", MAX_ACTION_ID_LEN, false)
}

/// Button: text at most 75, url 3000, serialized value 2000; optional action id.
pub fn validate_button(config: &ButtonConfig) -> Result<(), BlockError> {
    require_text(&config.text, "text", MAX_BUTTON_TEXT_LEN)?;
    require_optional_text(config.url.as_deref(), "url", MAX_URL_LEN)?;
    require_non_empty_text(config.action_id.as_deref(), "action_id", MAX_ACTION_ID_LEN, true)?;
    if let Some(value) = &config.value {
        let payload = value.to_payload()?;
        require_optional_text(Some(payload.as_str()), "value", MAX_BUTTON_VALUE_LEN)?;
    }
    if let Some(dialog) = &config.confirm {
        validate_confirm_dialog(dialog)?;
    }
    Ok(())
}

/// Checks a required placeholder.
pub fn validate_placeholder(placeholder: &str) -> Result<(), BlockError> {
    require_text(placeholder, "placeholder", MAX_PLACEHOLDER_LEN)
}

/// Users select; also used by email and external select inputs.
///
/// A placeholder, when given, must be non-empty.
pub fn validate_users_select(placeholder: Option<&str>, action_id: Option<&str>) -> Result<(), BlockError> {
    if let Some(placeholder) = placeholder {
        validate_placeholder(placeholder)?;
    }
    validate_action_id(action_id)
}

/// Static select: 1 to 100 options.
pub fn validate_static_select(
    placeholder: Option<&str>,
    action_id: Option<&str>,
    options: &Options,
) -> Result<(), BlockError> {
    validate_users_select(placeholder, action_id)?;
    require_option_list(options, MAX_SELECT_OPTIONS)
}

/// Overflow menu: 1 to 5 options.
pub fn validate_overflow(config: &OverflowConfig) -> Result<(), BlockError> {
    validate_action_id(config.action_id.as_deref())?;
    require_options(&config.options, MAX_OVERFLOW_OPTIONS)?;
    if let Some(dialog) = &config.confirm {
        validate_confirm_dialog(dialog)?;
    }
    Ok(())
}

/// Checkboxes and radio buttons: 1 to 10 options.
pub fn validate_choice(action_id: Option<&str>, options: &[OptionInput]) -> Result<(), BlockError> {
    validate_action_id(action_id)?;
    require_options(options, MAX_CHOICE_OPTIONS)
}

/// Conversation select: the filter lists at least one conversation type.
pub fn validate_conversation_select(
    placeholder: Option<&str>,
    action_id: Option<&str>,
    filter: &[ConversationType],
) -> Result<(), BlockError> {
    validate_users_select(placeholder, action_id)?;
    require_bounded_array(filter, "filter", 1, 4)
}

/// Date picker: the initial date, when given, is a real `YYYY-MM-DD` date.
pub fn validate_datepicker(
    placeholder: Option<&str>,
    action_id: Option<&str>,
    initial_date: Option<&str>,
) -> Result<(), BlockError> {
    validate_users_select(placeholder, action_id)?;
    if let Some(date) = initial_date.filter(|d| !d.is_empty()) {
        parse_calendar_date(date).map_err(|_| BlockError::InvalidDate {
            field: "initial_date",
            value: date.to_string(),
        })?;
    }
    Ok(())
}

/// Time picker: action id optional; the initial time, when given, parses as `hh:mm a`.
pub fn validate_timepicker(
    placeholder: &str,
    action_id: Option<&str>,
    initial_time: Option<&str>,
) -> Result<(), BlockError> {
    validate_placeholder(placeholder)?;
    require_non_empty_text(action_id, "action_id", MAX_ACTION_ID_LEN, true)?;
    if let Some(time) = initial_time.filter(|t| !t.is_empty()) {
        parse_clock_time(time).map_err(|_| BlockError::InvalidTime {
            field: "initial_time",
            value: time.to_string(),
        })?;
    }
    Ok(())
}

/// Plain text input: `min_length` at most 3000.
pub fn validate_plain_text_input(
    placeholder: Option<&str>,
    action_id: Option<&str>,
    min_length: Option<u64>,
) -> Result<(), BlockError> {
    if let Some(min) = min_length.filter(|&m| m > MAX_INPUT_MIN_LENGTH) {
        return Err(BlockError::NumberOutOfRange {
            field: "min_length",
            min: 0,
            max: MAX_INPUT_MIN_LENGTH,
            value: min,
        });
    }
    validate_users_select(placeholder, action_id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ButtonValue, ContextImage, ContextItem};
    use crate::error::ViolationKind;
    use serde_json::json;

    fn full_dialog() -> ConfirmDialog {
        ConfirmDialog::new("Sure?", "This cannot be undone", "Yes", "No")
    }

    #[test]
    fn test_confirm_dialog_all_or_nothing() {
        assert!(validate_confirm_dialog(&full_dialog()).is_ok());
        assert!(validate_confirm_dialog(&ConfirmDialog::default()).is_ok());

        let mut missing_cancel = full_dialog();
        missing_cancel.cancel_text = None;
        let err = validate_confirm_dialog(&missing_cancel).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::RequiredField);
        assert_eq!(err.field(), Some("confirm.cancel_text"));

        let mut long_title = full_dialog();
        long_title.title = Some("t".repeat(101));
        assert_eq!(validate_confirm_dialog(&long_title).unwrap_err().kind(), ViolationKind::Bound);
    }

    #[test]
    fn test_header_limit() {
        assert!(validate_header(&HeaderConfig::new("h".repeat(150))).is_ok());
        assert!(validate_header(&HeaderConfig::new("h".repeat(151))).is_err());
        assert!(validate_header(&HeaderConfig::new("")).is_err());
    }

    #[test]
    fn test_fields_bounds() {
        let config = FieldsConfig {
            fields: vec!["a".into(); 10],
            block_id: None,
        };
        assert!(validate_fields(&config).is_ok());

        let config = FieldsConfig {
            fields: vec!["a".into(); 11],
            block_id: None,
        };
        assert!(validate_fields(&config).is_err());

        let config = FieldsConfig {
            fields: vec!["a".into(), "f".repeat(2001)],
            block_id: None,
        };
        let err = validate_fields(&config).unwrap_err();
        assert!(err.to_string().ends_with("Position: 1"));
    }

    #[test]
    fn test_context_items_count() {
        let item = ContextItem {
            text: Some("t".into()),
            image: Some(ContextImage {
                url: "https://example.com/i.png".into(),
                alt: None,
            }),
        };
        let ok = ContextConfig {
            text: ContextContent::Items(vec![item.clone(); 5]),
            block_id: None,
        };
        assert!(validate_context(&ok).is_ok());

        let too_many = ContextConfig {
            text: ContextContent::Items(vec![item; 6]),
            block_id: None,
        };
        assert!(matches!(
            validate_context(&too_many),
            Err(BlockError::CountOutOfRange { len: 12, .. })
        ));
    }

    #[test]
    fn test_button_value_length_uses_serialized_form() {
        let value = ButtonValue::Json(json!({"payload": "x".repeat(1990)}));
        let config = ButtonConfig::new("Go").value(value);
        assert!(matches!(
            validate_button(&config),
            Err(BlockError::TooLong { field: "value", .. })
        ));
        assert!(validate_button(&ButtonConfig::new("b".repeat(76))).is_err());
        assert!(validate_button(&ButtonConfig::new("Go")).is_ok());
    }

    #[test]
    fn test_action_id_required_for_selects() {
        let options = Options::Flat(vec![OptionInput::new("A", "a")]);
        let err = validate_static_select(None, None, &options).unwrap_err();
        assert_eq!(err, BlockError::MissingField { field: "action_id" });
        assert!(validate_static_select(Some("Pick"), Some("pick"), &options).is_ok());
    }

    #[test]
    fn test_overflow_bounds() {
        let options = |n: usize| (0..n).map(|i| OptionInput::new("A", i as i64)).collect::<Vec<_>>();
        let config = OverflowConfig {
            options: options(5),
            action_id: Some("o".into()),
            confirm: None,
        };
        assert!(validate_overflow(&config).is_ok());
        let config = OverflowConfig {
            options: options(6),
            ..config
        };
        assert!(validate_overflow(&config).is_err());
    }

    #[test]
    fn test_choice_bounds() {
        let options: Vec<OptionInput> = (0..11).map(|i| OptionInput::new("A", i as i64)).collect();
        assert!(validate_choice(Some("c"), &options[..10]).is_ok());
        assert!(validate_choice(Some("c"), &options).is_err());
    }

    #[test]
    fn test_conversation_filter_non_empty() {
        assert!(validate_conversation_select(None, Some("c"), &[ConversationType::Im]).is_ok());
        assert!(validate_conversation_select(None, Some("c"), &[]).is_err());
    }

    #[test]
    fn test_datepicker_strict_date() {
        assert!(validate_datepicker(None, Some("d"), Some("2024-02-29")).is_ok());
        assert!(validate_datepicker(None, Some("d"), None).is_ok());
        for bad in ["2023-02-29", "2024-1-05", "2024/01/05", "tomorrow"] {
            let err = validate_datepicker(None, Some("d"), Some(bad)).unwrap_err();
            assert!(matches!(err, BlockError::InvalidDate { .. }), "{bad}");
        }
    }

    #[test]
    fn test_timepicker_time_format() {
        assert!(validate_timepicker("Time", None, Some("09:15 am")).is_ok());
        assert!(validate_timepicker("Time", None, None).is_ok());
        let err = validate_timepicker("Time", Some("t"), Some("25:00")).unwrap_err();
        assert_eq!(err, BlockError::InvalidTime { field: "initial_time", value: "25:00".into() });
        assert!(validate_timepicker("", None, None).is_err());
    }

    #[test]
    fn test_plain_text_min_length() {
        assert!(validate_plain_text_input(None, Some("t"), Some(3000)).is_ok());
        let err = validate_plain_text_input(None, Some("t"), Some(3001)).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Bound);
    }

    #[test]
    fn test_input_wrapper() {
        assert!(validate_input("Name", None, None).is_ok());
        assert!(validate_input("", None, None).is_err());
        assert!(validate_input("Name", Some(&"h".repeat(2001)), None).is_err());
    }
}
