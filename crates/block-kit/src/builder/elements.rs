//! Standalone interactive elements for actions blocks.

use crate::builder::{confirm_object, present};
use crate::config::ButtonConfig;
use crate::error::BlockError;
use crate::model::{ButtonElement, Element, TextObject};
use crate::validate::nodes::validate_button;

/// Button element.
///
/// Structured values are serialized to JSON before the length check.
pub fn button(config: ButtonConfig) -> Result<Element, BlockError> {
    validate_button(&config)?;
    let confirm = confirm_object(config.confirm.as_ref())?;
    let value = match &config.value {
        Some(value) => Some(value.to_payload()?),
        None => None,
    };
    Ok(Element::Button(ButtonElement {
        text: TextObject::plain_emoji(config.text),
        action_id: present(config.action_id),
        url: present(config.url),
        value,
        style: config.style,
        confirm,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ButtonValue, ConfirmDialog, from_json};
    use crate::model::ButtonStyle;
    use serde_json::json;

    #[test]
    fn test_button_shape() {
        let config = ButtonConfig::new("Approve")
            .action_id("approve")
            .value("req-42")
            .style(ButtonStyle::Primary);
        assert_eq!(
            serde_json::to_value(button(config).unwrap()).unwrap(),
            json!({
                "type": "button",
                "text": {"type": "plain_text", "text": "Approve", "emoji": true},
                "action_id": "approve",
                "value": "req-42",
                "style": "primary"
            })
        );
    }

    #[test]
    fn test_button_json_value() {
        let config = ButtonConfig::new("Go").value(ButtonValue::from(json!({"id": 7})));
        let value = serde_json::to_value(button(config).unwrap()).unwrap();
        assert_eq!(value["value"], r#"{"id":7}"#);
    }

    #[test]
    fn test_button_confirm() {
        let config = ButtonConfig::new("Delete")
            .style(ButtonStyle::Danger)
            .confirm(ConfirmDialog::new("Delete?", "This is permanent", "Delete", "Cancel"));
        let value = serde_json::to_value(button(config).unwrap()).unwrap();
        assert_eq!(value["confirm"]["confirm"]["text"], "Delete");
        assert_eq!(value["style"], "danger");
    }

    #[test]
    fn test_button_from_json() {
        let config: ButtonConfig = from_json(json!({"text": "Docs", "url": "https://example.com"})).unwrap();
        let value = serde_json::to_value(button(config).unwrap()).unwrap();
        assert_eq!(value["url"], "https://example.com");
        assert!(value.get("action_id").is_none());

        assert!(from_json::<ButtonConfig>(json!({"text": "x", "style": "secondary"})).is_err());
    }
}
