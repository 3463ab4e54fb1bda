//! Input configuration for every node kind.
//!
//! Each builder takes one of these structs instead of a loose bag of
//! fields. All of them deserialize with `deny_unknown_fields`, so a
//! misspelled key is rejected instead of silently ignored:
//!
//! ```rust
//! use block_kit::config::{self, HeaderConfig};
//! use serde_json::json;
//!
//! let header: HeaderConfig = config::from_json(json!({"text": "Hello"})).unwrap();
//! assert_eq!(header.text, "Hello");
//!
//! let err = config::from_json::<HeaderConfig>(json!({"text": "Hello", "colour": "red"}));
//! assert!(err.is_err());
//! ```

pub mod accessory;
pub mod blocks;
pub mod input;
pub mod select;
pub mod view;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::BlockError;

pub use accessory::{
    ButtonConfig, ButtonValue, ConversationSelectConfig, DatepickerConfig, ImageElementConfig,
    OverflowConfig, StaticSelectAccessoryConfig, UsersSelectAccessoryConfig,
};
pub use blocks::{
    ContextContent, ContextImage, ContextItem, ContextConfig, FieldsConfig, HeaderConfig,
    ImageConfig, SectionTextConfig,
};
pub use input::{
    CheckboxesConfig, ConversationSelectInputConfig, CountrySelectConfig, DatepickerInputConfig,
    EmailInputConfig, ExternalSelectConfig, RadioSelectConfig, StaticSelectInputConfig,
    TextInputConfig, TimepickerConfig, TimezonePickerConfig, UserSelectInputConfig,
};
pub use select::{StaticSelectConfig, UserSelectConfig};
pub use view::ViewConfig;

/// Converts a JSON value into a configuration struct.
///
/// Unknown keys, missing required keys and mistyped values are reported as
/// [`BlockError::Config`].
pub fn from_json<T: DeserializeOwned>(value: Value) -> Result<T, BlockError> {
    serde_json::from_value(value).map_err(BlockError::from)
}

/// A confirmation dialog: all four fields or none.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfirmDialog {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub confirm_text: Option<String>,
    #[serde(default)]
    pub cancel_text: Option<String>,
}

impl ConfirmDialog {
    /// Creates a complete dialog.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        confirm_text: impl Into<String>,
        cancel_text: impl Into<String>,
    ) -> Self {
        Self {
            title: Some(title.into()),
            description: Some(description.into()),
            confirm_text: Some(confirm_text.into()),
            cancel_text: Some(cancel_text.into()),
        }
    }

    /// Returns true if no field is set.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.confirm_text.is_none()
            && self.cancel_text.is_none()
    }
}

/// A single value or a list of values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    /// Returns the single value, or the first of a list.
    pub fn into_first(self) -> Option<T> {
        match self {
            OneOrMany::One(value) => Some(value),
            OneOrMany::Many(values) => values.into_iter().next(),
        }
    }

    /// Returns every value as a list.
    pub fn into_vec(self) -> Vec<T> {
        match self {
            OneOrMany::One(value) => vec![value],
            OneOrMany::Many(values) => values,
        }
    }
}

impl From<&str> for OneOrMany<String> {
    fn from(value: &str) -> Self {
        OneOrMany::One(value.to_string())
    }
}

impl<T> From<Vec<T>> for OneOrMany<T> {
    fn from(values: Vec<T>) -> Self {
        OneOrMany::Many(values)
    }
}

// === serde defaults ===

pub(crate) fn default_true() -> bool {
    true
}

pub(crate) fn default_image_alt() -> String {
    "image".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use serde_json::json;

    #[test]
    fn test_from_json_rejects_unknown_fields() {
        let err = from_json::<ConfirmDialog>(json!({"title": "T", "colour": "red"})).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Shape);
        assert!(err.to_string().contains("colour"));
    }

    #[test]
    fn test_confirm_dialog_partial() {
        let dialog: ConfirmDialog = from_json(json!({"title": "T", "confirm_text": "Yes"})).unwrap();
        assert!(!dialog.is_empty());
        assert_eq!(dialog.cancel_text, None);
        assert!(ConfirmDialog::default().is_empty());
    }

    #[test]
    fn test_one_or_many() {
        let one: OneOrMany<String> = from_json(json!("U1")).unwrap();
        assert_eq!(one.clone().into_first().as_deref(), Some("U1"));
        assert_eq!(one.into_vec(), vec!["U1".to_string()]);

        let many: OneOrMany<String> = from_json(json!(["U1", "U2"])).unwrap();
        assert_eq!(many.clone().into_first().as_deref(), Some("U1"));
        assert_eq!(many.into_vec().len(), 2);
    }
}
