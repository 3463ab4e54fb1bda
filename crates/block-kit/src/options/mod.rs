//! Option resolution: normalizing option lists and resolving initial selections.
//!
//! Select-style elements accept options in one of two shapes, flat or
//! grouped, and an initial selection that is absent, a single value, or a
//! list of values. Both shapes are resolved once, at the edges, into the
//! tagged unions [`Options`] and [`InitialSelection`]; everything downstream
//! matches on the variant instead of probing the input again.
//!
//! - [`normalize`] renders input options into their display form.
//! - [`resolve_initial`] computes the [`SelectionState`] for single or multi select.
//! - [`group_by_capacity`] partitions large flat lists into bounded groups.

pub mod group;
pub mod resolve;

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::error::BlockError;
use crate::model::{OptionObject, OptionValue};
use crate::validate::constraints::{expect_sequence, json_type_name};

pub use group::{
    Bucket, COUNTRY_BUCKETS, classify, country_groups, group_by_capacity, split_by_capacity,
    timezone_groups, timezone_key,
};
pub use resolve::{OptionFormat, normalize, render_option, render_options, resolve_initial, resolve_initial_in};

/// A caller-supplied option.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionInput {
    pub text: String,
    pub value: OptionValue,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
}

impl OptionInput {
    /// Creates an option with display text and value.
    pub fn new(text: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            description: None,
            url: None,
        }
    }

    /// Sets the description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the URL (overflow menus only).
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

/// A caller-supplied, labelled group of options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OptionGroupInput {
    pub label: String,
    pub options: Vec<OptionInput>,
}

impl OptionGroupInput {
    pub fn new(label: impl Into<String>, options: Vec<OptionInput>) -> Self {
        Self {
            label: label.into(),
            options,
        }
    }
}

/// Options for a select menu: a flat list or a list of groups.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Options {
    Flat(Vec<OptionInput>),
    Grouped(Vec<OptionGroupInput>),
}

impl Options {
    /// Resolves a loosely-shaped JSON value into flat or grouped options.
    ///
    /// The value must be an array. If any element carries an `options` key
    /// the list is treated as grouped, and then every element must be a group.
    pub fn from_value(value: &Value) -> Result<Options, BlockError> {
        let items = expect_sequence(value, "options")?;
        let grouped = items.iter().any(|item| item.get("options").is_some());
        if grouped {
            if let Some(item) = items.iter().find(|item| !item.get("options").is_some_and(Value::is_array)) {
                return Err(BlockError::Shape {
                    field: "options",
                    expected: format!(
                        "either all options or all option groups. Received {}",
                        json_type_name(item)
                    ),
                });
            }
            let groups = serde_json::from_value(value.clone()).map_err(|e| BlockError::Shape {
                field: "option_groups",
                expected: format!("a list of {{label, options}} groups ({e})"),
            })?;
            Ok(Options::Grouped(groups))
        } else {
            let options = serde_json::from_value(value.clone()).map_err(|e| BlockError::Shape {
                field: "options",
                expected: format!("a list of {{text, value}} options ({e})"),
            })?;
            Ok(Options::Flat(options))
        }
    }

    /// Returns true for the grouped shape.
    pub fn is_grouped(&self) -> bool {
        matches!(self, Options::Grouped(_))
    }

    /// Returns the number of top-level entries (options or groups).
    pub fn len(&self) -> usize {
        match self {
            Options::Flat(options) => options.len(),
            Options::Grouped(groups) => groups.len(),
        }
    }

    /// Returns true if there are no top-level entries.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Options {
    fn default() -> Self {
        Options::Flat(Vec::new())
    }
}

impl From<Vec<OptionInput>> for Options {
    fn from(options: Vec<OptionInput>) -> Self {
        Options::Flat(options)
    }
}

impl From<Vec<OptionGroupInput>> for Options {
    fn from(groups: Vec<OptionGroupInput>) -> Self {
        Options::Grouped(groups)
    }
}

/// The caller's requested initial selection.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum InitialSelection {
    #[default]
    None,
    Single(OptionValue),
    Multi(Vec<OptionValue>),
}

impl InitialSelection {
    /// Resolves a loosely-shaped JSON value.
    ///
    /// Strings and numbers become `Single`, arrays become `Multi` (keeping
    /// only their string and number members), anything else is `None`.
    /// This never fails: a selection of the wrong shape selects nothing.
    pub fn from_value(value: &Value) -> InitialSelection {
        match value {
            Value::String(s) => InitialSelection::Single(OptionValue::Text(s.clone())),
            Value::Number(n) => InitialSelection::Single(OptionValue::Number(n.clone())),
            Value::Array(items) => InitialSelection::Multi(
                items
                    .iter()
                    .filter_map(|item| match item {
                        Value::String(s) => Some(OptionValue::Text(s.clone())),
                        Value::Number(n) => Some(OptionValue::Number(n.clone())),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => InitialSelection::None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, InitialSelection::None)
    }
}

impl<'de> Deserialize<'de> for InitialSelection {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Ok(InitialSelection::from_value(&value))
    }
}

impl From<&str> for InitialSelection {
    fn from(value: &str) -> Self {
        InitialSelection::Single(value.into())
    }
}

impl From<String> for InitialSelection {
    fn from(value: String) -> Self {
        InitialSelection::Single(value.into())
    }
}

impl From<OptionValue> for InitialSelection {
    fn from(value: OptionValue) -> Self {
        InitialSelection::Single(value)
    }
}

impl<T: Into<OptionValue>> From<Vec<T>> for InitialSelection {
    fn from(values: Vec<T>) -> Self {
        InitialSelection::Multi(values.into_iter().map(Into::into).collect())
    }
}

impl From<Option<String>> for InitialSelection {
    fn from(value: Option<String>) -> Self {
        value.map_or(InitialSelection::None, InitialSelection::from)
    }
}

/// The resolved initial selection of a select-style element.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SelectionState {
    #[default]
    Empty,
    /// Single select: the first matching option.
    Single(OptionObject),
    /// Multi select: every matching option, in option-list order.
    Multi(Vec<OptionObject>),
}

impl SelectionState {
    pub fn is_empty(&self) -> bool {
        matches!(self, SelectionState::Empty)
    }

    /// Returns the selected option of a single select.
    pub fn into_single(self) -> Option<OptionObject> {
        match self {
            SelectionState::Single(option) => Some(option),
            _ => None,
        }
    }

    /// Returns the selected options of a multi select.
    pub fn into_multi(self) -> Option<Vec<OptionObject>> {
        match self {
            SelectionState::Multi(options) => Some(options),
            _ => None,
        }
    }
}
