//! Option and option-group objects, as rendered into select-style elements.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::model::TextObject;

/// An option value: a string, or a number passed through unchanged.
///
/// Values are compared by their string form, so `"1"` and `1` are the same
/// value for selection purposes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    Text(String),
    Number(serde_json::Number),
}

impl OptionValue {
    /// Returns the string form used for comparisons and length checks.
    ///
    /// Integral floats print without a fraction, so `1.0` keys as `"1"`.
    pub fn as_key(&self) -> Cow<'_, str> {
        match self {
            OptionValue::Text(s) => Cow::Borrowed(s),
            OptionValue::Number(n) => match n.as_f64() {
                Some(f) if n.is_f64() && f == 0.0 => Cow::Borrowed("0"),
                Some(f) if n.is_f64() => Cow::Owned(f.to_string()),
                _ => Cow::Owned(n.to_string()),
            },
        }
    }

    /// Returns true if the two values have the same string form.
    pub fn matches(&self, other: &OptionValue) -> bool {
        self.as_key() == other.as_key()
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.as_key())
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        OptionValue::Text(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        OptionValue::Text(s)
    }
}

impl From<i64> for OptionValue {
    fn from(n: i64) -> Self {
        OptionValue::Number(n.into())
    }
}

impl From<u64> for OptionValue {
    fn from(n: u64) -> Self {
        OptionValue::Number(n.into())
    }
}

impl From<i32> for OptionValue {
    fn from(n: i32) -> Self {
        OptionValue::Number(i64::from(n).into())
    }
}

/// A rendered option.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionObject {
    pub text: TextObject,
    pub value: OptionValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A rendered, labelled group of options.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionGroupObject {
    pub label: TextObject,
    pub options: Vec<OptionObject>,
}

/// Rendered options of a select menu: either `options` or `option_groups`.
///
/// Flattened into the owning element so the variant name becomes the key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum OptionList {
    #[serde(rename = "options")]
    Flat(Vec<OptionObject>),
    #[serde(rename = "option_groups")]
    Grouped(Vec<OptionGroupObject>),
}

impl OptionList {
    /// Iterates over every option, across groups when grouped, in display order.
    pub fn iter(&self) -> Box<dyn Iterator<Item = &OptionObject> + '_> {
        match self {
            OptionList::Flat(options) => Box::new(options.iter()),
            OptionList::Grouped(groups) => Box::new(groups.iter().flat_map(|g| g.options.iter())),
        }
    }

    /// Returns true for the `option_groups` form.
    pub fn is_grouped(&self) -> bool {
        matches!(self, OptionList::Grouped(_))
    }

    /// Returns the total number of options across all groups.
    pub fn option_count(&self) -> usize {
        self.iter().count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_option_value_string_coercion() {
        let text = OptionValue::from("1");
        let number = OptionValue::from(1i64);
        assert!(text.matches(&number));
        assert!(!text.matches(&OptionValue::from(2i64)));
        assert_eq!(number.to_string(), "1");
    }

    #[test]
    fn test_float_value_keys() {
        let float: OptionValue = serde_json::from_value(json!(1.0)).unwrap();
        assert_eq!(float.as_key(), "1");
        assert!(float.matches(&OptionValue::from("1")));

        let fraction: OptionValue = serde_json::from_value(json!(2.5)).unwrap();
        assert_eq!(fraction.as_key(), "2.5");
        let negative_zero: OptionValue = serde_json::from_value(json!(-0.0)).unwrap();
        assert_eq!(negative_zero.as_key(), "0");

        // Output keeps the number as given.
        assert_eq!(serde_json::to_value(&float).unwrap(), json!(1.0));
    }

    #[test]
    fn test_option_value_passthrough() {
        let option = OptionObject {
            text: TextObject::plain("One"),
            value: OptionValue::from(1i64),
            description: None,
            url: None,
        };
        assert_eq!(
            serde_json::to_value(&option).unwrap(),
            json!({"text": {"type": "plain_text", "text": "One"}, "value": 1})
        );
    }

    #[test]
    fn test_option_list_keys() {
        let flat = OptionList::Flat(vec![]);
        assert_eq!(serde_json::to_value(&flat).unwrap(), json!({"options": []}));

        let grouped = OptionList::Grouped(vec![OptionGroupObject {
            label: TextObject::plain("G"),
            options: vec![],
        }]);
        assert_eq!(
            serde_json::to_value(&grouped).unwrap(),
            json!({"option_groups": [{"label": {"type": "plain_text", "text": "G"}, "options": []}]})
        );
        assert!(grouped.is_grouped());
        assert_eq!(grouped.option_count(), 0);
    }
}
