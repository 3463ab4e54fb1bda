//! Constraint primitives shared by every node validator.
//!
//! Each check either succeeds with no effect or fails with a [`BlockError`]
//! naming the field, its limit and, for list members, the position. Lengths
//! are counted in Unicode scalar values.

use rustc_hash::FxHashSet;
use serde_json::Value;

use crate::error::BlockError;
use crate::limits::{
    MAX_BLOCK_ID_LEN, MAX_OPTION_GROUP_LABEL_LEN, MAX_OPTION_TEXT_LEN, MAX_URL_LEN, OPTION_GROUP_CAPACITY,
};
use crate::model::HasBlockId;
use crate::options::{OptionInput, Options};

/// Returns the length of `text` as the platform counts it.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}

/// Checks a text value against a length ceiling.
///
/// - absent: fails with `MissingField` unless `optional`
/// - present but empty: passes when `optional` (an empty optional value is
///   treated as absent), otherwise fails with `EmptyText`
/// - longer than `limit`: fails with `TooLong`
pub fn require_non_empty_text(
    value: Option<&str>,
    field: &'static str,
    limit: usize,
    optional: bool,
) -> Result<(), BlockError> {
    match value {
        None if optional => Ok(()),
        None => Err(BlockError::MissingField { field }),
        Some("") if optional => Ok(()),
        Some(text) => require_text_at(text, field, limit, None),
    }
}

/// Checks a required text value.
pub fn require_text(text: &str, field: &'static str, limit: usize) -> Result<(), BlockError> {
    require_text_at(text, field, limit, None)
}

/// Checks an optional text value.
pub fn require_optional_text(text: Option<&str>, field: &'static str, limit: usize) -> Result<(), BlockError> {
    require_non_empty_text(text, field, limit, true)
}

/// Checks a required text value that is a member of a list.
pub fn require_text_at(
    text: &str,
    field: &'static str,
    limit: usize,
    position: Option<usize>,
) -> Result<(), BlockError> {
    if text.is_empty() {
        return Err(BlockError::EmptyText { field, position });
    }
    let len = text_len(text);
    if len > limit {
        return Err(BlockError::TooLong {
            field,
            limit,
            len,
            position,
        });
    }
    Ok(())
}

/// Checks a block, action or callback identifier (at most 255 characters).
pub fn require_identifier(value: Option<&str>, field: &'static str, optional: bool) -> Result<(), BlockError> {
    require_non_empty_text(value, field, MAX_BLOCK_ID_LEN, optional)
}

/// Checks that a list has between `min` and `max` entries, inclusive.
pub fn require_bounded_array<T>(items: &[T], field: &'static str, min: usize, max: usize) -> Result<(), BlockError> {
    let len = items.len();
    if len < min || len > max {
        return Err(BlockError::CountOutOfRange { field, min, max, len });
    }
    Ok(())
}

/// Returns the JSON type name of a value, for shape errors.
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Returns the elements of a JSON array, or a `Shape` error for anything else.
pub fn expect_sequence<'a>(value: &'a Value, field: &'static str) -> Result<&'a [Value], BlockError> {
    match value {
        Value::Array(items) => Ok(items),
        other => Err(BlockError::Shape {
            field,
            expected: format!("an array. Received {}", json_type_name(other)),
        }),
    }
}

/// Checks that a JSON value is an array with between `min` and `max` elements.
pub fn require_bounded_sequence<'a>(
    value: &'a Value,
    field: &'static str,
    min: usize,
    max: usize,
) -> Result<&'a [Value], BlockError> {
    let items = expect_sequence(value, field)?;
    require_bounded_array(items, field, min, max)?;
    Ok(items)
}

/// Checks that no two nodes share a non-empty `block_id`.
///
/// Each identifier is also length-checked. Fails on the first duplicate,
/// naming it.
pub fn require_unique_identifiers<N: HasBlockId>(nodes: &[N]) -> Result<(), BlockError> {
    let mut seen: FxHashSet<&str> = FxHashSet::default();
    for id in nodes.iter().filter_map(HasBlockId::block_id) {
        if id.is_empty() {
            continue;
        }
        require_identifier(Some(id), "block_id", false)?;
        if !seen.insert(id) {
            return Err(BlockError::Duplicate {
                field: "block_id",
                value: id.to_string(),
            });
        }
    }
    Ok(())
}

/// Checks one option: `text` and `value` required and at most 150 characters,
/// `description` at most 150, `url` at most 3000.
///
/// Numeric values are checked by their string form.
pub fn require_option(option: &OptionInput, position: usize) -> Result<(), BlockError> {
    let at = Some(position);
    require_text_at(&option.text, "option.text", MAX_OPTION_TEXT_LEN, at)?;
    require_text_at(&option.value.as_key(), "option.value", MAX_OPTION_TEXT_LEN, at)?;
    if let Some(description) = option.description.as_deref().filter(|d| !d.is_empty()) {
        require_text_at(description, "option.description", MAX_OPTION_TEXT_LEN, at)?;
    }
    if let Some(url) = option.url.as_deref().filter(|u| !u.is_empty()) {
        require_text_at(url, "option.url", MAX_URL_LEN, at)?;
    }
    Ok(())
}

/// Checks a flat option list: 1 to `max` options, each valid.
pub fn require_options(options: &[OptionInput], max: usize) -> Result<(), BlockError> {
    require_bounded_array(options, "options", 1, max)?;
    for (i, option) in options.iter().enumerate() {
        require_option(option, i)?;
    }
    Ok(())
}

/// Checks an option list: 1 to `max` top-level entries, each option valid.
///
/// For grouped options the bound applies to the number of groups. Each
/// group needs a label of at most 75 characters and 1 to 100 options, and
/// its options are checked individually, positioned within their group.
pub fn require_option_list(options: &Options, max: usize) -> Result<(), BlockError> {
    match options {
        Options::Flat(list) => require_options(list, max)?,
        Options::Grouped(groups) => {
            require_bounded_array(groups, "option_groups", 1, max)?;
            for (g, group) in groups.iter().enumerate() {
                require_text_at(&group.label, "option_groups.label", MAX_OPTION_GROUP_LABEL_LEN, Some(g))?;
                require_bounded_array(&group.options, "option_groups.options", 1, OPTION_GROUP_CAPACITY)?;
                for (i, option) in group.options.iter().enumerate() {
                    require_option(option, i)?;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use crate::model::{Block, DividerBlock};
    use crate::options::OptionGroupInput;
    use serde_json::json;

    fn divider(id: Option<&str>) -> Block {
        Block::Divider(DividerBlock {
            block_id: id.map(str::to_string),
        })
    }

    #[test]
    fn test_non_empty_text() {
        assert!(require_non_empty_text(Some("hello"), "text", 5, false).is_ok());
        assert!(require_non_empty_text(None, "text", 5, true).is_ok());
        assert!(require_non_empty_text(Some(""), "text", 5, true).is_ok());

        let err = require_non_empty_text(None, "text", 5, false).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::RequiredField);

        let err = require_non_empty_text(Some(""), "text", 5, false).unwrap_err();
        assert_eq!(err, BlockError::EmptyText { field: "text", position: None });

        let err = require_non_empty_text(Some("hello!"), "text", 5, false).unwrap_err();
        assert_eq!(err.to_string(), "Expected text to be less than 5 characters. Received: 6");
    }

    #[test]
    fn test_length_counts_chars() {
        assert_eq!(text_len("héllo"), 5);
        assert!(require_text("ééééé", "text", 5).is_ok());
    }

    #[test]
    fn test_identifier_limit() {
        let id = "a".repeat(255);
        assert!(require_identifier(Some(&id), "action_id", false).is_ok());
        let id = "a".repeat(256);
        assert!(matches!(
            require_identifier(Some(&id), "action_id", false),
            Err(BlockError::TooLong { limit: 255, len: 256, .. })
        ));
        assert!(require_identifier(None, "action_id", true).is_ok());
    }

    #[test]
    fn test_bounded_array() {
        assert!(require_bounded_array(&[1, 2], "elements", 1, 2).is_ok());
        assert!(require_bounded_array::<u8>(&[], "elements", 1, 2).is_err());
        let err = require_bounded_array(&[1, 2, 3], "elements", 1, 2).unwrap_err();
        assert_eq!(err.to_string(), "Expected elements to have between 1 and 2 elements. Received: 3");
    }

    #[test]
    fn test_bounded_sequence_shape() {
        let err = require_bounded_sequence(&json!("x"), "filter", 1, 4).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Shape);
        assert_eq!(err.to_string(), "Expected filter to be an array. Received string");
        assert_eq!(require_bounded_sequence(&json!([1]), "filter", 1, 4).unwrap().len(), 1);
    }

    #[test]
    fn test_unique_identifiers() {
        let blocks = vec![divider(Some("a")), divider(None), divider(Some("")), divider(Some("b"))];
        assert!(require_unique_identifiers(&blocks).is_ok());

        let blocks = vec![divider(Some("x")), divider(Some("y")), divider(Some("x"))];
        let err = require_unique_identifiers(&blocks).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Uniqueness);
        assert!(err.to_string().contains("x"));

        let long = "z".repeat(256);
        assert!(require_unique_identifiers(&[divider(Some(&long))]).is_err());
    }

    #[test]
    fn test_option_limits() {
        assert!(require_option(&OptionInput::new("A", "a"), 0).is_ok());
        assert!(require_option(&OptionInput::new("A", 12i64), 0).is_ok());

        let long = "t".repeat(151);
        let err = require_option(&OptionInput::new(long, "a"), 4).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected option.text to be less than 150 characters. Received: 151. Position: 4"
        );

        let err = require_option(&OptionInput::new("A", ""), 1).unwrap_err();
        assert_eq!(err, BlockError::EmptyText { field: "option.value", position: Some(1) });

        let with_url = OptionInput::new("A", "a").url("u".repeat(3001));
        assert!(matches!(
            require_option(&with_url, 0),
            Err(BlockError::TooLong { field: "option.url", .. })
        ));
    }

    #[test]
    fn test_option_list_bounds() {
        let one = Options::Flat(vec![OptionInput::new("A", "a")]);
        assert!(require_option_list(&one, 5).is_ok());
        assert!(require_option_list(&Options::Flat(vec![]), 5).is_err());

        let six = Options::Flat((0..6).map(|i| OptionInput::new("A", i as i64)).collect());
        assert!(matches!(
            require_option_list(&six, 5),
            Err(BlockError::CountOutOfRange { max: 5, len: 6, .. })
        ));
    }

    #[test]
    fn test_option_list_recurses_into_groups() {
        // The list bound counts groups, not options.
        let group = |label: &str, n: i64| OptionGroupInput::new(label, (0..n).map(|i| OptionInput::new("A", i)).collect());
        let groups = Options::Grouped(vec![group("G1", 100), group("G2", 100), group("G3", 50)]);
        assert!(require_option_list(&groups, 2).is_err());
        assert!(require_option_list(&groups, 3).is_ok());

        let bad = OptionGroupInput::new("G", vec![OptionInput::new("A", "a"), OptionInput::new("", "b")]);
        let err = require_option_list(&Options::Grouped(vec![bad]), 100).unwrap_err();
        assert_eq!(err, BlockError::EmptyText { field: "option.text", position: Some(1) });
    }

    #[test]
    fn test_option_group_shape() {
        let empty = Options::Grouped(vec![OptionGroupInput::new("G", vec![])]);
        assert!(matches!(
            require_option_list(&empty, 100),
            Err(BlockError::CountOutOfRange { field: "option_groups.options", len: 0, .. })
        ));

        let overfull = OptionGroupInput::new("G", (0..101).map(|i| OptionInput::new("A", i as i64)).collect());
        assert!(require_option_list(&Options::Grouped(vec![overfull]), 100).is_err());

        let ok = OptionGroupInput::new("G", vec![OptionInput::new("A", "a")]);
        let unlabeled = OptionGroupInput::new("", vec![OptionInput::new("B", "b")]);
        let err = require_option_list(&Options::Grouped(vec![ok, unlabeled]), 100).unwrap_err();
        assert_eq!(err, BlockError::EmptyText { field: "option_groups.label", position: Some(1) });
    }
}
