//! Document-level validation of a view.

use serde_json::Value;
use tracing::debug;

use crate::config::ViewConfig;
use crate::error::BlockError;
use crate::limits::{
    MAX_CALLBACK_ID_LEN, MAX_METADATA_LEN, MAX_MODAL_TEXT_LEN, MAX_VIEW_BLOCKS, MIN_VIEW_BLOCKS,
};
use crate::model::{Block, ViewType};
use crate::validate::constraints::{
    json_type_name, require_bounded_array, require_non_empty_text, require_optional_text,
    require_unique_identifiers,
};

/// Validates a view and returns its serialized metadata.
///
/// Checks, in order:
/// - modals: `title` required (an empty title counts as missing) and at
///   most 24 characters, `submit` and
///   `close` at most 24 characters each
/// - 1 to 100 blocks
/// - block ids pairwise distinct
/// - `callback_id` at most 255 characters
/// - metadata at most 3000 characters once serialized
pub fn validate_view(view_type: ViewType, config: &ViewConfig, blocks: &[Block]) -> Result<Option<String>, BlockError> {
    if view_type == ViewType::Modal {
        let title = config.title.as_deref().filter(|t| !t.is_empty());
        require_non_empty_text(title, "title", MAX_MODAL_TEXT_LEN, false)?;
        require_optional_text(config.close.as_deref(), "close", MAX_MODAL_TEXT_LEN)?;
        require_optional_text(config.submit.as_deref(), "submit", MAX_MODAL_TEXT_LEN)?;
    }

    require_bounded_array(blocks, "blocks", MIN_VIEW_BLOCKS, MAX_VIEW_BLOCKS)?;
    require_unique_identifiers(blocks)?;

    require_optional_text(config.callback_id.as_deref(), "callback_id", MAX_CALLBACK_ID_LEN)?;

    let metadata = match &config.metadata {
        Some(value) => serialize_metadata(value)?,
        None => None,
    };

    debug!(?view_type, blocks = blocks.len(), "view validated");
    Ok(metadata)
}

/// Serializes view metadata into its `private_metadata` string.
///
/// Strings pass through; objects and arrays are serialized to compact JSON.
/// `null` and the empty string mean no metadata. Numbers and booleans are
/// rejected.
pub fn serialize_metadata(value: &Value) -> Result<Option<String>, BlockError> {
    let text = match value {
        Value::Null => return Ok(None),
        Value::String(s) if s.is_empty() => return Ok(None),
        Value::String(s) => s.clone(),
        Value::Object(_) | Value::Array(_) => serde_json::to_string(value)?,
        other => {
            return Err(BlockError::Shape {
                field: "metadata",
                expected: format!("a string, object or array. Received {}", json_type_name(other)),
            });
        }
    };
    require_optional_text(Some(text.as_str()), "metadata", MAX_METADATA_LEN)?;
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ViolationKind;
    use crate::model::DividerBlock;
    use serde_json::json;

    fn dividers(ids: &[Option<&str>]) -> Vec<Block> {
        ids.iter()
            .map(|id| {
                Block::Divider(DividerBlock {
                    block_id: id.map(str::to_string),
                })
            })
            .collect()
    }

    fn modal(title: Option<&str>) -> ViewConfig {
        ViewConfig {
            title: title.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_modal_title_rules() {
        let blocks = dividers(&[None]);

        let err = validate_view(ViewType::Modal, &modal(None), &blocks).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::RequiredField);

        let err = validate_view(ViewType::Modal, &modal(Some("")), &blocks).unwrap_err();
        assert_eq!(err, BlockError::MissingField { field: "title" });

        let err = validate_view(ViewType::Modal, &modal(Some(&"t".repeat(25))), &blocks).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Bound);

        assert!(validate_view(ViewType::Modal, &modal(Some(&"t".repeat(24))), &blocks).is_ok());
    }

    #[test]
    fn test_home_needs_no_title() {
        assert!(validate_view(ViewType::Home, &ViewConfig::default(), &dividers(&[None])).is_ok());
    }

    #[test]
    fn test_modal_buttons() {
        let mut config = modal(Some("Title"));
        config.submit = Some("s".repeat(25));
        let err = validate_view(ViewType::Modal, &config, &dividers(&[None])).unwrap_err();
        assert_eq!(err.field(), Some("submit"));
    }

    #[test]
    fn test_block_count() {
        let config = ViewConfig::default();
        assert!(validate_view(ViewType::Home, &config, &[]).is_err());
        assert!(validate_view(ViewType::Home, &config, &dividers(&[None; 100])).is_ok());
        let err = validate_view(ViewType::Home, &config, &dividers(&[None; 101])).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Bound);
    }

    #[test]
    fn test_duplicate_block_ids() {
        let blocks = dividers(&[Some("x"), Some("y"), Some("x")]);
        let err = validate_view(ViewType::Home, &ViewConfig::default(), &blocks).unwrap_err();
        assert_eq!(err, BlockError::Duplicate { field: "block_id", value: "x".into() });
    }

    #[test]
    fn test_callback_id_limit() {
        let config = ViewConfig {
            callback_id: Some("c".repeat(256)),
            ..Default::default()
        };
        assert!(validate_view(ViewType::Home, &config, &dividers(&[None])).is_err());
    }

    #[test]
    fn test_metadata_serialization() {
        assert_eq!(serialize_metadata(&json!(null)).unwrap(), None);
        assert_eq!(serialize_metadata(&json!("")).unwrap(), None);
        assert_eq!(serialize_metadata(&json!("raw")).unwrap().as_deref(), Some("raw"));
        assert_eq!(
            serialize_metadata(&json!({"id": 7, "tags": ["a"]})).unwrap().as_deref(),
            Some(r#"{"id":7,"tags":["a"]}"#)
        );
        assert_eq!(serialize_metadata(&json!(5)).unwrap_err().kind(), ViolationKind::Shape);

        let big = json!({"blob": "x".repeat(3000)});
        assert!(matches!(
            serialize_metadata(&big),
            Err(BlockError::TooLong { field: "metadata", limit: 3000, .. })
        ));
    }
}
