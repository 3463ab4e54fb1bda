//! Builders for blocks, elements and views.
//!
//! Every builder follows the same two steps:
//! 1. run the node's validator to completion, failing fast
//! 2. assemble the output shape from the (now valid) configuration
//!
//! so a builder either returns a complete node or an error, never a
//! partially built one.
//!
//! # Example
//!
//! ```rust
//! use block_kit::builder::{accessory, blocks, view::ViewBuilder};
//! use block_kit::config::{ButtonConfig, HeaderConfig, SectionTextConfig};
//!
//! let button = accessory::button(ButtonConfig::new("Open").action_id("open")).unwrap();
//! let view = ViewBuilder::modal("Settings")
//!     .block(blocks::header(HeaderConfig::new("Preferences")).unwrap())
//!     .block(blocks::markdown(SectionTextConfig::new("*Theme*").accessory(button)).unwrap())
//!     .build()
//!     .unwrap();
//! assert_eq!(view.blocks.len(), 2);
//! ```

pub mod accessory;
pub mod blocks;
pub mod elements;
pub mod input;
pub mod rich_text;
pub mod select;
pub mod view;

use crate::config::ConfirmDialog;
use crate::error::BlockError;
use crate::model::{ConfirmObject, TextObject};
use crate::validate::nodes::validate_confirm_dialog;

pub use view::ViewBuilder;

/// Validates a confirmation dialog and renders it, or `None` when empty.
pub(crate) fn confirm_object(dialog: Option<&ConfirmDialog>) -> Result<Option<ConfirmObject>, BlockError> {
    let Some(dialog) = dialog.filter(|d| !d.is_empty()) else {
        return Ok(None);
    };
    validate_confirm_dialog(dialog)?;
    let text = |value: &Option<String>| TextObject::plain(value.clone().unwrap_or_default());
    Ok(Some(ConfirmObject {
        title: text(&dialog.title),
        text: text(&dialog.description),
        confirm: text(&dialog.confirm_text),
        deny: text(&dialog.cancel_text),
    }))
}

/// Treats an empty string as absent.
pub(crate) fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// `Some(true)` for a set flag, `None` otherwise.
pub(crate) fn flag(value: bool) -> Option<bool> {
    value.then_some(true)
}
