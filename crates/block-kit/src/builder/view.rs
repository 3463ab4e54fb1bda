//! Fluent assembly of modal and home views.

use serde_json::Value;

use crate::config::ViewConfig;
use crate::error::BlockError;
use crate::model::{Block, TextObject, View, ViewType};
use crate::validate::view::validate_view;

/// Collects the blocks and top-level fields of a view and validates them
/// together in [`build`](ViewBuilder::build).
///
/// # Example
///
/// ```rust
/// use block_kit::builder::{ViewBuilder, blocks};
///
/// let view = ViewBuilder::home()
///     .block(blocks::divider(None).unwrap())
///     .callback_id("home")
///     .build()
///     .unwrap();
/// assert_eq!(view.callback_id.as_deref(), Some("home"));
/// ```
#[derive(Debug, Clone)]
pub struct ViewBuilder {
    view_type: ViewType,
    config: ViewConfig,
    blocks: Vec<Block>,
}

impl ViewBuilder {
    /// Starts a modal. The title is required and at most 24 characters.
    pub fn modal(title: impl Into<String>) -> Self {
        Self::with_config(
            ViewType::Modal,
            ViewConfig {
                title: Some(title.into()),
                ..Default::default()
            },
        )
    }

    /// Starts an app home view.
    pub fn home() -> Self {
        Self::with_config(ViewType::Home, ViewConfig::default())
    }

    /// Starts a view from a deserialized configuration.
    pub fn with_config(view_type: ViewType, config: ViewConfig) -> Self {
        Self {
            view_type,
            config,
            blocks: Vec::new(),
        }
    }

    pub fn submit(mut self, submit: impl Into<String>) -> Self {
        self.config.submit = Some(submit.into());
        self
    }

    pub fn close(mut self, close: impl Into<String>) -> Self {
        self.config.close = Some(close.into());
        self
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn blocks(mut self, blocks: impl IntoIterator<Item = Block>) -> Self {
        self.blocks.extend(blocks);
        self
    }

    pub fn callback_id(mut self, callback_id: impl Into<String>) -> Self {
        self.config.callback_id = Some(callback_id.into());
        self
    }

    /// Sets the metadata: a string, or an object or array that is
    /// serialized to JSON.
    pub fn metadata(mut self, metadata: impl Into<Value>) -> Self {
        self.config.metadata = Some(metadata.into());
        self
    }

    pub fn clear_on_close(mut self, clear: bool) -> Self {
        self.config.clear_on_close = Some(clear);
        self
    }

    pub fn notify_on_close(mut self, notify: bool) -> Self {
        self.config.notify_on_close = Some(notify);
        self
    }

    pub fn external_id(mut self, external_id: impl Into<String>) -> Self {
        self.config.external_id = Some(external_id.into());
        self
    }

    /// Validates the whole view and assembles it.
    ///
    /// Title, submit and close are only emitted for modals.
    pub fn build(self) -> Result<View, BlockError> {
        let private_metadata = validate_view(self.view_type, &self.config, &self.blocks)?;
        let config = self.config;
        let label = |text: Option<String>| text.filter(|t| !t.is_empty()).map(TextObject::plain_emoji);
        let (title, submit, close) = match self.view_type {
            ViewType::Modal => (label(config.title), label(config.submit), label(config.close)),
            ViewType::Home => (None, None, None),
        };
        Ok(View {
            view_type: self.view_type,
            title,
            submit,
            close,
            blocks: self.blocks,
            callback_id: config.callback_id.filter(|c| !c.is_empty()),
            private_metadata,
            clear_on_close: config.clear_on_close,
            notify_on_close: config.notify_on_close,
            external_id: config.external_id.filter(|e| !e.is_empty()),
        })
    }
}
