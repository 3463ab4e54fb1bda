//! Layout blocks, the top-level nodes of a view.

use serde::Serialize;

use crate::model::{Element, RichTextObject, TextObject};

/// A node that may carry a `block_id`.
///
/// Implemented by [`Block`]; uniqueness checks are generic over it.
pub trait HasBlockId {
    /// Returns the block identifier, if any.
    fn block_id(&self) -> Option<&str>;
}

/// A layout block, tagged by `type`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Actions(ActionsBlock),
    Context(ContextBlock),
    Divider(DividerBlock),
    Section(SectionBlock),
    Header(HeaderBlock),
    Image(ImageBlock),
    Input(InputBlock),
    RichText(RichTextBlock),
}

impl Block {
    /// Returns the block's `type` tag.
    pub fn type_name(&self) -> &'static str {
        match self {
            Block::Actions(_) => "actions",
            Block::Context(_) => "context",
            Block::Divider(_) => "divider",
            Block::Section(_) => "section",
            Block::Header(_) => "header",
            Block::Image(_) => "image",
            Block::Input(_) => "input",
            Block::RichText(_) => "rich_text",
        }
    }
}

impl HasBlockId for Block {
    fn block_id(&self) -> Option<&str> {
        let id = match self {
            Block::Actions(b) => &b.block_id,
            Block::Context(b) => &b.block_id,
            Block::Divider(b) => &b.block_id,
            Block::Section(b) => &b.block_id,
            Block::Header(b) => &b.block_id,
            Block::Image(b) => &b.block_id,
            Block::Input(b) => &b.block_id,
            Block::RichText(b) => &b.block_id,
        };
        id.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionsBlock {
    pub elements: Vec<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// An element of a context block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContextElement {
    Mrkdwn { text: String },
    Image { image_url: String, alt_text: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContextBlock {
    pub elements: Vec<ContextElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DividerBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

/// A section: text, fields, or both, with an optional accessory.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionBlock {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<TextObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub accessory: Option<Element>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeaderBlock {
    pub text: TextObject,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageBlock {
    pub image_url: String,
    pub alt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputBlock {
    pub element: Element,
    pub label: TextObject,
    pub optional: bool,
    pub dispatch_action: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<TextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RichTextBlock {
    pub elements: Vec<RichTextObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_id: Option<String>,
}
