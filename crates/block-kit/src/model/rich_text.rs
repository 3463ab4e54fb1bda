//! Rich text objects: containers (section, list, preformatted, quote) and
//! the inline elements they hold.

use serde::{Deserialize, Serialize};

/// Optional style flags for inline rich text elements.
///
/// Not every flag applies to every element; the platform ignores
/// inapplicable ones.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RichTextStyle {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strike: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_highlight: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlink: Option<bool>,
}

/// An inline rich text element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextElement {
    Channel {
        channel_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
    Emoji {
        name: String,
    },
    Link {
        url: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        text: Option<String>,
        #[serde(rename = "unsafe", default, skip_serializing_if = "Option::is_none")]
        is_unsafe: Option<bool>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
    Text {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
    User {
        user_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
    Usergroup {
        usergroup_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        style: Option<RichTextStyle>,
    },
}

/// Bullet or numbered list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListStyle {
    #[default]
    Bullet,
    Ordered,
}

/// A rich text container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum RichTextObject {
    RichTextSection {
        elements: Vec<RichTextElement>,
    },
    RichTextList {
        /// `rich_text_section` objects.
        elements: Vec<RichTextObject>,
        style: ListStyle,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        indent: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        border: Option<u32>,
    },
    RichTextPreformatted {
        elements: Vec<RichTextElement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        border: Option<u32>,
    },
    RichTextQuote {
        elements: Vec<RichTextElement>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        border: Option<u32>,
    },
}
