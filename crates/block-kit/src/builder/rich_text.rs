//! Rich text constructors.
//!
//! Rich text is passed through unchecked; these helpers only build the
//! shapes. Wrap the containers in a block with
//! [`blocks::rich_text`](crate::builder::blocks::rich_text).

use crate::model::{ListStyle, RichTextElement, RichTextObject, RichTextStyle};

// =========================================================================
// Inline elements
// =========================================================================

pub fn channel(channel_id: impl Into<String>, style: Option<RichTextStyle>) -> RichTextElement {
    RichTextElement::Channel {
        channel_id: channel_id.into(),
        style,
    }
}

pub fn emoji(name: impl Into<String>) -> RichTextElement {
    RichTextElement::Emoji { name: name.into() }
}

/// A link. `text` defaults to the URL on the client; `is_unsafe` marks
/// links the client should not unfurl.
pub fn link(
    url: impl Into<String>,
    text: Option<String>,
    is_unsafe: bool,
    style: Option<RichTextStyle>,
) -> RichTextElement {
    RichTextElement::Link {
        url: url.into(),
        text: text.filter(|t| !t.is_empty()),
        is_unsafe: is_unsafe.then_some(true),
        style,
    }
}

pub fn text(text: impl Into<String>, style: Option<RichTextStyle>) -> RichTextElement {
    RichTextElement::Text {
        text: text.into(),
        style,
    }
}

pub fn user(user_id: impl Into<String>, style: Option<RichTextStyle>) -> RichTextElement {
    RichTextElement::User {
        user_id: user_id.into(),
        style,
    }
}

pub fn usergroup(usergroup_id: impl Into<String>, style: Option<RichTextStyle>) -> RichTextElement {
    RichTextElement::Usergroup {
        usergroup_id: usergroup_id.into(),
        style,
    }
}

// =========================================================================
// Containers
// =========================================================================

pub fn section(elements: Vec<RichTextElement>) -> RichTextObject {
    RichTextObject::RichTextSection { elements }
}

/// A list of sections. Zero `indent`, `offset` and `border` are omitted.
pub fn list(sections: Vec<RichTextObject>, style: ListStyle, indent: u32, offset: u32, border: u32) -> RichTextObject {
    RichTextObject::RichTextList {
        elements: sections,
        style,
        indent: nonzero(indent),
        offset: nonzero(offset),
        border: nonzero(border),
    }
}

pub fn preformatted(elements: Vec<RichTextElement>, border: u32) -> RichTextObject {
    RichTextObject::RichTextPreformatted {
        elements,
        border: nonzero(border),
    }
}

pub fn quote(elements: Vec<RichTextElement>, border: u32) -> RichTextObject {
    RichTextObject::RichTextQuote {
        elements,
        border: nonzero(border),
    }
}

fn nonzero(value: u32) -> Option<u32> {
    (value > 0).then_some(value)
}
