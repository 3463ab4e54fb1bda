//! Layout block inputs.

use serde::Deserialize;

use crate::config::default_image_alt;
use crate::model::Element;

/// Header block: plain text, at most 150 characters.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HeaderConfig {
    pub text: String,
    #[serde(default)]
    pub block_id: Option<String>,
}

impl HeaderConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            block_id: None,
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }
}

/// Section with a single text object (markdown or plain text).
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SectionTextConfig {
    pub text: String,
    #[serde(default)]
    pub block_id: Option<String>,
    /// Section accessory; set through the builder API only.
    #[serde(skip)]
    pub accessory: Option<Element>,
}

impl SectionTextConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn block_id(mut self, block_id: impl Into<String>) -> Self {
        self.block_id = Some(block_id.into());
        self
    }

    pub fn accessory(mut self, accessory: Element) -> Self {
        self.accessory = Some(accessory);
        self
    }
}

/// Section made of markdown fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldsConfig {
    pub fields: Vec<String>,
    #[serde(default)]
    pub block_id: Option<String>,
}

/// Image block.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    pub url: String,
    #[serde(default = "default_image_alt")]
    pub alt: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub block_id: Option<String>,
}

impl ImageConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            alt: default_image_alt(),
            title: None,
            block_id: None,
        }
    }
}

/// Context block content.
///
/// Either one markdown string, a list of markdown strings, or a list of
/// items each holding an optional image and an optional text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ContextContent {
    Text(String),
    Texts(Vec<String>),
    Items(Vec<ContextItem>),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextItem {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub image: Option<ContextImage>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextImage {
    pub url: String,
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ContextConfig {
    pub text: ContextContent,
    #[serde(default)]
    pub block_id: Option<String>,
}

impl ContextConfig {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: ContextContent::Text(text.into()),
            block_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::from_json;
    use serde_json::json;

    #[test]
    fn test_image_alt_default() {
        let image: ImageConfig = from_json(json!({"url": "https://example.com/a.png"})).unwrap();
        assert_eq!(image.alt, "image");
    }

    #[test]
    fn test_context_content_shapes() {
        let one: ContextConfig = from_json(json!({"text": "hi"})).unwrap();
        assert_eq!(one.text, ContextContent::Text("hi".into()));

        let many: ContextConfig = from_json(json!({"text": ["a", "b"]})).unwrap();
        assert_eq!(many.text, ContextContent::Texts(vec!["a".into(), "b".into()]));

        let items: ContextConfig =
            from_json(json!({"text": [{"text": "a", "image": {"url": "https://x/y.png"}}]})).unwrap();
        match items.text {
            ContextContent::Items(items) => {
                assert_eq!(items[0].text.as_deref(), Some("a"));
                assert_eq!(items[0].image.as_ref().map(|i| i.url.as_str()), Some("https://x/y.png"));
            }
            other => panic!("Expected items, got {other:?}"),
        }
    }

    #[test]
    fn test_section_rejects_accessory_key() {
        assert!(from_json::<SectionTextConfig>(json!({"text": "a", "accessory": {}})).is_err());
    }
}
