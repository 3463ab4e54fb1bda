//! Layout block builders.

use crate::builder::present;
use crate::config::{ContextConfig, ContextContent, FieldsConfig, HeaderConfig, ImageConfig, SectionTextConfig};
use crate::error::BlockError;
use crate::model::{
    ActionsBlock, Block, ContextBlock, ContextElement, DividerBlock, Element, HeaderBlock, ImageBlock,
    RichTextBlock, RichTextObject, SectionBlock, TextObject,
};
use crate::validate::nodes::{
    validate_actions, validate_block_id, validate_context, validate_fields, validate_header, validate_image,
    validate_section_text,
};

/// Actions block holding 1 to 25 interactive elements.
pub fn actions(elements: Vec<Element>, block_id: Option<String>) -> Result<Block, BlockError> {
    validate_actions(&elements, block_id.as_deref())?;
    Ok(Block::Actions(ActionsBlock {
        elements,
        block_id: present(block_id),
    }))
}

/// Context block.
///
/// Items render their image (if any) before their text; an image without
/// alt text gets `"image"`.
pub fn context(config: ContextConfig) -> Result<Block, BlockError> {
    validate_context(&config)?;
    let elements = match config.text {
        ContextContent::Text(text) => vec![ContextElement::Mrkdwn { text }],
        ContextContent::Texts(texts) => texts.into_iter().map(|text| ContextElement::Mrkdwn { text }).collect(),
        ContextContent::Items(items) => {
            let mut elements = Vec::with_capacity(items.len() * 2);
            for item in items {
                if let Some(image) = item.image {
                    elements.push(ContextElement::Image {
                        image_url: image.url,
                        alt_text: present(image.alt).unwrap_or_else(|| "image".to_string()),
                    });
                }
                if let Some(text) = item.text {
                    elements.push(ContextElement::Mrkdwn { text });
                }
            }
            elements
        }
    };
    Ok(Block::Context(ContextBlock {
        elements,
        block_id: present(config.block_id),
    }))
}

pub fn divider(block_id: Option<String>) -> Result<Block, BlockError> {
    validate_block_id(block_id.as_deref())?;
    Ok(Block::Divider(DividerBlock {
        block_id: present(block_id),
    }))
}

/// Section made of 1 to 10 markdown fields.
pub fn fields(config: FieldsConfig) -> Result<Block, BlockError> {
    validate_fields(&config)?;
    Ok(Block::Section(SectionBlock {
        text: None,
        fields: Some(config.fields.into_iter().map(TextObject::mrkdwn).collect()),
        accessory: None,
        block_id: present(config.block_id),
    }))
}

pub fn header(config: HeaderConfig) -> Result<Block, BlockError> {
    validate_header(&config)?;
    Ok(Block::Header(HeaderBlock {
        text: TextObject::plain(config.text),
        block_id: present(config.block_id),
    }))
}

pub fn image(config: ImageConfig) -> Result<Block, BlockError> {
    validate_image(&config)?;
    Ok(Block::Image(ImageBlock {
        image_url: config.url,
        alt_text: config.alt,
        title: present(config.title).map(TextObject::plain),
        block_id: present(config.block_id),
    }))
}

/// Markdown section, with an optional accessory.
pub fn markdown(config: SectionTextConfig) -> Result<Block, BlockError> {
    section(config, TextObject::mrkdwn)
}

/// Plain text section (`emoji: true`), with an optional accessory.
pub fn plain_text(config: SectionTextConfig) -> Result<Block, BlockError> {
    section(config, TextObject::plain_emoji)
}

fn section(config: SectionTextConfig, render: fn(String) -> TextObject) -> Result<Block, BlockError> {
    validate_section_text(&config.text, config.block_id.as_deref())?;
    Ok(Block::Section(SectionBlock {
        text: Some(render(config.text)),
        fields: None,
        accessory: config.accessory,
        block_id: present(config.block_id),
    }))
}

/// Rich text block. Elements are passed through unchecked.
pub fn rich_text(elements: Vec<RichTextObject>, block_id: Option<String>) -> Result<Block, BlockError> {
    validate_block_id(block_id.as_deref())?;
    Ok(Block::RichText(RichTextBlock {
        elements,
        block_id: present(block_id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ContextImage, ContextItem, from_json};
    use crate::error::ViolationKind;
    use crate::model::ImageElement;
    use serde_json::json;

    #[test]
    fn test_header_shape() {
        let block = header(HeaderConfig::new("Welcome").block_id("h1")).unwrap();
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "header", "text": {"type": "plain_text", "text": "Welcome"}, "block_id": "h1"})
        );
    }

    #[test]
    fn test_empty_block_id_omitted() {
        let block = divider(Some(String::new())).unwrap();
        assert_eq!(serde_json::to_value(&block).unwrap(), json!({"type": "divider"}));
    }

    #[test]
    fn test_context_items_order() {
        let config = ContextConfig {
            text: ContextContent::Items(vec![
                ContextItem {
                    text: Some("by *ana*".into()),
                    image: Some(ContextImage {
                        url: "https://example.com/a.png".into(),
                        alt: None,
                    }),
                },
                ContextItem {
                    text: Some("2 replies".into()),
                    image: None,
                },
            ]),
            block_id: None,
        };
        let block = context(config).unwrap();
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({
                "type": "context",
                "elements": [
                    {"type": "image", "image_url": "https://example.com/a.png", "alt_text": "image"},
                    {"type": "mrkdwn", "text": "by *ana*"},
                    {"type": "mrkdwn", "text": "2 replies"}
                ]
            })
        );
    }

    #[test]
    fn test_context_from_json_texts() {
        let config: ContextConfig = from_json(json!({"text": ["a", "b"], "block_id": "c"})).unwrap();
        let block = context(config).unwrap();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["elements"][1], json!({"type": "mrkdwn", "text": "b"}));
        assert_eq!(value["block_id"], "c");
    }

    #[test]
    fn test_context_rejects_long_text() {
        let err = context(ContextConfig::new("x".repeat(3001))).unwrap_err();
        assert_eq!(err.kind(), ViolationKind::Bound);
    }

    #[test]
    fn test_fields_shape() {
        let config = FieldsConfig {
            fields: vec!["*Type*".into(), "Bug".into()],
            block_id: None,
        };
        let value = serde_json::to_value(fields(config).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({"type": "section", "fields": [
                {"type": "mrkdwn", "text": "*Type*"},
                {"type": "mrkdwn", "text": "Bug"}
            ]})
        );
    }

    #[test]
    fn test_image_block_shape() {
        let mut config = ImageConfig::new("https://example.com/cat.png");
        config.title = Some("Cat".into());
        let value = serde_json::to_value(image(config).unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "image",
                "image_url": "https://example.com/cat.png",
                "alt_text": "image",
                "title": {"type": "plain_text", "text": "Cat"}
            })
        );
    }

    #[test]
    fn test_markdown_with_accessory() {
        let accessory = Element::Image(ImageElement {
            image_url: "https://example.com/i.png".into(),
            alt_text: "i".into(),
        });
        let block = markdown(SectionTextConfig::new("*hi*").accessory(accessory)).unwrap();
        let value = serde_json::to_value(&block).unwrap();
        assert_eq!(value["text"], json!({"type": "mrkdwn", "text": "*hi*"}));
        assert_eq!(value["accessory"]["type"], "image");
    }

    #[test]
    fn test_plain_text_section() {
        let value = serde_json::to_value(plain_text(SectionTextConfig::new("hi")).unwrap()).unwrap();
        assert_eq!(value["text"], json!({"type": "plain_text", "text": "hi", "emoji": true}));
        assert!(plain_text(SectionTextConfig::new("")).is_err());
    }

    #[test]
    fn test_actions_bounds() {
        assert!(actions(vec![], None).is_err());
    }

    #[test]
    fn test_rich_text_block() {
        let block = rich_text(vec![], Some("r".into())).unwrap();
        assert_eq!(
            serde_json::to_value(&block).unwrap(),
            json!({"type": "rich_text", "elements": [], "block_id": "r"})
        );
        assert!(rich_text(vec![], Some("r".repeat(256))).is_err());
    }
}
