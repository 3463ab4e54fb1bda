//! Output types for Block Kit documents.
//!
//! This module contains the serializable shapes produced by the builders:
//! - Text objects
//! - Options and option groups
//! - Interactive elements
//! - Layout blocks
//! - Rich text
//! - Views

pub mod block;
pub mod element;
pub mod option;
pub mod rich_text;
pub mod text;
pub mod view;

pub use block::{
    ActionsBlock, Block, ContextBlock, ContextElement, DividerBlock, HasBlockId, HeaderBlock,
    ImageBlock, InputBlock, RichTextBlock, SectionBlock,
};
pub use element::{
    ButtonElement, ButtonStyle, CheckboxesElement, ConfirmObject, ConversationFilter,
    ConversationType, ConversationsSelectElement, DatepickerElement, DispatchActionConfig,
    Element, EmailTextInputElement, ExternalSelectElement, ImageElement, OverflowElement,
    PlainTextInputElement, RadioButtonsElement, StaticSelectElement, TimepickerElement,
    TriggerAction, UsersSelectElement,
};
pub use option::{OptionGroupObject, OptionList, OptionObject, OptionValue};
pub use rich_text::{ListStyle, RichTextElement, RichTextObject, RichTextStyle};
pub use text::TextObject;
pub use view::{View, ViewType};
