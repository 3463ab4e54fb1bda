//! Size and count ceilings enforced by the platform.
//!
//! Character limits are measured in Unicode scalar values.

/// Maximum length of a `block_id`.
pub const MAX_BLOCK_ID_LEN: usize = 255;

/// Maximum length of an `action_id`.
pub const MAX_ACTION_ID_LEN: usize = 255;

/// Maximum length of a view `callback_id`.
pub const MAX_CALLBACK_ID_LEN: usize = 255;

/// Default ceiling for free-form text (section, context, markdown).
pub const MAX_TEXT_LEN: usize = 3000;

/// Maximum length of header text.
pub const MAX_HEADER_LEN: usize = 150;

/// Maximum length of a section field.
pub const MAX_FIELD_LEN: usize = 2000;

/// Maximum number of fields in a section.
pub const MAX_FIELDS: usize = 10;

/// Maximum number of elements in a context block.
pub const MAX_CONTEXT_ELEMENTS: usize = 10;

/// Maximum number of elements in an actions block.
pub const MAX_ACTION_ELEMENTS: usize = 25;

/// Maximum length of a URL.
pub const MAX_URL_LEN: usize = 3000;

/// Maximum length of image alt text and image titles.
pub const MAX_IMAGE_TEXT_LEN: usize = 2000;

/// Maximum length of a button label.
pub const MAX_BUTTON_TEXT_LEN: usize = 75;

/// Maximum length of a button value (serialized when structured).
pub const MAX_BUTTON_VALUE_LEN: usize = 2000;

/// Maximum length of a placeholder.
pub const MAX_PLACEHOLDER_LEN: usize = 150;

/// Maximum length of an input label or hint.
pub const MAX_LABEL_LEN: usize = 2000;

/// Maximum value for a plain-text input's `min_length`.
pub const MAX_INPUT_MIN_LENGTH: u64 = 3000;

// === Options ===

/// Maximum length of an option's text, value and description.
pub const MAX_OPTION_TEXT_LEN: usize = 150;

/// Maximum number of options in a select menu (also the per-group capacity).
pub const MAX_SELECT_OPTIONS: usize = 100;

/// Maximum number of options in an overflow menu.
pub const MAX_OVERFLOW_OPTIONS: usize = 5;

/// Maximum number of options in a checkbox or radio group.
pub const MAX_CHOICE_OPTIONS: usize = 10;

/// Number of options a single option group may hold.
pub const OPTION_GROUP_CAPACITY: usize = 100;

/// Maximum length of an option group label.
pub const MAX_OPTION_GROUP_LABEL_LEN: usize = 75;

// === Confirmation dialogs ===

/// Maximum length of a confirmation dialog title.
pub const MAX_CONFIRM_TITLE_LEN: usize = 100;

/// Maximum length of a confirmation dialog description.
pub const MAX_CONFIRM_TEXT_LEN: usize = 300;

/// Maximum length of a confirmation dialog button label.
pub const MAX_CONFIRM_BUTTON_LEN: usize = 30;

// === Views ===

/// Minimum number of blocks in a view.
pub const MIN_VIEW_BLOCKS: usize = 1;

/// Maximum number of blocks in a view.
pub const MAX_VIEW_BLOCKS: usize = 100;

/// Maximum length of a modal title, submit label and close label.
pub const MAX_MODAL_TEXT_LEN: usize = 24;

/// Maximum length of serialized view metadata.
pub const MAX_METADATA_LEN: usize = 3000;
