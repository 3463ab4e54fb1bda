//! Error types for block construction and validation.

use thiserror::Error;

/// Violation categories every [`BlockError`] falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationKind {
    /// Wrong type or shape for a field (e.g. options that are neither flat nor grouped).
    Shape,
    /// Count or length outside the allowed range.
    Bound,
    /// Duplicate identifier within a document.
    Uniqueness,
    /// A conditionally-required field is missing.
    RequiredField,
}

impl ViolationKind {
    /// Returns the category name (e.g., "bound").
    pub fn name(&self) -> &'static str {
        match self {
            ViolationKind::Shape => "shape",
            ViolationKind::Bound => "bound",
            ViolationKind::Uniqueness => "uniqueness",
            ViolationKind::RequiredField => "required_field",
        }
    }
}

/// Renders the character-limit message shared by every length check.
///
/// `position` is the index of the offending item when the field belongs to
/// a list (options, fields, context elements).
pub fn limit_message(field: &str, limit: usize, len: usize, position: Option<usize>) -> String {
    let mut message = format!("Expected {field} to be less than {limit} characters. Received: {len}");
    if let Some(position) = position {
        message.push_str(&format!(". Position: {position}"));
    }
    message
}

fn position_suffix(position: &Option<usize>) -> String {
    match position {
        Some(p) => format!(". Position: {p}"),
        None => String::new(),
    }
}

/// Error raised while validating or assembling a block, element or view.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BlockError {
    // === Shape ===
    #[error("Expected {field} to be {expected}")]
    Shape { field: &'static str, expected: String },

    #[error("Expected {field} to be a valid date in format YYYY-MM-DD. Received: {value}")]
    InvalidDate { field: &'static str, value: String },

    #[error("Expected {field} to be a time in format hh:mm a. Received: {value}")]
    InvalidTime { field: &'static str, value: String },

    #[error("Unknown time zone: {zone}")]
    UnknownTimeZone { zone: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    // === Bound ===
    #[error("{}", limit_message(field, *limit, *len, *position))]
    TooLong {
        field: &'static str,
        limit: usize,
        len: usize,
        position: Option<usize>,
    },

    #[error("Expected {field} to have at least one character{}", position_suffix(position))]
    EmptyText {
        field: &'static str,
        position: Option<usize>,
    },

    #[error("Expected {field} to have between {min} and {max} elements. Received: {len}")]
    CountOutOfRange {
        field: &'static str,
        min: usize,
        max: usize,
        len: usize,
    },

    #[error("Expected {field} to be between {min} and {max}. Received: {value}")]
    NumberOutOfRange {
        field: &'static str,
        min: u64,
        max: u64,
        value: u64,
    },

    // === Uniqueness ===
    #[error("Found a duplicate {field}: {value}")]
    Duplicate { field: &'static str, value: String },

    // === RequiredField ===
    #[error("{field} is required")]
    MissingField { field: &'static str },
}

impl BlockError {
    /// Returns the violation category for this error.
    pub fn kind(&self) -> ViolationKind {
        match self {
            BlockError::Shape { .. }
            | BlockError::InvalidDate { .. }
            | BlockError::InvalidTime { .. }
            | BlockError::UnknownTimeZone { .. }
            | BlockError::Config(_) => ViolationKind::Shape,
            BlockError::TooLong { .. }
            | BlockError::EmptyText { .. }
            | BlockError::CountOutOfRange { .. }
            | BlockError::NumberOutOfRange { .. } => ViolationKind::Bound,
            BlockError::Duplicate { .. } => ViolationKind::Uniqueness,
            BlockError::MissingField { .. } => ViolationKind::RequiredField,
        }
    }

    /// Returns the name of the offending field, when the error carries one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            BlockError::Shape { field, .. }
            | BlockError::InvalidDate { field, .. }
            | BlockError::InvalidTime { field, .. }
            | BlockError::TooLong { field, .. }
            | BlockError::EmptyText { field, .. }
            | BlockError::CountOutOfRange { field, .. }
            | BlockError::NumberOutOfRange { field, .. }
            | BlockError::Duplicate { field, .. }
            | BlockError::MissingField { field } => Some(*field),
            BlockError::UnknownTimeZone { .. } | BlockError::Config(_) => None,
        }
    }
}

impl From<serde_json::Error> for BlockError {
    fn from(err: serde_json::Error) -> Self {
        BlockError::Config(err.to_string())
    }
}
