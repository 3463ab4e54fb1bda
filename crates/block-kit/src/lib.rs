//! Block Kit: validated builders for chat-platform layout documents.
//!
//! This crate builds the JSON documents a chat platform renders as rich
//! messages, modals and home tabs, and checks them against the platform's
//! structural limits before they leave the process.
//!
//! # Overview
//!
//! A document is a view holding an ordered list of blocks; blocks hold
//! interactive elements; elements hold options. Every builder:
//! - **Validates first**: length, count, shape and uniqueness limits are
//!   checked before any output is assembled
//! - **Fails fast**: the first violation is returned as a [`BlockError`]
//!   naming the field, its limit and, for list members, the position
//! - **Emits platform JSON**: output types serialize with `serde` to the
//!   exact field names the platform expects
//!
//! # Quick Start
//!
//! ```rust
//! use block_kit::builder::{accessory, blocks, input, ViewBuilder};
//! use block_kit::config::{SectionTextConfig, StaticSelectAccessoryConfig, TextInputConfig};
//! use block_kit::options::OptionInput;
//!
//! let priority = accessory::static_select(StaticSelectAccessoryConfig::new(
//!     "priority",
//!     vec![OptionInput::new("High", "high"), OptionInput::new("Low", "low")],
//! ))
//! .unwrap();
//!
//! let view = ViewBuilder::modal("New ticket")
//!     .submit("Create")
//!     .block(blocks::markdown(SectionTextConfig::new("*Priority*").accessory(priority)).unwrap())
//!     .block(input::text(TextInputConfig::new("Summary", "summary")).unwrap())
//!     .metadata(serde_json::json!({"channel": "C123"}))
//!     .build()
//!     .unwrap();
//!
//! let json = serde_json::to_value(&view).unwrap();
//! assert_eq!(json["type"], "modal");
//! assert_eq!(json["blocks"][1]["element"]["type"], "plain_text_input");
//! assert_eq!(json["private_metadata"], r#"{"channel":"C123"}"#);
//! ```
//!
//! # Modules
//!
//! - [`builder`]: Builders for blocks, accessories, inputs, selects, rich text and views
//! - [`config`]: Input configuration structs, one per node kind
//! - [`model`]: Serializable output shapes
//! - [`options`]: Option normalization, initial selection and grouping
//! - [`validate`]: Constraint primitives, node validators and view checks
//! - [`reference`]: Built-in time zone and country tables
//! - [`util`]: Date and time parsing, and the [`Clock`] capability
//! - [`error`]: Error types
//! - [`limits`]: Platform size and count ceilings
//!
//! # Determinism
//!
//! Building is pure: the same configuration always yields the same output.
//! The only exception is a time picker without an initial time, which reads
//! the time from a caller-supplied [`Clock`].

pub mod builder;
pub mod config;
pub mod error;
pub mod limits;
pub mod model;
pub mod options;
pub mod reference;
pub mod util;
pub mod validate;

// Re-export commonly used types at crate root
pub use builder::ViewBuilder;
pub use error::{BlockError, ViolationKind, limit_message};
pub use model::{Block, Element, OptionList, OptionObject, OptionValue, TextObject, View, ViewType};
pub use options::{
    InitialSelection, OptionGroupInput, OptionInput, Options, SelectionState, group_by_capacity, normalize,
    resolve_initial,
};
pub use util::{Clock, FixedClock, SystemClock};
pub use validate::view::validate_view;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
