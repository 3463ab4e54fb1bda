//! Validation for blocks, elements and views.
//!
//! Three layers, leaf to root:
//! - [`constraints`]: reusable primitives (text length, array bounds,
//!   identifier uniqueness, option checks)
//! - [`nodes`]: per-node-kind rules composed from the primitives
//! - [`view`]: document-level checks run once all blocks are built
//!
//! Every check fails fast with a [`BlockError`](crate::error::BlockError);
//! none of them allocate output.

pub mod constraints;
pub mod nodes;
pub mod view;

pub use constraints::{
    require_bounded_array, require_identifier, require_non_empty_text, require_option,
    require_option_list, require_unique_identifiers, text_len,
};
pub use view::{serialize_metadata, validate_view};
