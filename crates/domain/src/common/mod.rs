//! Common utility functions shared across the domain.
//!
//! # Design Principles
//!
//! - **Pure functions only** - no side effects, no I/O
//! - **Lenient** - loose author data never causes a failure here

pub mod json;
pub mod string;

pub use json::{field, has_content, leading_i64, loose_i64, loose_string, loose_string_list};
pub use string::{collapse_whitespace, none_if_blank, normalize_key, strip_decorations};
