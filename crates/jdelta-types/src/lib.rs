//! Foundation types for jdelta.
//!
//! This crate provides the recursive [`Value`] tree compared by the diff
//! engine, plus the normalizer that turns caller input (already-structured
//! values or serialized text) into a [`Value`].
//!
//! # Key Types
//!
//! - [`Value`] -- JSON-like datum: null, bool, number, string, array, object
//! - [`ValueKind`] -- Fieldless tag naming a [`Value`] variant
//! - [`Input`] -- Either a structured value or text awaiting normalization
//! - [`ValueError`] -- Errors raised when constructing or converting values

pub mod error;
pub mod normalize;
pub mod value;

pub use error::{ValueError, ValueResult};
pub use normalize::{normalize, Input};
pub use value::{Value, ValueKind, PARSE_DEPTH_LIMIT};
