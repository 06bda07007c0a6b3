//! Structural diff engine for jdelta.
//!
//! Walks two [`Value`](jdelta_types::Value) trees in lock-step and reports
//! every difference as a path-addressed [`ChangeRecord`]. Arrays are compared
//! by position; objects by key.
//!
//! # Key Types
//!
//! - [`DiffResult`] -- Ordered change list plus the derived modified flag
//! - [`ChangeRecord`] / [`ChangeKind`] -- One reported difference
//!
//! # Entry Points
//!
//! - [`normalize_and_compare`] -- Normalize both inputs, then compare
//! - [`compare`] -- Compare two already-structured values

pub mod change;
pub mod equality;
pub mod path;
pub mod structural;

pub use change::{ChangeKind, ChangeRecord, DiffResult};
pub use equality::deep_equal;
pub use path::{index_path, key_path};
pub use structural::{compare, compare_at, normalize_and_compare};
