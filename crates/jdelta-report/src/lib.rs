//! Report formatting for jdelta.
//!
//! Renders a [`DiffResult`](jdelta_diff::DiffResult) as text: a header with
//! the change count followed by one line per change, or a fixed message
//! when nothing differs.
//!
//! # Key Types
//!
//! - [`ReportConfig`] -- Locale and root-marker settings
//! - [`Locale`] / [`Labels`] -- Localized message and label set

pub mod config;
pub mod error;
pub mod format;
pub mod labels;

pub use config::ReportConfig;
pub use error::{ReportError, ReportResult};
pub use format::{format, format_change, format_with, header};
pub use labels::{Labels, Locale};
