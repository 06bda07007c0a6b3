//! Error types for the report crate.

/// Errors that can occur while configuring a report.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ReportError {
    /// The locale name is not one of the supported locales.
    #[error("unknown locale: {0} (expected one of: en, zh)")]
    UnknownLocale(String),
}

/// Convenience alias for report results.
pub type ReportResult<T> = Result<T, ReportError>;
