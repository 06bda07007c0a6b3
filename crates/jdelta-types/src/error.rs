use thiserror::Error;

/// Errors produced while building or converting [`Value`](crate::Value)s.
///
/// Comparison itself never fails; these only surface at the edges where a
/// value is parsed strictly or handed to another representation.
#[derive(Debug, Error, PartialEq)]
pub enum ValueError {
    #[error("parse error: {0}")]
    Parse(String),

    /// The document nests deeper than the parser accepts.
    #[error("document nests deeper than {} levels", crate::value::PARSE_DEPTH_LIMIT)]
    TooDeep,

    #[error("number {0} cannot be represented in a JSON document")]
    NonFiniteNumber(f64),
}

/// Convenience alias for value results.
pub type ValueResult<T> = Result<T, ValueError>;
