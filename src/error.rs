//! Query engine error types.

use thiserror::Error;

/// Errors raised while parsing or evaluating a single query line.
///
/// Every variant is scoped to the one query that produced it: the batch
/// runner records the failure against that line and continues with the
/// next one.
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("relation '{0}' not found")]
    UnknownRelation(String),

    #[error("attribute '{attribute}' not found among {attributes:?}")]
    UnknownAttribute {
        attribute: String,
        attributes: Vec<String>,
    },

    #[error("malformed condition '{0}': expected `attribute op 'value'`")]
    MalformedCondition(String),

    #[error("arity error: {0}")]
    ArityError(String),

    #[error("schema mismatch: {0}")]
    SchemaMismatch(String),

    #[error("type mismatch: '{0}' is not numeric")]
    TypeMismatch(String),

    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for query operations.
pub type QueryResult<T> = Result<T, QueryError>;
