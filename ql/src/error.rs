use crate::grammar;
use thiserror::Error;

/// Errors raised while turning raw query text into an untyped AST.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("malformed clause: {0:?} contains no recognised operator")]
    MalformedClause(String),
    #[error("malformed property path: {0:?}")]
    MalformedPath(String),
    #[error("invalid order direction {0:?}, expected Asc or Desc")]
    InvalidDirection(String),
    #[error("syntax error: {0}")]
    SyntaxError(String),
}

impl From<pest::error::Error<grammar::Rule>> for ParseError {
    fn from(error: pest::error::Error<grammar::Rule>) -> Self { ParseError::SyntaxError(error.to_string()) }
}
