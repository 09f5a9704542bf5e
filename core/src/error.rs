use dynql::error::ParseError;
use thiserror::Error;

/// Error raised while compiling a filter, order or select string against a schema.
///
/// Every variant describes bad client input. Compilation either returns a complete artifact or
/// one of these; evaluating a compiled artifact never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompileError {
    #[error("property {name} was not found on {root}")]
    PropertyNotFound { name: String, root: String },
    #[error("unsupported path {path}: {reason}")]
    UnsupportedPath { path: String, reason: &'static str },
    #[error("invalid literal {text:?} for type {target}")]
    InvalidLiteral { text: String, target: String },
    #[error("{text:?} is not a member of enum {enumeration}")]
    InvalidEnumValue { text: String, enumeration: String },
    #[error("invalid GUID {0:?}")]
    InvalidGuid(String),
    #[error(transparent)]
    Parse(#[from] ParseError),
}

impl CompileError {
    pub(crate) fn property_not_found(name: impl Into<String>, root: impl Into<String>) -> Self {
        CompileError::PropertyNotFound { name: name.into(), root: root.into() }
    }

    pub(crate) fn invalid_literal(text: &str, target: impl ToString) -> Self {
        CompileError::InvalidLiteral { text: text.to_string(), target: target.to_string() }
    }

    /// Whether the host should surface this as a client input error. Always true: nothing in
    /// compilation depends on server-side state.
    pub fn is_client_error(&self) -> bool { true }

    /// The raw text or name that caused the failure, for diagnostics.
    pub fn offending_text(&self) -> &str {
        match self {
            CompileError::PropertyNotFound { name, .. } => name,
            CompileError::UnsupportedPath { path, .. } => path,
            CompileError::InvalidLiteral { text, .. } | CompileError::InvalidEnumValue { text, .. } => text,
            CompileError::InvalidGuid(text) => text,
            CompileError::Parse(ParseError::MalformedClause(text))
            | CompileError::Parse(ParseError::MalformedPath(text))
            | CompileError::Parse(ParseError::InvalidDirection(text))
            | CompileError::Parse(ParseError::SyntaxError(text)) => text,
        }
    }
}
