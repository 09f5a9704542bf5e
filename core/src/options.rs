use dynql::ast::Direction;
use serde::{Deserialize, Serialize};

/// Knobs shared by the filter, order and select compilers.
///
/// Deserializable with every field optional, so hosts can keep it in their own config files:
///
/// ```ignore
/// let options: CompileOptions = serde_json::from_str(r#"{ "default_direction": "Desc" }"#)?;
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompileOptions {
    /// Direction used when an order string has no `=Asc` / `=Desc` suffix.
    pub default_direction: Direction,
    /// `chrono` formats tried, in order, for date literals. Date-time literals fall back to these
    /// (at midnight) after `datetime_formats`.
    pub date_formats: Vec<String>,
    /// `chrono` formats tried, in order, for date-time literals. Timestamp literals try RFC 3339 first.
    pub datetime_formats: Vec<String>,
    /// Literal text that means "no value" when compared against a nullable field.
    /// Unset by default, in which case every literal is coerced as a present value.
    pub null_literal: Option<String>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            default_direction: Direction::Asc,
            date_formats: vec!["%Y-%m-%d".into(), "%m/%d/%Y".into()],
            datetime_formats: vec!["%Y-%m-%dT%H:%M:%S%.f".into(), "%Y-%m-%d %H:%M:%S%.f".into()],
            null_literal: None,
        }
    }
}

impl CompileOptions {
    pub fn with_default_direction(mut self, direction: Direction) -> Self {
        self.default_direction = direction;
        self
    }

    pub fn with_null_literal(mut self, literal: impl Into<String>) -> Self {
        self.null_literal = Some(literal.into());
        self
    }
}
