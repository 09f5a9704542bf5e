use serde::{Deserialize, Serialize};
use std::fmt;

/// Comparison or match operator encoded by a filter clause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    Equals,                // =
    NotEquals,             // !=
    Contains,              // %
    ContainsCaseSensitive, // %%
    GreaterThan,           // >
    LessThan,              // <
    GreaterOrEqual,        // >=
    LessOrEqual,           // <=
}

impl Operator {
    /// Every operator, longest marker first. Detection walks this list in order.
    pub const BY_MARKER_LENGTH: [Operator; 8] = [
        Operator::GreaterOrEqual,
        Operator::LessOrEqual,
        Operator::NotEquals,
        Operator::ContainsCaseSensitive,
        Operator::Contains,
        Operator::GreaterThan,
        Operator::LessThan,
        Operator::Equals,
    ];

    pub fn marker(&self) -> &'static str {
        match self {
            Operator::Equals => "=",
            Operator::NotEquals => "!=",
            Operator::Contains => "%",
            Operator::ContainsCaseSensitive => "%%",
            Operator::GreaterThan => ">",
            Operator::LessThan => "<",
            Operator::GreaterOrEqual => ">=",
            Operator::LessOrEqual => "<=",
        }
    }

    /// Contains-family operators compare the textual form of a value.
    pub fn is_textual(&self) -> bool { matches!(self, Operator::Contains | Operator::ContainsCaseSensitive) }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.marker()) }
}

/// A dotted property path, e.g. `address.street`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathExpr {
    pub steps: Vec<String>,
}

impl PathExpr {
    pub fn simple(name: impl Into<String>) -> Self { Self { steps: vec![name.into()] } }
}

impl fmt::Display for PathExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(&self.steps.join(".")) }
}

/// One comma-delimited unit of a filter string: a path, an operator and one or more
/// alternative raw literals (`field%a|b|c`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clause {
    pub path: PathExpr,
    pub operator: Operator,
    pub values: Vec<String>,
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { write!(f, "{}{}{}", self.path, self.operator, self.values.join("|")) }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    Asc,
    Desc,
}

impl Direction {
    /// Case-insensitive match against `Asc` / `Desc`, surrounding whitespace ignored.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.eq_ignore_ascii_case("asc") {
            Some(Direction::Asc)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(Direction::Desc)
        } else {
            None
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Asc => f.write_str("Asc"),
            Direction::Desc => f.write_str("Desc"),
        }
    }
}

/// `path` or `path=Asc|Desc`. A missing direction is resolved by the compiler's configured default.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderBy {
    pub path: PathExpr,
    pub direction: Option<Direction>,
}
