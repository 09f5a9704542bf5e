use crate::ast::{Clause, Direction, OrderBy, PathExpr};
use crate::detector::detect;
use crate::error::ParseError;
use crate::grammar::{DynqlParser, Rule};
use pest::iterators::Pair;
use pest::Parser;
use tracing::trace;

/// Parse a full filter string into its comma-separated clauses.
///
/// Blank input means "no filter" and yields no clauses. An empty clause inside a non-blank
/// filter (`a=1,`) is malformed.
pub fn parse_filter(input: &str) -> Result<Vec<Clause>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let pairs = DynqlParser::parse(Rule::Filter, input)?;
    let mut clauses = Vec::new();
    for pair in pairs {
        match pair.as_rule() {
            Rule::Clause => clauses.push(parse_clause(pair.as_str())?),
            Rule::EOI => {}
            rule => return Err(unexpected("Clause", rule)),
        }
    }

    Ok(clauses)
}

/// Parse one clause: `path op literal ('|' literal)*`.
pub fn parse_clause(input: &str) -> Result<Clause, ParseError> {
    let detected = detect(input)?;
    trace!(clause = input, operator = %detected.operator, "detected operator");

    let path = parse_path(detected.left)?;
    let values = parse_alternatives(detected.right)?;

    Ok(Clause { path, operator: detected.operator, values })
}

/// Split the right-hand side of a clause into its pipe-separated alternatives.
fn parse_alternatives(input: &str) -> Result<Vec<String>, ParseError> {
    let pairs = DynqlParser::parse(Rule::Alternatives, input)?;
    Ok(pairs.filter(|pair| pair.as_rule() == Rule::Alternative).map(|pair| pair.as_str().to_string()).collect())
}

/// Parse a dotted property path. Surrounding whitespace of every segment is ignored.
pub fn parse_path(input: &str) -> Result<PathExpr, ParseError> {
    let malformed = || ParseError::MalformedPath(input.to_string());
    let mut pairs = DynqlParser::parse(Rule::PathOnly, input.trim()).map_err(|_| malformed())?;
    let path = pairs.next().filter(|pair| pair.as_rule() == Rule::Path).ok_or_else(malformed)?;
    path_from_pair(path).ok_or_else(malformed)
}

fn path_from_pair(pair: Pair<Rule>) -> Option<PathExpr> {
    let mut steps = Vec::new();
    for segment in pair.into_inner() {
        let step = segment.as_str().trim();
        if step.is_empty() {
            return None;
        }
        steps.push(step.to_string());
    }
    if steps.is_empty() {
        return None;
    }
    Some(PathExpr { steps })
}

/// Parse an order string, `path` or `path=Asc|Desc`. Blank input means no ordering.
pub fn parse_order(input: &str) -> Result<Option<OrderBy>, ParseError> {
    if input.trim().is_empty() {
        return Ok(None);
    }

    let malformed = || ParseError::MalformedPath(input.trim().to_string());
    let pairs = DynqlParser::parse(Rule::Order, input).map_err(|_| malformed())?;

    let mut path = None;
    let mut direction = None;
    for pair in pairs {
        match pair.as_rule() {
            Rule::Path => path = Some(path_from_pair(pair).ok_or_else(malformed)?),
            Rule::Direction => {
                let token = pair.as_str();
                direction = Some(Direction::parse(token).ok_or_else(|| ParseError::InvalidDirection(token.to_string()))?);
            }
            Rule::EOI => {}
            rule => return Err(unexpected("Path or Direction", rule)),
        }
    }

    let path = path.ok_or_else(malformed)?;
    Ok(Some(OrderBy { path, direction }))
}

/// Parse a select string into trimmed field names. Blank entries are skipped.
pub fn parse_select(input: &str) -> Result<Vec<String>, ParseError> {
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let pairs = DynqlParser::parse(Rule::Select, input)?;
    Ok(pairs
        .filter(|pair| pair.as_rule() == Rule::FieldName)
        .map(|pair| pair.as_str().trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect())
}

fn unexpected(expected: &str, got: Rule) -> ParseError { ParseError::SyntaxError(format!("expected {expected}, got {got:?}")) }
