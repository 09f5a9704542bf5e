//! Operator detection for a single filter clause.
//!
//! Markers overlap: every two-character marker (`>=`, `<=`, `!=`, `%%`) contains a character
//! that is itself a one-character marker. Markers are therefore tried longest first, and within
//! one length exactly one marker may be present.

use crate::ast::Operator;
use crate::error::ParseError;

/// A clause split around its operator marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Detected<'a> {
    pub operator: Operator,
    pub left: &'a str,
    pub right: &'a str,
}

/// Determine which operator `clause` encodes and split it at the first occurrence of that marker.
pub fn detect(clause: &str) -> Result<Detected<'_>, ParseError> {
    let mut index = 0;
    while index < Operator::BY_MARKER_LENGTH.len() {
        let length = Operator::BY_MARKER_LENGTH[index].marker().len();
        let tier: Vec<Operator> =
            Operator::BY_MARKER_LENGTH.iter().copied().skip(index).take_while(|op| op.marker().len() == length).collect();
        index += tier.len();

        let mut found = tier.into_iter().filter_map(|op| clause.find(op.marker()).map(|position| (op, position)));
        match (found.next(), found.next()) {
            (None, _) => continue,
            (Some((operator, position)), None) => {
                let (left, rest) = clause.split_at(position);
                return Ok(Detected { operator, left, right: &rest[operator.marker().len()..] });
            }
            (Some(_), Some(_)) => return Err(ParseError::MalformedClause(clause.to_string())),
        }
    }

    Err(ParseError::MalformedClause(clause.to_string()))
}
