use anyhow::Result;
use common::*;

use dynfilter::{CompileError, Filter};
use dynql::error::ParseError;

fn matching(filter: &str) -> Result<Vec<Person>> {
    let filter = Filter::<Person>::compile(filter)?;
    Ok(filter.apply(roster()).collect())
}

#[test]
fn roster_counts() -> Result<()> {
    assert_eq!(matching("name%a")?.len(), 2);
    assert_eq!(matching("age>=27")?.len(), 4);
    assert_eq!(matching("name%b")?.len(), 2);
    assert_eq!(names(&matching("name%b,age>27")?), vec!["Albert"]);
    assert_eq!(names(&matching("name%%B")?), vec!["Bruno"]);
    assert_eq!(matching("address.street%street")?.len(), 5);
    Ok(())
}

#[test]
fn single_matches() -> Result<()> {
    assert_eq!(names(&matching("name=Bruno")?), vec!["Bruno"]);
    assert_eq!(names(&matching("name=Albert")?), vec!["Albert"]);
    assert_eq!(names(&matching("name=Fred,age=33")?), vec!["Fred"]);
    assert_eq!(names(&matching("age=23")?), vec!["Lucao"]);
    Ok(())
}

#[test]
fn comparison_operators() -> Result<()> {
    assert_eq!(names(&matching("age<27")?), vec!["Lucao"]);
    assert_eq!(names(&matching("age<=27")?), vec!["Bruno", "Lucao"]);
    assert_eq!(names(&matching("age>33")?), vec!["Albert"]);
    assert_eq!(matching("age!=27")?.len(), 4);
    assert_eq!(names(&matching("name>Fred")?), vec!["Lucao", "Luide"]);
    Ok(())
}

#[test]
fn contains_case_handling() -> Result<()> {
    assert_eq!(names(&matching("name%LU")?), vec!["Lucao", "Luide"]);
    assert!(matching("name%%LU")?.is_empty());
    assert_eq!(names(&matching("name%%Lu")?), vec!["Lucao", "Luide"]);
    // The textual form of a number is searched too.
    assert_eq!(names(&matching("age%3")?), vec!["Fred", "Albert", "Lucao"]);
    Ok(())
}

#[test]
fn blank_filter_matches_everything() -> Result<()> {
    assert_eq!(matching("")?.len(), 5);
    assert_eq!(matching("   ")?.len(), 5);
    Ok(())
}

#[test]
fn alternatives_or_with_everything_before() -> Result<()> {
    // (age=27 AND name%lu) OR name%fr
    assert_eq!(names(&matching("age=27,name%lu|fr")?), vec!["Fred"]);
    // (name%lu OR name%fr) AND age>25
    assert_eq!(names(&matching("name%lu|fr,age>25")?), vec!["Fred", "Luide"]);
    // ((name%b OR name%ca) AND age>30) OR age>24
    let filter = Filter::<Person>::compile("name%b|ca,age>30|24")?;
    assert_eq!(filter.to_string(), "(((name % \"b\" OR name % \"ca\") AND age > 30) OR age > 24)");
    assert_eq!(names(filter.apply(&roster()).collect::<Vec<_>>()), vec!["Bruno", "Fred", "Albert", "Luide"]);
    Ok(())
}

#[test]
fn compile_errors() {
    assert_eq!(Filter::<Person>::compile("Nome=Bruno").unwrap_err(), CompileError::PropertyNotFound {
        name: "Nome".into(),
        root: "Person".into()
    });
    assert!(matches!(Filter::<Person>::compile("name"), Err(CompileError::Parse(ParseError::MalformedClause(_)))));
    assert!(matches!(Filter::<Person>::compile("age>=1,"), Err(CompileError::Parse(ParseError::MalformedClause(_)))));
    assert!(matches!(Filter::<Person>::compile("address..street=x"), Err(CompileError::Parse(ParseError::MalformedPath(_)))));
    assert!(matches!(Filter::<Person>::compile("age>=old"), Err(CompileError::InvalidLiteral { .. })));
    // `>=` and `<=` are both two characters long.
    assert!(matches!(Filter::<Person>::compile("age>=1<=2"), Err(CompileError::Parse(ParseError::MalformedClause(_)))));
}

#[test]
fn compiled_filters_are_reusable() -> Result<()> {
    let filter = Filter::<Person>::compile("age>=27")?;
    let people = roster();
    assert_eq!(filter.apply(&people).count(), 4);
    assert_eq!(filter.apply(&people).count(), 4);
    assert!(filter.matches(&people[0]));
    assert!(!filter.matches(&people[3]));
    Ok(())
}
