use anyhow::Result;
use common::*;

use chrono::{NaiveDate, TimeZone, Utc};
use dynfilter::{CompileError, CompileOptions, Filter};
use uuid::Uuid;

fn people() -> Vec<Person> {
    let mut bruno = person("Bruno", 27);
    bruno.role = Role::Admin;
    bruno.email = Some("bruno@example.com".into());
    bruno.birth_date = NaiveDate::from_ymd_opt(1991, 1, 1);
    bruno.last_login = Some(Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap());
    bruno.score = 0.1;
    bruno.address.zip = Some(50000);

    let mut fred = person("Fred", 33);
    fred.role = Role::Guest;
    fred.birth_date = NaiveDate::from_ymd_opt(1985, 6, 15);
    fred.score = 7.5;

    let albert = person("Albert", 37);
    vec![bruno, fred, albert]
}

fn matching_with(filter: &str, options: &CompileOptions) -> Result<Vec<String>> {
    let filter = Filter::<Person>::compile_with(filter, options)?;
    Ok(filter.apply(&people()).map(|p| p.name.clone()).collect())
}

fn matching(filter: &str) -> Result<Vec<String>> { matching_with(filter, &CompileOptions::default()) }

#[test]
fn enumerations() -> Result<()> {
    assert_eq!(matching("role=admin")?, vec!["Bruno"]);
    assert_eq!(matching("role=MEMBER")?, vec!["Albert"]);
    assert_eq!(matching("role!=Member")?, vec!["Bruno", "Fred"]);
    // Members order by declaration: Guest < Member < Admin.
    assert_eq!(matching("role>Guest")?, vec!["Bruno", "Albert"]);
    assert_eq!(matching("role%mem")?, vec!["Albert"]);

    assert_eq!(Filter::<Person>::compile("role=Owner").unwrap_err(), CompileError::InvalidEnumValue {
        text: "Owner".into(),
        enumeration: "Role".into()
    });
    Ok(())
}

#[test]
fn guids() -> Result<()> {
    let fred = Uuid::new_v5(&Uuid::NAMESPACE_OID, b"Fred");
    assert_eq!(matching(&format!("id={fred}"))?, vec!["Fred"]);
    assert_eq!(matching(&format!("id={}", fred.to_string().to_uppercase()))?, vec!["Fred"]);
    assert_eq!(matching(&format!("id!={fred}"))?, vec!["Bruno", "Albert"]);

    assert_eq!(Filter::<Person>::compile("id=12345").unwrap_err(), CompileError::InvalidGuid("12345".into()));
    Ok(())
}

#[test]
fn dates() -> Result<()> {
    assert_eq!(matching("birth_date=1991-01-01")?, vec!["Bruno"]);
    assert_eq!(matching("birth_date=01/01/1991")?, vec!["Bruno"]);
    assert_eq!(matching("birth_date<1990-01-01")?, vec!["Fred"]);
    // Albert has no birth date, so no ordering test can hold for him.
    assert_eq!(matching("birth_date>1900-01-01")?, vec!["Bruno", "Fred"]);
    assert!(matches!(Filter::<Person>::compile("birth_date=someday"), Err(CompileError::InvalidLiteral { .. })));

    let options = CompileOptions { date_formats: vec!["%d.%m.%Y".into()], ..Default::default() };
    assert_eq!(matching_with("birth_date=15.06.1985", &options)?, vec!["Fred"]);
    Ok(())
}

#[test]
fn timestamps() -> Result<()> {
    assert_eq!(matching("last_login=2024-03-01T12:00:00Z")?, vec!["Bruno"]);
    assert_eq!(matching("last_login=2024-03-01T09:00:00-03:00")?, vec!["Bruno"]);
    assert_eq!(matching("last_login>2024-01-01")?, vec!["Bruno"]);
    Ok(())
}

#[test]
fn numbers() -> Result<()> {
    assert_eq!(matching("score=0.1")?, vec!["Bruno"]);
    assert_eq!(matching("score>=7.5")?, vec!["Fred"]);
    assert_eq!(matching("address.zip=50000")?, vec!["Bruno"]);
    assert_eq!(matching("age= 33 ")?, vec!["Fred"]);
    assert!(matches!(Filter::<Person>::compile("address.zip=-1"), Err(CompileError::InvalidLiteral { .. })));
    assert!(matches!(Filter::<Person>::compile("age=99999999999"), Err(CompileError::InvalidLiteral { .. })));
    Ok(())
}

#[test]
fn nullable_values() -> Result<()> {
    assert_eq!(matching("email=bruno@example.com")?, vec!["Bruno"]);
    assert_eq!(matching("email!=bruno@example.com")?, vec!["Fred", "Albert"]);
    assert_eq!(matching("email%EXAMPLE")?, vec!["Bruno"]);
    // Without a configured null literal, `null` is just text.
    assert!(matching("email=null")?.is_empty());

    let options = CompileOptions::default().with_null_literal("null");
    assert_eq!(matching_with("email=null", &options)?, vec!["Fred", "Albert"]);
    assert_eq!(matching_with("email!=null", &options)?, vec!["Bruno"]);
    assert_eq!(matching_with("address.zip=null", &options)?, vec!["Fred", "Albert"]);
    Ok(())
}

#[test]
fn string_literals_are_verbatim() -> Result<()> {
    assert!(matching("name= Bruno")?.is_empty());
    assert_eq!(matching("name=Bruno")?, vec!["Bruno"]);
    assert_eq!(matching("email%@")?, vec!["Bruno"]);
    Ok(())
}
