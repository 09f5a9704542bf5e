use pest_derive::Parser;

#[derive(Parser)]
#[grammar = "dynql.pest"]
pub struct DynqlParser;
