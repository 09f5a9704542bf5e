mod enumeration;
mod model;

use proc_macro::TokenStream;

/// Implements `Model`, `Record` and `Property` for a struct with named fields.
///
/// Every field type must implement `Property` and `Clone`, and the struct must implement `Default`.
/// Fields marked `#[model(skip)]` are invisible to filter, order and select strings.
#[proc_macro_derive(Model, attributes(model))]
pub fn derive_model(input: TokenStream) -> TokenStream { model::derive_model_impl(input) }

/// Implements `Enumeration` and `Property` for an enum whose variants carry no data.
#[proc_macro_derive(Enumeration)]
pub fn derive_enumeration(input: TokenStream) -> TokenStream { enumeration::derive_enumeration_impl(input) }
