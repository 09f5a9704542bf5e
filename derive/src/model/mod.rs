pub(crate) mod description;
pub(crate) mod model;

use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, DeriveInput};

use description::ModelDescription;

pub fn derive_model_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let model = match ModelDescription::parse(&input) {
        Ok(model) => model,
        Err(e) => return e.to_compile_error().into(),
    };

    let model_impl = model::model_impl(&model);
    let record_impl = model::record_impl(&model);
    let property_impl = model::property_impl(&model);

    let expanded: proc_macro::TokenStream = quote! {
        #model_impl
        #record_impl
        #property_impl
    }
    .into();

    expanded
}
