use proc_macro2::TokenStream;
use quote::quote;

use crate::model::description::ModelDescription;

/// Generate the Model trait implementation: the cached schema and field-wise copy used by projections.
pub fn model_impl(model: &ModelDescription) -> TokenStream {
    let name = model.name();
    let name_str = model.name_str();
    let field_names = model.field_names();
    let field_name_strs = model.field_name_strs();
    let field_types = model.field_types();
    let field_indices = model.field_indices();

    quote! {
        impl ::dynfilter::Model for #name {
            fn schema() -> &'static ::dynfilter::Schema {
                static SCHEMA: ::std::sync::OnceLock<::dynfilter::Schema> = ::std::sync::OnceLock::new();
                SCHEMA.get_or_init(|| {
                    ::dynfilter::Schema::new(#name_str, ::std::vec![
                        #(
                            ::dynfilter::FieldDescriptor::new(#field_name_strs, <#field_types as ::dynfilter::Property>::field_type()),
                        )*
                    ])
                })
            }

            fn copy_field(&mut self, source: &Self, index: usize) {
                match index {
                    #(
                        #field_indices => self.#field_names = ::std::clone::Clone::clone(&source.#field_names),
                    )*
                    _ => {}
                }
            }
        }
    }
}

/// Generate the Record trait implementation: positional field access.
pub fn record_impl(model: &ModelDescription) -> TokenStream {
    let name = model.name();
    let field_names = model.field_names();
    let field_indices = model.field_indices();

    quote! {
        impl ::dynfilter::Record for #name {
            fn field(&self, index: usize) -> ::std::option::Option<::dynfilter::PropertyRef<'_>> {
                match index {
                    #(
                        #field_indices => ::std::option::Option::Some(::dynfilter::Property::to_ref(&self.#field_names)),
                    )*
                    _ => ::std::option::Option::None,
                }
            }
        }
    }
}

/// Generate the Property trait implementation so the model can be nested in other models.
pub fn property_impl(model: &ModelDescription) -> TokenStream {
    let name = model.name();

    quote! {
        impl ::dynfilter::Property for #name {
            fn field_type() -> ::dynfilter::FieldType { ::dynfilter::FieldType::Object(::dynfilter::SchemaRef::of::<Self>()) }
            fn to_ref(&self) -> ::dynfilter::PropertyRef<'_> { ::dynfilter::PropertyRef::Record(self) }
        }
    }
}
