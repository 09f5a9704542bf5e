use proc_macro::TokenStream;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Fields};

pub fn derive_enumeration_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match enumeration_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn enumeration_impl(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let name_str = name.to_string();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "Generic enumerations are not supported"));
    }

    let variants = match &input.data {
        Data::Enum(data) => &data.variants,
        _ => return Err(syn::Error::new_spanned(name, "Only enums are supported")),
    };
    if variants.is_empty() {
        return Err(syn::Error::new_spanned(name, "Enumerations need at least one variant"));
    }
    if let Some(variant) = variants.iter().find(|v| !matches!(v.fields, Fields::Unit)) {
        return Err(syn::Error::new_spanned(variant, "Only unit variants are supported"));
    }

    let variant_idents = variants.iter().map(|v| &v.ident).collect::<Vec<_>>();
    let variant_strs = variants.iter().map(|v| v.ident.to_string()).collect::<Vec<_>>();
    let ordinals = (0..variants.len()).collect::<Vec<usize>>();

    Ok(quote! {
        impl ::dynfilter::Enumeration for #name {
            fn enum_schema() -> &'static ::dynfilter::EnumSchema {
                static SCHEMA: ::dynfilter::EnumSchema = ::dynfilter::EnumSchema::new(#name_str, &[#(#variant_strs),*]);
                &SCHEMA
            }

            fn ordinal(&self) -> usize {
                match self {
                    #( Self::#variant_idents => #ordinals, )*
                }
            }
        }

        impl ::dynfilter::Property for #name {
            fn field_type() -> ::dynfilter::FieldType {
                ::dynfilter::FieldType::Enum(<Self as ::dynfilter::Enumeration>::enum_schema())
            }
            fn to_ref(&self) -> ::dynfilter::PropertyRef<'_> {
                ::dynfilter::PropertyRef::Value(::dynfilter::Value::Enum(::dynfilter::Enumeration::to_enum_value(self)))
            }
        }
    })
}
