use syn::{Data, DeriveInput, Fields, Ident, Type};

/// Encapsulates all the parsed information about a model and provides clean accessors
pub struct ModelDescription {
    name: Ident,

    // Fields visible to query strings, in declaration order. Their position is the schema index.
    queryable_fields: Vec<syn::Field>,
}

impl ModelDescription {
    /// Parse a DeriveInput and create a ModelDescription
    pub fn parse(input: &DeriveInput) -> syn::Result<Self> {
        let name = input.ident.clone();

        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(&input.generics, "Generic models are not supported"));
        }

        let fields = match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => fields.named.clone(),
                fields => return Err(syn::Error::new_spanned(fields, "Only named fields are supported")),
            },
            _ => return Err(syn::Error::new_spanned(&name, "Only structs are supported")),
        };

        let mut queryable_fields = Vec::new();
        for field in fields.into_iter() {
            if !get_model_flag(&field.attrs, "skip")? {
                queryable_fields.push(field);
            }
        }

        Ok(Self { name, queryable_fields })
    }

    pub fn name(&self) -> &Ident { &self.name }
    pub fn name_str(&self) -> String { self.name.to_string() }

    pub fn field_names(&self) -> Vec<&Option<Ident>> { self.queryable_fields.iter().map(|f| &f.ident).collect() }
    /// Declared names with any raw-identifier prefix removed.
    pub fn field_name_strs(&self) -> Vec<String> {
        self.queryable_fields
            .iter()
            .filter_map(|f| f.ident.as_ref())
            .map(|ident| {
                let name = ident.to_string();
                name.strip_prefix("r#").map(str::to_string).unwrap_or(name)
            })
            .collect()
    }
    pub fn field_types(&self) -> Vec<&Type> { self.queryable_fields.iter().map(|f| &f.ty).collect() }
    pub fn field_indices(&self) -> Vec<usize> { (0..self.queryable_fields.len()).collect() }
}

/// Whether `#[model(flag_name)]` is present. Any other flag inside `#[model(...)]` is an error.
fn get_model_flag(attrs: &[syn::Attribute], flag_name: &str) -> syn::Result<bool> {
    let mut found = false;
    for attr in attrs.iter().filter(|attr| attr.path().is_ident("model")) {
        let ident = attr.meta.require_list()?.parse_args::<syn::Ident>()?;
        if ident != flag_name {
            return Err(syn::Error::new_spanned(&ident, format!("Unknown model attribute `{}`", ident)));
        }
        found = true;
    }
    Ok(found)
}
