//! Implementation of the `#[derive(Attributes)]` macro.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::ext::IdentExt;
use syn::{
    Data, DeriveInput, Field, Fields, GenericParam, Generics, Ident, Index, LitStr,
    parse_macro_input, parse_quote,
};

/// Main implementation of the Attributes derive macro.
pub fn derive_attributes_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    let expanded = match &input.data {
        Data::Struct(data_struct) => {
            generate_attributes(&input.ident, &input.generics, &data_struct.fields)
                .unwrap_or_else(syn::Error::into_compile_error)
        }
        Data::Enum(_) => syn::Error::new_spanned(
            &input.ident,
            "Attributes can only be derived for structs, not enums.",
        )
        .to_compile_error(),
        Data::Union(_) => {
            syn::Error::new_spanned(&input.ident, "Attributes cannot be derived for unions.")
                .to_compile_error()
        }
    };

    TokenStream::from(expanded)
}

/// How a single field is exposed.
struct Exposed<'a> {
    name: String,
    access: TokenStream2,
    field: &'a Field,
}

/// Reads `#[attributes(...)]` options; `None` means the field is skipped.
fn exposed_name(field: &Field, default: String) -> syn::Result<Option<String>> {
    let mut name = Some(default);
    for attribute in &field.attrs {
        if !attribute.path().is_ident("attributes") {
            continue;
        }
        attribute.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                name = None;
                Ok(())
            } else if meta.path.is_ident("rename") {
                let renamed: LitStr = meta.value()?.parse()?;
                if name.is_some() {
                    name = Some(renamed.value());
                }
                Ok(())
            } else {
                Err(meta.error("expected `skip` or `rename = \"...\"`"))
            }
        })?;
    }
    Ok(name)
}

fn collect_fields(fields: &Fields) -> syn::Result<Vec<Exposed<'_>>> {
    let mut exposed = Vec::new();
    for (index, field) in fields.iter().enumerate() {
        let (default, access) = match &field.ident {
            Some(ident) => (ident.unraw().to_string(), quote! { #ident }),
            None => {
                let index = Index::from(index);
                (index.index.to_string(), quote! { #index })
            }
        };
        if let Some(name) = exposed_name(field, default)? {
            exposed.push(Exposed {
                name,
                access,
                field,
            });
        }
    }
    Ok(exposed)
}

fn bounded_generics(name: &Ident, generics: &Generics, exposed: &[Exposed<'_>]) -> syn::Result<Generics> {
    if let Some(lifetime) = generics.lifetimes().next() {
        return Err(syn::Error::new_spanned(
            lifetime,
            format!("Attributes cannot be derived for `{name}` because it borrows data; the type must be 'static."),
        ));
    }

    let mut generics = generics.clone();
    for parameter in &mut generics.params {
        if let GenericParam::Type(type_parameter) = parameter {
            type_parameter.bounds.push(parse_quote!('static));
        }
    }
    if !exposed.is_empty() {
        let where_clause = generics.make_where_clause();
        for Exposed { field, .. } in exposed {
            let field_type = &field.ty;
            where_clause
                .predicates
                .push(parse_quote!(#field_type: ::exos::attribute::Attributes));
        }
    }
    Ok(generics)
}

/// Generates the `Attributes` impl for a struct's fields.
fn generate_attributes(name: &Ident, generics: &Generics, fields: &Fields) -> syn::Result<TokenStream2> {
    let exposed = collect_fields(fields)?;
    let generics = bounded_generics(name, generics, &exposed)?;
    let (impl_generics, type_generics, where_clause) = generics.split_for_impl();

    let arms = exposed.iter().map(|Exposed { name, access, .. }| {
        quote! {
            #name => ::core::option::Option::Some(&self.#access as &dyn ::exos::attribute::Attributes),
        }
    });

    let parameter = if exposed.is_empty() {
        quote! { _name }
    } else {
        quote! { name }
    };
    let body = if exposed.is_empty() {
        quote! { ::core::option::Option::None }
    } else {
        quote! {
            match name {
                #(#arms)*
                _ => ::core::option::Option::None,
            }
        }
    };

    Ok(quote! {
        impl #impl_generics ::exos::attribute::Attributes for #name #type_generics #where_clause {
            fn attribute(&self, #parameter: &str) -> ::core::option::Option<&dyn ::exos::attribute::Attributes> {
                #body
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(source: &str) -> syn::Result<String> {
        let input: DeriveInput = syn::parse_str(source)?;
        let Data::Struct(data_struct) = &input.data else {
            panic!("test input must be a struct");
        };
        generate_attributes(&input.ident, &input.generics, &data_struct.fields)
            .map(|tokens| tokens.to_string())
    }

    #[test]
    fn named_fields_become_match_arms() {
        let expanded = expand("struct Car { make: String, price: u32 }").unwrap();
        assert!(expanded.contains("\"make\""));
        assert!(expanded.contains("\"price\""));
    }

    #[test]
    fn tuple_fields_are_numbered() {
        let expanded = expand("struct Pair(u8, u8);").unwrap();
        assert!(expanded.contains("\"0\""));
        assert!(expanded.contains("\"1\""));
    }

    #[test]
    fn skipped_and_renamed_fields() {
        let expanded = expand(
            "struct Session { #[attributes(rename = \"user\")] owner: String, #[attributes(skip)] token: String }",
        )
        .unwrap();
        assert!(expanded.contains("\"user\""));
        assert!(!expanded.contains("\"owner\""));
        assert!(!expanded.contains("\"token\""));
    }

    #[test]
    fn raw_identifiers_are_unescaped() {
        let expanded = expand("struct Token { r#type: String }").unwrap();
        assert!(expanded.contains("\"type\""));
    }

    #[test]
    fn unknown_option_is_rejected() {
        assert!(expand("struct Car { #[attributes(hide)] make: String }").is_err());
    }

    #[test]
    fn borrowed_structs_are_rejected() {
        assert!(expand("struct View<'a> { name: &'a str }").is_err());
    }
}
