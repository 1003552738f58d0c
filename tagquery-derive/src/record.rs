//! Record derive macro implementation

use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{parse_quote, Data, DeriveInput, Fields, LitStr, Result};

use crate::attrs::{Case, Date, FieldAttrs};

pub fn expand(mut input: DeriveInput) -> Result<TokenStream> {
    let krate = crate_path(&input)?;
    let name = input.ident.clone();
    let name_str = name.unraw().to_string();

    let fields = match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => fields.named.clone(),
            _ => {
                return Err(syn::Error::new_spanned(
                    &input,
                    "Record can only be derived for structs with named fields",
                ))
            }
        },
        _ => {
            return Err(syn::Error::new_spanned(
                &input,
                "Record can only be derived for structs",
            ))
        }
    };

    let mut specs = Vec::with_capacity(fields.len());
    let mut reflections = Vec::with_capacity(fields.len());

    for field in &fields {
        let ident = field
            .ident
            .as_ref()
            .ok_or_else(|| syn::Error::new_spanned(field, "expected a named field"))?;
        let attrs = FieldAttrs::from_field(field)?;
        specs.push(field_spec(&krate, &ident.unraw().to_string(), &attrs));

        reflections.push(if attrs.skip {
            quote! { #krate::Reflected::Opaque }
        } else {
            quote! { #krate::Reflect::reflect(&self.#ident) }
        });
    }

    let type_params: Vec<_> = input
        .generics
        .type_params()
        .map(|param| param.ident.clone())
        .collect();
    let where_clause = input.generics.make_where_clause();
    for param in type_params {
        where_clause
            .predicates
            .push(parse_quote!(#param: #krate::Reflect));
    }
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let schema = quote! {
        const SCHEMA: #krate::Schema = #krate::Schema::new(#name_str, &[#(#specs),*]);
    };

    Ok(quote! {
        impl #impl_generics #krate::Reflect for #name #ty_generics #where_clause {
            fn schema() -> ::core::option::Option<#krate::Schema> {
                #schema
                ::core::option::Option::Some(SCHEMA)
            }

            fn reflect(&self) -> #krate::Reflected {
                #schema
                #krate::Reflected::Struct {
                    schema: SCHEMA,
                    fields: ::std::vec![#(#reflections),*],
                }
            }
        }
    })
}

fn field_spec(krate: &syn::Path, ident: &str, attrs: &FieldAttrs) -> TokenStream {
    let mut spec = quote! { #krate::FieldSpec::new(#ident) };

    if let Some(db) = &attrs.db {
        spec = quote! { #spec.db(#db) };
    }
    if attrs.skip {
        spec = quote! { #spec.skip() };
    }
    if let Some(case) = attrs.default {
        let case = letter_case(krate, case);
        spec = quote! { #spec.default_case(#case) };
    }
    if let Some(case) = attrs.case {
        let case = letter_case(krate, case);
        spec = quote! { #spec.value_case(#case) };
    }
    if let Some(date) = attrs.date {
        let date = match date {
            Date::Now => quote! { #krate::DateTag::Now },
            Date::CurrentTimestamp => quote! { #krate::DateTag::CurrentTimestamp },
        };
        spec = quote! { #spec.date(#date) };
    }

    spec
}

fn letter_case(krate: &syn::Path, case: Case) -> TokenStream {
    match case {
        Case::Lower => quote! { #krate::LetterCase::Lower },
        Case::Upper => quote! { #krate::LetterCase::Upper },
    }
}

/// `#[record(crate = "...")]` on the struct, defaulting to `::tagquery`
fn crate_path(input: &DeriveInput) -> Result<syn::Path> {
    let mut krate: syn::Path = parse_quote!(::tagquery);

    for attr in &input.attrs {
        if !attr.path().is_ident("record") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                krate = value.parse()?;
                Ok(())
            } else {
                Err(meta.error("unknown struct attribute, expected `crate`"))
            }
        })?;
    }

    Ok(krate)
}
