//! `#[derive(ComponentKind)]`.

use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, LitStr, Variant, parse_macro_input};

/// Implementation of the `ComponentKind` derive macro.
pub fn derive_component_kind_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(expanded) => TokenStream::from(expanded),
        Err(err) => err.to_compile_error().into(),
    }
}

fn expand(input: &DeriveInput) -> syn::Result<proc_macro2::TokenStream> {
    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    let Data::Enum(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ComponentKind can only be derived for enums",
        ));
    };

    if data.variants.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ComponentKind requires at least one variant",
        ));
    }

    let mut variants = Vec::with_capacity(data.variants.len());
    let mut keys = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "ComponentKind variants cannot carry fields",
            ));
        }

        let key = type_key(variant)?;
        if keys.contains(&key) {
            return Err(syn::Error::new_spanned(
                &variant.ident,
                format!("duplicate component key `{key}`"),
            ));
        }
        variants.push(&variant.ident);
        keys.push(key);
    }

    Ok(quote! {
        impl #impl_generics ::mosaic::ComponentKind for #name #ty_generics #where_clause {
            const ALL: &'static [Self] = &[#(#name::#variants),*];

            fn type_key(&self) -> &'static str {
                match self {
                    #(#name::#variants => #keys,)*
                }
            }
        }
    })
}

/// The explicit `#[component(key = "...")]`, or the variant name with a
/// lowercased first letter.
fn type_key(variant: &Variant) -> syn::Result<String> {
    let mut key = None;
    for attr in &variant.attrs {
        if !attr.path().is_ident("component") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("key") {
                let lit: LitStr = meta.value()?.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(lit, "component key cannot be empty"));
                }
                key = Some(lit.value());
                Ok(())
            } else {
                Err(meta.error("unknown component attribute, expected `key`"))
            }
        })?;
    }

    Ok(key.unwrap_or_else(|| lower_first(&variant.ident.to_string())))
}

fn lower_first(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_lowercase().chain(chars).collect(),
        None => String::new(),
    }
}
