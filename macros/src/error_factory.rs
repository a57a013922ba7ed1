// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Implementation of `#[derive(ErrorFactory)]`.
//!
//! Reads the construction paths off the struct shape. Fields marked
//! `#[factory(default)]` are filled with `Default::default()` and ignored
//! when deciding which paths exist.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput, Field, Fields, Index, Member, Type};

use crate::shape::{classify, FieldShape};

/// One struct field as the derive sees it.
struct FactoryField {
    member: Member,
    ty: Type,
    shape: FieldShape,
    defaulted: bool,
}

impl FactoryField {
    fn from_field(position: usize, field: &Field) -> syn::Result<Self> {
        let member = match &field.ident {
            Some(ident) => Member::Named(ident.clone()),
            None => Member::Unnamed(Index::from(position)),
        };
        Ok(FactoryField {
            member,
            ty: field.ty.clone(),
            shape: classify(&field.ty),
            defaulted: is_defaulted(field)?,
        })
    }
}

fn is_defaulted(field: &Field) -> syn::Result<bool> {
    let mut defaulted = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("factory") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("default") {
                defaulted = true;
                Ok(())
            } else {
                Err(meta.error("expected `default`"))
            }
        })?;
    }
    Ok(defaulted)
}

/// Struct literal for `Self`, filling live fields from `fill` and the rest
/// with their defaults.
fn construct(
    fields: &[FactoryField],
    mut fill: impl FnMut(usize, &FactoryField) -> TokenStream2,
) -> TokenStream2 {
    let mut live = 0;
    let inits = fields.iter().map(|field| {
        let member = &field.member;
        if field.defaulted {
            quote! { #member: ::core::default::Default::default() }
        } else {
            let value = fill(live, field);
            live += 1;
            quote! { #member: #value }
        }
    });
    let inits: Vec<_> = inits.collect();
    quote! { Self { #(#inits),* } }
}

fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let Data::Struct(data) = &input.data else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "ErrorFactory can only be derived for structs",
        ));
    };

    let fields: Vec<FactoryField> = match &data.fields {
        Fields::Unit => Vec::new(),
        Fields::Named(named) => named
            .named
            .iter()
            .enumerate()
            .map(|(i, f)| FactoryField::from_field(i, f))
            .collect::<syn::Result<_>>()?,
        Fields::Unnamed(unnamed) => unnamed
            .unnamed
            .iter()
            .enumerate()
            .map(|(i, f)| FactoryField::from_field(i, f))
            .collect::<syn::Result<_>>()?,
    };
    let live: Vec<&FactoryField> = fields.iter().filter(|f| !f.defaulted).collect();
    let texts = live.iter().filter(|f| f.shape == FieldShape::Text).count();
    let optionals = live.iter().filter(|f| f.shape == FieldShape::Optional).count();

    let mut methods = Vec::new();

    if live.is_empty() {
        let value = match data.fields {
            Fields::Unit => quote! { Self },
            _ => construct(&fields, |_, _| quote! {}),
        };
        methods.push(quote! {
            fn bare() -> ::core::option::Option<Self> {
                ::core::option::Option::Some(#value)
            }
        });
    }

    if !live.is_empty() && live.iter().all(|f| f.shape.takes_arg()) {
        let arity = live.len();
        let value = construct(&fields, |position, field| {
            let ty = &field.ty;
            quote! { args.take::<#ty>(#position)? }
        });
        methods.push(quote! {
            fn from_args(args: &::stipulate::Args) -> ::core::option::Option<Self> {
                if args.len() != #arity {
                    return ::core::option::Option::None;
                }
                ::core::option::Option::Some(#value)
            }
        });
    }

    if live.len() == 1 && texts == 1 {
        let value = construct(&fields, |_, _| quote! { ::std::borrow::ToOwned::to_owned(message) });
        methods.push(quote! {
            fn from_message(message: &str) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(#value)
            }
        });
    }

    if texts == 1 && optionals >= 1 && texts + optionals == live.len() {
        let value = construct(&fields, |_, field| match field.shape {
            FieldShape::Text => quote! { ::std::borrow::ToOwned::to_owned(message) },
            _ => quote! { ::core::option::Option::None },
        });
        methods.push(quote! {
            fn from_message_without_cause(message: &str) -> ::core::option::Option<Self> {
                ::core::option::Option::Some(#value)
            }
        });
    }

    let name = &input.ident;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    Ok(quote! {
        impl #impl_generics ::stipulate::ErrorFactory for #name #ty_generics #where_clause {
            #(#methods)*
        }
    })
}

/// Main entry point for `#[derive(ErrorFactory)]`.
pub fn derive(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match expand(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
