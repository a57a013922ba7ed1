// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The `#[ensures]` and `#[setter]` attribute macros.
//!
//! Both attach a check to a function and label failures with the function
//! itself, so the caller never has to name the member by hand. The function
//! must return a `Result` whose error type converts from `CheckError`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    parse::Parser, parse_macro_input, parse_quote, punctuated::Punctuated, Expr, FnArg, ItemFn,
    Lit, Pat, ReturnType, Stmt, Token, Type,
};

/// Parsed arguments: `#[ensures(predicate, message = "...")]`.
struct ContractAttrs {
    /// Closure receiving `&value`
    predicate: Expr,
    /// Verbatim message override
    message: Option<String>,
}

impl ContractAttrs {
    fn parse(attr: TokenStream2) -> syn::Result<Self> {
        let parser = Punctuated::<Expr, Token![,]>::parse_terminated;
        let mut exprs = parser.parse2(attr.clone())?.into_iter();

        let Some(predicate) = exprs.next() else {
            return Err(syn::Error::new_spanned(attr, "expected a predicate closure"));
        };
        let mut message = None;
        for expr in exprs {
            let Expr::Assign(assign) = &expr else {
                return Err(syn::Error::new_spanned(expr, "expected `message = \"...\"`"));
            };
            let key = match assign.left.as_ref() {
                Expr::Path(path) => path.path.get_ident().map(ToString::to_string),
                _ => None,
            };
            match (key.as_deref(), assign.right.as_ref()) {
                (
                    Some("message"),
                    Expr::Lit(syn::ExprLit {
                        lit: Lit::Str(lit_str),
                        ..
                    }),
                ) => message = Some(lit_str.value()),
                _ => {
                    return Err(syn::Error::new_spanned(
                        expr,
                        "expected `message = \"...\"`",
                    ))
                }
            }
        }

        Ok(ContractAttrs { predicate, message })
    }

    /// Context expression for the check, with the message applied.
    fn context(&self, base: TokenStream2) -> TokenStream2 {
        match &self.message {
            Some(message) => quote! { #base.message(#message) },
            None => base,
        }
    }
}

/// Last path segment of the return type is `Result` (also covers
/// `io::Result`, `anyhow::Result`, `CheckResult`).
fn returns_result(func: &ItemFn) -> syn::Result<&Type> {
    let fail = || {
        syn::Error::new_spanned(
            &func.sig,
            "the function must return a `Result` to propagate a failed check",
        )
    };
    let ReturnType::Type(_, ty) = &func.sig.output else {
        return Err(fail());
    };
    let Type::Path(type_path) = ty.as_ref() else {
        return Err(fail());
    };
    match type_path.path.segments.last() {
        Some(segment) if segment.ident.to_string().ends_with("Result") => Ok(ty),
        _ => Err(fail()),
    }
}

fn expand_ensures(attrs: &ContractAttrs, func: ItemFn) -> syn::Result<TokenStream2> {
    if let Some(asyncness) = &func.sig.asyncness {
        return Err(syn::Error::new_spanned(
            asyncness,
            "#[ensures] does not support async functions",
        ));
    }
    let ret = returns_result(&func)?.clone();
    let member = func.sig.ident.to_string();
    let ctx = attrs.context(quote! { ::stipulate::CheckContext::result_of(#member) });
    let predicate = &attrs.predicate;

    let ItemFn {
        attrs: fn_attrs,
        vis,
        sig,
        block,
    } = func;
    Ok(quote! {
        #(#fn_attrs)*
        #vis #sig {
            #[allow(clippy::redundant_closure_call)]
            let __stipulate_value = (move || -> #ret #block)()?;
            ::core::result::Result::Ok(
                ::stipulate::RESULT.result(__stipulate_value, #predicate, #ctx)?
            )
        }
    })
}

fn expand_setter(attrs: &ContractAttrs, mut func: ItemFn) -> syn::Result<TokenStream2> {
    returns_result(&func)?;
    let binding = func
        .sig
        .inputs
        .iter()
        .find_map(|arg| match arg {
            FnArg::Typed(pat_type) => Some(pat_type.pat.as_ref()),
            FnArg::Receiver(_) => None,
        })
        .ok_or_else(|| {
            syn::Error::new_spanned(&func.sig, "#[setter] needs a parameter to check")
        })?;
    let Pat::Ident(pat_ident) = binding else {
        return Err(syn::Error::new_spanned(
            binding,
            "#[setter] needs a plain identifier parameter",
        ));
    };
    let ident = pat_ident.ident.clone();
    let mutability = pat_ident.mutability;

    let name = func.sig.ident.to_string();
    let member = name.strip_prefix("set_").unwrap_or(&name).to_owned();
    let ctx = attrs.context(quote! { ::stipulate::CheckContext::assignment_to(#member) });
    let predicate = &attrs.predicate;

    let check: Stmt = parse_quote! {
        let #mutability #ident = ::stipulate::SETTER.assign(#ident, #predicate, #ctx)?;
    };
    func.block.stmts.insert(0, check);
    Ok(quote! { #func })
}

/// Main entry point for `#[ensures]`.
pub fn ensures(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);
    let attrs = match ContractAttrs::parse(attr.into()) {
        Ok(a) => a,
        Err(e) => return e.to_compile_error().into(),
    };
    match expand_ensures(&attrs, func) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Main entry point for `#[setter]`.
pub fn setter(attr: TokenStream, item: TokenStream) -> TokenStream {
    let func = parse_macro_input!(item as ItemFn);
    let attrs = match ContractAttrs::parse(attr.into()) {
        Ok(a) => a,
        Err(e) => return e.to_compile_error().into(),
    };
    match expand_setter(&attrs, func) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
