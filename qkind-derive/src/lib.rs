//! Derive macros used by `qkind-core` and its users.
//!
//! # `Unit`
//!
//! Expands in terms of `crate::Unit` and `crate::Quantity`, so it is meant for `qkind-core` itself (or crates that
//! expose an identical crate-root API). For a unit marker `MyUnit` it implements:
//!
//! - `crate::Unit for MyUnit`
//! - `core::fmt::Display for crate::Quantity<MyUnit, R>` for every displayable representation (formats as
//!   `<value> <symbol>`)
//!
//! The required `#[unit(...)]` attribute takes:
//!
//! - `symbol = "m"`: displayed unit symbol
//! - `dimension = SomeDim`: dimension type
//! - `ratio = 1000.0`: conversion ratio to the canonical unit of the dimension
//!
//! # `Kind`
//!
//! Declares a zero-sized marker type as a kind. The `#[kind(...)]` attribute takes:
//!
//! - `dimension = SomeDim` (required): dimension of quantities of this kind
//! - `base = SomeKind`: makes this a derived kind in `SomeKind`'s family; without it the kind is a base kind
//! - `derived(A, B, ..)`: on a base kind, the derived kinds of its family, in lookup order
//! - `name = "..."`: name reported by `Kind::NAME`; defaults to the type name in snake case
//! - `no_negation`, `no_step`: opt out of `NegatableKind` / `SteppableKind`
//! - `crate = "path"`: path of the crate exposing the kind traits; defaults to `::qkind`
//!
//! Every kind listed in `derived(..)` must declare this kind as its `base`; otherwise the generated impl does not
//! type-check.

#![deny(missing_docs)]
#![forbid(unsafe_code)]

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{
    ext::IdentExt,
    parenthesized,
    parse::{Parse, ParseStream},
    parse_macro_input,
    punctuated::Punctuated,
    Attribute, DeriveInput, Expr, Ident, LitStr, Path, Token, Type,
};

/// Derive `crate::Unit` and a `Display` impl for `crate::Quantity<ThisUnit, R>`.
///
/// The derive must be paired with a `#[unit(...)]` attribute providing `symbol`, `dimension`, and `ratio`.
///
/// This macro is intended for use by `qkind-core`.
#[proc_macro_derive(Unit, attributes(unit))]
pub fn derive_unit(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_unit_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Derive `Kind`, plus `BaseKind`, `NegatableKind` and `SteppableKind` as configured by `#[kind(...)]`.
#[proc_macro_derive(Kind, attributes(kind))]
pub fn derive_kind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match derive_kind_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Unit
// ─────────────────────────────────────────────────────────────────────────────

fn derive_unit_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let unit_attr = parse_unit_attribute(&input.attrs)?;

    let symbol = &unit_attr.symbol;
    let dimension = &unit_attr.dimension;
    let ratio = &unit_attr.ratio;

    let expanded = quote! {
        impl crate::Unit for #name {
            const RATIO: f64 = #ratio;
            type Dim = #dimension;
            const SYMBOL: &'static str = #symbol;
        }

        impl<R> ::core::fmt::Display for crate::Quantity<#name, R>
        where
            R: crate::Representation + ::core::fmt::Display,
        {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{} {}", self.value(), <#name as crate::Unit>::SYMBOL)
            }
        }
    };

    Ok(expanded)
}

/// Parsed contents of the `#[unit(...)]` attribute.
struct UnitAttribute {
    symbol: LitStr,
    dimension: Type,
    ratio: Expr,
}

impl Parse for UnitAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut symbol: Option<LitStr> = None;
        let mut dimension: Option<Type> = None;
        let mut ratio: Option<Expr> = None;

        while !input.is_empty() {
            let ident: Ident = input.parse()?;
            input.parse::<Token![=]>()?;

            match ident.to_string().as_str() {
                "symbol" => symbol = Some(input.parse()?),
                "dimension" => dimension = Some(input.parse()?),
                "ratio" => ratio = Some(input.parse()?),
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let symbol = symbol.ok_or_else(|| missing(input, "symbol"))?;
        let dimension = dimension.ok_or_else(|| missing(input, "dimension"))?;
        let ratio = ratio.ok_or_else(|| missing(input, "ratio"))?;

        Ok(UnitAttribute {
            symbol,
            dimension,
            ratio,
        })
    }
}

fn parse_unit_attribute(attrs: &[Attribute]) -> syn::Result<UnitAttribute> {
    find_attribute(attrs, "unit")?.parse_args::<UnitAttribute>()
}

// ─────────────────────────────────────────────────────────────────────────────
// Kind
// ─────────────────────────────────────────────────────────────────────────────

fn derive_kind_impl(input: DeriveInput) -> syn::Result<TokenStream2> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(&input.generics, "kinds cannot be generic"));
    }

    let name = &input.ident;
    let attr = parse_kind_attribute(&input.attrs)?;
    let krate = attr.krate.unwrap_or_else(|| syn::parse_quote!(::qkind));
    let dimension = &attr.dimension;
    let kind_name = attr
        .name
        .map(|lit| lit.value())
        .unwrap_or_else(|| snake_case(&name.to_string()));

    let base = match &attr.base {
        Some(base) => quote!(#base),
        None => quote!(#name),
    };

    let mut expanded = quote! {
        impl #krate::Kind for #name {
            type Dim = #dimension;
            type Base = #base;
            const NAME: &'static str = #kind_name;
        }
    };

    if attr.base.is_none() {
        let derived = &attr.derived;
        let family = derived
            .iter()
            .rev()
            .fold(quote!(#krate::Nil), |rest, kind| quote!(#krate::Cons<#kind, #rest>));

        expanded.extend(quote! {
            impl #krate::BaseKind for #name
            where
                #( #derived: #krate::Kind<Base = #name>, )*
            {
                type Family = #krate::Cons<#name, #family>;
            }
        });
    }

    if !attr.no_negation {
        expanded.extend(quote!(impl #krate::NegatableKind for #name {}));
    }
    if !attr.no_step {
        expanded.extend(quote!(impl #krate::SteppableKind for #name {}));
    }

    Ok(expanded)
}

/// Parsed contents of the `#[kind(...)]` attribute.
struct KindAttribute {
    krate: Option<Path>,
    dimension: Type,
    base: Option<Type>,
    derived: Vec<Type>,
    name: Option<LitStr>,
    no_negation: bool,
    no_step: bool,
}

impl Parse for KindAttribute {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut krate: Option<Path> = None;
        let mut dimension: Option<Type> = None;
        let mut base: Option<Type> = None;
        let mut derived: Option<(Ident, Vec<Type>)> = None;
        let mut name: Option<LitStr> = None;
        let mut no_negation = false;
        let mut no_step = false;

        while !input.is_empty() {
            // `crate` is a keyword, so accept any identifier here.
            let ident = input.call(Ident::parse_any)?;

            match ident.to_string().as_str() {
                "crate" => {
                    input.parse::<Token![=]>()?;
                    let lit: LitStr = input.parse()?;
                    krate = Some(lit.parse()?);
                }
                "dimension" => {
                    input.parse::<Token![=]>()?;
                    dimension = Some(input.parse()?);
                }
                "base" => {
                    input.parse::<Token![=]>()?;
                    base = Some(input.parse()?);
                }
                "name" => {
                    input.parse::<Token![=]>()?;
                    name = Some(input.parse()?);
                }
                "derived" => {
                    let content;
                    parenthesized!(content in input);
                    let kinds = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
                    derived = Some((ident, kinds.into_iter().collect()));
                }
                "no_negation" => no_negation = true,
                "no_step" => no_step = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute `{}`", other),
                    ));
                }
            }

            if input.peek(Token![,]) {
                input.parse::<Token![,]>()?;
            }
        }

        let dimension = dimension.ok_or_else(|| missing(input, "dimension"))?;

        let derived = match derived {
            Some((ident, _)) if base.is_some() => {
                return Err(syn::Error::new(
                    ident.span(),
                    "`derived` is only allowed on base kinds (without `base = ..`)",
                ));
            }
            Some((_, kinds)) => kinds,
            None => Vec::new(),
        };

        Ok(KindAttribute {
            krate,
            dimension,
            base,
            derived,
            name,
            no_negation,
            no_step,
        })
    }
}

fn parse_kind_attribute(attrs: &[Attribute]) -> syn::Result<KindAttribute> {
    find_attribute(attrs, "kind")?.parse_args::<KindAttribute>()
}

// ─────────────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────────────

fn find_attribute<'a>(attrs: &'a [Attribute], name: &str) -> syn::Result<&'a Attribute> {
    attrs.iter().find(|attr| attr.path().is_ident(name)).ok_or_else(|| {
        syn::Error::new(
            proc_macro2::Span::call_site(),
            format!("missing #[{}(...)] attribute", name),
        )
    })
}

fn missing(input: ParseStream, field: &str) -> syn::Error {
    syn::Error::new(input.span(), format!("missing required attribute `{}`", field))
}

/// `AngularVelocity` -> `angular_velocity`.
fn snake_case(ident: &str) -> String {
    let mut out = String::with_capacity(ident.len() + 4);
    let mut prev_lower = false;
    for c in ident.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('_');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
