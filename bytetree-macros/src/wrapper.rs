//! `Wrapper` derive.

use proc_macro2::{Literal, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::{Data, DataEnum, DeriveInput, Fields, Index};

use crate::attrs::{repr_int_type, with_classify_bounds};

pub fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let body = match &input.data {
        Data::Struct(data) => newtype_body(input, &data.fields)?,
        Data::Enum(data) => {
            let repr = repr_int_type(&input.attrs)?.unwrap_or_else(|| format_ident!("u8"));
            enum_body(data, &repr)?
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Wrapper derive is not supported for unions.",
            ));
        }
    };

    let generics = with_classify_bounds(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::bytetree::Classify for #name #ty_generics #where_clause {
            type Strategy = ::bytetree::AsWrapper;
        }

        impl #impl_generics ::bytetree::Wrapper for #name #ty_generics #where_clause {
            #[inline]
            fn write(
                &self,
                writer: &mut ::bytetree::ByteTreeWriter<'_>,
                index: u32,
            ) -> ::bytetree::Result<()> {
                #body
            }
        }
    })
}

fn newtype_body(input: &DeriveInput, fields: &Fields) -> syn::Result<TokenStream2> {
    let mut iter = fields.iter();
    let (Some(field), None) = (iter.next(), iter.next()) else {
        return Err(syn::Error::new_spanned(
            input,
            "Wrapper derive on a struct needs exactly one field",
        ));
    };
    let accessor = match &field.ident {
        Some(ident) => quote! { #ident },
        None => {
            let index = Index::from(0);
            quote! { #index }
        }
    };
    Ok(quote! {
        writer.write(&self.#accessor, index)
    })
}

fn enum_body(data: &DataEnum, repr: &syn::Ident) -> syn::Result<TokenStream2> {
    let max = repr_max(repr);
    let values = resolve_discriminants(data)?;

    let mut arms = Vec::with_capacity(data.variants.len());
    for (variant, value) in data.variants.iter().zip(values) {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                variant,
                "Wrapper derive only supports fieldless enums",
            ));
        }
        if !(0..=i128::from(max)).contains(&value) {
            return Err(syn::Error::new_spanned(
                variant,
                format!("bytetree: discriminant {value} does not fit in {repr}"),
            ));
        }
        let ident = &variant.ident;
        let lit = Literal::u64_unsuffixed(value as u64);
        arms.push(quote! { Self::#ident => #lit });
    }

    if arms.is_empty() {
        // An uninhabited enum never reaches `write`.
        return Ok(quote! { match *self {} });
    }

    Ok(quote! {
        let raw: #repr = match self {
            #(#arms,)*
        };
        writer.write(&raw, index)
    })
}

fn repr_max(repr: &syn::Ident) -> u64 {
    match repr.to_string().as_str() {
        "u8" => u64::from(u8::MAX),
        "u16" => u64::from(u16::MAX),
        "u32" => u64::from(u32::MAX),
        _ => u64::MAX,
    }
}

/// Resolve discriminant values for all variants.
///
/// Supports integer literals (`= 10`) and auto-increment from the previous
/// value.
fn resolve_discriminants(data: &DataEnum) -> syn::Result<Vec<i128>> {
    let mut next: i128 = 0;
    let mut values = Vec::with_capacity(data.variants.len());
    for variant in &data.variants {
        if let Some((_, expr)) = &variant.discriminant {
            next = parse_int_expr(expr)?;
        }
        values.push(next);
        next = next.wrapping_add(1);
    }
    Ok(values)
}

fn parse_int_expr(expr: &syn::Expr) -> syn::Result<i128> {
    match expr {
        syn::Expr::Lit(syn::ExprLit {
            lit: syn::Lit::Int(int),
            ..
        }) => int.base10_parse::<i128>(),
        _ => Err(syn::Error::new_spanned(
            expr,
            "bytetree: enum discriminants must be integer literals",
        )),
    }
}
