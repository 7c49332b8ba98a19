//! Attribute parsing shared by the derives.

use syn::{Attribute, Field, Generics, parse_quote};

/// Whether a field carries `#[bytetree(skip)]`. Unknown names are rejected.
pub fn is_skipped(field: &Field) -> syn::Result<bool> {
    let mut skip = false;
    for attr in &field.attrs {
        if !attr.path().is_ident("bytetree") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("skip") {
                skip = true;
                Ok(())
            } else {
                Err(meta.error("unknown bytetree attribute; expected `skip`"))
            }
        })?;
    }
    Ok(skip)
}

/// Add a `Classify` bound to every type parameter.
pub fn with_classify_bounds(generics: &Generics) -> Generics {
    let mut generics = generics.clone();
    let params: Vec<_> = generics.type_params().map(|p| p.ident.clone()).collect();
    let where_clause = generics.make_where_clause();
    for ident in params {
        where_clause
            .predicates
            .push(parse_quote!(#ident: ::bytetree::Classify));
    }
    generics
}

/// Extract the unsigned integer type from `#[repr(uN)]` on an enum.
///
/// Returns `Ok(None)` without a repr, an error for reprs that have no
/// scalar encoding.
pub fn repr_int_type(attrs: &[Attribute]) -> syn::Result<Option<syn::Ident>> {
    for attr in attrs {
        if !attr.path().is_ident("repr") {
            continue;
        }
        let mut found = None;
        attr.parse_nested_meta(|meta| {
            // `align(N)` and friends carry arguments that must be consumed.
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
                return Ok(());
            }
            let Some(ident) = meta.path.get_ident() else {
                return Ok(());
            };
            match ident.to_string().as_str() {
                "u8" | "u16" | "u32" | "u64" => found = Some(ident.clone()),
                "i8" | "i16" | "i32" | "i64" | "i128" | "u128" | "isize" | "usize" => {
                    return Err(meta.error(
                        "bytetree: Wrapper enums need a repr of u8, u16, u32 or u64",
                    ));
                }
                _ => {}
            }
            Ok(())
        })?;
        if found.is_some() {
            return Ok(found);
        }
    }
    Ok(None)
}
