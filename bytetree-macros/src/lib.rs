//! Derive macros for bytetree.
//!
//! - `Object`: structs, one field per non-skipped struct field
//! - `Wrapper`: newtype structs and fieldless enums

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

mod attrs;
mod object;
mod wrapper;

/// Derive `Classify` and `Object` for a struct.
///
/// Fields are written in declaration order. Mark a field
/// `#[bytetree(skip)]` to leave it out of the stream.
#[proc_macro_derive(Object, attributes(bytetree))]
pub fn derive_object(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match object::derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

/// Derive `Classify` and `Wrapper`.
///
/// A newtype struct is written as its single field. A fieldless enum is
/// written as its discriminant, a `u8` unless `#[repr(u16|u32|u64)]` says
/// otherwise.
#[proc_macro_derive(Wrapper, attributes(bytetree))]
pub fn derive_wrapper(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match wrapper::derive_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
