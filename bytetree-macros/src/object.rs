//! `Object` derive.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Index};

use crate::attrs::{is_skipped, with_classify_bounds};

pub fn derive_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    let fields = match &input.data {
        Data::Struct(data) => &data.fields,
        Data::Enum(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Object derive is not supported for enums; derive Wrapper for fieldless enums",
            ));
        }
        Data::Union(_) => {
            return Err(syn::Error::new_spanned(
                input,
                "Object derive is not supported for unions.",
            ));
        }
    };

    let accessors = field_accessors(fields)?;
    let num_fields = accessors.len();
    let writes = (0u32..).zip(&accessors).map(|(index, accessor)| {
        quote! {
            writer.write(&self.#accessor, #index)?;
        }
    });

    let generics = with_classify_bounds(&input.generics);
    let (impl_generics, ty_generics, where_clause) = generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::bytetree::Classify for #name #ty_generics #where_clause {
            type Strategy = ::bytetree::AsObject;
        }

        impl #impl_generics ::bytetree::Object for #name #ty_generics #where_clause {
            #[inline]
            fn num_fields(&self) -> usize {
                #num_fields
            }

            #[allow(unused_variables)]
            fn write_fields(
                &self,
                writer: &mut ::bytetree::ByteTreeWriter<'_>,
            ) -> ::bytetree::Result<()> {
                #(#writes)*
                Ok(())
            }
        }
    })
}

/// `self.<accessor>` for every written field, in declaration order.
fn field_accessors(fields: &Fields) -> syn::Result<Vec<TokenStream2>> {
    let mut accessors = Vec::new();
    for (i, field) in fields.iter().enumerate() {
        if is_skipped(field)? {
            continue;
        }
        match &field.ident {
            Some(ident) => accessors.push(quote! { #ident }),
            None => {
                let index = Index::from(i);
                accessors.push(quote! { #index });
            }
        }
    }
    Ok(accessors)
}
