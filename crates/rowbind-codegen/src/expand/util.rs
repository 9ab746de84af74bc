use proc_macro2::{Literal, TokenStream};
use quote::quote;

pub(crate) fn int(v: usize) -> Literal {
    Literal::usize_unsuffixed(v)
}

/// `Some(value)` or `None`, spelled through the support module
pub(crate) fn option(rowbind: &TokenStream, value: Option<impl quote::ToTokens>) -> TokenStream {
    match value {
        Some(value) => quote!(#rowbind::Option::Some(#value)),
        None => quote!(#rowbind::Option::None),
    }
}
