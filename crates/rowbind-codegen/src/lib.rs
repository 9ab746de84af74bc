mod expand;
mod schema;

use proc_macro2::TokenStream;

pub fn generate_record(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item)?;

    Ok(expand::record(&record))
}

pub fn generate_enum(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemEnum = syn::parse2(input)?;
    let def = schema::Enum::from_ast(&item)?;

    Ok(expand::enum_primitive(&def))
}
