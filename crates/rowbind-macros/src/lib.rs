extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Record,
    attributes(
        table, schema, immutable, column, key, version, auto, calculated, large, skip, convert,
        tracker
    )
)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate_record(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

#[proc_macro_derive(Enum)]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    match rowbind_codegen::generate_enum(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
