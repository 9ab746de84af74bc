mod accessors;
mod definition;
mod enum_primitive;
mod record;
mod util;

use crate::schema::{Enum, Record};

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The record being expanded
    record: &'a Record,

    /// Path prefix for rowbind types
    rowbind: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let record_impl = self.expand_record_impl();
        let tracked_impls = self.expand_tracked_impls();

        wrap_in_const(quote! {
            #record_impl
            #tracked_impls
        })
    }
}

pub(super) fn record(record: &Record) -> TokenStream {
    Expand {
        record,
        rowbind: quote!(_rowbind::codegen_support),
    }
    .expand()
}

pub(super) fn enum_primitive(def: &Enum) -> TokenStream {
    wrap_in_const(enum_primitive::expand(def, &quote!(_rowbind::codegen_support)))
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use rowbind as _rowbind;
            #code
        };
    }
}
