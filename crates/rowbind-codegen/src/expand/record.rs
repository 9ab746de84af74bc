use super::{util, Expand};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_record_impl(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let record = self.record;
        let ident = &record.ident;
        let name = ident.to_string();
        let field_count = util::int(record.fields.len());
        let immutable = record.is_tracked() && record.attrs.immutable;
        let definition = self.expand_definition();

        let field_values = record.fields.iter().map(|field| {
            let index = util::int(field.index);
            let field_ident = &field.ident;
            quote!(#index => #rowbind::Primitive::to_value(&self.#field_ident),)
        });

        let load_fields = record.fields.iter().map(|field| {
            let index = util::int(field.index);
            let field_ident = &field.ident;
            let ty = &field.ty;
            quote! {
                #index => self.#field_ident = <#ty as #rowbind::Primitive>::load(value)?,
            }
        });

        let change_tracker = record.tracker.as_ref().map(|tracker| {
            quote! {
                fn change_tracker(&mut self) -> #rowbind::Option<&mut #rowbind::Tracker> {
                    #rowbind::Option::Some(&mut self.#tracker)
                }
            }
        });

        quote! {
            impl #rowbind::Record for #ident {
                const NAME: &'static str = #name;
                const FIELD_COUNT: usize = #field_count;
                const IMMUTABLE: bool = #immutable;

                fn definition() -> #rowbind::RecordDef {
                    #definition
                }

                fn field_value(&self, field: usize) -> #rowbind::Value {
                    match field {
                        #( #field_values )*
                        _ => #rowbind::Value::Null,
                    }
                }

                fn load_field(&mut self, field: usize, value: #rowbind::Value) -> #rowbind::Result<()> {
                    match field {
                        #( #load_fields )*
                        _ => {
                            return #rowbind::Result::Err(#rowbind::Error::from_args(
                                ::std::format_args!("`{}` has no field #{}", #name, field)
                            ));
                        }
                    }

                    #rowbind::Result::Ok(())
                }

                #change_tracker
            }
        }
    }
}
