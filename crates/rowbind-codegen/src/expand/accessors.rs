use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Getters, tracked setters and the `TrackedRecord` impl. Simple records
    /// get nothing.
    pub(super) fn expand_tracked_impls(&self) -> TokenStream {
        let Some(tracker) = &self.record.tracker else {
            return TokenStream::new();
        };

        let rowbind = &self.rowbind;
        let vis = &self.record.vis;
        let ident = &self.record.ident;

        let accessors = self.record.fields.iter().map(|field| {
            let field_ident = &field.ident;
            let set_ident = &field.set_ident;
            let ty = &field.ty;
            let column_name = field.column_name();

            quote! {
                #vis fn #field_ident(&self) -> &#ty {
                    &self.#field_ident
                }

                #vis fn #set_ident(&mut self, value: impl #rowbind::Into<#ty>) -> #rowbind::Result<()> {
                    self.#field_ident = self.#tracker.modify(#rowbind::Into::into(value), #column_name)?;
                    #rowbind::Result::Ok(())
                }
            }
        });

        quote! {
            impl #ident {
                #( #accessors )*
            }

            impl #rowbind::TrackedRecord for #ident {
                fn tracker(&self) -> &#rowbind::Tracker {
                    &self.#tracker
                }

                fn tracker_mut(&mut self) -> &mut #rowbind::Tracker {
                    &mut self.#tracker
                }
            }
        }
    }
}
