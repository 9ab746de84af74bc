use super::{util, Expand};
use crate::schema::{Direction, Field};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Body of `Record::definition`: the declarative field table.
    pub(super) fn expand_definition(&self) -> TokenStream {
        let rowbind = &self.rowbind;
        let record = self.record;
        let name = record.ident.to_string();

        let kind = if record.is_tracked() {
            quote!(#rowbind::RecordKind::Tracked)
        } else {
            quote!(#rowbind::RecordKind::Simple)
        };

        let table = util::option(rowbind, record.attrs.table.as_ref());
        let schema = util::option(rowbind, record.attrs.schema.as_ref());
        let immutable = record.attrs.immutable;
        let fields = record.fields.iter().map(|field| self.expand_field_def(field));

        quote! {
            #rowbind::RecordDef {
                name: #name,
                kind: #kind,
                table: #table,
                schema: #schema,
                immutable: #immutable,
                fields: ::std::vec![ #( #fields ),* ],
            }
        }
    }

    fn expand_field_def(&self, field: &Field) -> TokenStream {
        let rowbind = &self.rowbind;
        let ty = &field.ty;
        let name = field.ident.to_string();
        let attrs = &field.attrs;

        let column = util::option(
            rowbind,
            attrs.column.as_ref().and_then(|column| column.name.as_ref()),
        );
        let max_length = util::option(
            rowbind,
            attrs
                .column
                .as_ref()
                .and_then(|column| column.max_length.as_ref()),
        );
        let key = util::option(
            rowbind,
            attrs.key.map(proc_macro2::Literal::u32_unsuffixed),
        );
        let version = attrs.version;
        let auto = attrs.auto;
        let calculated = attrs.calculated;
        let large = attrs.large;

        let converters = attrs.converters.iter().map(|converter| {
            let converter_ty = &converter.ty;
            let constructor = match converter.direction {
                Direction::Source => quote!(source),
                Direction::Target => quote!(target),
            };

            quote! {
                #rowbind::ConverterDecl::#constructor(
                    <#converter_ty as #rowbind::Default>::default()
                )
            }
        });

        quote! {
            #rowbind::FieldDef {
                name: #name,
                column: #column,
                ty: <#ty as #rowbind::Primitive>::ty(),
                nullable: <#ty as #rowbind::Primitive>::NULLABLE,
                key: #key,
                version: #version,
                auto: #auto,
                calculated: #calculated,
                max_length: #max_length,
                large: #large,
                converters: ::std::vec![ #( #converters ),* ],
            }
        }
    }
}
