use super::field::Parsed;
use super::{ErrorSet, Field, FieldAttr, RecordAttr};

#[derive(Debug)]
pub(crate) struct Record {
    pub(crate) vis: syn::Visibility,

    pub(crate) ident: syn::Ident,

    /// Mapped fields in declaration order
    pub(crate) fields: Vec<Field>,

    /// The `Tracker` field; `None` for simple records
    pub(crate) tracker: Option<syn::Ident>,

    pub(crate) attrs: RecordAttr,
}

impl Record {
    pub(crate) fn from_ast(ast: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(node) = &ast.fields else {
            return Err(syn::Error::new_spanned(
                &ast.fields,
                "record fields must be named",
            ));
        };

        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "record generics are not supported",
            ));
        }

        let mut attrs = RecordAttr::default();
        let mut fields = vec![];
        let mut tracker = None;
        let mut errs = ErrorSet::new();

        if let Err(err) = attrs.populate_from_ast(&ast.attrs) {
            errs.push(err);
        }

        for node in node.named.iter() {
            let Some(ident) = &node.ident else {
                errs.push(syn::Error::new_spanned(node, "record fields must be named"));
                continue;
            };

            match FieldAttr::from_ast(node) {
                Ok(Parsed::Mapped(field_attrs)) => {
                    let index = fields.len();
                    fields.push(Field::new(index, ident.clone(), node.ty.clone(), field_attrs));
                }
                Ok(Parsed::Tracker) => {
                    if tracker.is_some() {
                        errs.push(syn::Error::new_spanned(
                            node,
                            "a record can have only one tracker field",
                        ));
                    } else {
                        tracker = Some(ident.clone());
                    }
                }
                Ok(Parsed::Skipped) => {}
                Err(err) => errs.push(err),
            }
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            vis: ast.vis.clone(),
            ident: ast.ident.clone(),
            fields,
            tracker,
            attrs,
        })
    }

    pub(crate) fn is_tracked(&self) -> bool {
        self.tracker.is_some()
    }
}
