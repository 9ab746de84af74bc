use super::ErrorSet;

#[derive(Debug, Default)]
pub(crate) struct RecordAttr {
    /// `#[table("Users")]`
    pub(crate) table: Option<syn::LitStr>,

    /// `#[schema("dbo")]`
    pub(crate) schema: Option<syn::LitStr>,

    /// `#[immutable]`
    pub(crate) immutable: bool,
}

impl RecordAttr {
    pub(super) fn populate_from_ast(&mut self, attrs: &[syn::Attribute]) -> syn::Result<()> {
        let mut errs = ErrorSet::new();

        for attr in attrs {
            if attr.path().is_ident("table") {
                if self.table.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[table] attribute"));
                } else {
                    self.table = Some(parse_name(attr, "table")?);
                }
            } else if attr.path().is_ident("schema") {
                if self.schema.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[schema] attribute"));
                } else {
                    self.schema = Some(parse_name(attr, "schema")?);
                }
            } else if attr.path().is_ident("immutable") {
                if self.immutable {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        "duplicate #[immutable] attribute",
                    ));
                } else {
                    attr.meta.require_path_only()?;
                    self.immutable = true;
                }
            }
        }

        match errs.collect() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }
}

fn parse_name(attr: &syn::Attribute, what: &str) -> syn::Result<syn::LitStr> {
    let lit: syn::LitStr = attr.parse_args().map_err(|_| {
        syn::Error::new_spanned(attr, format!("expected `#[{what}(\"name\")]`"))
    })?;

    if lit.value().is_empty() {
        return Err(syn::Error::new_spanned(lit, format!("{what} name cannot be empty")));
    }

    Ok(lit)
}
