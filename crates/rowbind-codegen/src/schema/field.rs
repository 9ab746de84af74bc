use super::{Column, ConvertAttr, Direction, ErrorSet};

#[derive(Debug)]
pub(crate) struct Field {
    /// Position in the record's field table
    pub(crate) index: usize,

    pub(crate) ident: syn::Ident,

    pub(crate) ty: syn::Type,

    pub(crate) attrs: FieldAttr,

    /// Identifier of the tracked setter
    pub(crate) set_ident: syn::Ident,
}

#[derive(Debug, Default)]
pub(crate) struct FieldAttr {
    pub(crate) column: Option<Column>,

    /// `#[key]` or `#[key(ordinal)]`
    pub(crate) key: Option<u32>,

    pub(crate) version: bool,

    pub(crate) auto: bool,

    pub(crate) calculated: bool,

    pub(crate) large: bool,

    pub(crate) converters: Vec<ConvertAttr>,
}

/// What a struct field turned out to be
pub(crate) enum Parsed {
    Mapped(FieldAttr),
    Tracker,
    Skipped,
}

impl Field {
    pub(super) fn new(index: usize, ident: syn::Ident, ty: syn::Type, attrs: FieldAttr) -> Self {
        let set_ident = syn::Ident::new(&format!("set_{ident}"), ident.span());

        Self {
            index,
            ident,
            ty,
            attrs,
            set_ident,
        }
    }

    /// Physical column name as a string
    pub(crate) fn column_name(&self) -> String {
        match self.attrs.column.as_ref().and_then(|c| c.name.as_ref()) {
            Some(name) => name.value(),
            None => self.ident.to_string(),
        }
    }
}

impl FieldAttr {
    pub(super) fn from_ast(field: &syn::Field) -> syn::Result<Parsed> {
        let mut errs = ErrorSet::new();
        let mut attrs = FieldAttr::default();
        let mut key = false;
        let mut tracker = is_tracker_type(&field.ty);
        let mut skip = false;

        for attr in &field.attrs {
            let path = attr.path();

            if path.is_ident("column") {
                if attrs.column.is_some() {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[column] attribute"));
                } else {
                    attrs.column = Some(Column::from_ast(attr)?);
                }
            } else if path.is_ident("key") {
                if key {
                    errs.push(syn::Error::new_spanned(attr, "duplicate #[key] attribute"));
                    continue;
                }

                key = true;
                attrs.key = Some(match &attr.meta {
                    syn::Meta::Path(_) => 0,
                    _ => attr.parse_args::<syn::LitInt>()?.base10_parse()?,
                });
            } else if path.is_ident("convert") {
                attrs.converters.extend(ConvertAttr::from_ast(attr)?);
            } else if let Some(flag) = flag_mut(&mut attrs, &mut tracker, &mut skip, path) {
                if *flag {
                    errs.push(syn::Error::new_spanned(
                        attr,
                        format!("duplicate #[{}] attribute", path_name(path)),
                    ));
                } else {
                    attr.meta.require_path_only()?;
                    *flag = true;
                }
            }
        }

        let targets = attrs
            .converters
            .iter()
            .filter(|c| c.direction == Direction::Target);

        for extra in targets.skip(1) {
            errs.push(syn::Error::new_spanned(
                &extra.ty,
                "a field can declare at most one target converter",
            ));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(if tracker {
            Parsed::Tracker
        } else if skip {
            Parsed::Skipped
        } else {
            Parsed::Mapped(attrs)
        })
    }
}

fn flag_mut<'a>(
    attrs: &'a mut FieldAttr,
    tracker: &'a mut bool,
    skip: &'a mut bool,
    path: &syn::Path,
) -> Option<&'a mut bool> {
    Some(match path_name(path).as_str() {
        "version" => &mut attrs.version,
        "auto" => &mut attrs.auto,
        "calculated" => &mut attrs.calculated,
        "large" => &mut attrs.large,
        "skip" => skip,
        "tracker" => tracker,
        _ => return None,
    })
}

fn path_name(path: &syn::Path) -> String {
    path.get_ident().map(|ident| ident.to_string()).unwrap_or_default()
}

/// A field typed `Tracker` (by any path ending in that name)
fn is_tracker_type(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };

    path.qself.is_none()
        && path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Tracker" && segment.arguments.is_none())
}
