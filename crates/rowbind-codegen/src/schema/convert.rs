#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Direction {
    Source,
    Target,
}

/// One converter named by `#[convert(source = T)]` or `#[convert(target = T)]`.
#[derive(Debug)]
pub(crate) struct ConvertAttr {
    pub(crate) direction: Direction,
    pub(crate) ty: syn::Type,
}

impl ConvertAttr {
    /// Parses every converter named by one `#[convert(..)]` attribute.
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Vec<ConvertAttr>> {
        let mut converters = vec![];

        attr.parse_nested_meta(|meta| {
            let direction = if meta.path.is_ident("source") {
                Direction::Source
            } else if meta.path.is_ident("target") {
                Direction::Target
            } else {
                return Err(meta.error("expected `source` or `target`"));
            };

            let ty: syn::Type = meta.value()?.parse()?;
            converters.push(ConvertAttr { direction, ty });
            Ok(())
        })?;

        Ok(converters)
    }
}
