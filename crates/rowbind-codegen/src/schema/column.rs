mod kw {
    syn::custom_keyword!(max_length);
}

/// `#[column("name", max_length = N)]`
#[derive(Debug)]
pub(crate) struct Column {
    pub(crate) name: Option<syn::LitStr>,
    pub(crate) max_length: Option<syn::LitInt>,
}

impl Column {
    pub(super) fn from_ast(attr: &syn::Attribute) -> syn::Result<Column> {
        attr.parse_args()
    }
}

impl syn::parse::Parse for Column {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self {
            name: None,
            max_length: None,
        };

        // #[column("name")]
        // #[column(max_length = 50)]
        // #[column("name", max_length = 50)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(syn::LitStr) {
                if result.name.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate column name"));
                }
                result.name = Some(input.parse()?);
            } else if lookahead.peek(kw::max_length) {
                if result.max_length.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate max_length"));
                }
                let _kw: kw::max_length = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                let lit: syn::LitInt = input.parse()?;
                lit.base10_parse::<usize>()?;
                result.max_length = Some(lit);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
        }

        Ok(result)
    }
}
