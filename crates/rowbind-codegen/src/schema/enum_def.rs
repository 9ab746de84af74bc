use super::ErrorSet;

use proc_macro2::TokenStream;
use quote::quote;

/// A field-less enum deriving `Enum`.
#[derive(Debug)]
pub(crate) struct Enum {
    pub(crate) ident: syn::Ident,

    pub(crate) repr: Repr,

    pub(crate) variants: Vec<syn::Ident>,
}

/// The integral representation discriminants are stored as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Repr {
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
}

impl Enum {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        let mut errs = ErrorSet::new();
        let mut repr = None;

        for attr in &ast.attrs {
            if !attr.path().is_ident("repr") {
                continue;
            }

            attr.parse_nested_meta(|meta| {
                if let Some(parsed) = meta.path.get_ident().and_then(Repr::from_ident) {
                    repr = Some(parsed);
                }
                Ok(())
            })?;
        }

        let mut variants = vec![];

        for variant in &ast.variants {
            if !matches!(variant.fields, syn::Fields::Unit) {
                errs.push(syn::Error::new_spanned(
                    variant,
                    "only unit variants are supported",
                ));
                continue;
            }

            variants.push(variant.ident.clone());
        }

        if variants.is_empty() {
            errs.push(syn::Error::new_spanned(ast, "enum must have at least one variant"));
        }

        if let Some(err) = errs.collect() {
            return Err(err);
        }

        Ok(Self {
            ident: ast.ident.clone(),
            repr: repr.unwrap_or(Repr::I32),
            variants,
        })
    }
}

impl Repr {
    fn from_ident(ident: &syn::Ident) -> Option<Self> {
        Some(match ident.to_string().as_str() {
            "i8" => Self::I8,
            "i16" => Self::I16,
            "i32" => Self::I32,
            "i64" => Self::I64,
            "u8" => Self::U8,
            "u16" => Self::U16,
            "u32" => Self::U32,
            "u64" => Self::U64,
            _ => return None,
        })
    }

    /// The Rust integer type
    pub(crate) fn rust_ty(self) -> TokenStream {
        match self {
            Self::I8 => quote!(i8),
            Self::I16 => quote!(i16),
            Self::I32 => quote!(i32),
            Self::I64 => quote!(i64),
            Self::U8 => quote!(u8),
            Self::U16 => quote!(u16),
            Self::U32 => quote!(u32),
            Self::U64 => quote!(u64),
        }
    }

    /// The `Type` variant name
    pub(crate) fn variant(self) -> syn::Ident {
        let name = match self {
            Self::I8 => "I8",
            Self::I16 => "I16",
            Self::I32 => "I32",
            Self::I64 => "I64",
            Self::U8 => "U8",
            Self::U16 => "U16",
            Self::U32 => "U32",
            Self::U64 => "U64",
        };

        syn::Ident::new(name, proc_macro2::Span::call_site())
    }
}
