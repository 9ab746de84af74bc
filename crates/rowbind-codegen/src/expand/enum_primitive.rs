use crate::schema::Enum;

use proc_macro2::TokenStream;
use quote::quote;

/// `Primitive` for a field-less enum, stored as its discriminant.
pub(super) fn expand(def: &Enum, rowbind: &TokenStream) -> TokenStream {
    let ident = &def.ident;
    let name = ident.to_string();
    let repr_ty = def.repr.rust_ty();
    let repr_variant = def.repr.variant();

    let variants = def.variants.iter().map(|variant| {
        let variant_name = variant.to_string();
        quote! {
            #rowbind::EnumVariant {
                name: #variant_name,
                discriminant: #ident::#variant as i64,
            }
        }
    });

    let load_arms = def.variants.iter().map(|variant| {
        quote!(v if v == #ident::#variant as #repr_ty => #rowbind::Result::Ok(#ident::#variant),)
    });

    let to_value_arms = def.variants.iter().map(|variant| {
        quote!(#ident::#variant => #rowbind::Value::from(#ident::#variant as #repr_ty),)
    });

    quote! {
        impl #rowbind::Primitive for #ident {
            fn ty() -> #rowbind::Type {
                static DEF: #rowbind::EnumDef = #rowbind::EnumDef {
                    name: ::std::concat!(::std::module_path!(), "::", #name),
                    ident: #name,
                    repr: #rowbind::Type::#repr_variant,
                    variants: &[ #( #variants ),* ],
                };

                #rowbind::Type::Enum(&DEF)
            }

            fn load(value: #rowbind::Value) -> #rowbind::Result<Self> {
                match <#repr_ty as #rowbind::Primitive>::load(value)? {
                    #( #load_arms )*
                    v => #rowbind::Result::Err(#rowbind::Error::type_conversion(
                        #rowbind::Value::from(v),
                        &<Self as #rowbind::Primitive>::ty(),
                    )),
                }
            }

            fn to_value(&self) -> #rowbind::Value {
                match self {
                    #( #to_value_arms )*
                }
            }
        }
    }
}
