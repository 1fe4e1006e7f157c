use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `TypePath`.
///
/// Derived types are never generic, so every string is a constant.
pub(crate) fn impl_trait_type_path(meta: &ReflectMeta) -> TokenStream {
    let trait_type_path_ = crate::path::type_path_(meta.fw_meta_path());
    let type_ident = meta.type_ident();

    let type_path = meta.type_path();
    let type_name = meta.type_name();

    quote! {
        impl #trait_type_path_ for #type_ident {
            #[inline]
            fn type_path() -> &'static str {
                #type_path
            }

            #[inline]
            fn type_name() -> &'static str {
                #type_name
            }
        }
    }
}
