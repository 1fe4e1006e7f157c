use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Typed`.
///
/// `type_info_tokens` builds the `TypeInfo`; it runs once, on first access.
pub(crate) fn impl_trait_typed(meta: &ReflectMeta, type_info_tokens: TokenStream) -> TokenStream {
    let fw_meta_path = meta.fw_meta_path();
    let trait_typed_ = crate::path::typed_(fw_meta_path);
    let type_info_ = crate::path::type_info_(fw_meta_path);
    let info_cell = crate::path::non_generic_type_info_cell_(fw_meta_path);
    let type_ident = meta.type_ident();

    quote! {
        impl #trait_typed_ for #type_ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #info_cell = #info_cell::new();
                CELL.get_or_init(|| {
                    #type_info_tokens
                })
            }
        }
    }
}
