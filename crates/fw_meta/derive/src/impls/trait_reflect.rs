use proc_macro2::{Ident, TokenStream};
use quote::quote;

use crate::derive_data::ReflectMeta;

/// Generate implementation code for `Reflect`.
///
/// `kind` is the `ReflectRef` variant the value is exposed as.
pub(crate) fn impl_trait_reflect(meta: &ReflectMeta, kind: Ident) -> TokenStream {
    let fw_meta_path = meta.fw_meta_path();
    let reflect_ = crate::path::reflect_(fw_meta_path);
    let reflect_ref_ = crate::path::reflect_ref_(fw_meta_path);
    let type_ident = meta.type_ident();

    quote! {
        impl #reflect_ for #type_ident {
            #[inline]
            fn reflect_ref(&self) -> #reflect_ref_<'_> {
                #reflect_ref_::#kind(self)
            }
        }
    }
}
