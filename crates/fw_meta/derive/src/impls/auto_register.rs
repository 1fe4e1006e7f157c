use crate::derive_data::ReflectMeta;

/// Generate `auto_register` implementation.
#[cfg(feature = "auto_register")]
pub(crate) fn get_auto_register_impl(meta: &ReflectMeta) -> proc_macro2::TokenStream {
    use quote::quote_spanned;

    if let Some(span) = meta.attrs().auto_register {
        let fw_meta_path = meta.fw_meta_path();
        let auto_register_ = crate::path::auto_register_(fw_meta_path);
        let typed_ = crate::path::typed_(fw_meta_path);
        let type_ident = meta.type_ident();

        quote_spanned! { span =>
            #auto_register_::inventory::submit!{
                #auto_register_::__AutoRegisterFunc(
                    <#type_ident as #typed_>::type_info
                )
            }
        }
    } else {
        crate::utils::empty()
    }
}

/// Generate `auto_register` implementation.
#[cfg(not(feature = "auto_register"))]
pub(crate) fn get_auto_register_impl(_: &ReflectMeta) -> proc_macro2::TokenStream {
    crate::utils::empty()
}
