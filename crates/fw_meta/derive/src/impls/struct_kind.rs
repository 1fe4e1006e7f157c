use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectStruct;

/// Implement `TypePath`, `Typed`, `Struct` and `Reflect` for a struct type.
pub(crate) fn impl_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();

    // field getters, referenced by the `FieldInfo`s
    let getter_tokens = info.getter_tokens();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Struct
    let struct_trait_tokens = impl_trait_struct(info);

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, Ident::new("Struct", Span::call_site()));

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #getter_tokens

        #type_path_trait_tokens

        #typed_trait_tokens

        #struct_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}

fn impl_trait_struct(info: &ReflectStruct) -> TokenStream {
    let meta = info.meta();
    let fw_meta_path = meta.fw_meta_path();
    let struct_ = crate::path::struct_(fw_meta_path);
    let struct_info_ = crate::path::struct_info_(fw_meta_path);
    let typed_ = crate::path::typed_(fw_meta_path);
    let macro_exports_ = crate::path::macro_exports_(fw_meta_path);
    let type_ident = meta.type_ident();

    quote! {
        impl #struct_ for #type_ident {
            #[inline]
            fn struct_info() -> &'static #struct_info_ {
                #macro_exports_::struct_info_of(<Self as #typed_>::type_info())
            }
        }
    }
}
