use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::Ident;

use super::{get_auto_register_impl, impl_trait_reflect, impl_trait_type_path, impl_trait_typed};

use crate::derive_data::ReflectEnum;

/// Implement `TypePath`, `Typed`, `Enum` and `Reflect` for a fieldless enum.
pub(crate) fn impl_enum(info: &ReflectEnum) -> TokenStream {
    let meta = info.meta();

    // trait: TypePath
    let type_path_trait_tokens = impl_trait_type_path(meta);

    // trait: Typed
    let typed_trait_tokens = impl_trait_typed(meta, info.to_info_tokens());

    // trait: Enum
    let enum_ = crate::path::enum_(meta.fw_meta_path());
    let type_ident = meta.type_ident();
    let enum_methods = info.to_enum_methods();
    let enum_trait_tokens = quote! {
        impl #enum_ for #type_ident {
            #enum_methods
        }
    };

    // trait: Reflect
    let reflect_trait_tokens = impl_trait_reflect(meta, Ident::new("Enum", Span::call_site()));

    // feature: auto_register
    let auto_register_tokens = get_auto_register_impl(meta);

    quote! {
        #type_path_trait_tokens

        #typed_trait_tokens

        #enum_trait_tokens

        #reflect_trait_tokens

        #auto_register_tokens
    }
}
