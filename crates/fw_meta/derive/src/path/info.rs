use proc_macro2::TokenStream;
use quote::quote;

#[inline(always)]
pub(crate) fn type_path_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::TypePath
    }
}

#[inline(always)]
pub(crate) fn typed_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::Typed
    }
}

#[inline(always)]
pub(crate) fn type_info_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::TypeInfo
    }
}

#[inline(always)]
pub(crate) fn struct_info_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::StructInfo
    }
}

#[inline(always)]
pub(crate) fn base_info_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::BaseInfo
    }
}

#[inline(always)]
pub(crate) fn field_info_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::FieldInfo
    }
}

#[inline(always)]
pub(crate) fn field_flags_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::FieldFlags
    }
}

#[inline(always)]
pub(crate) fn enum_info_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::EnumInfo
    }
}

#[inline(always)]
pub(crate) fn variant_info_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::VariantInfo
    }
}

#[inline(always)]
pub(crate) fn custom_attributes_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::CustomAttributes
    }
}

#[inline(always)]
pub(crate) fn non_serialized_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::NonSerialized
    }
}

#[inline(always)]
pub(crate) fn include_base_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::info::IncludeBase
    }
}
