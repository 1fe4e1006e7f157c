//! Paths into `fw_meta` used by the generated code.
//!
//! Keeping them in one place limits the changes needed when the layout of
//! `fw_meta` moves.

use proc_macro2::TokenStream;
use quote::quote;

// -----------------------------------------------------------------------------
// Crate Path

/// Get the access path to the `fw_meta` crate from the deriving crate.
///
/// 1. For crates that depend on `fw_meta`, `::fw_meta` is returned.
/// 2. For crates that depend on `fieldwise`, `::fieldwise::meta` is returned.
/// 3. Otherwise `::fw_meta` is returned; `fw_meta` itself relies on this
///    through `extern crate self as fw_meta`.
///
/// This reads the caller's manifest, so it is resolved once per derive and
/// then passed around.
pub(crate) fn fw_meta() -> syn::Path {
    fw_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("fw_meta"))
}

// -----------------------------------------------------------------------------
// Modules

mod info;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use info::*;

#[inline(always)]
pub(crate) fn macro_exports_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::__macro_exports
    }
}

#[cfg(feature = "auto_register")]
#[inline(always)]
pub(crate) fn auto_register_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::__macro_exports::auto_register
    }
}

#[inline(always)]
pub(crate) fn reflect_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::Reflect
    }
}

#[inline(always)]
pub(crate) fn reflect_ref_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::ReflectRef
    }
}

#[inline(always)]
pub(crate) fn struct_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::Struct
    }
}

#[inline(always)]
pub(crate) fn enum_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::Enum
    }
}

#[inline(always)]
pub(crate) fn constructor_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::construct::Constructor
    }
}

#[inline(always)]
pub(crate) fn non_generic_type_info_cell_(fw_meta_path: &syn::Path) -> TokenStream {
    quote! {
        #fw_meta_path::impls::NonGenericTypeInfoCell
    }
}
