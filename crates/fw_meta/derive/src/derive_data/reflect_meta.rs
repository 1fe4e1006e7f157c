use proc_macro2::TokenStream;
use quote::{quote, quote_spanned};
use syn::{Ident, LitStr};

use super::TypeAttributes;
use super::attributes::ConstructorKind;

/// Data shared by every kind of derived type.
pub(crate) struct ReflectMeta<'a> {
    attrs: TypeAttributes,
    type_ident: &'a Ident,
    fw_meta_path: syn::Path,
}

impl<'a> ReflectMeta<'a> {
    pub fn new(attrs: TypeAttributes, type_ident: &'a Ident) -> Self {
        Self {
            attrs,
            type_ident,
            fw_meta_path: crate::path::fw_meta(),
        }
    }

    /// The parsed type attributes.
    #[inline]
    pub fn attrs(&self) -> &TypeAttributes {
        &self.attrs
    }

    /// The identifier of the derived type.
    #[inline]
    pub fn type_ident(&self) -> &'a Ident {
        self.type_ident
    }

    /// The path of `fw_meta` from the deriving crate.
    #[inline]
    pub fn fw_meta_path(&self) -> &syn::Path {
        &self.fw_meta_path
    }

    /// `&'static str` expression of the full type path.
    pub fn type_path(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => quote!(#lit),
            None => {
                let ident = LitStr::new(&self.type_ident.to_string(), self.type_ident.span());
                quote! {
                    ::core::concat!(::core::module_path!(), "::", #ident)
                }
            }
        }
    }

    /// `&'static str` expression of the short type name.
    pub fn type_name(&self) -> TokenStream {
        match &self.attrs.type_path {
            Some(lit) => {
                let value = lit.value();
                let name = value.rsplit("::").next().unwrap_or(&value);
                let name = LitStr::new(name, lit.span());
                quote!(#name)
            }
            None => {
                let ident = LitStr::new(&self.type_ident.to_string(), self.type_ident.span());
                quote!(#ident)
            }
        }
    }

    /// `.with_constructor(..)` call, or nothing when no constructor was asked for.
    pub fn with_constructor_tokens(&self) -> TokenStream {
        let constructor_ = crate::path::constructor_(&self.fw_meta_path);
        let reflect_ = crate::path::reflect_(&self.fw_meta_path);

        match &self.attrs.constructor {
            None => crate::utils::empty(),
            Some(ConstructorKind::Default(span)) => quote_spanned! { *span =>
                .with_constructor(#constructor_::of_default::<Self>())
            },
            Some(ConstructorKind::Function(func)) => quote! {
                .with_constructor(#constructor_::new::<Self>(
                    || -> ::std::boxed::Box<dyn #reflect_> {
                        let value: Self = #func();
                        ::std::boxed::Box::new(value)
                    }
                ))
            },
        }
    }

    /// `.with_custom_attributes(..)` call for the type, with `markers` first.
    pub fn with_custom_attributes_tokens(&self, markers: &[TokenStream]) -> TokenStream {
        self.attrs
            .custom_attributes
            .get_expression_with(&self.fw_meta_path, markers)
    }
}
