use proc_macro2::TokenStream;
use quote::quote;
use syn::ext::IdentExt;
use syn::{Fields, LitStr, Variant};

use super::ReflectMeta;

// -----------------------------------------------------------------------------
// Define

/// An enum whose variants are all units.
pub(crate) struct ReflectEnum<'a> {
    meta: ReflectMeta<'a>,
    variants: Vec<&'a Variant>,
}

impl<'a> ReflectEnum<'a> {
    /// Checks that every variant is a unit and that the type attributes fit
    /// an enum.
    pub fn new(
        meta: ReflectMeta<'a>,
        variants: impl IntoIterator<Item = &'a Variant>,
        span: proc_macro2::Span,
    ) -> syn::Result<Self> {
        if let Some(span) = meta.attrs().include_base {
            return Err(syn::Error::new(span, "`include_base` is only valid on structs"));
        }

        let variants: Vec<&'a Variant> = variants.into_iter().collect();
        if variants.is_empty() {
            return Err(syn::Error::new(span, "`Reflect` cannot be derived for enums without variants"));
        }

        for variant in &variants {
            if !matches!(variant.fields, Fields::Unit) {
                return Err(syn::Error::new_spanned(
                    &variant.ident,
                    "`Reflect` can only be derived for enums whose variants are all units",
                ));
            }
            if let Some(attr) = variant
                .attrs
                .iter()
                .find(|attr| attr.path().is_ident(crate::REFLECT_ATTRIBUTE_NAME))
            {
                return Err(syn::Error::new_spanned(attr, "variants take no `reflect` attributes"));
            }
        }

        Ok(Self { meta, variants })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Generates the `TypeInfo::Enum(..)` expression.
    pub fn to_info_tokens(&self) -> TokenStream {
        let fw_meta_path = self.meta.fw_meta_path();
        let type_info_ = crate::path::type_info_(fw_meta_path);
        let enum_info_ = crate::path::enum_info_(fw_meta_path);
        let variant_info_ = crate::path::variant_info_(fw_meta_path);

        let variants = self.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let name = LitStr::new(&ident.unraw().to_string(), ident.span());
            quote! {
                #variant_info_::new(#name, Self::#ident as i64)
            }
        });

        let with_constructor = self.meta.with_constructor_tokens();
        let with_custom_attributes = self.meta.with_custom_attributes_tokens(&[]);

        quote! {
            #type_info_::Enum(
                #enum_info_::new::<Self>(&[
                    #(#variants),*
                ])
                #with_constructor
                #with_custom_attributes
            )
        }
    }

    /// Generates the `Enum` methods.
    ///
    /// Both match on `self`, so the enum does not need to be `Copy`.
    pub fn to_enum_methods(&self) -> TokenStream {
        let discriminants = self.variants.iter().map(|variant| {
            let ident = &variant.ident;
            quote!(Self::#ident => Self::#ident as i64)
        });
        let names = self.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let name = LitStr::new(&ident.unraw().to_string(), ident.span());
            quote!(Self::#ident => #name)
        });

        quote! {
            fn discriminant(&self) -> i64 {
                match self {
                    #(#discriminants,)*
                }
            }

            fn variant_name(&self) -> &'static str {
                match self {
                    #(#names,)*
                }
            }
        }
    }
}
