use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::ext::IdentExt;
use syn::{Field, Ident, LitStr, Visibility};

use super::{FieldAttributes, ReflectMeta};

// -----------------------------------------------------------------------------
// Define

/// A struct with named fields, or a unit struct.
pub(crate) struct ReflectStruct<'a> {
    meta: ReflectMeta<'a>,
    /// Declared fields, in declaration order. `ignore` fields are dropped.
    fields: Vec<StructField<'a>>,
    /// The `#[reflect(base)]` field.
    base: Option<StructField<'a>>,
}

/// One named field of a [`ReflectStruct`].
pub(crate) struct StructField<'a> {
    pub data: &'a Field,
    pub attrs: FieldAttributes,
}

// -----------------------------------------------------------------------------
// StructField Implementation

impl StructField<'_> {
    fn ident(&self) -> &Ident {
        // Only named fields reach this point.
        self.data.ident.as_ref().unwrap_or_else(|| unreachable!())
    }

    /// The name of the generated getter function.
    pub fn getter_ident(&self) -> Ident {
        format_ident!("__fw_meta_get_{}", self.ident().unraw())
    }

    /// The field name as written, without `r#`.
    fn name(&self) -> LitStr {
        LitStr::new(&self.ident().unraw().to_string(), self.ident().span())
    }

    /// Generates the getter function, a `fw_meta::info::FieldGetter` for this field.
    pub fn to_getter_tokens(&self, type_ident: &Ident, fw_meta_path: &syn::Path) -> TokenStream {
        let reflect_ = crate::path::reflect_(fw_meta_path);
        let getter = self.getter_ident();
        let member = self.ident();

        quote! {
            #[allow(non_snake_case)]
            fn #getter(
                instance: &dyn ::core::any::Any,
            ) -> ::core::option::Option<&dyn #reflect_> {
                <dyn ::core::any::Any>::downcast_ref::<#type_ident>(instance)
                    .map(|value| &value.#member as &dyn #reflect_)
            }
        }
    }

    /// Generates the `FieldInfo` construction for a declared field.
    pub fn to_info_tokens(&self, fw_meta_path: &syn::Path) -> TokenStream {
        let field_info_ = crate::path::field_info_(fw_meta_path);
        let field_flags_ = crate::path::field_flags_(fw_meta_path);

        let name = self.name();
        let ty = &self.data.ty;
        let getter = self.getter_ident();

        let mut flags = Vec::new();
        if self.attrs.transient.is_some() {
            flags.push(quote!(#field_flags_::TRANSIENT));
        }
        if !matches!(self.data.vis, Visibility::Public(_)) {
            flags.push(quote!(#field_flags_::PRIVATE));
        }
        let with_flags = if flags.is_empty() {
            crate::utils::empty()
        } else {
            quote! {
                .with_flags(#(#flags)|*)
            }
        };

        let mut markers = Vec::new();
        if self.attrs.skip.is_some() {
            markers.push(crate::path::non_serialized_(fw_meta_path));
        }
        let with_custom_attributes = self
            .attrs
            .custom_attributes
            .get_expression_with(fw_meta_path, &markers);

        quote! {
            #field_info_::new::<Self, #ty>(#name, #getter)
                #with_flags
                #with_custom_attributes
        }
    }

    /// Generates the `BaseInfo` construction for the base field.
    pub fn to_base_tokens(&self, fw_meta_path: &syn::Path) -> TokenStream {
        let base_info_ = crate::path::base_info_(fw_meta_path);

        let name = self.name();
        let ty = &self.data.ty;
        let getter = self.getter_ident();

        quote! {
            #base_info_::new::<#ty>(#name, #getter)
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectStruct Implementation

impl<'a> ReflectStruct<'a> {
    /// Splits `fields` into declared fields and the base field.
    pub fn new(
        meta: ReflectMeta<'a>,
        raw_fields: impl IntoIterator<Item = &'a Field>,
    ) -> syn::Result<Self> {
        let mut fields = Vec::new();
        let mut base: Option<StructField<'a>> = None;

        for data in raw_fields {
            let attrs = FieldAttributes::parse_attrs(&data.attrs)?;
            if attrs.ignore.is_some() {
                continue;
            }
            if let Some(span) = attrs.base {
                if base.is_some() {
                    return Err(syn::Error::new(span, "only one field can be the `base`"));
                }
                base = Some(StructField { data, attrs });
                continue;
            }
            fields.push(StructField { data, attrs });
        }

        Ok(Self { meta, fields, base })
    }

    #[inline]
    pub fn meta(&self) -> &ReflectMeta<'a> {
        &self.meta
    }

    /// Getter functions for every declared field and the base field.
    pub fn getter_tokens(&self) -> TokenStream {
        let type_ident = self.meta.type_ident();
        let fw_meta_path = self.meta.fw_meta_path();
        let getters = self
            .fields
            .iter()
            .chain(self.base.as_ref())
            .map(|field| field.to_getter_tokens(type_ident, fw_meta_path));

        quote! {
            #(#getters)*
        }
    }

    /// Generates the `TypeInfo::Struct(..)` expression.
    pub fn to_info_tokens(&self) -> TokenStream {
        let fw_meta_path = self.meta.fw_meta_path();
        let type_info_ = crate::path::type_info_(fw_meta_path);
        let struct_info_ = crate::path::struct_info_(fw_meta_path);

        let fields = self
            .fields
            .iter()
            .map(|field| field.to_info_tokens(fw_meta_path));

        let with_base = match &self.base {
            Some(base) => {
                let base_tokens = base.to_base_tokens(fw_meta_path);
                quote!(.with_base(#base_tokens))
            }
            None => crate::utils::empty(),
        };

        let with_constructor = self.meta.with_constructor_tokens();

        let mut markers = Vec::new();
        if self.meta.attrs().include_base.is_some() {
            markers.push(crate::path::include_base_(fw_meta_path));
        }
        let with_custom_attributes = self.meta.with_custom_attributes_tokens(&markers);

        quote! {
            #type_info_::Struct(
                #struct_info_::new::<Self>(&[
                    #(#fields),*
                ])
                #with_base
                #with_constructor
                #with_custom_attributes
            )
        }
    }
}
