//! Provide some tools for parsing token stream.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod reflect_enum;
mod reflect_meta;
mod reflect_struct;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use attributes::{FieldAttributes, TypeAttributes};

pub(crate) use reflect_enum::ReflectEnum;
pub(crate) use reflect_meta::ReflectMeta;
pub(crate) use reflect_struct::ReflectStruct;

use syn::{Data, DeriveInput, Fields};

/// The parsed input of `#[derive(Reflect)]`.
pub(crate) enum ReflectDerive<'a> {
    Struct(ReflectStruct<'a>),
    Enum(ReflectEnum<'a>),
}

impl<'a> ReflectDerive<'a> {
    pub fn from_input(input: &'a DeriveInput) -> syn::Result<Self> {
        if !input.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &input.generics,
                "`Reflect` cannot be derived for generic types",
            ));
        }

        let attrs = TypeAttributes::parse_attrs(&input.attrs)?;
        let meta = ReflectMeta::new(attrs, &input.ident);

        match &input.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(fields) => Ok(Self::Struct(ReflectStruct::new(meta, &fields.named)?)),
                Fields::Unit => Ok(Self::Struct(ReflectStruct::new(meta, None::<&syn::Field>)?)),
                Fields::Unnamed(fields) => Err(syn::Error::new_spanned(
                    fields,
                    "`Reflect` cannot be derived for tuple structs, name the fields",
                )),
            },
            Data::Enum(data) => Ok(Self::Enum(ReflectEnum::new(
                meta,
                &data.variants,
                input.ident.span(),
            )?)),
            Data::Union(data) => Err(syn::Error::new(
                data.union_token.span,
                "`Reflect` cannot be derived for unions",
            )),
        }
    }
}
