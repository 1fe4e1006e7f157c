//! Parsing of `#[reflect(...)]` attributes on types and fields.

// -----------------------------------------------------------------------------
// Modules

mod custom_attributes;
mod field_attributes;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

use custom_attributes::CustomAttributes;

pub(crate) use field_attributes::FieldAttributes;
pub(crate) use type_attributes::{ConstructorKind, TypeAttributes};

use proc_macro2::Span;

/// Records the span of a flag attribute, rejecting a second occurrence.
fn set_flag(slot: &mut Option<Span>, ident: &syn::Ident) -> syn::Result<()> {
    if slot.is_some() {
        return Err(syn::Error::new(
            ident.span(),
            format!("duplicate attribute `{ident}`"),
        ));
    }
    *slot = Some(ident.span());
    Ok(())
}
