use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, Token};

use super::{CustomAttributes, set_flag};
use crate::REFLECT_ATTRIBUTE_NAME;

/// Attributes written on a field.
///
/// Format: `#[reflect(skip, transient, base, ignore, @expr)]`.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: Option<Span>,
    pub transient: Option<Span>,
    pub base: Option<Span>,
    pub ignore: Option<Span>,
    pub custom_attributes: CustomAttributes,
}

impl FieldAttributes {
    /// Parse every `#[reflect(..)]` attribute in `attrs`.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_args_with(|input: ParseStream| this.parse_stream(input))?;
            }
        }
        this.validity()?;
        Ok(this)
    }

    fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            if input.peek(Token![@]) {
                self.custom_attributes.parse_inner_stream(input)?;
            } else {
                let ident = input.call(Ident::parse_any)?;
                match ident.to_string().as_str() {
                    "skip" => set_flag(&mut self.skip, &ident)?,
                    "transient" => set_flag(&mut self.transient, &ident)?,
                    "base" => set_flag(&mut self.base, &ident)?,
                    "ignore" => set_flag(&mut self.ignore, &ident)?,
                    _ => {
                        return Err(syn::Error::new(
                            ident.span(),
                            format!(
                                "unknown field attribute `{ident}`, expected one of `skip`, \
                                 `transient`, `base`, `ignore` or `@..`"
                            ),
                        ));
                    }
                }
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    /// `base` and `ignore` take the field out of the declared list, so no
    /// other attribute applies to them.
    fn validity(&self) -> syn::Result<()> {
        for (name, span) in [("base", self.base), ("ignore", self.ignore)] {
            let Some(span) = span else { continue };
            let alone = self.custom_attributes.is_empty()
                && [self.skip, self.transient, self.base, self.ignore]
                    .iter()
                    .filter(|flag| flag.is_some())
                    .count()
                    == 1;
            if !alone {
                return Err(syn::Error::new(
                    span,
                    format!("`{name}` cannot be combined with other field attributes"),
                ));
            }
        }
        Ok(())
    }
}
