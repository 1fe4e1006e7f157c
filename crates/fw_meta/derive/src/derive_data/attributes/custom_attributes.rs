use proc_macro2::TokenStream;
use quote::quote;
use syn::{Expr, Path, Token, parse::ParseStream};

/// A container for custom attribute expressions.
///
/// This corresponds to `fw_meta::info::CustomAttributes`.
#[derive(Default, Debug)]
pub(crate) struct CustomAttributes {
    attributes: Vec<Expr>,
}

impl CustomAttributes {
    /// Returns `true` if no `@` attribute was written.
    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }

    /// Parse `@` attribute.
    ///
    /// Examples:
    /// - `#[reflect(@Foo)]`
    /// - `#[reflect(@Bar::baz("qux"))]`
    /// - `#[reflect(@0..256u8)]`
    pub fn parse_inner_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        input.parse::<Token![@]>()?;
        self.attributes.push(input.parse()?);
        Ok(())
    }

    /// If there are no attributes and no `markers`, this returns an empty
    /// token stream.
    ///
    /// Otherwise, it returns content similar to this:
    ///
    /// ```ignore
    /// .with_custom_attributes(
    ///     _path_::CustomAttributes::with_capacity(n)
    ///         (.with_attribute( ... ))*
    /// )
    /// ```
    ///
    /// `markers` are the marker values implied by other attributes, such as
    /// `NonSerialized` for `skip`. They are added before the `@` values.
    pub fn get_expression_with(&self, fw_meta_path: &Path, markers: &[TokenStream]) -> TokenStream {
        if self.attributes.is_empty() && markers.is_empty() {
            return crate::utils::empty();
        }

        let capacity = self.attributes.len() + markers.len();

        let with_markers = markers.iter().map(|marker| {
            quote! {
                .with_attribute(#marker)
            }
        });

        let with_attributes = self.attributes.iter().map(|value| {
            quote! {
                .with_attribute(#value)
            }
        });

        let custom_attributes_ = crate::path::custom_attributes_(fw_meta_path);

        quote! {
            .with_custom_attributes(
                #custom_attributes_::with_capacity(#capacity)
                    #(#with_markers)*
                    #(#with_attributes)*
            )
        }
    }
}
