use proc_macro2::Span;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::{Attribute, Ident, LitStr, Path, Token};

use super::{CustomAttributes, set_flag};
use crate::REFLECT_ATTRIBUTE_NAME;

/// How the generated `Constructor` builds a value.
pub(crate) enum ConstructorKind {
    /// `#[reflect(default)]`
    Default(Span),
    /// `#[reflect(constructor = path)]`
    Function(Path),
}

/// Attributes written on the type itself.
///
/// Format: `#[reflect(type_path = "..", include_base, default, auto_register, @expr)]`,
/// possibly split over several `#[reflect(..)]` attributes.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub type_path: Option<LitStr>,
    pub include_base: Option<Span>,
    pub constructor: Option<ConstructorKind>,
    pub auto_register: Option<Span>,
    pub custom_attributes: CustomAttributes,
}

impl TypeAttributes {
    /// Parse every `#[reflect(..)]` attribute in `attrs`.
    pub fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut this = Self::default();
        for attr in attrs {
            if attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                attr.parse_args_with(|input: ParseStream| this.parse_stream(input))?;
            }
        }
        Ok(this)
    }

    /// Parse the content of one `#[reflect(..)]`.
    pub fn parse_stream(&mut self, input: ParseStream) -> syn::Result<()> {
        while !input.is_empty() {
            if input.peek(Token![@]) {
                self.custom_attributes.parse_inner_stream(input)?;
            } else {
                let ident = input.call(Ident::parse_any)?;
                self.parse_ident(&ident, input)?;
            }

            if input.is_empty() {
                break;
            }
            input.parse::<Token![,]>()?;
        }
        Ok(())
    }

    fn parse_ident(&mut self, ident: &Ident, input: ParseStream) -> syn::Result<()> {
        match ident.to_string().as_str() {
            "type_path" => {
                if self.type_path.is_some() {
                    return Err(syn::Error::new(ident.span(), "duplicate attribute `type_path`"));
                }
                input.parse::<Token![=]>()?;
                let lit: LitStr = input.parse()?;
                let value = lit.value();
                if value.is_empty() || value.starts_with("::") || value.ends_with("::") {
                    return Err(syn::Error::new(
                        lit.span(),
                        "expected a path like `my_crate::module::Type`",
                    ));
                }
                self.type_path = Some(lit);
            }
            "include_base" => set_flag(&mut self.include_base, ident)?,
            "auto_register" => set_flag(&mut self.auto_register, ident)?,
            "default" => {
                self.check_constructor(ident)?;
                self.constructor = Some(ConstructorKind::Default(ident.span()));
            }
            "constructor" => {
                self.check_constructor(ident)?;
                input.parse::<Token![=]>()?;
                self.constructor = Some(ConstructorKind::Function(input.parse()?));
            }
            _ => {
                return Err(syn::Error::new(
                    ident.span(),
                    format!(
                        "unknown type attribute `{ident}`, expected one of `type_path`, \
                         `include_base`, `default`, `constructor`, `auto_register` or `@..`"
                    ),
                ));
            }
        }
        Ok(())
    }

    fn check_constructor(&self, ident: &Ident) -> syn::Result<()> {
        if self.constructor.is_some() {
            return Err(syn::Error::new(
                ident.span(),
                "`default` and `constructor` may only be given once, and not together",
            ));
        }
        Ok(())
    }
}
