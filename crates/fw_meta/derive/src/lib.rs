//! Derive macro for `fw_meta`.
//!
//! See [`Reflect`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use quote::quote;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;
mod utils;

// -----------------------------------------------------------------------------
// Macros

/// Generates the static type table of a struct or a fieldless enum.
///
/// Implements `TypePath`, `Typed` and `Reflect`, plus `Struct` for structs
/// with named fields (and unit structs) or `Enum` for enums whose variants
/// are all units.
///
/// Generic types, tuple structs, unions and enums with data are rejected.
///
/// # Type attributes
///
/// - `#[reflect(type_path = "my_crate::Foo")]`: pins the type path instead
///   of deriving it from `module_path!()`.
/// - `#[reflect(include_base)]`: the resolved field set also carries the
///   fields of the `base` field's type. Structs only.
/// - `#[reflect(default)]`: zero-argument constructor through `Default`.
/// - `#[reflect(constructor = path)]`: zero-argument constructor through
///   any `fn() -> Self`, private or not.
/// - `#[reflect(auto_register)]`: submits the type to the registry of the
///   `auto_register` feature. A no-op when that feature is off.
/// - `#[reflect(@expr)]`: adds a custom attribute.
///
/// # Field attributes
///
/// - `#[reflect(skip)]`: the field is left out of every resolved field set.
/// - `#[reflect(transient)]`: sets the `TRANSIENT` storage flag.
/// - `#[reflect(base)]`: the field embeds the base type. It becomes the
///   struct's base link and is not a declared field. At most one per struct.
/// - `#[reflect(ignore)]`: the field does not appear in the table at all.
///   Use it for field types without reflection.
/// - `#[reflect(@expr)]`: adds a custom attribute.
///
/// Fields that are not `pub` get the `PRIVATE` flag.
///
/// # Example
///
/// ```ignore
/// #[derive(Reflect)]
/// #[reflect(default, include_base)]
/// struct Player {
///     #[reflect(base)]
///     entity: Entity,
///     pub name: String,
///     #[reflect(skip)]
///     cached_rank: u32,
/// }
///
/// #[derive(Reflect, Clone, Copy)]
/// #[repr(u8)]
/// enum Team {
///     Red = 1,
///     Blue = 2,
/// }
/// ```
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    impls::match_reflect_impls(ast)
}

/// Wraps generated items so helper items do not leak into the caller's scope.
fn wrap_in_const(tokens: proc_macro2::TokenStream) -> TokenStream {
    TokenStream::from(quote! {
        const _: () = {
            #tokens
        };
    })
}
