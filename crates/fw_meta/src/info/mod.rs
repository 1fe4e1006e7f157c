//! Compile-time type information.
//!
//! ## Menu
//!
//! - [`TypePath`]: stable type names, without the `::` prefix.
//! - [`DynamicTypePath`]: dynamic dispatch for `TypePath`.
//! - [`Type`]: a `TypeId` together with the type's stable names.
//! - [`CustomAttributes`]: an attribute container keyed by `TypeId`.
//!     - [`NonSerialized`]: marker excluding a field from serialization.
//!     - [`IncludeBase`]: marker appending the base's fields to a struct's own.
//! - [`TypeInfo`]: one of
//!     - [`StructInfo`]: declared fields, optional [`BaseInfo`], constructor.
//!     - [`EnumInfo`]: fieldless members and their discriminants.
//!     - [`NullableInfo`]: `Option<T>` and its underlying type.
//!     - [`OpaqueInfo`]: leaf values encoded through `serde`.
//! - [`FieldInfo`]: one declared struct field, with [`FieldFlags`] and a read accessor.
//! - [`Typed`]: a trait for obtaining `TypeInfo`.
//! - [`DynamicTyped`]: dynamic dispatch for `Typed`.

// -----------------------------------------------------------------------------
// Modules

mod attributes;
mod enum_info;
mod field_info;
mod nullable_info;
mod opaque_info;
mod struct_info;
mod type_info;
mod type_path;
mod typed;

// -----------------------------------------------------------------------------
// Internal API

use attributes::{impl_custom_attributes_fn, impl_with_custom_attributes};

pub(crate) use type_path::impl_type_fn;

// -----------------------------------------------------------------------------
// Exports

pub use attributes::{CustomAttributes, IncludeBase, NonSerialized};
pub use enum_info::{EnumInfo, VariantInfo};
pub use field_info::{FieldFlags, FieldGetter, FieldInfo};
pub use nullable_info::NullableInfo;
pub use opaque_info::OpaqueInfo;
pub use struct_info::{BaseInfo, StructInfo};
pub use type_info::{ReflectKind, TypeInfo};
pub use type_path::{DynamicTypePath, Type, TypePath};
pub use typed::{DynamicTyped, Typed};
