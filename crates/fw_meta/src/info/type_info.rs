use core::fmt;

use crate::construct::Constructor;
use crate::info::{CustomAttributes, EnumInfo, NullableInfo, OpaqueInfo, StructInfo, Type};

// -----------------------------------------------------------------------------
// ReflectKind

/// The shape of a reflected type, without its details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReflectKind {
    /// A struct with named fields, see [`StructInfo`].
    Struct,
    /// A fieldless enum, see [`EnumInfo`].
    Enum,
    /// `Option<T>`, see [`NullableInfo`].
    Nullable,
    /// A leaf value, see [`OpaqueInfo`].
    Opaque,
}

impl fmt::Display for ReflectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Struct => f.pad("Struct"),
            Self::Enum => f.pad("Enum"),
            Self::Nullable => f.pad("Nullable"),
            Self::Opaque => f.pad("Opaque"),
        }
    }
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Compile-time type information, one variant per [`ReflectKind`].
///
/// Obtained through [`Typed::type_info`](crate::info::Typed::type_info),
/// which stores it in a static cell.
///
/// ```
/// use fw_meta::{derive::Reflect, info::{Typed, ReflectKind}};
///
/// #[derive(Reflect)]
/// struct Point { x: i32, y: i32 }
///
/// let info = Point::type_info();
/// assert_eq!(info.kind(), ReflectKind::Struct);
/// assert!(info.as_enum().is_none());
/// assert_eq!(info.as_struct().unwrap().field_len(), 2);
/// ```
#[derive(Debug, Clone)]
pub enum TypeInfo {
    Struct(StructInfo),
    Enum(EnumInfo),
    Nullable(NullableInfo),
    Opaque(OpaqueInfo),
}

// Helper macro that implements accessor methods like `as_struct`.
macro_rules! impl_cast_method {
    ($name:ident : $kind:ident => $info:ident) => {
        #[doc = concat!("Returns the inner [`", stringify!($info), "`] if the kind matches.")]
        #[inline]
        pub const fn $name(&self) -> Option<&$info> {
            match self {
                Self::$kind(info) => Some(info),
                _ => None,
            }
        }
    };
}

impl TypeInfo {
    impl_cast_method!(as_struct: Struct => StructInfo);
    impl_cast_method!(as_enum: Enum => EnumInfo);
    impl_cast_method!(as_nullable: Nullable => NullableInfo);
    impl_cast_method!(as_opaque: Opaque => OpaqueInfo);

    /// Returns the underlying [`Type`].
    pub const fn ty(&self) -> &Type {
        match self {
            Self::Struct(info) => info.ty(),
            Self::Enum(info) => info.ty(),
            Self::Nullable(info) => info.ty(),
            Self::Opaque(info) => info.ty(),
        }
    }

    crate::info::impl_type_fn!();

    /// Returns the [`ReflectKind`].
    pub const fn kind(&self) -> ReflectKind {
        match self {
            Self::Struct(_) => ReflectKind::Struct,
            Self::Enum(_) => ReflectKind::Enum,
            Self::Nullable(_) => ReflectKind::Nullable,
            Self::Opaque(_) => ReflectKind::Opaque,
        }
    }

    /// Returns `true` for a fieldless enum.
    #[inline]
    pub const fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    /// Returns the zero-argument constructor, if the type has one.
    pub const fn constructor(&self) -> Option<&Constructor> {
        match self {
            Self::Struct(info) => info.constructor(),
            Self::Enum(info) => info.constructor(),
            Self::Nullable(info) => Some(info.constructor()),
            Self::Opaque(info) => info.constructor(),
        }
    }

    /// Returns the type-level custom attributes.
    pub fn custom_attributes(&self) -> &CustomAttributes {
        match self {
            Self::Struct(info) => info.custom_attributes(),
            Self::Enum(info) => info.custom_attributes(),
            Self::Opaque(info) => info.custom_attributes(),
            Self::Nullable(_) => CustomAttributes::EMPTY,
        }
    }

    crate::info::attributes::impl_custom_attributes_fn!();
}
