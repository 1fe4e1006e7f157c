use core::any::Any;
use std::sync::Arc;

use bitflags::bitflags;

use crate::Reflect;
use crate::info::{CustomAttributes, EnumInfo, Type, TypeInfo, TypePath, Typed};
use crate::info::{impl_custom_attributes_fn, impl_with_custom_attributes};

// -----------------------------------------------------------------------------
// FieldFlags

bitflags! {
    /// Storage-level properties of a field, independent of custom attributes.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct FieldFlags: u8 {
        /// The field only holds runtime state and is never serialized.
        ///
        /// Written by `#[reflect(transient)]`.
        const TRANSIENT = 1 << 0;
        /// The field is not declared `pub`.
        const PRIVATE = 1 << 1;
    }
}

// -----------------------------------------------------------------------------
// FieldGetter

/// Reads one field out of an instance of its declaring type.
///
/// Returns `None` when the instance is not of the declaring type.
pub type FieldGetter = fn(&dyn Any) -> Option<&dyn Reflect>;

// -----------------------------------------------------------------------------
// FieldInfo

/// Information for a named struct field.
///
/// Field infos live in the `'static` type table of their declaring struct and
/// are handed out by reference; they never change after creation.
///
/// # Examples
///
/// ```
/// use fw_meta::{derive::Reflect, info::Typed};
///
/// #[derive(Reflect)]
/// enum Color { Red = 2 }
///
/// #[derive(Reflect)]
/// struct Foo {
///     color: Color,
///     tint: Option<Color>,
///     label: String,
/// }
///
/// let info = Foo::type_info().as_struct().unwrap();
///
/// let color = info.field("color").unwrap();
/// assert!(color.is_enum());
/// assert!(color.declaring_type().is::<Foo>());
///
/// let tint = info.field("tint").unwrap();
/// assert!(!tint.is_enum());
/// assert!(tint.nullable_enum().unwrap().type_is::<Color>());
///
/// assert!(info.field("label").unwrap().type_is::<String>());
/// ```
#[derive(Clone)]
pub struct FieldInfo {
    name: &'static str,
    declaring: Type,
    ty: Type,
    // `TypeInfo` is created on first access; using a function pointer delays it.
    type_info: fn() -> &'static TypeInfo,
    getter: FieldGetter,
    flags: FieldFlags,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl FieldInfo {
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Creates a new [`FieldInfo`] for field `name` of type `T`, declared on `D`.
    #[inline]
    pub const fn new<D: TypePath, T: Typed + Reflect>(
        name: &'static str,
        getter: FieldGetter,
    ) -> Self {
        Self {
            name,
            declaring: Type::of::<D>(),
            ty: Type::of::<T>(),
            type_info: T::type_info,
            getter,
            flags: FieldFlags::empty(),
            custom_attributes: None,
        }
    }

    /// Replaces the storage flags.
    #[inline]
    pub fn with_flags(self, flags: FieldFlags) -> Self {
        Self { flags, ..self }
    }

    /// Returns the field name.
    #[inline]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the type that declares this field.
    #[inline]
    pub const fn declaring_type(&self) -> &Type {
        &self.declaring
    }

    /// Returns the declared value type.
    #[inline]
    pub const fn ty(&self) -> &Type {
        &self.ty
    }

    /// Check if the declared value type is `T`.
    #[inline]
    pub fn type_is<T: Any>(&self) -> bool {
        self.ty.is::<T>()
    }

    /// Returns the declared value type's [`TypeInfo`].
    #[inline]
    pub fn type_info(&self) -> &'static TypeInfo {
        (self.type_info)()
    }

    /// Returns the storage flags.
    #[inline]
    pub const fn flags(&self) -> FieldFlags {
        self.flags
    }

    /// Returns `true` if the field has [`FieldFlags::TRANSIENT`].
    #[inline]
    pub const fn is_transient(&self) -> bool {
        self.flags.contains(FieldFlags::TRANSIENT)
    }

    /// Returns `true` if the declared value type is an enum.
    #[inline]
    pub fn is_enum(&self) -> bool {
        self.type_info().is_enum()
    }

    /// Returns the underlying enum if the declared value type is `Option<E>`
    /// with `E` an enum.
    pub fn nullable_enum(&self) -> Option<&'static EnumInfo> {
        self.type_info().as_nullable()?.underlying().as_enum()
    }

    /// Reads the raw field value out of `instance`.
    ///
    /// `instance` must be a value of the declaring type itself; embedded
    /// bases are not searched here, see [`extract_value`](crate::value::extract_value).
    #[inline]
    pub fn get<'a>(&self, instance: &'a dyn Any) -> Option<&'a dyn Reflect> {
        (self.getter)(instance)
    }
}

impl core::fmt::Debug for FieldInfo {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FieldInfo")
            .field("name", &self.name)
            .field("declaring", &self.declaring)
            .field("ty", &self.ty)
            .field("flags", &self.flags)
            .field("custom_attributes", &self.custom_attributes())
            .finish()
    }
}
