use core::any::{Any, TypeId};
use core::fmt;

use crate::info::{DynamicTypePath, DynamicTyped, StructInfo, Typed};

// -----------------------------------------------------------------------------
// Reflect

/// The dynamic face of a reflected value.
///
/// Implemented by `#[derive(Reflect)]` for structs and fieldless enums, and
/// by the built-in impls for leaf types and `Option<T>`.
///
/// # Examples
///
/// ```
/// use fw_meta::{Reflect, ReflectRef};
///
/// let x: &dyn Reflect = &Some(5_u8);
/// match x.reflect_ref() {
///     ReflectRef::Nullable(Some(inner)) => assert_eq!(inner.downcast_ref::<u8>(), Some(&5)),
///     _ => unreachable!(),
/// }
/// ```
pub trait Reflect: DynamicTypePath + DynamicTyped + Send + Sync + Any {
    /// Casts this type to a reflected value.
    #[inline(always)]
    fn as_reflect(&self) -> &dyn Reflect
    where
        Self: Sized,
    {
        self
    }

    /// Casts this boxed type to a boxed reflected value.
    #[inline(always)]
    fn into_reflect(self: Box<Self>) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        self
    }

    /// Boxes this value as a reflected value.
    #[inline(always)]
    fn into_boxed_reflect(self) -> Box<dyn Reflect>
    where
        Self: Sized,
    {
        Box::new(self)
    }

    /// Returns the [`TypeId`] of the underlying type.
    ///
    /// Unlike `Any::type_id`, calling this through `&Box<dyn Reflect>` or
    /// `&&dyn Reflect` cannot silently return the id of the wrapper.
    #[inline]
    fn ty_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    /// Returns an immutable enumeration of the value's shape.
    fn reflect_ref(&self) -> ReflectRef<'_>;
}

impl dyn Reflect {
    /// Returns `true` if the underlying value is of type `T`.
    #[inline(always)]
    pub fn is<T: Any>(&self) -> bool {
        self.ty_id() == TypeId::of::<T>()
    }

    /// Downcasts the value to type `T` by reference.
    #[inline]
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        <dyn Any>::downcast_ref(self)
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// If the underlying value is not of type `T`, returns `Err(self)`.
    pub fn downcast<T: Any>(self: Box<dyn Reflect>) -> Result<Box<T>, Box<dyn Reflect>> {
        if self.is::<T>() {
            let any: Box<dyn Any> = self;
            Ok(any
                .downcast::<T>()
                .unwrap_or_else(|_| unreachable!("type is already checked")))
        } else {
            Err(self)
        }
    }

    /// Downcasts the value to type `T`, unboxing and consuming the trait object.
    ///
    /// ```
    /// use fw_meta::Reflect;
    ///
    /// let value: Box<dyn Reflect> = Box::new(String::from("x"));
    /// assert_eq!(value.take::<String>().unwrap(), "x");
    /// ```
    #[inline]
    pub fn take<T: Any>(self: Box<dyn Reflect>) -> Result<T, Box<dyn Reflect>> {
        self.downcast::<T>().map(|value| *value)
    }
}

impl fmt::Debug for dyn Reflect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.reflect_ref() {
            ReflectRef::Struct(_) => write!(f, "Struct({})", self.reflect_type_path()),
            ReflectRef::Enum(value) => {
                write!(f, "{}::{}", self.reflect_type_path(), value.variant_name())
            }
            ReflectRef::Nullable(None) => f.write_str("None"),
            ReflectRef::Nullable(Some(inner)) => f.debug_tuple("Some").field(&inner).finish(),
            ReflectRef::Opaque(_) => write!(f, "Opaque({})", self.reflect_type_path()),
        }
    }
}

// -----------------------------------------------------------------------------
// ReflectRef

/// An immutable enumeration of the shapes a reflected value can have.
pub enum ReflectRef<'a> {
    /// A struct; its fields are read through [`resolve_fields`](crate::resolve_fields).
    Struct(&'a dyn Reflect),
    /// A fieldless enum member.
    Enum(&'a dyn Enum),
    /// The content of an `Option<T>` slot.
    Nullable(Option<&'a dyn Reflect>),
    /// A leaf value, encoded through its own `serde` implementation.
    Opaque(&'a dyn erased_serde::Serialize),
}

impl<'a> ReflectRef<'a> {
    /// Returns the enum member, if this is an enum.
    #[inline]
    pub fn as_enum(&self) -> Option<&'a dyn Enum> {
        match self {
            Self::Enum(value) => Some(*value),
            _ => None,
        }
    }
}

// -----------------------------------------------------------------------------
// Struct

/// A reflected struct with named fields.
///
/// Implemented by `#[derive(Reflect)]`.
pub trait Struct: Reflect + Typed {
    /// Returns the struct's compile-time info.
    fn struct_info() -> &'static StructInfo;
}

// -----------------------------------------------------------------------------
// Enum

/// A reflected fieldless enum.
///
/// Implemented by `#[derive(Reflect)]`.
///
/// ```
/// use fw_meta::{derive::Reflect, Enum};
///
/// #[derive(Reflect)]
/// enum Color { Green = 1, Red = 2 }
///
/// assert_eq!(Color::Red.discriminant(), 2);
/// assert_eq!(Color::Green.variant_name(), "Green");
/// ```
pub trait Enum: Reflect {
    /// Returns the member's discriminant, cast to `i64`.
    fn discriminant(&self) -> i64;

    /// Returns the member's name.
    fn variant_name(&self) -> &'static str;
}
