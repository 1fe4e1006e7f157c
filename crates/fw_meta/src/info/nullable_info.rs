use crate::Reflect;
use crate::construct::Constructor;
use crate::info::{EnumInfo, Type, TypeInfo, TypePath, Typed, impl_type_fn};

/// Compile-time info for `Option<T>`, a slot that may hold no value.
///
/// ```
/// use fw_meta::info::Typed;
///
/// let info = <Option<u16>>::type_info().as_nullable().unwrap();
/// assert!(info.underlying().type_is::<u16>());
/// assert!(info.underlying_enum().is_none());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct NullableInfo {
    ty: Type,
    underlying_ty: Type,
    underlying: fn() -> &'static TypeInfo,
    constructor: Constructor,
}

impl NullableInfo {
    impl_type_fn!(ty);

    /// Creates the info for `Option<T>`.
    #[inline]
    pub fn new<T: Typed + Reflect>() -> Self
    where
        Option<T>: TypePath + Reflect,
    {
        Self {
            ty: Type::of::<Option<T>>(),
            underlying_ty: Type::of::<T>(),
            underlying: T::type_info,
            constructor: Constructor::new::<Option<T>>(|| -> Box<dyn Reflect> { Box::new(None::<T>) }),
        }
    }

    /// Returns the wrapped type.
    #[inline]
    pub const fn underlying_ty(&self) -> &Type {
        &self.underlying_ty
    }

    /// Returns the wrapped type's [`TypeInfo`].
    #[inline]
    pub fn underlying(&self) -> &'static TypeInfo {
        (self.underlying)()
    }

    /// Returns the wrapped enum's info, if the wrapped type is an enum.
    #[inline]
    pub fn underlying_enum(&self) -> Option<&'static EnumInfo> {
        self.underlying().as_enum()
    }

    /// Returns the constructor producing `None`.
    #[inline]
    pub const fn constructor(&self) -> &Constructor {
        &self.constructor
    }
}
