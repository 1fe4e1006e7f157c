use crate::info::{TypeInfo, TypePath};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implemented by `#[derive(Reflect)]` and by the built-in impls. The
/// returned reference lives in a static cell, so repeated calls are cheap.
///
/// ```
/// use fw_meta::info::{Typed, ReflectKind};
///
/// assert_eq!(<Option<u8>>::type_info().kind(), ReflectKind::Nullable);
/// assert_eq!(u8::type_info().kind(), ReflectKind::Opaque);
/// ```
pub trait Typed: TypePath {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// DynamicTyped

/// Dynamic dispatch for [`Typed`], implemented for every `T: Typed`.
pub trait DynamicTyped {
    /// See [`Typed::type_info`].
    fn reflect_type_info(&self) -> &'static TypeInfo;
}

impl<T: Typed> DynamicTyped for T {
    #[inline]
    fn reflect_type_info(&self) -> &'static TypeInfo {
        Self::type_info()
    }
}
