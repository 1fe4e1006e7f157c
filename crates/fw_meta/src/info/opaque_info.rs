use std::sync::Arc;

use crate::construct::Constructor;
use crate::info::{CustomAttributes, Type, TypePath};
use crate::info::{impl_custom_attributes_fn, impl_type_fn, impl_with_custom_attributes};

/// Metadata for leaf types whose internals are opaque to this crate.
///
/// Opaque values are handed to encoders through their own `serde`
/// implementation, for example numbers, `String` or `Vec<T>`.
#[derive(Debug, Clone)]
pub struct OpaqueInfo {
    ty: Type,
    constructor: Option<Constructor>,
    // Use `Option` to reduce unnecessary heap requests (when empty content).
    custom_attributes: Option<Arc<CustomAttributes>>,
}

impl OpaqueInfo {
    impl_type_fn!(ty);
    impl_custom_attributes_fn!(custom_attributes);
    impl_with_custom_attributes!(custom_attributes);

    /// Create a new [`OpaqueInfo`].
    #[inline]
    pub const fn new<T: TypePath + ?Sized>() -> Self {
        Self {
            ty: Type::of::<T>(),
            constructor: None,
            custom_attributes: None,
        }
    }

    /// Sets the zero-argument constructor.
    #[inline]
    pub fn with_constructor(self, constructor: Constructor) -> Self {
        Self {
            constructor: Some(constructor),
            ..self
        }
    }

    /// Returns the zero-argument constructor, if any.
    #[inline]
    pub const fn constructor(&self) -> Option<&Constructor> {
        self.constructor.as_ref()
    }
}
